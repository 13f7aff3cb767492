use std::time::{Duration, Instant};

/// Fixed-interval timer polled from the frame loop
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, last: now }
    }

    /// True once per elapsed interval; missed intervals are not replayed
    pub fn fire(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next tick
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval.saturating_sub(now.saturating_duration_since(self.last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(3), start);

        assert!(!ticker.fire(start + Duration::from_secs(1)));
        assert_eq!(ticker.remaining(start + Duration::from_secs(1)), Duration::from_secs(2));

        assert!(ticker.fire(start + Duration::from_secs(10)));
        assert!(!ticker.fire(start + Duration::from_secs(11)));
        assert!(ticker.fire(start + Duration::from_secs(13)));
    }
}
