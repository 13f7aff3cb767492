//! Simulated live data: vehicle feed, road congestion and the hourly AQI trend

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;

/// How often a new vehicle line is generated
pub const FEED_INTERVAL: Duration = Duration::from_secs(1);

/// How often road congestion is re-sampled
pub const TRAFFIC_INTERVAL: Duration = Duration::from_secs(3);

/// Roads shown in the live traffic panel
pub const ROADS: [&str; 5] = ["Ring Road", "MG Road", "Outer Circle", "NH-24", "Airport Expressway"];

/// Fixed hourly AQI readings for the trend chart
pub const HOURLY_AQI: [(&str, f64); 5] = [
    ("6 AM", 120.0),
    ("9 AM", 200.0),
    ("12 PM", 160.0),
    ("3 PM", 180.0),
    ("6 PM", 140.0),
];

/// Logged once at startup by the pattern analysis stub
pub const PATTERN_NOTE: &str = "Tuple trend detected: peak traffic correlates with AQI > 180";

/// Rolling feed of simulated vehicle readings, newest first
#[derive(Debug, Clone)]
pub struct VehicleFeed {
    lines: VecDeque<String>,
    capacity: usize,
}

impl VehicleFeed {
    /// A feed holding at most `capacity` lines, never fewer than one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Generate one reading and push it to the front
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        let vehicle: f64 = rng.gen_range(0.0..1000.0);
        let aqi: u32 = rng.gen_range(0..300);
        self.push(format!("🚦 Vehicle {:.2}, AQI {}", vehicle, aqi));
        self.lines.front().map(String::as_str).unwrap_or_default()
    }

    pub fn push(&mut self, line: String) {
        self.lines.push_front(line);
        self.lines.truncate(self.capacity);
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Congestion on a single road
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CongestionLevel {
    Low,
    Medium,
    High,
}

impl CongestionLevel {
    pub const ALL: [CongestionLevel; 3] = [CongestionLevel::Low, CongestionLevel::Medium, CongestionLevel::High];

    pub fn score(&self) -> u8 {
        match self {
            CongestionLevel::Low => 0,
            CongestionLevel::Medium => 1,
            CongestionLevel::High => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CongestionLevel::Low => "low",
            CongestionLevel::Medium => "medium",
            CongestionLevel::High => "high",
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            CongestionLevel::Low => "🟢",
            CongestionLevel::Medium => "🟡",
            CongestionLevel::High => "🔴",
        }
    }

    /// Axis label used by the congestion history plot
    pub fn axis_label(score: f64) -> &'static str {
        match score.round() as i64 {
            i64::MIN..=0 => "Low",
            1 => "Med",
            _ => "High",
        }
    }
}

/// Latest congestion per road plus the average-congestion history
#[derive(Debug, Clone)]
pub struct LiveTraffic {
    roads: Vec<(&'static str, CongestionLevel)>,
    history: VecDeque<f64>,
    history_len: usize,
}

impl LiveTraffic {
    pub fn new(history_len: usize) -> Self {
        Self {
            roads: Vec::new(),
            history: VecDeque::with_capacity(history_len + 1),
            history_len,
        }
    }

    /// Re-sample every road and append the mean score to the history
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let levels = ROADS
            .iter()
            .map(|road| (*road, CongestionLevel::ALL[rng.gen_range(0..CongestionLevel::ALL.len())]))
            .collect();
        self.record(levels);
    }

    /// Store an observed set of road levels
    pub fn record(&mut self, roads: Vec<(&'static str, CongestionLevel)>) {
        if roads.is_empty() {
            return;
        }
        let total: u32 = roads.iter().map(|(_, level)| level.score() as u32).sum();
        let average = total as f64 / roads.len() as f64;

        self.roads = roads;
        self.history.push_back(average);
        while self.history.len() > self.history_len {
            self.history.pop_front();
        }
    }

    pub fn roads(&self) -> &[(&'static str, CongestionLevel)] {
        &self.roads
    }

    pub fn history(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().copied()
    }

    /// Labels for the history samples: "0s", "3s", ...
    pub fn history_labels(&self) -> Vec<String> {
        let step = TRAFFIC_INTERVAL.as_secs();
        (0..self.history.len())
            .map(|i| format!("{}s", i as u64 * step))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_feed_keeps_newest_first() {
        let mut feed = VehicleFeed::new(3);
        for i in 0..5 {
            feed.push(format!("line {}", i));
        }

        let lines: Vec<_> = feed.lines().collect();
        assert_eq!(lines, vec!["line 4", "line 3", "line 2"]);
    }

    #[test]
    fn test_feed_tick_format() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut feed = VehicleFeed::new(10);
        for _ in 0..15 {
            feed.tick(&mut rng);
        }

        assert_eq!(feed.len(), 10);
        for line in feed.lines() {
            assert!(line.starts_with("🚦 Vehicle "));
            let aqi: u32 = line.rsplit(' ').next().unwrap().parse().unwrap();
            assert!(aqi < 300);
        }
    }

    #[test]
    fn test_zero_capacity_feed_keeps_latest_line() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut feed = VehicleFeed::new(0);

        let latest = feed.tick(&mut rng).to_string();
        feed.tick(&mut rng);

        assert_eq!(feed.len(), 1);
        assert!(latest.starts_with("🚦 Vehicle "));
    }

    #[test]
    fn test_traffic_average_and_history_cap() {
        let mut traffic = LiveTraffic::new(2);
        traffic.record(vec![("A", CongestionLevel::Low), ("B", CongestionLevel::High)]);
        traffic.record(vec![("A", CongestionLevel::High), ("B", CongestionLevel::High)]);
        traffic.record(vec![("A", CongestionLevel::Medium), ("B", CongestionLevel::Low)]);

        let history: Vec<_> = traffic.history().collect();
        assert_eq!(history, vec![2.0, 0.5]);
        assert_eq!(traffic.history_labels(), vec!["0s", "3s"]);
        assert_eq!(traffic.roads()[1], ("B", CongestionLevel::Low));
    }

    #[test]
    fn test_traffic_tick_covers_every_road() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut traffic = LiveTraffic::new(10);
        traffic.tick(&mut rng);

        assert_eq!(traffic.roads().len(), ROADS.len());
        let average = traffic.history().next().unwrap();
        assert!((0.0..=2.0).contains(&average));
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(CongestionLevel::axis_label(0.0), "Low");
        assert_eq!(CongestionLevel::axis_label(1.0), "Med");
        assert_eq!(CongestionLevel::axis_label(2.0), "High");
    }
}
