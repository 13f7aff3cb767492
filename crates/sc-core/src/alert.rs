//! Rule-based alert evaluation

use serde::{Deserialize, Serialize};

use crate::error::ChimeError;
use crate::record::Record;

pub const CRITICAL_MESSAGE: &str = "🚨 CRITICAL: Hazardous pollution and gridlock detected. Emergency protocols activated.";
pub const POLLUTION_MESSAGE: &str = "⚠ Pollution spike detected across multiple locations.";
pub const CONGESTION_MESSAGE: &str = "🚗 Severe congestion reported across multiple locations.";
pub const NORMAL_MESSAGE: &str = "✅ All systems normal.";

/// Limits used by the alert evaluator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// A record pollutes when its AQI is strictly above this
    pub aqi_limit: i64,

    /// How many polluting / congested records raise an alert
    pub min_count: usize,

    /// Traffic level that counts as congestion (exact match)
    pub severe_label: String,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            aqi_limit: 300,
            min_count: 3,
            severe_label: "Severe".to_string(),
        }
    }
}

impl AlertThresholds {
    fn is_polluted(&self, record: &Record) -> bool {
        record.air_quality_index > self.aqi_limit
    }

    fn is_congested(&self, record: &Record) -> bool {
        record.traffic_level == self.severe_label
    }
}

/// Result of evaluating the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertStatus {
    pub emergency: bool,
    pub message: String,
    pub pollution_count: usize,
    pub congestion_count: usize,
    /// Store positions to highlight; only filled in emergency state
    pub highlighted: Vec<usize>,
}

impl AlertStatus {
    /// Individual lines of the banner message
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.message.lines()
    }
}

impl Default for AlertStatus {
    fn default() -> Self {
        Self {
            emergency: false,
            message: NORMAL_MESSAGE.to_string(),
            pollution_count: 0,
            congestion_count: 0,
            highlighted: Vec::new(),
        }
    }
}

/// Classify the overall status of `records`
pub fn evaluate(records: &[Record], thresholds: &AlertThresholds) -> AlertStatus {
    let pollution_count = records.iter().filter(|r| thresholds.is_polluted(r)).count();
    let congestion_count = records.iter().filter(|r| thresholds.is_congested(r)).count();

    let polluted = pollution_count >= thresholds.min_count;
    let congested = congestion_count >= thresholds.min_count;

    if polluted && congested {
        let highlighted = records
            .iter()
            .enumerate()
            .filter(|(_, r)| thresholds.is_polluted(r) && thresholds.is_congested(r))
            .map(|(i, _)| i)
            .collect();

        return AlertStatus {
            emergency: true,
            message: CRITICAL_MESSAGE.to_string(),
            pollution_count,
            congestion_count,
            highlighted,
        };
    }

    let mut lines = Vec::new();
    if polluted {
        lines.push(POLLUTION_MESSAGE);
    }
    if congested {
        lines.push(CONGESTION_MESSAGE);
    }
    if lines.is_empty() {
        lines.push(NORMAL_MESSAGE);
    }

    AlertStatus {
        emergency: false,
        message: lines.join("\n"),
        pollution_count,
        congestion_count,
        highlighted: Vec::new(),
    }
}

/// Audible signal played when the dashboard enters emergency state
pub trait AlertChime {
    fn play(&mut self) -> Result<(), ChimeError>;
}

/// Chime that never makes a sound
#[derive(Debug, Default)]
pub struct SilentChime;

impl AlertChime for SilentChime {
    fn play(&mut self) -> Result<(), ChimeError> {
        Ok(())
    }
}
