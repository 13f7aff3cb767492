//! The single entity held by the dashboard

use serde::{Deserialize, Serialize};

/// One location / air quality / traffic observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub location: String,
    pub air_quality_index: i64,
    /// Free text, conventionally "Low", "Moderate" or "Severe"
    pub traffic_level: String,
}

impl Record {
    pub fn new(location: impl Into<String>, air_quality_index: i64, traffic_level: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            air_quality_index,
            traffic_level: traffic_level.into(),
        }
    }

    pub fn category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.air_quality_index)
    }
}

/// Air quality band used to color chart bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AqiCategory {
    Good,
    Moderate,
    Poor,
    Severe,
}

impl AqiCategory {
    /// Step function: >300 severe, >200 poor, >100 moderate, else good
    pub fn from_aqi(aqi: i64) -> Self {
        if aqi > 300 {
            AqiCategory::Severe
        } else if aqi > 200 {
            AqiCategory::Poor
        } else if aqi > 100 {
            AqiCategory::Moderate
        } else {
            AqiCategory::Good
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::Severe => "Severe",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(AqiCategory::from_aqi(0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(100), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(101), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(200), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(201), AqiCategory::Poor);
        assert_eq!(AqiCategory::from_aqi(300), AqiCategory::Poor);
        assert_eq!(AqiCategory::from_aqi(301), AqiCategory::Severe);
    }

    #[test]
    fn test_record_category() {
        let record = Record::new("Delhi", 350, "Severe");
        assert_eq!(record.category(), AqiCategory::Severe);
        assert_eq!(record.category().label(), "Severe");
    }
}
