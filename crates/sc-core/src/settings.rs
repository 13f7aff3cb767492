//! Application settings persisted between runs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alert::AlertThresholds;

/// Storage key used for the persisted settings
pub const SETTINGS_KEY: &str = "smart_city_settings";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Light or dark UI
    pub theme: ThemePreference,

    /// Box in which map markers are scattered
    pub map_bounds: MapBounds,

    /// Alert evaluator limits
    pub alert: AlertThresholds,

    /// Lines kept in the live vehicle feed
    pub feed_capacity: usize,

    /// Samples kept in the congestion history
    pub traffic_history_len: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            map_bounds: MapBounds::default(),
            alert: AlertThresholds::default(),
            feed_capacity: 10,
            traffic_history_len: 10,
        }
    }
}

/// Theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Latitude / longitude box for map markers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            min_lat: 20.0,
            max_lat: 30.0,
            min_lon: 70.0,
            max_lon: 80.0,
        }
    }
}

impl MapBounds {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }

    /// Finite edges with each minimum no larger than its maximum
    pub fn is_valid(&self) -> bool {
        [self.min_lat, self.max_lat, self.min_lon, self.max_lon]
            .iter()
            .all(|v| v.is_finite())
            && self.min_lat <= self.max_lat
            && self.min_lon <= self.max_lon
    }

    /// These bounds if valid, otherwise the default box
    pub fn or_default(self) -> Self {
        if self.is_valid() {
            self
        } else {
            tracing::warn!("Ignoring invalid map bounds {:?}, using defaults", self);
            Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!(ThemePreference::Light.to_string(), "light");
        assert!("sepia".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
    }

    #[test]
    fn test_settings_serde() {
        let mut settings = AppSettings::default();
        settings.theme = ThemePreference::Dark;

        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"theme\":\"dark\""));

        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: AppSettings = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(parsed.theme, ThemePreference::Dark);
        assert_eq!(parsed.feed_capacity, 10);
        assert_eq!(parsed.map_bounds, MapBounds::default());
    }

    #[test]
    fn test_map_bounds() {
        let bounds = MapBounds::default();
        assert!(bounds.contains(25.0, 75.0));
        assert!(!bounds.contains(31.0, 75.0));
        assert!(bounds.is_valid());
    }

    #[test]
    fn test_invalid_map_bounds_fall_back() {
        let settings: AppSettings = serde_json::from_str(
            r#"{"map_bounds":{"min_lat":30.0,"max_lat":20.0,"min_lon":70.0,"max_lon":80.0}}"#,
        )
        .unwrap();
        assert!(!settings.map_bounds.is_valid());
        assert_eq!(settings.map_bounds.or_default(), MapBounds::default());

        let nan = MapBounds { min_lon: f64::NAN, ..MapBounds::default() };
        assert!(!nan.is_valid());

        let custom = MapBounds { min_lat: 10.0, max_lat: 10.0, min_lon: 0.0, max_lon: 5.0 };
        assert_eq!(custom.or_default(), custom);
    }
}
