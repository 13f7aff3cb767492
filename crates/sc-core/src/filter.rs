//! Text and AQI range filtering over rendered table rows
//!
//! Filtering only decides visibility. Rows stay in the table model (and the
//! store) with their original index.

use std::fmt;
use std::str::FromStr;

use crate::sync::TableRow;

/// AQI band selectable in the search panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AqiRange {
    #[default]
    All,
    /// 100 and below
    Good,
    /// 101 to 200
    Moderate,
    /// above 200
    Poor,
}

impl AqiRange {
    pub const ALL: [AqiRange; 4] = [AqiRange::All, AqiRange::Good, AqiRange::Moderate, AqiRange::Poor];

    pub fn contains(&self, aqi: i64) -> bool {
        match self {
            AqiRange::All => true,
            AqiRange::Good => aqi <= 100,
            AqiRange::Moderate => (101..=200).contains(&aqi),
            AqiRange::Poor => aqi > 200,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AqiRange::All => "all",
            AqiRange::Good => "good",
            AqiRange::Moderate => "moderate",
            AqiRange::Poor => "poor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiRange::All => "All",
            AqiRange::Good => "Good (≤100)",
            AqiRange::Moderate => "Moderate (101-200)",
            AqiRange::Poor => "Poor (>200)",
        }
    }
}

impl fmt::Display for AqiRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AqiRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(AqiRange::All),
            "good" => Ok(AqiRange::Good),
            "moderate" => Ok(AqiRange::Moderate),
            "poor" => Ok(AqiRange::Poor),
            other => Err(format!("unknown AQI range: {}", other)),
        }
    }
}

/// Search inputs applied to the table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    pub search: String,
    pub range: AqiRange,
}

impl RowFilter {
    pub fn new(search: impl Into<String>, range: AqiRange) -> Self {
        Self {
            search: search.into(),
            range,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.range != AqiRange::All
    }

    /// A row is shown iff its location contains the search term
    /// (ignoring case) and its AQI falls in the selected band
    pub fn matches(&self, row: &TableRow) -> bool {
        let matches_search = row
            .location
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let matches_range = self.range.contains(row.air_quality_index);

        matches_search && matches_range
    }

    /// One visibility flag per rendered row
    pub fn visibility(&self, rows: &[TableRow]) -> Vec<bool> {
        rows.iter().map(|row| self.matches(row)).collect()
    }
}
