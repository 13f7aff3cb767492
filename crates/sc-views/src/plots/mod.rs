//! Plot view implementations

pub mod bar;
pub mod geo;
pub mod line;

// Utilities
pub mod utils;

// Re-exports
pub use bar::{BarChartConfig, BarChartView};
pub use geo::{MapConfig, MapView};
pub use line::TrendView;
