//! Color utilities for plots

use egui::Color32;
use sc_core::simulation::CongestionLevel;
use sc_core::AqiCategory;

/// Bar / label color for an AQI band
pub fn aqi_color(category: AqiCategory) -> Color32 {
    match category {
        AqiCategory::Good => Color32::from_rgb(76, 175, 80),     // Green
        AqiCategory::Moderate => Color32::from_rgb(255, 193, 7), // Amber
        AqiCategory::Poor => Color32::from_rgb(255, 112, 67),    // Orange
        AqiCategory::Severe => Color32::from_rgb(198, 40, 40),   // Red
    }
}

/// Card color for a road's congestion
pub fn congestion_color(level: CongestionLevel) -> Color32 {
    match level {
        CongestionLevel::Low => Color32::from_rgb(76, 175, 80),
        CongestionLevel::Medium => Color32::from_rgb(255, 193, 7),
        CongestionLevel::High => Color32::from_rgb(229, 57, 53),
    }
}

/// Background for rows flagged by an emergency
pub fn emergency_row_color() -> Color32 {
    Color32::from_rgba_unmultiplied(229, 57, 53, 90)
}

/// Banner fill while in emergency state
pub fn emergency_color() -> Color32 {
    Color32::from_rgb(183, 28, 28)
}

/// Banner fill when a single threshold is exceeded
pub fn warning_color() -> Color32 {
    Color32::from_rgb(230, 160, 40)
}

/// Banner fill when all is normal
pub fn normal_color() -> Color32 {
    Color32::from_rgb(46, 125, 50)
}

/// Map marker color, cycling through a small palette
pub fn marker_color(index: usize) -> Color32 {
    const PALETTE: &[Color32] = &[
        Color32::from_rgb(100, 150, 250), // Blue
        Color32::from_rgb(250, 150, 100), // Orange
        Color32::from_rgb(150, 100, 250), // Purple
        Color32::from_rgb(100, 200, 200), // Teal
    ];
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_has_distinct_color() {
        let colors = [
            aqi_color(AqiCategory::Good),
            aqi_color(AqiCategory::Moderate),
            aqi_color(AqiCategory::Poor),
            aqi_color(AqiCategory::Severe),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_marker_palette_wraps() {
        assert_eq!(marker_color(0), marker_color(4));
    }
}
