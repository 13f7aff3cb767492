use std::collections::BTreeMap;

use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use sc_core::ThemePreference;

/// Apply the light or dark dashboard theme
pub fn apply_theme(ctx: &Context, preference: ThemePreference) {
    let mut style = Style::default();

    // Apply spacing
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);
    style.spacing.indent = 20.0;

    // Font sizes
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    style.visuals = visuals(preference);

    ctx.set_style(style);
    tracing::debug!("Applied {} theme", preference);
}

/// Visuals for the given preference
pub fn visuals(preference: ThemePreference) -> Visuals {
    match preference {
        ThemePreference::Dark => dark_visuals(),
        ThemePreference::Light => light_visuals(),
    }
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    let bg_color = Color32::from_rgb(23, 23, 23);
    let panel_bg = Color32::from_rgb(31, 31, 31);
    let widget_bg = Color32::from_rgb(40, 40, 40);
    let text_color = Color32::from_rgb(220, 220, 220);

    visuals.window_fill = panel_bg;
    visuals.panel_fill = panel_bg;
    visuals.extreme_bg_color = bg_color;
    visuals.faint_bg_color = widget_bg;

    visuals.widgets.noninteractive.bg_fill = widget_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(60, 60, 60));
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);

    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 50, 50);
    visuals.widgets.active.bg_fill = Color32::from_rgb(60, 60, 60);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color());

    finish(visuals)
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.panel_fill = Color32::from_rgb(244, 246, 249);
    visuals.window_fill = Color32::WHITE;
    visuals.faint_bg_color = Color32::from_rgb(235, 238, 243);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color());

    finish(visuals)
}

// Shared by both palettes
fn finish(mut visuals: Visuals) -> Visuals {
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = accent_color().linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color());
    visuals.hyperlink_color = accent_color();

    visuals
}

/// Get the accent color for the theme
pub fn accent_color() -> Color32 {
    Color32::from_rgb(100, 150, 250)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_follow_preference() {
        assert!(visuals(ThemePreference::Dark).dark_mode);
        assert!(!visuals(ThemePreference::Light).dark_mode);
        assert_eq!(visuals(ThemePreference::Light).selection.stroke.color, accent_color());
    }
}
