use chrono::{DateTime, Local};
use egui::{Align, Layout, RichText, Ui};
use sc_core::ThemePreference;

use crate::{icon_button, icons};

/// Wall-clock text shown in the header
pub fn format_clock(now: &DateTime<Local>) -> String {
    now.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Title row with the live clock and a theme toggle. Returns the new theme
/// when the toggle was clicked.
pub fn header(ui: &mut Ui, theme: ThemePreference) -> Option<ThemePreference> {
    let mut toggled = None;

    ui.horizontal(|ui| {
        ui.heading(format!("{} Smart City Dashboard", icons::CITY));

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let (icon, next) = match theme {
                ThemePreference::Light => (icons::DARK, ThemePreference::Dark),
                ThemePreference::Dark => (icons::LIGHT, ThemePreference::Light),
            };
            if icon_button(ui, icon, "Switch theme").clicked() {
                toggled = Some(next);
            }

            ui.label(RichText::new(format!("{} {}", icons::CLOCK, format_clock(&Local::now()))).monospace());
        });
    });

    toggled
}
