//! User interface components for the smart city dashboard
//!
//! This crate provides the egui chrome around the dashboard surfaces:
//! theme, menu bar, header and the input panels.

pub mod panels;
pub mod shell;
pub mod theme;

/// Re-export commonly used types
pub use panels::{header, EntryForm, EntrySubmission, SearchPanel};
pub use shell::{menu_bar, MenuAction};
pub use theme::apply_theme;

// Widget creation helpers
pub fn icon_button(ui: &mut egui::Ui, icon: &str, tooltip: &str) -> egui::Response {
    ui.add(egui::Button::new(icon)).on_hover_text(tooltip)
}

// Common icon definitions
pub mod icons {
    pub const CITY: &str = "🌆";
    pub const FOLDER: &str = "📁";
    pub const SAVE: &str = "💾";
    pub const SEARCH: &str = "🔍";
    pub const ADD: &str = "➕";
    pub const CLOCK: &str = "🕒";
    pub const LIGHT: &str = "☀";
    pub const DARK: &str = "🌙";
}
