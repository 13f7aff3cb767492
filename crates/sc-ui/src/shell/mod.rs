use egui::{Context, TopBottomPanel};
use sc_core::ThemePreference;

use crate::icons;

/// Action chosen from the menu bar this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ImportRecords,
    ExportRecords,
    ExportFeed,
    SetTheme(ThemePreference),
    ResetLayout,
    Quit,
}

/// Render the main menu bar
pub fn menu_bar(ctx: &Context, theme: ThemePreference, record_count: usize) -> Option<MenuAction> {
    let mut action = None;

    TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                if ui.button(format!("{} Import records...", icons::FOLDER)).clicked() {
                    action = Some(MenuAction::ImportRecords);
                    ui.close_menu();
                }

                ui.separator();

                if ui.button(format!("{} Export records...", icons::SAVE)).clicked() {
                    action = Some(MenuAction::ExportRecords);
                    ui.close_menu();
                }

                if ui.button(format!("{} Export vehicle feed...", icons::SAVE)).clicked() {
                    action = Some(MenuAction::ExportFeed);
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    action = Some(MenuAction::Quit);
                    ui.close_menu();
                }
            });

            // View menu
            ui.menu_button("View", |ui| {
                let mut selected = theme;
                ui.radio_value(&mut selected, ThemePreference::Light, format!("{} Light", icons::LIGHT));
                ui.radio_value(&mut selected, ThemePreference::Dark, format!("{} Dark", icons::DARK));
                if selected != theme {
                    action = Some(MenuAction::SetTheme(selected));
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("Reset Layout").clicked() {
                    action = Some(MenuAction::ResetLayout);
                    ui.close_menu();
                }
            });

            // Right-aligned status
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{} record(s)", record_count));
            });
        });
    });

    action
}
