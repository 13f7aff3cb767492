use egui::{ComboBox, TextEdit, Ui};

use crate::icons;

/// Traffic levels offered by the form
pub const TRAFFIC_LEVELS: [&str; 3] = ["Low", "Moderate", "Severe"];

/// Raw field values of a submitted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySubmission {
    pub location: String,
    pub air_quality_index: String,
    pub traffic_level: String,
}

/// Manual record entry form
///
/// Values are handed over untouched; validation happens in the store.
#[derive(Debug, Clone)]
pub struct EntryForm {
    location: String,
    air_quality_index: String,
    traffic_level: String,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            location: String::new(),
            air_quality_index: String::new(),
            traffic_level: TRAFFIC_LEVELS[0].to_string(),
        }
    }
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values
    pub fn submission(&self) -> EntrySubmission {
        EntrySubmission {
            location: self.location.clone(),
            air_quality_index: self.air_quality_index.clone(),
            traffic_level: self.traffic_level.clone(),
        }
    }

    /// Clear the text fields after an accepted submission
    pub fn reset(&mut self) {
        self.location.clear();
        self.air_quality_index.clear();
    }

    pub fn ui(&mut self, ui: &mut Ui) -> Option<EntrySubmission> {
        let mut submitted = false;

        ui.horizontal_wrapped(|ui| {
            ui.label("Location:");
            let location = ui.add(TextEdit::singleline(&mut self.location).hint_text("e.g. Delhi").desired_width(140.0));

            ui.label("AQI:");
            let aqi = ui.add(TextEdit::singleline(&mut self.air_quality_index).hint_text("0-500").desired_width(60.0));

            ui.label("Traffic:");
            ComboBox::from_id_source("traffic_level")
                .selected_text(self.traffic_level.as_str())
                .show_ui(ui, |ui| {
                    for level in TRAFFIC_LEVELS {
                        ui.selectable_value(&mut self.traffic_level, level.to_string(), level);
                    }
                });

            let enter = (location.lost_focus() || aqi.lost_focus()) && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button(format!("{} Add Record", icons::ADD)).clicked() || enter {
                submitted = true;
            }
        });

        submitted.then(|| self.submission())
    }
}
