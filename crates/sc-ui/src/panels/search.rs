use egui::{ComboBox, TextEdit, Ui};
use sc_core::filter::{AqiRange, RowFilter};

use crate::icons;

/// Search text and AQI range inputs for the table
#[derive(Debug, Default)]
pub struct SearchPanel;

impl SearchPanel {
    /// Edit `filter` in place; returns true when it changed
    pub fn ui(&mut self, filter: &mut RowFilter, ui: &mut Ui) -> bool {
        let before = filter.clone();

        ui.horizontal(|ui| {
            ui.label(icons::SEARCH);
            ui.add(TextEdit::singleline(&mut filter.search).hint_text("Search location").desired_width(160.0));

            ComboBox::from_id_source("aqi_range")
                .selected_text(filter.range.label())
                .show_ui(ui, |ui| {
                    for range in AqiRange::ALL {
                        ui.selectable_value(&mut filter.range, range, range.label());
                    }
                });

            if filter.is_active() && ui.small_button("Clear").clicked() {
                *filter = RowFilter::default();
            }
        });

        let changed = *filter != before;
        if changed {
            tracing::debug!("Filter changed: {:?}", filter);
        }
        changed
    }
}
