//! Alert banner

use egui::{Color32, Frame, Margin, RichText, Rounding, Ui};
use sc_core::alert::AlertStatus;

use crate::plots::utils::colors::{emergency_color, normal_color, warning_color};

/// Banner showing the evaluator's message
#[derive(Default)]
pub struct AlertBanner {
    status: AlertStatus,
}

impl AlertBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: AlertStatus) {
        self.status = status;
    }

    pub fn status(&self) -> &AlertStatus {
        &self.status
    }

    fn fill(&self) -> Color32 {
        if self.status.emergency {
            emergency_color()
        } else if self.status.message == sc_core::alert::NORMAL_MESSAGE {
            normal_color()
        } else {
            warning_color()
        }
    }

    pub fn ui(&self, ui: &mut Ui) {
        let fill = self.fill();

        Frame::none()
            .fill(fill)
            .inner_margin(Margin::symmetric(12.0, 8.0))
            .rounding(Rounding::same(4.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                for line in self.status.lines() {
                    let text = RichText::new(line).color(Color32::WHITE);
                    ui.label(if self.status.emergency { text.strong().size(16.0) } else { text });
                }
                if self.status.emergency {
                    ui.label(
                        RichText::new(format!(
                            "{} locations above AQI limit · {} with severe traffic",
                            self.status.pollution_count, self.status.congestion_count
                        ))
                        .color(Color32::from_gray(230))
                        .small(),
                    );
                }
            });
    }
}
