//! Line plot of the hourly AQI trend

use egui::{Align2, Color32, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Points, Text};
use sc_core::simulation::HOURLY_AQI;

/// Fixed hourly AQI readings
pub struct TrendView {
    series: Vec<(String, f64)>,
}

impl Default for TrendView {
    fn default() -> Self {
        Self {
            series: HOURLY_AQI
                .iter()
                .map(|(label, value)| (label.to_string(), *value))
                .collect(),
        }
    }
}

impl TrendView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series(&self) -> &[(String, f64)] {
        &self.series
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        let points: Vec<[f64; 2]> = self
            .series
            .iter()
            .enumerate()
            .map(|(i, (_, value))| [i as f64, *value])
            .collect();

        Plot::new("aqi_trend")
            .show_grid(true)
            .y_axis_label("AQI Levels")
            .include_y(0.0)
            .allow_drag(false)
            .allow_zoom(false)
            .label_formatter(|_, value| format!("AQI {:.0}", value.y))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::new(points.clone()))
                        .color(Color32::from_rgb(220, 50, 50))
                        .width(2.0)
                        .name("AQI Levels"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::new(points.clone()))
                        .radius(3.0)
                        .color(Color32::from_rgb(220, 50, 50)),
                );

                for (i, (label, _)) in self.series.iter().enumerate() {
                    plot_ui.text(
                        Text::new(PlotPoint::new(i as f64, 0.0), RichText::new(label).small())
                            .anchor(Align2::CENTER_TOP),
                    );
                }
            });
    }
}
