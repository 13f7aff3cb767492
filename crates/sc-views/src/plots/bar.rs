//! Bar chart implementation

use egui::{Align2, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, HLine, LineStyle, Plot, PlotPoint, Text};
use sc_core::sync::ChartModel;

use super::utils::colors::aqi_color;

/// Bar chart configuration
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    /// Whether to show grid
    pub show_grid: bool,

    /// Bar width factor (0.0 to 1.0)
    pub bar_width: f64,

    /// Draw dashed lines at the category boundaries
    pub show_thresholds: bool,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            bar_width: 0.7,
            show_thresholds: true,
        }
    }
}

/// AQI bar chart, one bar per record
#[derive(Default)]
pub struct BarChartView {
    pub config: BarChartConfig,
    model: ChartModel,
    /// Bumped on every rebuild so egui forgets the previous plot's state
    generation: u64,
}

impl BarChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current chart and replace it
    pub fn set_model(&mut self, model: ChartModel) {
        self.model = model;
        self.generation += 1;
    }

    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        if self.model.bars.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No data to display");
            });
            return;
        }

        let max_value = self.model.bars.iter().map(|b| b.value).max().unwrap_or(0) as f64;

        let plot = Plot::new(("aqi_bar_chart", self.generation))
            .show_grid(self.config.show_grid)
            .y_axis_label("AQI")
            .include_y(0.0)
            .include_y(max_value * 1.1)
            .allow_zoom(true)
            .allow_drag(true)
            .show_x(false);

        plot.show(ui, |plot_ui| {
            let bars: Vec<Bar> = self
                .model
                .bars
                .iter()
                .enumerate()
                .map(|(i, bar)| {
                    Bar::new(i as f64, bar.value as f64)
                        .width(self.config.bar_width)
                        .name(&bar.label)
                        .fill(aqi_color(bar.category))
                })
                .collect();

            plot_ui.bar_chart(BarChart::new(bars).name("AQI"));

            // Category labels under each bar
            for (i, bar) in self.model.bars.iter().enumerate() {
                plot_ui.text(
                    Text::new(PlotPoint::new(i as f64, 0.0), RichText::new(&bar.label).small())
                        .anchor(Align2::CENTER_TOP),
                );
            }

            if self.config.show_thresholds {
                for limit in [100.0, 200.0, 300.0] {
                    plot_ui.hline(
                        HLine::new(limit)
                            .color(Color32::from_gray(140))
                            .style(LineStyle::Dashed { length: 6.0 }),
                    );
                }
            }
        });
    }
}
