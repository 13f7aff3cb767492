//! Live simulation panels: road congestion cards and the vehicle feed

use egui::{Color32, Frame, Margin, RichText, Rounding, ScrollArea, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Text};
use sc_core::simulation::{CongestionLevel, LiveTraffic, VehicleFeed};

use crate::plots::utils::colors::congestion_color;

/// Road congestion cards plus the average congestion history
#[derive(Default)]
pub struct TrafficView;

impl TrafficView {
    pub fn ui(&mut self, traffic: &LiveTraffic, ui: &mut Ui) {
        if traffic.roads().is_empty() {
            ui.label(RichText::new("Waiting for traffic data…").weak());
        }

        ui.horizontal_wrapped(|ui| {
            for (road, level) in traffic.roads() {
                road_card(ui, road, *level);
            }
        });

        ui.add_space(6.0);

        let history: Vec<[f64; 2]> = traffic
            .history()
            .enumerate()
            .map(|(i, avg)| [i as f64, avg])
            .collect();
        let labels = traffic.history_labels();

        Plot::new("congestion_history")
            .show_grid(true)
            .include_y(0.0)
            .include_y(2.0)
            .allow_drag(false)
            .allow_zoom(false)
            .y_axis_label("Avg Congestion")
            .label_formatter(|_, value| format!("{} ({:.2})", CongestionLevel::axis_label(value.y), value.y))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::new(history))
                        .color(Color32::from_rgb(60, 110, 230))
                        .width(2.0)
                        .name("Avg Congestion"),
                );
                for (i, label) in labels.iter().enumerate() {
                    plot_ui.text(Text::new(
                        PlotPoint::new(i as f64, -0.15),
                        RichText::new(label).small(),
                    ));
                }
            });
    }
}

fn road_card(ui: &mut Ui, road: &str, level: CongestionLevel) {
    Frame::none()
        .fill(congestion_color(level).linear_multiply(0.25))
        .stroke(egui::Stroke::new(1.0, congestion_color(level)))
        .inner_margin(Margin::same(6.0))
        .rounding(Rounding::same(4.0))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(format!("🛣 {}", road)).strong());
                ui.label(format!("{} {}", level.indicator(), level.label().to_uppercase()));
            });
        });
}

/// Newest-first list of simulated vehicle readings
#[derive(Default)]
pub struct FeedView;

impl FeedView {
    pub fn ui(&mut self, feed: &VehicleFeed, ui: &mut Ui) {
        ScrollArea::vertical()
            .id_source("vehicle_feed")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if feed.is_empty() {
                    ui.label(RichText::new("No readings yet").weak());
                }
                for line in feed.lines() {
                    ui.monospace(line);
                }
            });
    }
}
