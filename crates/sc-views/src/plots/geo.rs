//! Marker map implementation
//!
//! Markers are drawn in plain lat/lon space inside the configured box; there
//! is no tile layer.

use egui::{Align2, Color32, RichText, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};
use sc_core::settings::MapBounds;
use sc_core::sync::{MapMarker, MapModel};

use super::utils::colors::marker_color;

/// Map configuration
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub bounds: MapBounds,
    pub marker_radius: f32,
    pub show_bounds: bool,
    pub show_grid: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            bounds: MapBounds::default(),
            marker_radius: 6.0,
            show_bounds: true,
            show_grid: true,
        }
    }
}

/// Map of record markers
#[derive(Default)]
pub struct MapView {
    pub config: MapConfig,
    model: MapModel,
}

impl MapView {
    pub fn new(bounds: MapBounds) -> Self {
        Self {
            config: MapConfig {
                bounds,
                ..Default::default()
            },
            model: MapModel::default(),
        }
    }

    /// Clear every marker and place the new ones
    pub fn set_model(&mut self, model: MapModel) {
        self.model = model;
    }

    pub fn model(&self) -> &MapModel {
        &self.model
    }

    /// Marker closest to `(lat, lon)` within `max_distance` degrees
    pub fn nearest_marker(&self, lat: f64, lon: f64, max_distance: f64) -> Option<&MapMarker> {
        self.model
            .markers
            .iter()
            .map(|m| {
                let d_lat = m.lat - lat;
                let d_lon = m.lon - lon;
                (m, (d_lat * d_lat + d_lon * d_lon).sqrt())
            })
            .filter(|(_, distance)| *distance <= max_distance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(m, _)| m)
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        let bounds = self.config.bounds;

        ui.horizontal(|ui| {
            ui.label(format!("Markers: {}", self.model.markers.len()));
            ui.separator();
            ui.label(
                RichText::new(format!(
                    "lat {:.0}–{:.0}, lon {:.0}–{:.0}",
                    bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
                ))
                .weak(),
            );
        });

        let plot = Plot::new("record_map")
            .data_aspect(1.0)
            .show_grid(self.config.show_grid)
            .x_axis_label("Longitude")
            .y_axis_label("Latitude")
            .include_x(bounds.min_lon - 1.0)
            .include_x(bounds.max_lon + 1.0)
            .include_y(bounds.min_lat - 1.0)
            .include_y(bounds.max_lat + 1.0)
            .label_formatter(|_, value| format!("lat {:.3}\nlon {:.3}", value.y, value.x));

        plot.show(ui, |plot_ui| {
            if self.config.show_bounds {
                let outline = vec![
                    [bounds.min_lon, bounds.min_lat],
                    [bounds.max_lon, bounds.min_lat],
                    [bounds.max_lon, bounds.max_lat],
                    [bounds.min_lon, bounds.max_lat],
                    [bounds.min_lon, bounds.min_lat],
                ];
                plot_ui.line(Line::new(PlotPoints::new(outline)).color(Color32::from_gray(120)));
            }

            for (i, marker) in self.model.markers.iter().enumerate() {
                let name = marker.popup.lines().next().unwrap_or_default().to_string();
                plot_ui.points(
                    Points::new(vec![[marker.lon, marker.lat]])
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(self.config.marker_radius)
                        .color(marker_color(i))
                        .name(name),
                );
            }

            // Popup for the marker under the pointer
            if let Some(pointer) = plot_ui.pointer_coordinate() {
                if let Some(marker) = self.nearest_marker(pointer.y, pointer.x, 0.3) {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(marker.lon, marker.lat),
                            RichText::new(&marker.popup).strong(),
                        )
                        .anchor(Align2::LEFT_BOTTOM),
                    );
                }
            }
        });
    }
}
