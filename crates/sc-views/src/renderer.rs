use sc_core::alert::AlertStatus;
use sc_core::sync::{ChartModel, MapModel, Renderer, TableRow};

use crate::{AlertBanner, BarChartView, MapView, TableView};

/// Renderer backed by the egui views
///
/// Models are stored as they arrive; drawing happens later in the frame.
#[derive(Default)]
pub struct SurfaceRenderer {
    pub table: TableView,
    pub chart: BarChartView,
    pub map: MapView,
    pub alert: AlertBanner,
}

impl SurfaceRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for SurfaceRenderer {
    fn render_table(&mut self, rows: &[TableRow]) {
        tracing::trace!("Rendering {} table rows", rows.len());
        self.table.set_rows(rows.to_vec());
    }

    fn render_chart(&mut self, chart: &ChartModel) {
        self.chart.set_model(chart.clone());
    }

    fn render_map(&mut self, map: &MapModel) {
        self.map.set_model(map.clone());
    }

    fn render_alert(&mut self, status: &AlertStatus) {
        self.alert.set_status(status.clone());
        self.table.set_highlighted(&status.highlighted);
    }
}
