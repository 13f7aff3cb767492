//! View synchronization
//!
//! Every mutation of the store is followed by a full rebuild of the four
//! surfaces, always in the order table, chart, map, alert. Each synchronizer
//! is a pure function of the store; the [`Dashboard`] hands its output to a
//! [`Renderer`].

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::alert::{self, AlertChime, AlertStatus, AlertThresholds, SilentChime};
use crate::error::RecordError;
use crate::ingest::IngestReport;
use crate::record::{AqiCategory, Record};
use crate::settings::{AppSettings, MapBounds};
use crate::store::RecordStore;

/// One table row; `index` is the record's current position in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub index: usize,
    pub location: String,
    pub air_quality_index: i64,
    pub traffic_level: String,
}

/// One bar of the AQI chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub label: String,
    pub value: i64,
    pub category: AqiCategory,
}

/// Bar chart surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartModel {
    pub bars: Vec<ChartBar>,
}

/// One map marker
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub popup: String,
}

/// Map surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapModel {
    pub markers: Vec<MapMarker>,
}

/// Capability interface for the presentation surfaces
pub trait Renderer {
    fn render_table(&mut self, rows: &[TableRow]);
    fn render_chart(&mut self, chart: &ChartModel);
    fn render_map(&mut self, map: &MapModel);
    fn render_alert(&mut self, status: &AlertStatus);
}

/// Table synchronizer: one row per record, in store order
pub fn table_rows(records: &[Record]) -> Vec<TableRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, r)| TableRow {
            index,
            location: r.location.clone(),
            air_quality_index: r.air_quality_index,
            traffic_level: r.traffic_level.clone(),
        })
        .collect()
}

/// Chart synchronizer: one bar per record labelled by location
pub fn chart_model(records: &[Record]) -> ChartModel {
    ChartModel {
        bars: records
            .iter()
            .map(|r| ChartBar {
                label: r.location.clone(),
                value: r.air_quality_index,
                category: r.category(),
            })
            .collect(),
    }
}

/// Map synchronizer: one marker per record at a random spot inside `bounds`.
///
/// Positions do not depend on the location and change on every call.
pub fn map_model<R: Rng + ?Sized>(records: &[Record], bounds: &MapBounds, rng: &mut R) -> MapModel {
    MapModel {
        markers: records
            .iter()
            .map(|r| MapMarker {
                lat: rng.gen_range(bounds.min_lat..=bounds.max_lat),
                lon: rng.gen_range(bounds.min_lon..=bounds.max_lon),
                popup: marker_popup(r),
            })
            .collect(),
    }
}

fn marker_popup(record: &Record) -> String {
    format!(
        "{}\nAQI: {}\nTraffic: {}",
        record.location, record.air_quality_index, record.traffic_level
    )
}

/// Owns the record store and keeps every surface consistent with it
pub struct Dashboard<R: Renderer> {
    store: RecordStore,
    renderer: R,
    chime: Box<dyn AlertChime>,
    rng: Box<dyn RngCore>,
    thresholds: AlertThresholds,
    map_bounds: MapBounds,
    alert: AlertStatus,
    sync_count: u64,
}

impl<R: Renderer> Dashboard<R> {
    /// Create a dashboard with an empty store and render it once
    pub fn new(renderer: R, settings: &AppSettings) -> Self {
        let mut dashboard = Self {
            store: RecordStore::new(),
            renderer,
            chime: Box::new(SilentChime),
            rng: Box::new(StdRng::from_entropy()),
            thresholds: settings.alert.clone(),
            map_bounds: settings.map_bounds.or_default(),
            alert: AlertStatus::default(),
            sync_count: 0,
        };
        dashboard.sync();
        dashboard
    }

    /// Replace the chime played when entering emergency state
    pub fn with_chime(mut self, chime: Box<dyn AlertChime>) -> Self {
        self.chime = chime;
        self
    }

    /// Replace the randomness source used for map markers
    pub fn with_rng(mut self, rng: Box<dyn RngCore>) -> Self {
        self.rng = rng;
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Status computed by the last sync
    pub fn alert(&self) -> &AlertStatus {
        &self.alert
    }

    /// Number of full view rebuilds so far
    pub fn sync_count(&self) -> u64 {
        self.sync_count
    }

    /// Add one record from raw form input; rejected input leaves the store
    /// and the surfaces untouched
    pub fn add_record(&mut self, location: &str, air_quality_index: &str, traffic_level: &str) -> Result<usize, RecordError> {
        let index = self.store.add(location, air_quality_index, traffic_level)?;
        tracing::debug!("Added record {} at row {}", location, index);
        self.sync();
        Ok(index)
    }

    /// Delete the record at `index`; out of range is ignored
    pub fn delete_record(&mut self, index: usize) -> Option<Record> {
        let removed = self.store.remove(index)?;
        tracing::debug!("Deleted record {} at row {}", removed.location, index);
        self.sync();
        Some(removed)
    }

    /// Import raw file contents; invalid UTF-8 is replaced rather than
    /// rejecting the whole file
    pub fn ingest_bytes(&mut self, bytes: &[u8]) -> IngestReport {
        self.ingest_bulk(&String::from_utf8_lossy(bytes))
    }

    /// Import every well-formed line of `text`, then rebuild once
    pub fn ingest_bulk(&mut self, text: &str) -> IngestReport {
        let report = self.store.extend_from_text(text);
        tracing::info!(
            "Bulk import: {} records accepted, {} lines skipped",
            report.accepted,
            report.skipped
        );
        self.sync();
        report
    }

    /// Rebuild every surface from the store: table, chart, map, alert
    pub fn sync(&mut self) {
        let records = self.store.records();

        let rows = table_rows(records);
        self.renderer.render_table(&rows);

        let chart = chart_model(records);
        self.renderer.render_chart(&chart);

        let map = map_model(records, &self.map_bounds, self.rng.as_mut());
        self.renderer.render_map(&map);

        let status = alert::evaluate(records, &self.thresholds);
        self.renderer.render_alert(&status);

        if status.emergency && !self.alert.emergency {
            tracing::info!(
                "Entering emergency state ({} polluted, {} congested)",
                status.pollution_count,
                status.congestion_count
            );
            if let Err(e) = self.chime.play() {
                tracing::warn!("Could not play alert sound: {}", e);
            }
        }

        self.alert = status;
        self.sync_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChimeError;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Renderer that records the latest surfaces and the call order
    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<&'static str>,
        rows: Vec<TableRow>,
        chart: ChartModel,
        map: MapModel,
        alert: Option<AlertStatus>,
    }

    impl Renderer for RecordingRenderer {
        fn render_table(&mut self, rows: &[TableRow]) {
            self.calls.push("table");
            self.rows = rows.to_vec();
        }

        fn render_chart(&mut self, chart: &ChartModel) {
            self.calls.push("chart");
            self.chart = chart.clone();
        }

        fn render_map(&mut self, map: &MapModel) {
            self.calls.push("map");
            self.map = map.clone();
        }

        fn render_alert(&mut self, status: &AlertStatus) {
            self.calls.push("alert");
            self.alert = Some(status.clone());
        }
    }

    struct CountingChime(Rc<Cell<usize>>);

    impl AlertChime for CountingChime {
        fn play(&mut self) -> Result<(), ChimeError> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    struct BlockedChime(Rc<Cell<usize>>);

    impl AlertChime for BlockedChime {
        fn play(&mut self) -> Result<(), ChimeError> {
            self.0.set(self.0.get() + 1);
            Err(ChimeError::Unavailable("blocked by policy".to_string()))
        }
    }

    fn dashboard() -> Dashboard<RecordingRenderer> {
        Dashboard::new(RecordingRenderer::default(), &AppSettings::default())
            .with_rng(Box::new(StdRng::seed_from_u64(7)))
    }

    #[test]
    fn test_new_renders_empty_surfaces() {
        let dashboard = dashboard();
        let renderer = dashboard.renderer();

        assert_eq!(renderer.calls, vec!["table", "chart", "map", "alert"]);
        assert!(renderer.rows.is_empty());
        assert_eq!(renderer.alert.as_ref().map(|a| a.message.as_str()), Some(alert::NORMAL_MESSAGE));
    }

    #[test]
    fn test_add_record_syncs_in_order() {
        let mut dashboard = dashboard();
        dashboard.renderer_mut().calls.clear();

        dashboard.add_record("Delhi", "250", "Severe").unwrap();

        let renderer = dashboard.renderer();
        assert_eq!(renderer.calls, vec!["table", "chart", "map", "alert"]);
        assert_eq!(renderer.rows.len(), 1);
        assert_eq!(renderer.chart.bars[0].category, AqiCategory::Poor);
        assert_eq!(renderer.map.markers.len(), 1);
    }

    #[test]
    fn test_invalid_add_does_not_sync() {
        let mut dashboard = dashboard();
        let before = dashboard.sync_count();

        assert_eq!(dashboard.add_record("", "10", "Low"), Err(RecordError::EmptyLocation));
        assert!(dashboard.add_record("Pune", "x", "Low").is_err());
        assert!(dashboard.add_record("Pune", "10", "").is_err());

        assert_eq!(dashboard.store().len(), 0);
        assert_eq!(dashboard.sync_count(), before);
    }

    #[test]
    fn test_delete_reindexes_rows() {
        let mut dashboard = dashboard();
        dashboard.add_record("A", "10", "Low").unwrap();
        dashboard.add_record("B", "20", "Low").unwrap();
        dashboard.add_record("C", "30", "Low").unwrap();

        let removed = dashboard.delete_record(0).unwrap();
        assert_eq!(removed.location, "A");

        let rows = &dashboard.renderer().rows;
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].index, rows[0].location.as_str()), (0, "B"));
        assert_eq!((rows[1].index, rows[1].location.as_str()), (1, "C"));
    }

    #[test]
    fn test_out_of_range_delete_is_ignored() {
        let mut dashboard = dashboard();
        dashboard.add_record("A", "10", "Low").unwrap();
        let before = dashboard.sync_count();

        assert!(dashboard.delete_record(1).is_none());
        assert_eq!(dashboard.store().len(), 1);
        assert_eq!(dashboard.sync_count(), before);
    }

    #[test]
    fn test_bulk_import_syncs_once() {
        let mut dashboard = dashboard();
        let before = dashboard.sync_count();

        let report = dashboard.ingest_bulk("Delhi,250,Severe\nBadRow\nMumbai,90,Low");

        assert_eq!(report.accepted, 2);
        assert_eq!(dashboard.sync_count(), before + 1);
        let locations: Vec<_> = dashboard.renderer().rows.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(locations, vec!["Delhi", "Mumbai"]);
    }

    #[test]
    fn test_non_utf8_import_keeps_valid_lines() {
        let mut dashboard = dashboard();

        let report = dashboard.ingest_bytes(b"Delhi,250,Severe\nS\xE3o Paulo,90,Low\n\xFF\xFE");

        assert_eq!(report.accepted, 2);
        assert_eq!(dashboard.store().len(), 2);
        assert_eq!(dashboard.renderer().rows[1].location, "S\u{FFFD}o Paulo");
    }

    #[test]
    fn test_inverted_map_bounds_use_defaults() {
        let settings = AppSettings {
            map_bounds: MapBounds { min_lat: 30.0, max_lat: 20.0, min_lon: 70.0, max_lon: 80.0 },
            ..AppSettings::default()
        };
        let mut dashboard = Dashboard::new(RecordingRenderer::default(), &settings)
            .with_rng(Box::new(StdRng::seed_from_u64(7)));

        dashboard.add_record("Delhi", "250", "Severe").unwrap();

        let bounds = MapBounds::default();
        let marker = &dashboard.renderer().map.markers[0];
        assert!(bounds.contains(marker.lat, marker.lon));
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut dashboard = dashboard();
        dashboard.ingest_bulk("Delhi,250,Severe\nMumbai,90,Low\nPune,330,Moderate");

        let rows = dashboard.renderer().rows.clone();
        let chart = dashboard.renderer().chart.clone();
        let alert = dashboard.renderer().alert.clone();
        let popups: Vec<_> = dashboard.renderer().map.markers.iter().map(|m| m.popup.clone()).collect();

        dashboard.sync();

        let renderer = dashboard.renderer();
        assert_eq!(renderer.rows, rows);
        assert_eq!(renderer.chart, chart);
        assert_eq!(renderer.alert, alert);
        let again: Vec<_> = renderer.map.markers.iter().map(|m| m.popup.clone()).collect();
        assert_eq!(again, popups);
    }

    #[test]
    fn test_map_markers_stay_in_bounds() {
        let records: Vec<_> = (0..50).map(|i| Record::new(format!("L{}", i), i, "Low")).collect();
        let bounds = MapBounds::default();
        let mut rng = StdRng::seed_from_u64(42);

        let map = map_model(&records, &bounds, &mut rng);

        assert_eq!(map.markers.len(), 50);
        assert!(map.markers.iter().all(|m| bounds.contains(m.lat, m.lon)));
        assert_eq!(map.markers[3].popup, "L3\nAQI: 3\nTraffic: Low");
    }

    #[test]
    fn test_chart_bar_per_record() {
        let records = vec![
            Record::new("Delhi", 350, "Severe"),
            Record::new("Delhi", 90, "Low"),
        ];
        let chart = chart_model(&records);

        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].label, "Delhi");
        assert_eq!(chart.bars[0].category, AqiCategory::Severe);
        assert_eq!(chart.bars[1].category, AqiCategory::Good);
    }

    #[test]
    fn test_chime_plays_once_when_entering_emergency() {
        let plays = Rc::new(Cell::new(0));
        let mut dashboard = dashboard().with_chime(Box::new(CountingChime(plays.clone())));

        dashboard.add_record("A", "350", "Severe").unwrap();
        dashboard.add_record("B", "350", "Severe").unwrap();
        assert_eq!(plays.get(), 0);

        dashboard.add_record("C", "350", "Severe").unwrap();
        assert!(dashboard.alert().emergency);
        assert_eq!(plays.get(), 1);

        dashboard.add_record("D", "20", "Low").unwrap();
        assert_eq!(plays.get(), 1);

        dashboard.delete_record(0);
        assert!(!dashboard.alert().emergency);
        dashboard.add_record("E", "400", "Severe").unwrap();
        assert_eq!(plays.get(), 2);
    }

    #[test]
    fn test_blocked_chime_keeps_alert_state() {
        let attempts = Rc::new(Cell::new(0));
        let mut dashboard = dashboard().with_chime(Box::new(BlockedChime(attempts.clone())));

        dashboard.ingest_bulk("A,350,Severe\nB,350,Severe\nC,350,Severe");

        assert_eq!(attempts.get(), 1);
        assert!(dashboard.alert().emergency);
        let rendered = dashboard.renderer().alert.as_ref().unwrap();
        assert_eq!(rendered.message, alert::CRITICAL_MESSAGE);
        assert_eq!(rendered.highlighted, vec![0, 1, 2]);
    }
}
