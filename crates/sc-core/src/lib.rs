//! Core functionality for the smart city dashboard
//!
//! This crate provides the record store, the ingestion paths, the alert
//! evaluator and the view synchronizers. It knows nothing about egui: every
//! surface is reached through the [`Renderer`] trait.

pub mod alert;
pub mod error;
pub mod export;
pub mod filter;
pub mod ingest;
pub mod record;
pub mod settings;
pub mod simulation;
pub mod store;
pub mod sync;

// Re-export commonly used types
pub use alert::{evaluate, AlertChime, AlertStatus, AlertThresholds};
pub use error::{ChimeError, ExportError, RecordError};
pub use filter::{AqiRange, RowFilter};
pub use ingest::{parse_line, IngestReport};
pub use record::{AqiCategory, Record};
pub use settings::{AppSettings, MapBounds, ThemePreference};
pub use store::RecordStore;
pub use sync::{ChartBar, ChartModel, Dashboard, MapMarker, MapModel, Renderer, TableRow};
