//! View system for the smart city dashboard
//!
//! Each surface keeps the last model handed to it by the dashboard and draws
//! it with egui. User actions raised while drawing (row deletion) are queued
//! as [`ViewAction`]s and applied by the app after the frame, so the store is
//! never mutated mid-render.

mod alert;
mod live;
pub mod plots;
mod renderer;
mod tables;
mod viewport;

pub use alert::AlertBanner;
pub use live::{FeedView, TrafficView};
pub use plots::{BarChartView, MapView, TrendView};
pub use renderer::SurfaceRenderer;
pub use tables::TableView;
pub use viewport::{Panel, Viewport};

use sc_core::filter::RowFilter;
use sc_core::simulation::{LiveTraffic, VehicleFeed};

/// Action requested by a view while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    DeleteRow(usize),
}

/// Context passed to views during rendering
pub struct ViewerContext<'a> {
    /// Search inputs applied to the table
    pub filter: &'a RowFilter,

    /// Simulated road congestion
    pub traffic: &'a LiveTraffic,

    /// Simulated vehicle readings
    pub feed: &'a VehicleFeed,

    /// Actions raised this frame
    pub actions: &'a mut Vec<ViewAction>,
}
