//! Viewport - docks the dashboard panels

use egui::{Ui, WidgetText};
use egui_dock::{DockArea, DockState, NodeIndex, TabViewer};

use crate::{FeedView, SurfaceRenderer, TrafficView, TrendView, ViewerContext};

/// Dockable dashboard panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Records,
    AqiChart,
    Map,
    AqiTrend,
    Traffic,
    Feed,
}

impl Panel {
    pub const ALL: [Panel; 6] = [
        Panel::Records,
        Panel::AqiChart,
        Panel::Map,
        Panel::AqiTrend,
        Panel::Traffic,
        Panel::Feed,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Records => "📋 Records",
            Panel::AqiChart => "📊 AQI by Location",
            Panel::Map => "🗺 Map",
            Panel::AqiTrend => "📈 AQI Trend",
            Panel::Traffic => "🚦 Live Traffic",
            Panel::Feed => "🚗 Vehicle Feed",
        }
    }
}

/// The main viewport that manages the docked panels
pub struct Viewport {
    dock_state: DockState<Panel>,
    trend: TrendView,
    traffic: TrafficView,
    feed: FeedView,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            dock_state: default_layout(),
            trend: TrendView::new(),
            traffic: TrafficView,
            feed: FeedView,
        }
    }

    /// Restore the default panel arrangement
    pub fn reset_layout(&mut self) {
        tracing::debug!("Resetting panel layout");
        self.dock_state = default_layout();
    }

    pub fn contains(&self, panel: Panel) -> bool {
        self.dock_state.find_tab(&panel).is_some()
    }

    /// Draw the viewport
    pub fn ui(&mut self, ui: &mut Ui, renderer: &mut SurfaceRenderer, ctx: &mut ViewerContext<'_>) {
        let mut viewer = ViewportTabViewer {
            renderer,
            trend: &mut self.trend,
            traffic: &mut self.traffic,
            feed: &mut self.feed,
            ctx,
        };

        DockArea::new(&mut self.dock_state)
            .show_close_buttons(false)
            .draggable_tabs(true)
            .show_inside(ui, &mut viewer);
    }
}

/// Tab viewer for egui_dock
struct ViewportTabViewer<'a, 'c> {
    renderer: &'a mut SurfaceRenderer,
    trend: &'a mut TrendView,
    traffic: &'a mut TrafficView,
    feed: &'a mut FeedView,
    ctx: &'a mut ViewerContext<'c>,
}

impl<'a, 'c> TabViewer for ViewportTabViewer<'a, 'c> {
    type Tab = Panel;

    fn title(&mut self, tab: &mut Self::Tab) -> WidgetText {
        tab.title().into()
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        match tab {
            Panel::Records => self.renderer.table.ui(self.ctx, ui),
            Panel::AqiChart => self.renderer.chart.ui(ui),
            Panel::Map => self.renderer.map.ui(ui),
            Panel::AqiTrend => self.trend.ui(ui),
            Panel::Traffic => self.traffic.ui(self.ctx.traffic, ui),
            Panel::Feed => self.feed.ui(self.ctx.feed, ui),
        }
    }
}

/// Records on the left, chart and map on the right, live panels below
fn default_layout() -> DockState<Panel> {
    let mut dock_state = DockState::new(vec![Panel::Records]);
    let surface = dock_state.main_surface_mut();

    let [records, charts] = surface.split_right(NodeIndex::root(), 0.5, vec![Panel::AqiChart, Panel::Map]);
    surface.split_below(records, 0.6, vec![Panel::Traffic, Panel::Feed]);
    surface.split_below(charts, 0.6, vec![Panel::AqiTrend]);

    dock_state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_has_every_panel() {
        let viewport = Viewport::new();
        for panel in Panel::ALL {
            assert!(viewport.contains(panel), "missing {:?}", panel);
        }
    }
}
