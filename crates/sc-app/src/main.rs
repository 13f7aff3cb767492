//! Main application entry point

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use eframe::egui::{self, Context};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

use sc_core::filter::RowFilter;
use sc_core::settings::SETTINGS_KEY;
use sc_core::simulation::{LiveTraffic, VehicleFeed, FEED_INTERVAL, PATTERN_NOTE, TRAFFIC_INTERVAL};
use sc_core::{export, AppSettings, Dashboard, ThemePreference};
use sc_ui::{EntryForm, MenuAction, SearchPanel};
use sc_views::{SurfaceRenderer, ViewAction, ViewerContext, Viewport};

mod chime;
mod ticker;

use chime::TerminalBell;
use ticker::Ticker;

/// Main application state
struct SmartCityApp {
    /// Record store plus the surfaces it drives
    dashboard: Dashboard<SurfaceRenderer>,

    /// The viewport managing all docked panels
    viewport: Viewport,

    /// Persisted preferences
    settings: AppSettings,

    filter: RowFilter,
    entry: EntryForm,
    search: SearchPanel,

    /// Simulated sensor streams
    feed: VehicleFeed,
    traffic: LiveTraffic,
    feed_timer: Ticker,
    traffic_timer: Ticker,
    rng: StdRng,
}

impl SmartCityApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut settings: AppSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, SETTINGS_KEY))
            .unwrap_or_default();
        settings.map_bounds = settings.map_bounds.or_default();

        sc_ui::apply_theme(&cc.egui_ctx, settings.theme);

        let renderer = SurfaceRenderer {
            map: sc_views::MapView::new(settings.map_bounds),
            ..SurfaceRenderer::new()
        };
        let dashboard = Dashboard::new(renderer, &settings).with_chime(Box::new(TerminalBell));

        let mut rng = StdRng::from_entropy();
        let mut traffic = LiveTraffic::new(settings.traffic_history_len);
        traffic.tick(&mut rng);

        let now = Instant::now();
        Self {
            dashboard,
            viewport: Viewport::new(),
            filter: RowFilter::default(),
            entry: EntryForm::new(),
            search: SearchPanel,
            feed: VehicleFeed::new(settings.feed_capacity),
            traffic,
            feed_timer: Ticker::new(FEED_INTERVAL, now),
            traffic_timer: Ticker::new(TRAFFIC_INTERVAL, now),
            rng,
            settings,
        }
    }

    fn change_theme(&mut self, ctx: &Context, theme: ThemePreference) {
        self.settings.theme = theme;
        sc_ui::apply_theme(ctx, theme);
        info!("Theme set to {}", theme);
    }

    /// Advance the simulations and schedule the next repaint
    fn tick(&mut self, ctx: &Context) {
        let now = Instant::now();

        if self.feed_timer.fire(now) {
            self.feed.tick(&mut self.rng);
        }
        if self.traffic_timer.fire(now) {
            self.traffic.tick(&mut self.rng);
        }

        // The clock needs a repaint every second regardless
        let next = self.feed_timer.remaining(now).min(self.traffic_timer.remaining(now)).min(FEED_INTERVAL);
        ctx.request_repaint_after(next);
    }

    /// Handle menu actions
    fn handle_menu(&mut self, ctx: &Context, action: MenuAction) {
        match action {
            MenuAction::ImportRecords => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Records", &["csv", "txt"])
                    .pick_file()
                {
                    self.import_records(path);
                }
            }
            MenuAction::ExportRecords => match export::export_records_csv(self.dashboard.store().records()) {
                Ok(contents) => save_with_dialog("records.csv", &contents),
                Err(e) => error!("Failed to export records: {}", e),
            },
            MenuAction::ExportFeed => {
                let contents = export::export_feed(self.feed.lines());
                save_with_dialog("data.csv", &contents);
            }
            MenuAction::SetTheme(theme) => self.change_theme(ctx, theme),
            MenuAction::ResetLayout => self.viewport.reset_layout(),
            MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn import_records(&mut self, path: PathBuf) {
        info!("Importing records from {:?}", path);

        match std::fs::read(&path) {
            Ok(bytes) => {
                self.dashboard.ingest_bytes(&bytes);
            }
            Err(e) => error!("Failed to read {:?}: {}", path, e),
        }
    }

    fn apply_actions(&mut self, actions: Vec<ViewAction>) {
        for action in actions {
            match action {
                ViewAction::DeleteRow(index) => {
                    self.dashboard.delete_record(index);
                }
            }
        }
    }
}

fn save_with_dialog(file_name: &str, contents: &str) {
    let Some(path) = rfd::FileDialog::new().set_file_name(file_name).save_file() else {
        return;
    };

    match std::fs::write(&path, contents) {
        Ok(()) => info!("Saved {:?}", path),
        Err(e) => error!("Failed to write {:?}: {}", path, e),
    }
}

impl eframe::App for SmartCityApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.tick(ctx);

        // Menu bar
        if let Some(action) = sc_ui::menu_bar(ctx, self.settings.theme, self.dashboard.store().len()) {
            self.handle_menu(ctx, action);
        }

        // Header, inputs and the alert banner
        let mut theme_toggle = None;
        let mut submission = None;
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            theme_toggle = sc_ui::header(ui, self.settings.theme);
            ui.separator();
            submission = self.entry.ui(ui);
            self.search.ui(&mut self.filter, ui);
            ui.add_space(4.0);
            self.dashboard.renderer().alert.ui(ui);
            ui.add_space(4.0);
        });

        if let Some(theme) = theme_toggle {
            self.change_theme(ctx, theme);
        }

        if let Some(form) = submission {
            // Rejected input is dropped without feedback
            match self.dashboard.add_record(&form.location, &form.air_quality_index, &form.traffic_level) {
                Ok(_) => self.entry.reset(),
                Err(e) => tracing::debug!("Ignoring form input: {}", e),
            }
        }

        // Main content area
        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut viewer_ctx = ViewerContext {
                filter: &self.filter,
                traffic: &self.traffic,
                feed: &self.feed,
                actions: &mut actions,
            };
            self.viewport.ui(ui, self.dashboard.renderer_mut(), &mut viewer_ctx);
        });

        self.apply_actions(actions);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.settings);
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Smart City Dashboard");
    info!("{}", PATTERN_NOTE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0]),
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Smart City Dashboard",
        options,
        Box::new(|cc| Box::new(SmartCityApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
