//! Betboard Main Application
//! Main window with control panel, league summary table and win/loss chart.

use crate::charts::StaticChartRenderer;
use crate::config::Settings;
use crate::data::{Bet, DataLoader, LoadError};
use crate::export::export_summary_csv;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, SummaryTableView};
use crate::report::SummaryConsumer;
use crate::stats::{LeagueAggregator, LeagueTable};
use egui::SidePanel;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{error, info};

const PNG_WIDTH: u32 = 1200;
const PNG_HEIGHT: u32 = 800;

/// Sheet loading result from background thread
enum LoadResult {
    Complete(Vec<Bet>),
    Error(String),
}

/// Main application window.
pub struct BetboardApp {
    settings: Settings,
    table: LeagueTable,
    control_panel: ControlPanel,
    table_view: SummaryTableView,
    chart_viewer: ChartViewer,

    // Async sheet loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl BetboardApp {
    /// Build the window and kick off the initial load.
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let mut app = Self {
            control_panel: ControlPanel::new(&settings.source_url),
            settings,
            table: LeagueTable::default(),
            table_view: SummaryTableView::new(),
            chart_viewer: ChartViewer::new(),
            load_rx: None,
            is_loading: false,
        };
        app.start_load();
        app
    }

    /// Fetch and parse the sheet on a worker thread.
    fn start_load(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        self.is_loading = true;
        self.control_panel.set_progress(10.0, "Fetching bet sheet...");

        let source = self.settings.source_url.clone();
        let skip_rows = self.settings.skip_rows;

        thread::spawn(move || {
            let result = DataLoader::new(skip_rows)
                .map_err(LoadError::from)
                .and_then(|loader| loader.load(&source));

            let message = match result {
                Ok(bets) => LoadResult::Complete(bets),
                Err(e) => {
                    error!(error = %e, "Failed to load bet sheet");
                    LoadResult::Error(e.to_string())
                }
            };
            let _ = tx.send(message);
        });
    }

    /// Check for sheet loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete(bets) => {
                        self.apply_bets(&bets);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        self.control_panel
                            .set_progress(0.0, &format!("Error: {}", error));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Replace the current summaries with ones built from a fresh load.
    fn apply_bets(&mut self, bets: &[Bet]) {
        self.table = LeagueAggregator::aggregate(bets);
        self.table_view.consume(&self.table);
        self.chart_viewer.consume(&self.table);

        self.control_panel.has_data = !self.table.is_empty();
        self.control_panel.set_progress(
            100.0,
            &format!("Loaded {} bets in {} leagues", bets.len(), self.table.len()),
        );
        info!(bets = bets.len(), leagues = self.table.len(), "Summary table updated");
    }

    fn toggle_chart(&mut self) {
        self.chart_viewer.visible = !self.chart_viewer.visible;
        self.control_panel.chart_visible = self.chart_viewer.visible;
    }

    /// Handle PNG export of the win/loss chart
    fn handle_export_png(&mut self) {
        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("bets_by_league.png")
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        match StaticChartRenderer::render_png(
            &self.chart_viewer.series,
            &output_path,
            PNG_WIDTH,
            PNG_HEIGHT,
        ) {
            Ok(()) => self
                .control_panel
                .set_progress(100.0, &format!("Exported {}", output_path.display())),
            Err(e) => self
                .control_panel
                .set_progress(0.0, &format!("Error: {}", e)),
        }
    }

    /// Handle CSV export of the summary table
    fn handle_export_csv(&mut self) {
        let output_path = match rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("league_summary.csv")
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        match export_summary_csv(&self.table, &output_path) {
            Ok(()) => self
                .control_panel
                .set_progress(100.0, &format!("Exported {}", output_path.display())),
            Err(e) => self
                .control_panel
                .set_progress(0.0, &format!("Error: {}", e)),
        }
    }
}

impl eframe::App for BetboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(ui, self.is_loading);

                match action {
                    ControlPanelAction::Reload => self.start_load(),
                    ControlPanelAction::ToggleChart => self.toggle_chart(),
                    ControlPanelAction::ExportPng => self.handle_export_png(),
                    ControlPanelAction::ExportCsv => self.handle_export_csv(),
                    ControlPanelAction::None => {}
                }
            });

        // Central panel - summary table with the chart underneath
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.table_view.show(ui);
                    self.chart_viewer.show(ui);
                });
        });
    }
}
