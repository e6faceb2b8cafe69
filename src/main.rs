//! Betboard - Betting Sheet League Summary & Win/Loss Chart Viewer
//!
//! Desktop viewer: loads the bet sheet on start and shows per-league totals.

use betboard::config::{Settings, SETTINGS_FILE};
use betboard::gui::BetboardApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    settings.logging.init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Bet Data Analysis"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Bet Data Analysis",
        options,
        Box::new(move |cc| Ok(Box::new(BetboardApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
