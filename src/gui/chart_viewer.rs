//! Chart Viewer Widget
//! Shows the stacked win/loss chart below the summary table on request.

use crate::charts::{ChartPlotter, WinLossSeries, CHART_TITLE};
use crate::report::SummaryConsumer;
use crate::stats::LeagueTable;
use egui::RichText;

const CHART_HEIGHT: f32 = 360.0;

#[derive(Default)]
pub struct ChartViewer {
    pub series: WinLossSeries,
    pub visible: bool,
}

impl SummaryConsumer for ChartViewer {
    fn consume(&mut self, table: &LeagueTable) {
        self.series = WinLossSeries::from_table(table);
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if !self.visible || self.series.is_empty() {
            return;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        ui.label(RichText::new(CHART_TITLE).size(16.0).strong());
        ui.add_space(8.0);
        ChartPlotter::draw_win_loss_chart(ui, &self.series, CHART_HEIGHT);
    }
}
