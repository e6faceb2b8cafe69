//! Summary Table Widget
//! Per-league summary grid: League, Bets, Stake, Gain, Wins, Losses.

use crate::report::{summary_rows, SummaryConsumer, SummaryRow, HEADERS};
use crate::stats::LeagueTable;
use egui::{Color32, RichText};

const GAIN_COLUMN: usize = 3;

#[derive(Default)]
pub struct SummaryTableView {
    rows: Vec<SummaryRow>,
    totals: Option<SummaryRow>,
}

impl SummaryConsumer for SummaryTableView {
    fn consume(&mut self, table: &LeagueTable) {
        self.rows = summary_rows(table);
        self.totals = (!table.is_empty()).then(|| SummaryRow::from(&table.totals()));
    }
}

impl SummaryTableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if self.rows.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("league_summary_table")
                    .striped(true)
                    .min_col_width(80.0)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        for header in HEADERS {
                            ui.label(RichText::new(header).strong().size(13.0));
                        }
                        ui.end_row();

                        let default_text_color = ui.visuals().text_color();
                        for row in &self.rows {
                            Self::draw_row(ui, row, default_text_color, false);
                        }

                        if let Some(totals) = &self.totals {
                            Self::draw_row(ui, totals, default_text_color, true);
                        }
                    });
            });
    }

    fn draw_row(ui: &mut egui::Ui, row: &SummaryRow, default_color: Color32, strong: bool) {
        for (i, cell) in row.cells().into_iter().enumerate() {
            let color = if i == GAIN_COLUMN && cell.starts_with('-') {
                Color32::from_rgb(220, 53, 69)
            } else {
                default_color
            };

            let mut text = RichText::new(cell).size(12.0).color(color);
            if strong {
                text = text.strong();
            }

            if i == 0 {
                ui.label(text);
            } else {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(text);
                });
            }
        }
        ui.end_row();
    }
}
