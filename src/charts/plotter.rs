//! Chart Plotter Module
//! Stacked win/loss bar chart drawn with egui_plot.

use crate::stats::LeagueTable;
use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Plot};

pub const CHART_TITLE: &str = "Bets by League: Wins and Losses";
pub const X_AXIS_LABEL: &str = "Leagues";
pub const Y_AXIS_LABEL: &str = "Number of Bets";

pub const WINS_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green
pub const LOSSES_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

const BAR_WIDTH: f64 = 0.6;

/// Win and loss counts per league, in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WinLossSeries {
    pub leagues: Vec<String>,
    pub wins: Vec<usize>,
    pub losses: Vec<usize>,
}

impl WinLossSeries {
    pub fn from_table(table: &LeagueTable) -> Self {
        let mut series = Self::default();
        for summary in table {
            series.leagues.push(summary.league.clone());
            series.wins.push(summary.wins);
            series.losses.push(summary.losses);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.leagues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }

    /// Height of the tallest stacked bar.
    pub fn max_total(&self) -> usize {
        self.wins
            .iter()
            .zip(&self.losses)
            .map(|(w, l)| w + l)
            .max()
            .unwrap_or(0)
    }

    /// League name for an x-axis position, if it sits on a bar.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        league_at(&self.leagues, x)
    }
}

fn league_at(leagues: &[String], x: f64) -> Option<&str> {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 1e-6 {
        return None;
    }
    leagues.get(idx as usize).map(String::as_str)
}

/// Draws the interactive win/loss chart.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Wins at the bottom, losses stacked on top.
    pub fn stacked_bars(series: &WinLossSeries) -> (BarChart, BarChart) {
        let win_bars = series
            .wins
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                Bar::new(i as f64, w as f64)
                    .width(BAR_WIDTH)
                    .name(&series.leagues[i])
            })
            .collect();
        let wins = BarChart::new(win_bars).name("Wins").color(WINS_COLOR);

        let loss_bars = series
            .losses
            .iter()
            .enumerate()
            .map(|(i, &l)| {
                Bar::new(i as f64, l as f64)
                    .width(BAR_WIDTH)
                    .name(&series.leagues[i])
            })
            .collect();
        let losses = BarChart::new(loss_bars)
            .name("Losses")
            .color(LOSSES_COLOR)
            .stack_on(&[&wins]);

        (wins, losses)
    }

    pub fn draw_win_loss_chart(ui: &mut egui::Ui, series: &WinLossSeries, height: f32) {
        let labels = series.leagues.clone();
        let (wins, losses) = Self::stacked_bars(series);

        Plot::new("win_loss_chart")
            .height(height)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .include_y(0.0)
            .include_y(series.max_total() as f64 + 1.0)
            .include_x(-0.5)
            .include_x(series.len() as f64 - 0.5)
            .x_axis_formatter(move |mark, _range| {
                league_at(&labels, mark.value).unwrap_or_default().to_string()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(wins);
                plot_ui.bar_chart(losses);
            });
    }
}
