//! Charts module - Win/loss chart rendering

mod plotter;
mod renderer;

pub use plotter::{ChartPlotter, WinLossSeries, CHART_TITLE, LOSSES_COLOR, WINS_COLOR};
pub use renderer::StaticChartRenderer;
