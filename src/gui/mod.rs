//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod summary_table;

pub use app::BetboardApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use summary_table::SummaryTableView;
