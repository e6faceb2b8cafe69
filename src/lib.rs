//! Betboard - Betting Sheet League Summary & Win/Loss Chart Viewer
//!
//! Loads a betting log from a spreadsheet CSV export, summarizes it per league
//! and hands the summaries to a table or chart view.

pub mod charts;
pub mod config;
pub mod data;
pub mod export;
pub mod gui;
pub mod report;
pub mod stats;

pub use data::{Bet, DataLoader, LoadError};
pub use report::SummaryConsumer;
pub use stats::{LeagueAggregator, LeagueSummary, LeagueTable};
