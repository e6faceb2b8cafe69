//! Stats module - per-league aggregation

mod aggregator;

pub use aggregator::{LeagueAggregator, LeagueGroups, LeagueSummary, LeagueTable, TOTAL_LABEL};
