//! Export Module
//! Writes the league summary table to CSV through Polars.

use crate::stats::LeagueTable;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Nothing to export")]
    Empty,
    #[error("Chart drawing failed: {0}")]
    Draw(String),
    #[error("CSV write failed: {0}")]
    Csv(#[from] PolarsError),
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
}

/// Summary table as a DataFrame, one row per league in table order.
pub fn summary_frame(table: &LeagueTable) -> PolarsResult<DataFrame> {
    let mut leagues: Vec<String> = Vec::with_capacity(table.len());
    let mut bets: Vec<u64> = Vec::with_capacity(table.len());
    let mut stakes: Vec<f64> = Vec::with_capacity(table.len());
    let mut gains: Vec<f64> = Vec::with_capacity(table.len());
    let mut wins: Vec<u64> = Vec::with_capacity(table.len());
    let mut losses: Vec<u64> = Vec::with_capacity(table.len());

    for s in table {
        leagues.push(s.league.clone());
        bets.push(s.bet_count as u64);
        stakes.push(s.total_stake);
        gains.push(s.net_gain);
        wins.push(s.wins as u64);
        losses.push(s.losses as u64);
    }

    DataFrame::new(vec![
        Column::new("League".into(), leagues),
        Column::new("Bets".into(), bets),
        Column::new("Stake".into(), stakes),
        Column::new("Gain".into(), gains),
        Column::new("Wins".into(), wins),
        Column::new("Losses".into(), losses),
    ])
}

/// Write the summary table to `path`, money columns at two decimals.
pub fn export_summary_csv(table: &LeagueTable, path: &Path) -> Result<(), ExportError> {
    if table.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut df = summary_frame(table)?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_float_precision(Some(2))
        .finish(&mut df)?;

    tracing::info!(path = %path.display(), leagues = table.len(), "Summary exported");
    Ok(())
}
