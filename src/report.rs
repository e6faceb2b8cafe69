//! Summary Reporting Module
//! Presentation-neutral formatting of league summaries.

use crate::stats::{LeagueSummary, LeagueTable};
use std::fmt;
use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

/// Column headers shared by every summary view.
pub const HEADERS: [&str; 6] = ["League", "Bets", "Stake", "Gain", "Wins", "Losses"];

/// Anything that displays or stores aggregated league summaries.
pub trait SummaryConsumer {
    fn consume(&mut self, table: &LeagueTable);
}

/// Display strings for one league; money columns use two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "League")]
    pub league: String,
    #[tabled(rename = "Bets")]
    pub bets: String,
    #[tabled(rename = "Stake")]
    pub stake: String,
    #[tabled(rename = "Gain")]
    pub gain: String,
    #[tabled(rename = "Wins")]
    pub wins: String,
    #[tabled(rename = "Losses")]
    pub losses: String,
}

impl SummaryRow {
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.league,
            &self.bets,
            &self.stake,
            &self.gain,
            &self.wins,
            &self.losses,
        ]
    }
}

impl From<&LeagueSummary> for SummaryRow {
    fn from(s: &LeagueSummary) -> Self {
        Self {
            league: s.league.clone(),
            bets: s.bet_count.to_string(),
            stake: format!("{:.2}", s.total_stake),
            gain: format!("{:.2}", s.net_gain),
            wins: s.wins.to_string(),
            losses: s.losses.to_string(),
        }
    }
}

/// Formatted rows in table order.
pub fn summary_rows(table: &LeagueTable) -> Vec<SummaryRow> {
    table.iter().map(SummaryRow::from).collect()
}

/// Renders summaries as a plain-text table, totals last.
#[derive(Debug, Default)]
pub struct TextTable {
    rows: Vec<SummaryRow>,
    totals: Option<SummaryRow>,
}

impl TextTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }
}

impl SummaryConsumer for TextTable {
    fn consume(&mut self, table: &LeagueTable) {
        self.rows = summary_rows(table);
        self.totals = (!table.is_empty()).then(|| SummaryRow::from(&table.totals()));
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new(self.rows.iter().chain(self.totals.iter()));
        table
            .with(Style::psql())
            .modify(Columns::new(1..), Alignment::right());
        writeln!(f, "{table}")
    }
}
