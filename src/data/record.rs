//! Bet Record Module
//! One wagering event as read from a single sheet row.

/// Number of positional columns a sheet row must provide.
pub const COLUMN_COUNT: usize = 11;

/// Sheet column names, in positional order.
pub const COLUMN_NAMES: [&str; COLUMN_COUNT] = [
    "date",
    "league",
    "team_a",
    "team_b",
    "bet",
    "result",
    "odds",
    "stake",
    "gain",
    "win_lose",
    "total_at_time",
];

/// Outcome marker that counts as a win. Anything else is not a win.
pub const WIN_MARKER: &str = "W";

/// Win/not-win classification of a bet.
///
/// Only an exact `"W"` is a win. Void, pending and unknown outcomes all land in
/// `NotWin` and are reported as losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    NotWin,
}

impl Outcome {
    pub fn classify(win_lose: &str) -> Self {
        if win_lose == WIN_MARKER {
            Outcome::Win
        } else {
            Outcome::NotWin
        }
    }
}

/// A single bet. Built once at load time, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Bet {
    pub date: String,
    pub league: String,
    pub team_a: String,
    pub team_b: String,
    pub bet: String,
    pub result: String,
    pub odds: f64,
    pub stake: f64,
    pub gain: f64,
    pub win_lose: String,
    pub total_at_time: f64,
}

impl Bet {
    pub fn outcome(&self) -> Outcome {
        Outcome::classify(&self.win_lose)
    }

    pub fn is_win(&self) -> bool {
        self.outcome() == Outcome::Win
    }

    /// Profit on this bet alone (gain minus stake).
    pub fn net_gain(&self) -> f64 {
        self.gain - self.stake
    }
}
