//! League Aggregator Module
//! Groups bets by league and computes per-league summaries.

use crate::data::Bet;
use std::collections::HashMap;

/// Label used for the all-leagues totals row.
pub const TOTAL_LABEL: &str = "Total";

/// Summary for a single league.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueSummary {
    pub league: String,
    pub bet_count: usize,
    pub total_stake: f64,
    /// Sum of gains minus total stake (profit, not gross return).
    pub net_gain: f64,
    pub wins: usize,
    /// Everything that is not an exact "W", so void bets are included.
    pub losses: usize,
}

/// Bets grouped by league, in first-seen league order.
///
/// Borrows from the input; bets keep their original order inside a league.
#[derive(Debug, Default)]
pub struct LeagueGroups<'a> {
    groups: Vec<(&'a str, Vec<&'a Bet>)>,
}

impl<'a> LeagueGroups<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a Bet])> + '_ {
        self.groups.iter().map(|(league, bets)| (*league, bets.as_slice()))
    }

    pub fn get(&self, league: &str) -> Option<&[&'a Bet]> {
        self.groups
            .iter()
            .find(|(name, _)| *name == league)
            .map(|(_, bets)| bets.as_slice())
    }

    pub fn leagues(&self) -> Vec<&'a str> {
        self.groups.iter().map(|(league, _)| *league).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Ordered league -> summary mapping, as produced by [`LeagueAggregator::aggregate`].
#[derive(Debug, Clone, Default)]
pub struct LeagueTable {
    summaries: Vec<LeagueSummary>,
    index: HashMap<String, usize>,
}

impl LeagueTable {
    /// Summaries in first-seen league order.
    pub fn iter(&self) -> impl Iterator<Item = &LeagueSummary> {
        self.summaries.iter()
    }

    pub fn get(&self, league: &str) -> Option<&LeagueSummary> {
        self.index.get(league).map(|&i| &self.summaries[i])
    }

    pub fn leagues(&self) -> Vec<&str> {
        self.summaries.iter().map(|s| s.league.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// All leagues folded into one row, using the same rules as each league.
    pub fn totals(&self) -> LeagueSummary {
        self.summaries.iter().fold(
            LeagueSummary {
                league: TOTAL_LABEL.to_string(),
                ..Default::default()
            },
            |mut acc, s| {
                acc.bet_count += s.bet_count;
                acc.total_stake += s.total_stake;
                acc.net_gain += s.net_gain;
                acc.wins += s.wins;
                acc.losses += s.losses;
                acc
            },
        )
    }

    fn push(&mut self, summary: LeagueSummary) {
        self.index
            .insert(summary.league.clone(), self.summaries.len());
        self.summaries.push(summary);
    }
}

impl<'a> IntoIterator for &'a LeagueTable {
    type Item = &'a LeagueSummary;
    type IntoIter = std::slice::Iter<'a, LeagueSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.summaries.iter()
    }
}

/// Stateless league aggregation.
pub struct LeagueAggregator;

impl LeagueAggregator {
    /// Group bets by league, preserving first-seen league order.
    pub fn group_by_league(bets: &[Bet]) -> LeagueGroups<'_> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, Vec<&Bet>)> = Vec::new();

        for bet in bets {
            let league = bet.league.as_str();
            let pos = *positions.entry(league).or_insert_with(|| {
                groups.push((league, Vec::new()));
                groups.len() - 1
            });
            groups[pos].1.push(bet);
        }

        LeagueGroups { groups }
    }

    /// Summarize one league's bets.
    pub fn summarize(league: &str, bets: &[&Bet]) -> LeagueSummary {
        let bet_count = bets.len();
        let total_stake: f64 = bets.iter().map(|b| b.stake).sum();
        let total_gain: f64 = bets.iter().map(|b| b.gain).sum();
        let wins = bets.iter().filter(|b| b.is_win()).count();

        LeagueSummary {
            league: league.to_string(),
            bet_count,
            total_stake,
            net_gain: total_gain - total_stake,
            wins,
            losses: bet_count - wins,
        }
    }

    /// Group and summarize every league. Empty input gives an empty table.
    pub fn aggregate(bets: &[Bet]) -> LeagueTable {
        let mut table = LeagueTable::default();
        for (league, group) in Self::group_by_league(bets).iter() {
            table.push(Self::summarize(league, group));
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bet(league: &str, stake: f64, gain: f64, win_lose: &str) -> Bet {
        Bet {
            date: "2024-01-01".to_string(),
            league: league.to_string(),
            team_a: "A".to_string(),
            team_b: "B".to_string(),
            bet: "ML".to_string(),
            result: String::new(),
            odds: 1.5,
            stake,
            gain,
            win_lose: win_lose.to_string(),
            total_at_time: 100.0,
        }
    }

    #[test]
    fn single_winning_bet() {
        let bets = vec![bet("NBA", 10.0, 15.0, "W")];
        let table = LeagueAggregator::aggregate(&bets);

        assert_eq!(table.len(), 1);
        let nba = table.get("NBA").unwrap();
        assert_eq!(nba.bet_count, 1);
        assert_eq!(nba.total_stake, 10.0);
        assert_eq!(nba.net_gain, 5.0);
        assert_eq!(nba.wins, 1);
        assert_eq!(nba.losses, 0);
    }

    #[test]
    fn void_counts_as_loss() {
        let bets = vec![bet("NHL", 10.0, 20.0, "W"), bet("NHL", 10.0, 10.0, "V")];
        let nhl = LeagueAggregator::aggregate(&bets).get("NHL").cloned().unwrap();

        assert_eq!(nhl.wins, 1);
        assert_eq!(nhl.losses, 1);
        assert_eq!(nhl.bet_count, 2);
    }

    #[test]
    fn net_gain_can_be_negative() {
        let bets = vec![bet("MLB", 25.0, 0.0, "L"), bet("MLB", 10.0, 18.0, "W")];
        let mlb = LeagueAggregator::aggregate(&bets).get("MLB").cloned().unwrap();

        assert_eq!(mlb.total_stake, 35.0);
        assert_eq!(mlb.net_gain, -17.0);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = LeagueAggregator::aggregate(&[]);
        assert!(table.is_empty());
        assert_eq!(table.totals().bet_count, 0);
        assert!(LeagueAggregator::group_by_league(&[]).is_empty());
    }

    #[test]
    fn grouping_keeps_first_seen_order() {
        let bets = vec![
            bet("NHL", 1.0, 0.0, "L"),
            bet("NBA", 2.0, 0.0, "L"),
            bet("NHL", 3.0, 0.0, "L"),
            bet("EPL", 4.0, 0.0, "L"),
            bet("NBA", 5.0, 0.0, "L"),
        ];

        let groups = LeagueAggregator::group_by_league(&bets);
        assert_eq!(groups.leagues(), vec!["NHL", "NBA", "EPL"]);

        let stakes: Vec<f64> = groups.get("NBA").unwrap().iter().map(|b| b.stake).collect();
        assert_eq!(stakes, vec![2.0, 5.0]);

        let table = LeagueAggregator::aggregate(&bets);
        assert_eq!(table.leagues(), vec!["NHL", "NBA", "EPL"]);
    }

    #[test]
    fn league_names_are_case_sensitive() {
        let bets = vec![bet("nba", 1.0, 0.0, "L"), bet("NBA", 1.0, 0.0, "L")];
        assert_eq!(LeagueAggregator::aggregate(&bets).len(), 2);
    }

    #[test]
    fn totals_fold_every_league() {
        let bets = vec![
            bet("NBA", 10.0, 15.0, "W"),
            bet("NHL", 20.0, 0.0, "L"),
            bet("NHL", 5.0, 5.0, "P"),
        ];

        let totals = LeagueAggregator::aggregate(&bets).totals();
        assert_eq!(totals.league, TOTAL_LABEL);
        assert_eq!(totals.bet_count, 3);
        assert_eq!(totals.total_stake, 35.0);
        assert_eq!(totals.net_gain, -15.0);
        assert_eq!(totals.wins, 1);
        assert_eq!(totals.losses, 2);
    }
}
