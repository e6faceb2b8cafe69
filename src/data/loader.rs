//! Bet Sheet Loader Module
//! Fetches the sheet export over HTTP and parses it into bets using Polars.

use super::record::{Bet, COLUMN_COUNT, COLUMN_NAMES};
use polars::prelude::*;
use std::io::Cursor;
use thiserror::Error;
use tracing::{debug, info};

/// Google Sheets CSV export of the betting log.
pub const DEFAULT_SOURCE_URL: &str = "https://docs.google.com/spreadsheets/d/1qdIxJxt7z-HuCqwLlI8Tv1Wt-tUXeFKWr_E7HF-tTXE/export?format=csv";

/// Leading rows of the export that never hold data (a blank row, then the header).
pub const DEFAULT_SKIP_ROWS: usize = 2;

const USER_AGENT: &str = concat!("betboard/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Sheet has {found} columns, expected at least 11")]
    MissingColumns { found: usize },
    #[error("Row {row}: `{column}` is empty")]
    MissingField { row: usize, column: &'static str },
    #[error("Row {row}: `{column}` is not a number: {value:?}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Fetches and parses the bet sheet. Each call returns a fresh set of bets.
pub struct DataLoader {
    client: reqwest::blocking::Client,
    skip_rows: usize,
}

impl DataLoader {
    pub fn new(skip_rows: usize) -> Result<Self, RetrievalError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, skip_rows })
    }

    /// Download the sheet at `source` and parse every data row.
    ///
    /// Fails on the first bad row; nothing is returned for a partially valid sheet.
    pub fn load(&self, source: &str) -> Result<Vec<Bet>, LoadError> {
        let body = self.fetch(source)?;
        let bets = parse_csv(&body, self.skip_rows)?;
        info!(source, bets = bets.len(), "Loaded bet sheet");
        Ok(bets)
    }

    /// Single GET; any non-2xx status is an error.
    pub fn fetch(&self, url: &str) -> Result<String, RetrievalError> {
        debug!(url, "Fetching bet sheet");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}

/// Parse a headerless bet sheet, discarding the first `skip_rows` rows.
///
/// Columns are read positionally; anything after the eleventh is ignored.
/// Reported row numbers are 1-based sheet rows, skipped rows included.
pub fn parse_csv(text: &str, skip_rows: usize) -> Result<Vec<Bet>, ParseError> {
    // Skipped rows are cut off by line here; polars would drop a leading
    // empty line on its own and then skip the next rows as well.
    let offset: usize = text
        .split_inclusive('\n')
        .take(skip_rows)
        .map(str::len)
        .sum();
    let body = &text[offset..];

    match body.lines().next() {
        None => return Ok(Vec::new()),
        Some("" | "\r") => {
            return Err(ParseError::MissingField {
                row: skip_rows + 1,
                column: COLUMN_NAMES[6],
            })
        }
        Some(_) => {}
    }

    // Schema inference off: every column comes back as text and numbers are
    // parsed per cell so a bad value can be reported with its row.
    let result = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_truncate_ragged_lines(true))
        .into_reader_with_file_handle(Cursor::new(body.as_bytes().to_vec()))
        .finish();

    let df = match result {
        Ok(df) => df,
        Err(PolarsError::NoData(_)) => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    if df.height() == 0 {
        return Ok(Vec::new());
    }

    let columns = df.get_columns();
    if columns.len() < COLUMN_COUNT {
        return Err(ParseError::MissingColumns {
            found: columns.len(),
        });
    }

    let cells = columns[..COLUMN_COUNT]
        .iter()
        .map(|col| col.str())
        .collect::<PolarsResult<Vec<&StringChunked>>>()?;

    let mut bets = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let row = RawRow {
            cells: &cells,
            index: i,
            row: skip_rows + i + 1,
        };
        bets.push(row.to_bet()?);
    }

    debug!(rows = bets.len(), skipped = skip_rows, "Parsed bet sheet");
    Ok(bets)
}

/// Positional view of one sheet row.
struct RawRow<'a> {
    cells: &'a [&'a StringChunked],
    index: usize,
    row: usize,
}

impl RawRow<'_> {
    fn text(&self, column: usize) -> String {
        self.cells[column]
            .get(self.index)
            .unwrap_or_default()
            .to_string()
    }

    fn number(&self, column: usize) -> Result<f64, ParseError> {
        let name = COLUMN_NAMES[column];
        let raw = self.cells[column]
            .get(self.index)
            .ok_or(ParseError::MissingField {
                row: self.row,
                column: name,
            })?;

        parse_decimal(raw).ok_or_else(|| ParseError::InvalidNumber {
            row: self.row,
            column: name,
            value: raw.to_string(),
        })
    }

    fn to_bet(&self) -> Result<Bet, ParseError> {
        Ok(Bet {
            date: self.text(0),
            league: self.text(1),
            team_a: self.text(2),
            team_b: self.text(3),
            bet: self.text(4),
            result: self.text(5),
            odds: self.number(6)?,
            stake: self.number(7)?,
            gain: self.number(8)?,
            win_lose: self.text(9),
            total_at_time: self.number(10)?,
        })
    }
}

/// Float text with surrounding whitespace ignored. Single underscores between
/// digits are accepted as group separators (`1_000.50`).
fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let is_digit_at = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut digits = String::with_capacity(trimmed.len());
    for (i, c) in trimmed.char_indices() {
        if c == '_' {
            if i == 0 || !is_digit_at(i - 1) || !is_digit_at(i + 1) {
                return None;
            }
            continue;
        }
        digits.push(c);
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREAMBLE: &str = ",,,,,,,,,,\nDate,League,Team A,Team B,Bet,Result,Odds,Stake,Gain,W/L,Total\n";

    fn sheet(rows: &[&str]) -> String {
        let mut text = PREAMBLE.to_string();
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }

    #[test]
    fn parses_rows_after_preamble() {
        let text = sheet(&[
            "2024-01-01,NBA,Lakers,Celtics,ML,Lakers won,1.5,10,15,W,100",
            "2024-01-02,NHL,Oilers,Flames,Over 5.5,4 goals,2.10,20,0,L,80",
        ]);

        let bets = parse_csv(&text, DEFAULT_SKIP_ROWS).unwrap();
        assert_eq!(bets.len(), 2);

        let first = &bets[0];
        assert_eq!(first.date, "2024-01-01");
        assert_eq!(first.league, "NBA");
        assert_eq!(first.team_a, "Lakers");
        assert_eq!(first.team_b, "Celtics");
        assert_eq!(first.bet, "ML");
        assert_eq!(first.result, "Lakers won");
        assert_eq!(first.odds, 1.5);
        assert_eq!(first.stake, 10.0);
        assert_eq!(first.gain, 15.0);
        assert_eq!(first.win_lose, "W");
        assert_eq!(first.total_at_time, 100.0);

        assert_eq!(bets[1].league, "NHL");
        assert_eq!(bets[1].odds, 2.1);
    }

    #[test]
    fn skipped_rows_are_never_parsed() {
        // The header row has text in numeric columns; it must not be read.
        let text = sheet(&["2024-01-01,NBA,A,B,ML,W,1.5,10,15,W,100"]);
        assert!(parse_csv(&text, DEFAULT_SKIP_ROWS).is_ok());
        assert!(parse_csv(&text, 1).is_err());
    }

    #[test]
    fn non_numeric_odds_fail_the_load() {
        let text = sheet(&[
            "2024-01-01,NBA,A,B,ML,W,1.5,10,15,W,100",
            "2024-01-02,NBA,A,B,ML,W,abc,10,15,W,105",
        ]);

        match parse_csv(&text, DEFAULT_SKIP_ROWS) {
            Err(ParseError::InvalidNumber { row, column, value }) => {
                assert_eq!(row, 4);
                assert_eq!(column, "odds");
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn short_row_fails_the_load() {
        let text = sheet(&[
            "2024-01-01,NBA,A,B,ML,W,1.5,10,15,W,100",
            "2024-01-02,NBA,A,B,ML,W,1.5,10",
        ]);

        let err = parse_csv(&text, DEFAULT_SKIP_ROWS).unwrap_err();
        assert!(matches!(err, ParseError::MissingField { row: 4, .. }));
    }

    #[test]
    fn narrow_sheet_is_rejected() {
        let text = sheet(&["2024-01-01,NBA,A,B,ML,W,1.5"]);
        let err = parse_csv(&text, DEFAULT_SKIP_ROWS).unwrap_err();
        assert!(matches!(err, ParseError::MissingColumns { found: 7 }));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let text = sheet(&["2024-01-01,NBA,A,B,ML,W,1.5,10,15,W,100,note"]);
        let bets = parse_csv(&text, DEFAULT_SKIP_ROWS).unwrap();
        assert_eq!(bets.len(), 1);
        assert_eq!(bets[0].total_at_time, 100.0);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let text = sheet(&["2024-01-01,\"Serie A, Italy\",A,B,ML,W,1.5,10,15,W,\"1000.5\""]);
        let bets = parse_csv(&text, DEFAULT_SKIP_ROWS).unwrap();
        assert_eq!(bets[0].league, "Serie A, Italy");
        assert_eq!(bets[0].total_at_time, 1000.5);
    }

    const BLANK_PREAMBLE: &str = "\nDate,League,Team A,Team B,Bet,Result,Odds,Stake,Gain,W/L,Total\n";

    #[test]
    fn empty_first_row_is_one_of_the_skipped_rows() {
        let text = format!(
            "{BLANK_PREAMBLE}\
2024-01-01,NBA,Lakers,Celtics,ML,W,1.5,10,15,W,100\n\
2024-01-02,NHL,Oilers,Flames,ML,L,2.0,20,0,L,80\n"
        );

        let bets = parse_csv(&text, DEFAULT_SKIP_ROWS).unwrap();
        assert_eq!(bets.len(), 2);
        assert_eq!(bets[0].league, "NBA");
        assert_eq!(bets[1].league, "NHL");
    }

    #[test]
    fn row_numbers_count_an_empty_first_row() {
        let text = format!(
            "{BLANK_PREAMBLE}\
2024-01-01,NBA,A,B,ML,W,1.5,10,15,W,100\n\
2024-01-02,NBA,A,B,ML,W,1.5,10,x,W,100\n"
        );

        let err = parse_csv(&text, DEFAULT_SKIP_ROWS).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber { row: 4, column: "gain", .. }
        ));
    }

    #[test]
    fn blank_line_in_data_fails_the_load() {
        let text = sheet(&[
            "2024-01-01,NBA,A,B,ML,W,1.5,10,15,W,100",
            "",
            "2024-01-03,NBA,A,B,ML,W,1.5,10,15,W,100",
        ]);

        let err = parse_csv(&text, DEFAULT_SKIP_ROWS).unwrap_err();
        assert!(matches!(err, ParseError::MissingField { row: 4, .. }));
    }

    #[test]
    fn blank_first_data_row_fails_the_load() {
        let text = format!("{BLANK_PREAMBLE}\n2024-01-02,NBA,A,B,ML,W,1.5,10,15,W,100\n");

        let err = parse_csv(&text, DEFAULT_SKIP_ROWS).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingField { row: 3, column: "odds" }
        ));
    }

    #[test]
    fn underscores_group_digits() {
        assert_eq!(parse_decimal(" 1_000.5 "), Some(1000.5));
        assert_eq!(parse_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_decimal("1__000"), None);
        assert_eq!(parse_decimal("_1000"), None);
        assert_eq!(parse_decimal("1000_"), None);
        assert_eq!(parse_decimal(""), None);

        let text = sheet(&["2024-01-01,NBA,A,B,ML,W,1.5,10,15,W,1_250"]);
        let bets = parse_csv(&text, DEFAULT_SKIP_ROWS).unwrap();
        assert_eq!(bets[0].total_at_time, 1250.0);
    }

    #[test]
    fn preamble_only_yields_no_bets() {
        let bets = parse_csv(PREAMBLE, DEFAULT_SKIP_ROWS).unwrap();
        assert!(bets.is_empty());
        assert!(parse_csv("", DEFAULT_SKIP_ROWS).unwrap().is_empty());
        assert!(parse_csv(BLANK_PREAMBLE, DEFAULT_SKIP_ROWS).unwrap().is_empty());
    }
}
