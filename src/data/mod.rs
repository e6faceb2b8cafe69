//! Data module - bet records and sheet loading

mod loader;
mod record;

pub use loader::{
    parse_csv, DataLoader, LoadError, ParseError, RetrievalError, DEFAULT_SKIP_ROWS,
    DEFAULT_SOURCE_URL,
};
pub use record::{Bet, Outcome, COLUMN_COUNT, COLUMN_NAMES, WIN_MARKER};
