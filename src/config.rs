//! Configuration Module
//! Optional `betboard.toml` settings and tracing setup.

use crate::data::{DEFAULT_SKIP_ROWS, DEFAULT_SOURCE_URL};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "betboard.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Install the global tracing subscriber. `RUST_LOG` wins over `level`.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

/// Application settings. Every field has a default, so the file is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source_url: String,
    pub skip_rows: usize,
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            skip_rows: DEFAULT_SKIP_ROWS,
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Read settings from `path`, falling back to defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path().join(SETTINGS_FILE)).unwrap();

        assert_eq!(settings.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(settings.skip_rows, 2);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "source_url = \"http://localhost:8000/bets.csv\"").unwrap();
        writeln!(file, "[logging]").unwrap();
        writeln!(file, "format = \"json\"").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.source_url, "http://localhost:8000/bets.csv");
        assert_eq!(settings.skip_rows, DEFAULT_SKIP_ROWS);
        assert_eq!(settings.logging.format, "json");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn bad_toml_is_an_error() {
        let err = Settings::parse("skip_rows = \"two\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
