//! # Till Configuration
//!
//! Opening float, currency symbol and input path.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --float "5 x R50" --currency R --input day.txt                     │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TILL_INPUT=day.txt                                                 │
//! │     TILL_CURRENCY_SYMBOL=R                                             │
//! │     TILL_FLOAT="5 x R50,10 x R1"                                       │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or ~/.config/till/till.toml (Linux)               │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     R500 float, symbol "R", input.txt                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! input = "input.txt"
//! currency_symbol = "R"
//!
//! [[float]]
//! count = 5
//! denomination = 50
//!
//! [[float]]
//! count = 10
//! denomination = 1
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use till_core::validation::validate_float;
use till_core::{FloatEntry, DEFAULT_CURRENCY_SYMBOL, DEFAULT_FLOAT};

use crate::error::ConfigError;
use crate::parse::TransactionParser;

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

fn default_input() -> PathBuf {
    PathBuf::from("input.txt")
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_float() -> Vec<FloatEntry> {
    DEFAULT_FLOAT.to_vec()
}

/// Till run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TillConfig {
    /// Transaction log to process.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Prefix on every amount in the log and the report.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Opening float.
    #[serde(default = "default_float")]
    pub float: Vec<FloatEntry>,
}

impl Default for TillConfig {
    fn default() -> Self {
        TillConfig {
            input: default_input(),
            currency_symbol: default_currency_symbol(),
            float: default_float(),
        }
    }
}

impl TillConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path must exist; default path is optional)
    /// 3. Environment variables
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and decodes a TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading till config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `TILL_*` overrides using `lookup` to read variables.
    ///
    /// Takes a lookup function so tests don't have to touch the process
    /// environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup("TILL_INPUT") {
            debug!(input = %input, "Overriding input path from environment");
            self.input = PathBuf::from(input);
        }

        if let Some(symbol) = lookup("TILL_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(float) = lookup("TILL_FLOAT") {
            self.float = self
                .parse_float_list(float.split(','))
                .map_err(|e| ConfigError::InvalidValue {
                    key: "TILL_FLOAT".to_string(),
                    reason: e.to_string(),
                })?;
        }

        Ok(())
    }

    /// Parses `"<count> x <symbol><denomination>"` entries with this
    /// config's currency symbol.
    pub fn parse_float_list<'a, I>(&self, entries: I) -> Result<Vec<FloatEntry>, crate::error::ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let parser = TransactionParser::new(self.currency_symbol.clone());
        entries
            .into_iter()
            .map(|entry| parser.parse_float_entry(entry))
            .collect()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "currency_symbol".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if let Some(c) = self
            .currency_symbol
            .chars()
            .find(|&c| matches!(c, ',' | ';' | '-') || c.is_whitespace())
        {
            return Err(ConfigError::InvalidValue {
                key: "currency_symbol".to_string(),
                reason: format!("must not contain '{c}'"),
            });
        }
        validate_float(&self.float)?;
        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "till", "till")
            .map(|dirs| dirs.config_dir().join("till.toml"))
    }
}
