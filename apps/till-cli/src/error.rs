//! # Application Errors
//!
//! Everything that can stop a till run. Each layer keeps its own typed
//! error; `AppError` wraps them for `main`.
//!
//! ```text
//! ConfigError ──┐
//! ParseError  ──┼──► AppError ──► "Error: ..." on stderr, exit 1
//! CoreError   ──┤
//! io::Error   ──┘
//! ```

use thiserror::Error;
use till_core::{CoreError, ValidationError};

/// Result type alias for till-cli operations.
pub type AppResult<T> = Result<T, AppError>;

/// Top-level error for a till run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Float could not be turned into a till (bad or repeated denomination).
    #[error("Could not open till: {0}")]
    Core(#[from] CoreError),

    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode config: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Invalid till float: {0}")]
    InvalidFloat(#[from] ValidationError),
}

/// Transaction log and float entry parse failures.
///
/// Line numbers are 1-based and count blank lines.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: missing ',' between items and tender")]
    MissingTender { line: usize },

    #[error("line {line}: more than one ',' on the line")]
    TooManyFields { line: usize },

    #[error("line {line}: item '{item}' has no ' {symbol}<amount>' price")]
    MissingPrice {
        line: usize,
        item: String,
        symbol: String,
    },

    #[error("line {line}: tender '{value}' must start with '{symbol}'")]
    MissingSymbol {
        line: usize,
        value: String,
        symbol: String,
    },

    #[error("line {line}: '{value}' is not a whole number")]
    InvalidAmount { line: usize, value: String },

    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: ValidationError,
    },

    #[error("invalid float entry '{0}': expected '<count> x <symbol><denomination>'")]
    InvalidFloatEntry(String),
}
