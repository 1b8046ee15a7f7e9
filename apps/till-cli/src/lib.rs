//! # till-cli
//!
//! Runs a till over a transaction log.
//!
//! ## Module Organization
//! ```text
//! till_cli/
//! ├── lib.rs      ◄─── You are here (run + tracing setup)
//! ├── cli.rs      ◄─── clap arguments
//! ├── config.rs   ◄─── TillConfig: defaults, TOML, TILL_* env
//! ├── parse.rs    ◄─── Transaction log / float entry parser
//! ├── report.rs   ◄─── Text and JSON rendering
//! └── error.rs    ◄─── AppError, ConfigError, ParseError
//! ```
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Load config ──── defaults < file < env < flags                     │
//! │  2. Open till ────── TillState::initialize(float)                      │
//! │  3. Parse log ────── TransactionParser::parse_log                      │
//! │  4. Fold ─────────── till_core::process_all                            │
//! │  5. Report ───────── text (default) or JSON (--json) to stdout         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod parse;
pub mod report;

use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use till_core::{process_all, TillState};

use crate::cli::Cli;
use crate::config::TillConfig;
use crate::error::{AppError, AppResult, ConfigError};
use crate::parse::TransactionParser;
use crate::report::{JsonReport, ReportFormatter};

/// Resolves the effective configuration for a run.
///
/// Command-line flags win over everything `TillConfig::load` produced.
pub fn resolve_config(cli: &Cli) -> AppResult<TillConfig> {
    let mut config = TillConfig::load(cli.config.as_deref())?;

    if let Some(symbol) = &cli.currency {
        config.currency_symbol = symbol.clone();
    }
    if let Some(input) = &cli.input {
        config.input = input.clone();
    }
    if !cli.float.is_empty() {
        config.float = config
            .parse_float_list(cli.float.iter().map(String::as_str))
            .map_err(|e| ConfigError::InvalidValue {
                key: "--float".to_string(),
                reason: e.to_string(),
            })?;
    }

    config.validate()?;
    Ok(config)
}

/// Processes the configured transaction log and writes the report to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> AppResult<()> {
    let config = resolve_config(cli)?;

    let opening = TillState::initialize(&config.float)?;
    info!(
        cash_total = opening.cash_total.units(),
        symbol = %config.currency_symbol,
        "Till opened"
    );

    let contents =
        std::fs::read_to_string(&config.input).map_err(|source| AppError::ReadInput {
            path: config.input.display().to_string(),
            source,
        })?;
    let transactions = TransactionParser::new(config.currency_symbol.clone()).parse_log(&contents)?;
    info!(count = transactions.len(), input = ?config.input, "Transactions loaded");

    let (closing, summaries) = process_all(&transactions, opening);
    info!(closing_balance = closing.cash_total.units(), "Till closed");

    if cli.json {
        writeln!(out, "{}", JsonReport::new(&summaries, &closing).render()?)?;
    } else {
        let formatter = ReportFormatter::new(config.currency_symbol);
        write!(out, "{}", formatter.render_text(&summaries, &closing))?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every change decision
/// - `RUST_LOG=till_core=trace` - Core crate only
/// - Default: INFO, DEBUG for till crates
///
/// Logs go to stderr so stdout carries only the report.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,till_cli=debug,till_core=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
