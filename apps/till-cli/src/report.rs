//! # Summary Report
//!
//! Renders transaction summaries for the terminal.
//!
//! ```text
//! Transaction Summary:
//! Till Start, Transaction Total, Paid, Change Total, Change Breakdown
//! R500, R47, R50, R3, R2-R1
//! R547, R10, R10, R0, No Change
//! Remaining Till Balance: R557
//! ```

use serde::Serialize;
use till_core::{ChangeBreakdown, FloatEntry, Money, TillState, TransactionSummary};

pub const TITLE: &str = "Transaction Summary:";
pub const COLUMNS: &str = "Till Start, Transaction Total, Paid, Change Total, Change Breakdown";
pub const NO_CHANGE: &str = "No Change";

/// Formats amounts with a currency symbol.
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    symbol: String,
}

impl ReportFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        ReportFormatter {
            symbol: symbol.into(),
        }
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with(&self.symbol)
    }

    /// `R2-R1`, or `No Change` for every no-change outcome.
    pub fn breakdown(&self, breakdown: &ChangeBreakdown) -> String {
        match breakdown {
            ChangeBreakdown::Dispensed(coins) => coins
                .iter()
                .map(|d| self.money(d.as_money()))
                .collect::<Vec<_>>()
                .join("-"),
            ChangeBreakdown::NoChange(_) => NO_CHANGE.to_string(),
        }
    }

    /// One summary line.
    pub fn line(&self, summary: &TransactionSummary) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.money(summary.till_start),
            self.money(summary.transaction_total),
            self.money(summary.total_paid),
            self.money(summary.change_owed),
            self.breakdown(&summary.breakdown)
        )
    }

    /// Closing line.
    pub fn footer(&self, closing: &TillState) -> String {
        format!("Remaining Till Balance: {}", self.money(closing.cash_total))
    }

    /// The full text report, newline-terminated.
    pub fn render_text(&self, summaries: &[TransactionSummary], closing: &TillState) -> String {
        let mut out = String::new();
        out.push_str(TITLE);
        out.push('\n');
        out.push_str(COLUMNS);
        out.push('\n');
        for summary in summaries {
            out.push_str(&self.line(summary));
            out.push('\n');
        }
        out.push_str(&self.footer(closing));
        out.push('\n');
        out
    }
}

/// Machine-readable report for `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub summaries: &'a [TransactionSummary],
    pub closing_balance: Money,
    pub closing_float: Vec<FloatEntry>,
}

impl<'a> JsonReport<'a> {
    pub fn new(summaries: &'a [TransactionSummary], closing: &TillState) -> Self {
        JsonReport {
            summaries,
            closing_balance: closing.cash_total,
            closing_float: closing.inventory.to_float(),
        }
    }

    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
