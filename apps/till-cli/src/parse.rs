//! # Transaction Log Parser
//!
//! Turns the plain-text transaction log into `Transaction` records.
//!
//! ## Line Format
//! ```text
//! Bread R12;Milk R35,R50-R20
//! └───┬───┘ └──┬───┘ └──┬──┘
//!   item      item    tender (summed)
//!
//! items   ─ separated by ';', price after the last " R"
//! ','     ─ separates items from tender (exactly one)
//! tender  ─ separated by '-', each starting with the currency symbol
//! ```
//!
//! Blank lines are skipped. Every parsed transaction is checked with
//! `till_core::validation::validate_transaction`.

use till_core::validation::{validate_denomination, validate_float_count, validate_transaction};
use till_core::{FloatEntry, Item, Money, Transaction};

use crate::error::ParseError;

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parser for one till's transaction log.
#[derive(Debug, Clone)]
pub struct TransactionParser {
    symbol: String,
}

impl TransactionParser {
    /// Creates a parser for amounts written as `<symbol><amount>`.
    pub fn new(symbol: impl Into<String>) -> Self {
        TransactionParser {
            symbol: symbol.into(),
        }
    }

    /// Parses a whole log. Stops at the first bad line.
    pub fn parse_log(&self, input: &str) -> ParseResult<Vec<Transaction>> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| self.parse_line(idx + 1, line))
            .collect()
    }

    /// Parses one non-blank line.
    pub fn parse_line(&self, line: usize, text: &str) -> ParseResult<Transaction> {
        let (items_part, tender_part) = text
            .split_once(',')
            .ok_or(ParseError::MissingTender { line })?;
        if tender_part.contains(',') {
            return Err(ParseError::TooManyFields { line });
        }

        let items = items_part
            .split(';')
            .map(|item| self.parse_item(line, item))
            .collect::<ParseResult<Vec<_>>>()?;

        let paid = tender_part
            .split('-')
            .map(|value| self.parse_tender(line, value))
            .collect::<ParseResult<Vec<_>>>()?;

        let transaction = Transaction::new(items, paid);
        validate_transaction(&transaction).map_err(|source| ParseError::Invalid { line, source })?;
        Ok(transaction)
    }

    fn parse_item(&self, line: usize, text: &str) -> ParseResult<Item> {
        let text = text.trim();
        let marker = format!(" {}", self.symbol);
        let (description, amount) =
            text.rsplit_once(marker.as_str())
                .ok_or_else(|| ParseError::MissingPrice {
                    line,
                    item: text.to_string(),
                    symbol: self.symbol.clone(),
                })?;

        Ok(Item::new(description.trim(), parse_amount(line, amount)?))
    }

    fn parse_tender(&self, line: usize, text: &str) -> ParseResult<Money> {
        let text = text.trim();
        let amount = text
            .strip_prefix(self.symbol.as_str())
            .ok_or_else(|| ParseError::MissingSymbol {
                line,
                value: text.to_string(),
                symbol: self.symbol.clone(),
            })?;
        parse_amount(line, amount)
    }

    /// Parses a float entry such as `5 x R50`.
    ///
    /// ## Example
    /// ```rust
    /// use till_cli::parse::TransactionParser;
    /// use till_core::FloatEntry;
    ///
    /// let parser = TransactionParser::new("R");
    /// assert_eq!(parser.parse_float_entry("12 x R5").unwrap(), FloatEntry::new(12, 5));
    /// ```
    pub fn parse_float_entry(&self, text: &str) -> ParseResult<FloatEntry> {
        let invalid = || ParseError::InvalidFloatEntry(text.to_string());

        let (count, denomination) = text.split_once(" x ").ok_or_else(invalid)?;
        let count: i64 = count.trim().parse().map_err(|_| invalid())?;
        let denomination: i64 = denomination
            .trim()
            .strip_prefix(self.symbol.as_str())
            .ok_or_else(invalid)?
            .trim()
            .parse()
            .map_err(|_| invalid())?;

        validate_float_count(count).map_err(|_| invalid())?;
        validate_denomination(denomination).map_err(|_| invalid())?;

        let count = u32::try_from(count).map_err(|_| invalid())?;
        let denomination = u32::try_from(denomination).map_err(|_| invalid())?;
        Ok(FloatEntry::new(count, denomination))
    }
}

fn parse_amount(line: usize, text: &str) -> ParseResult<Money> {
    let text = text.trim();
    text.parse::<i64>()
        .map(Money::from_units)
        .map_err(|_| ParseError::InvalidAmount {
            line,
            value: text.to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::ValidationError;

    fn parser() -> TransactionParser {
        TransactionParser::new("R")
    }

    #[test]
    fn test_parse_single_line() {
        let tx = parser().parse_line(1, "Bread R12;Milk R35,R50-R20").unwrap();

        assert_eq!(tx.items.len(), 2);
        assert_eq!(tx.items[0].description, "Bread");
        assert_eq!(tx.items[1].amount, Money::from_units(35));
        assert_eq!(tx.paid, vec![Money::from_units(50), Money::from_units(20)]);
    }

    #[test]
    fn test_parse_tolerates_spaces() {
        let tx = parser()
            .parse_line(1, "  Rye Bread R12 ; Full Cream Milk R35 , R50 - R20 ")
            .unwrap();

        assert_eq!(tx.items[0].description, "Rye Bread");
        assert_eq!(tx.items[1].description, "Full Cream Milk");
        assert_eq!(tx.total_paid().units(), 70);
    }

    #[test]
    fn test_description_may_contain_symbol() {
        // Price is taken from the last " R"
        let tx = parser().parse_line(1, "Red Rooibos R Tea R15,R20").unwrap();
        assert_eq!(tx.items[0].description, "Red Rooibos R Tea");
        assert_eq!(tx.items[0].amount.units(), 15);
    }

    #[test]
    fn test_parse_log_skips_blank_lines_and_counts_them() {
        let log = "Bread R12,R20\n\n   \nMilk R35,R50\n";
        let txs = parser().parse_log(log).unwrap();
        assert_eq!(txs.len(), 2);

        let err = parser().parse_log("Bread R12,R20\n\nMilk R35").unwrap_err();
        assert!(matches!(err, ParseError::MissingTender { line: 3 }));
    }

    #[test]
    fn test_missing_price() {
        let err = parser().parse_line(4, "Bread,R20").unwrap_err();
        assert!(matches!(err, ParseError::MissingPrice { line: 4, .. }));
    }

    #[test]
    fn test_tender_without_symbol() {
        let err = parser().parse_line(1, "Bread R12,20").unwrap_err();
        assert!(matches!(err, ParseError::MissingSymbol { .. }));
    }

    #[test]
    fn test_non_numeric_amount() {
        let err = parser().parse_line(1, "Bread Rtwelve,R20").unwrap_err();
        assert!(matches!(err, ParseError::InvalidAmount { value, .. } if value == "twelve"));
    }

    #[test]
    fn test_too_many_fields() {
        let err = parser().parse_line(1, "Bread R12,R20,R10").unwrap_err();
        assert!(matches!(err, ParseError::TooManyFields { line: 1 }));
    }

    #[test]
    fn test_zero_price_fails_validation() {
        let err = parser().parse_line(2, "Bag R0,R20").unwrap_err();
        assert!(matches!(err, ParseError::Invalid { line: 2, .. }));
    }

    #[test]
    fn test_amounts_that_would_overflow_are_rejected() {
        let err = parser()
            .parse_log("Gold R9223372036854775807;Gum R1,R9223372036854775807\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::Invalid {
                line: 1,
                source: ValidationError::OutOfRange { .. }
            }
        ));
    }

    #[test]
    fn test_other_currency_symbol() {
        let tx = TransactionParser::new("$").parse_line(1, "Soda $3,$5").unwrap();
        assert_eq!(tx.change_owed().units(), 2);
    }

    #[test]
    fn test_parse_float_entry() {
        let p = parser();
        assert_eq!(p.parse_float_entry("5 x R50").unwrap(), FloatEntry::new(5, 50));
        assert_eq!(p.parse_float_entry(" 0 x R1 ").unwrap(), FloatEntry::new(0, 1));
        assert!(p.parse_float_entry("5 R50").is_err());
        assert!(p.parse_float_entry("5 x 50").is_err());
        assert!(p.parse_float_entry("-1 x R50").is_err());
        assert!(p.parse_float_entry("5 x R0").is_err());
    }
}
