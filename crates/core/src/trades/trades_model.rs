//! Trade domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{errors::ValidationError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One recorded purchase of `symbol` on `date` for `amount`.
///
/// Trades are created through [`NewTrade::validate`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub symbol: String,
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Input model for recording a trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    pub symbol: String,
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl NewTrade {
    pub fn new(symbol: impl Into<String>, date: NaiveDate, amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            date,
            amount,
        }
    }

    /// Validates the input and produces a normalized trade.
    pub fn validate(self) -> Result<Trade> {
        let symbol = normalize_symbol(&self.symbol)?;
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount(format!(
                "amount must be greater than zero, got {}",
                self.amount
            ))
            .into());
        }
        Ok(Trade {
            symbol,
            date: self.date,
            amount: self.amount,
        })
    }
}

/// Trims and upper-cases a ticker symbol, rejecting blanks.
pub fn normalize_symbol(symbol: &str) -> Result<String> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(
            ValidationError::InvalidInput("Stock symbol cannot be empty".to_string()).into(),
        );
    }
    Ok(trimmed.to_uppercase())
}

/// Parses a `YYYY-MM-DD` trade date.
pub fn parse_trade_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidInputFormat(trimmed.to_string()).into())
}

/// Parses a positive money amount. A leading `$` and `,` separators are accepted.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return Err(ValidationError::InvalidAmount("amount is required".to_string()).into());
    }
    let amount = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| ValidationError::InvalidAmount(format!("'{}' is not a number", input.trim())))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount(format!(
            "amount must be greater than zero, got {}",
            amount
        ))
        .into());
    }
    Ok(amount)
}
