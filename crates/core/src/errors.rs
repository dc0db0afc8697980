//! Core error types for the investment tracker.

use chrono::NaiveDate;
use invtrack_market_data::MarketDataError;
use std::path::PathBuf;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the tracker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Valuation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Error saving to file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while valuating positions and accounts.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("No stock data found for symbol {0}")]
    NoPriceData(String),

    #[error("No stock price data for {symbol} on {date}")]
    NoPriceOnDate { symbol: String, date: NaiveDate },

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Amount out of range: {0}")]
    Overflow(String),
}

/// Validation errors for user input and trade data.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Incorrect date format '{0}', expected YYYY-MM-DD")]
    InvalidInputFormat(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Trade on {date} for {symbol} is after the latest available close ({latest})")]
    TradeAfterLatestClose {
        symbol: String,
        date: NaiveDate,
        latest: NaiveDate,
    },
}

impl Error {
    /// True when the error is a missing close on a trade date.
    pub fn is_missing_price(&self) -> bool {
        matches!(
            self,
            Error::Calculation(CalculatorError::NoPriceOnDate { .. })
        )
    }
}
