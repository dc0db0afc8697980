//! Investment Tracker Core - trades, account valuation, comparison and reports.
//!
//! This crate contains the business logic of the tracker. Price data comes
//! from any [`invtrack_market_data::QuoteProvider`]; nothing here talks to
//! the network directly.

pub mod accounts;
pub mod errors;
pub mod portfolio;
pub mod reports;
pub mod trades;

pub use accounts::InvestmentAccount;
pub use portfolio::*;
pub use trades::{NewTrade, Trade};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
