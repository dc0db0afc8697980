//! Investment Tracker Market Data Crate
//!
//! This crate fetches historical daily closing prices for ticker symbols.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |  Valuation code  | --> |  QuoteProvider   | --> |   PriceSeries    |
//! +------------------+     +------------------+     +------------------+
//!                                  |
//!                                  v
//!                       +----------------------+
//!                       | AlphaVantageProvider |  (TIME_SERIES_DAILY)
//!                       +----------------------+
//! ```
//!
//! # Core Types
//!
//! - [`QuoteProvider`] - Async source of daily closes for one symbol
//! - [`PriceSeries`] - Date-ordered closing prices for one symbol
//! - [`AlphaVantageProvider`] - Alpha Vantage implementation
//! - [`MarketDataError`] - Errors raised while fetching or parsing quotes

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::PriceSeries;
pub use provider::alpha_vantage::{AlphaVantageProvider, OutputSize};
pub use provider::QuoteProvider;
