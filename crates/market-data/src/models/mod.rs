//! Market data models
//!
//! - `price_series` - Daily closing prices for one symbol (PriceSeries)

mod price_series;

pub use price_series::PriceSeries;
