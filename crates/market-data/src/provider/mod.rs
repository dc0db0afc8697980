//! Quote provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` trait that all providers implement
//! - The Alpha Vantage implementation

mod traits;

pub mod alpha_vantage;

pub use traits::QuoteProvider;
