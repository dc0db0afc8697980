//! Quote provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PriceSeries;

/// Trait for sources of historical daily closes.
///
/// Implement this trait to add support for a new quote source. Providers
/// do not cache; memoization is the caller's concern.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use invtrack_market_data::{MarketDataError, PriceSeries, QuoteProvider};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl QuoteProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_daily_closes(&self, symbol: &str) -> Result<PriceSeries, MarketDataError> {
///         Ok(PriceSeries::new(symbol, self.id()))
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "ALPHA_VANTAGE".
    ///
    /// Used for logging and as the `source` of returned series.
    fn id(&self) -> &'static str;

    /// Fetch the full daily close history for `symbol`.
    ///
    /// # Returns
    ///
    /// A non-empty series containing the most recent trading day, or
    /// `DataUnavailable` when the provider has no series for the symbol.
    async fn fetch_daily_closes(&self, symbol: &str) -> Result<PriceSeries, MarketDataError>;
}
