//! Alpha Vantage quote provider implementation.
//!
//! Daily closes come from the TIME_SERIES_DAILY endpoint.
//!
//! Note: Alpha Vantage free tier is limited to 5 API calls per minute and
//! `outputsize=full` may require a premium key; `compact` returns the last
//! 100 trading days only.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::PriceSeries;
use crate::provider::QuoteProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Amount of history requested from TIME_SERIES_DAILY.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputSize {
    /// Latest 100 data points
    Compact,
    /// Full 20+ year history
    #[default]
    Full,
}

impl OutputSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown output size '{}'", other)),
        }
    }
}

/// Alpha Vantage quote provider.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    output_size: OutputSize,
    base_url: String,
}

// ============================================================================
// Response structures for Alpha Vantage API
// ============================================================================

/// TIME_SERIES_DAILY response for equities
#[derive(Debug, Deserialize)]
struct TimeSeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    time_series: Option<HashMap<String, DailyQuote>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

/// Only the close is used; open/high/low/volume are ignored.
#[derive(Debug, Deserialize)]
struct DailyQuote {
    #[serde(rename = "4. close")]
    close: String,
}

// ============================================================================
// AlphaVantageProvider implementation
// ============================================================================

impl AlphaVantageProvider {
    /// Create a new Alpha Vantage provider with the given API key,
    /// a 30 second request timeout and full output size.
    pub fn new(api_key: String) -> Self {
        Self::with_options(api_key, DEFAULT_TIMEOUT, OutputSize::default())
    }

    /// Create a provider with an explicit request timeout and output size.
    pub fn with_options(api_key: String, timeout: Duration, output_size: OutputSize) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            output_size,
            base_url: BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn output_size(&self) -> OutputSize {
        self.output_size
    }

    /// Make a request to the Alpha Vantage API.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.api_key));

        let url = reqwest::Url::parse_with_params(&self.base_url, &all_params).map_err(|e| {
            MarketDataError::Transport {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build URL: {}", e),
            }
        })?;

        debug!("Alpha Vantage request: {}", self.mask_key(url.as_str()));

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Transport {
                    provider: PROVIDER_ID.to_string(),
                    message: self.mask_key(&e.to_string()),
                }
            }
        })?;

        if let Some(error) = Self::status_error(response.status()) {
            return Err(error);
        }

        response.text().await.map_err(|e| MarketDataError::Transport {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })
    }

    /// Maps a non-success HTTP status to an error.
    fn status_error(status: reqwest::StatusCode) -> Option<MarketDataError> {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Some(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            return Some(MarketDataError::Transport {
                provider: PROVIDER_ID.to_string(),
                message: format!("API request failed with status code {}", status.as_u16()),
            });
        }
        None
    }

    fn mask_key(&self, text: &str) -> String {
        if self.api_key.is_empty() {
            text.to_string()
        } else {
            text.replace(&self.api_key, "***")
        }
    }

    /// Check for API-level errors in the response.
    ///
    /// Quota notices map to `RateLimited`; other messages are only logged,
    /// the absence of a time series decides whether data is available.
    fn check_api_error(
        note: &Option<String>,
        information: &Option<String>,
    ) -> Result<(), MarketDataError> {
        for msg in [note, information].into_iter().flatten() {
            if msg.contains("API call frequency")
                || msg.contains("rate limit")
                || msg.contains("requests per day")
            {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            warn!("Alpha Vantage notice: {}", msg);
        }
        Ok(())
    }

    /// Parse a date string in YYYY-MM-DD format.
    fn parse_date(date_str: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
    }

    /// Parse a decimal value from a string.
    fn parse_decimal(s: &str) -> Option<Decimal> {
        Decimal::from_str(s.trim()).ok()
    }

    /// Decode a TIME_SERIES_DAILY body into a price series.
    fn parse_time_series(symbol: &str, body: &str) -> Result<PriceSeries, MarketDataError> {
        let response: TimeSeriesResponse =
            serde_json::from_str(body).map_err(|e| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse response: {}", e),
            })?;

        Self::check_api_error(&response.note, &response.information)?;

        let time_series = response.time_series.ok_or_else(|| {
            let detail = response
                .error_message
                .clone()
                .or_else(|| response.information.clone())
                .or_else(|| response.note.clone())
                .unwrap_or_else(|| "response has no daily time series".to_string());
            MarketDataError::DataUnavailable {
                symbol: symbol.to_string(),
                detail,
            }
        })?;

        let mut series = PriceSeries::new(symbol, PROVIDER_ID);
        for (date_str, daily) in time_series {
            let date = Self::parse_date(&date_str).ok_or_else(|| {
                MarketDataError::MalformedResponse {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Invalid date '{}' for {}", date_str, symbol),
                }
            })?;
            let close = Self::parse_decimal(&daily.close).ok_or_else(|| {
                MarketDataError::MalformedResponse {
                    provider: PROVIDER_ID.to_string(),
                    message: format!(
                        "Invalid close '{}' for {} on {}",
                        daily.close, symbol, date_str
                    ),
                }
            })?;
            series.insert(date, close);
        }

        if series.is_empty() {
            return Err(MarketDataError::DataUnavailable {
                symbol: symbol.to_string(),
                detail: "daily time series is empty".to_string(),
            });
        }

        Ok(series)
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_daily_closes(&self, symbol: &str) -> Result<PriceSeries, MarketDataError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(MarketDataError::InvalidSymbol(symbol.to_string()));
        }

        let params = [
            ("function", "TIME_SERIES_DAILY"),
            ("symbol", symbol),
            ("outputsize", self.output_size.as_str()),
        ];

        let text = self.fetch(&params).await?;
        let series = Self::parse_time_series(symbol, &text)?;

        debug!(
            "Alpha Vantage: fetched {} daily closes for {} (latest {:?})",
            series.len(),
            symbol,
            series.latest_date()
        );

        Ok(series)
    }
}
