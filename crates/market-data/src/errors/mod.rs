//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching daily price series.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The symbol was empty or contained only whitespace.
    #[error("Invalid symbol: '{0}'")]
    InvalidSymbol(String),

    /// The provider answered but had no daily series for the symbol.
    #[error("No price data available for {symbol}: {detail}")]
    DataUnavailable {
        /// The symbol that was requested
        symbol: String,
        /// Provider diagnostics, if any
        detail: String,
    },

    /// The request did not succeed at the transport level
    /// (connection failure or non-success HTTP status).
    #[error("Transport error from {provider}: {message}")]
    Transport {
        /// The provider that was called
        provider: String,
        /// Description of the failure
        message: String,
    },

    /// The provider rate limited the request (HTTP 429 or a quota notice).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The response body could not be decoded.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider that returned the body
        provider: String,
        /// Decoder error message
        message: String,
    },
}

impl MarketDataError {
    /// Returns true when the failure happened before a usable response arrived.
    ///
    /// Callers can use this to distinguish "the provider does not know this
    /// symbol" from "we could not talk to the provider".
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        let error = MarketDataError::Transport {
            provider: "ALPHA_VANTAGE".to_string(),
            message: "HTTP 500".to_string(),
        };
        assert!(error.is_transport());

        let error = MarketDataError::Timeout {
            provider: "ALPHA_VANTAGE".to_string(),
        };
        assert!(error.is_transport());
    }

    #[test]
    fn test_data_unavailable_is_not_transport() {
        let error = MarketDataError::DataUnavailable {
            symbol: "NOPE".to_string(),
            detail: "missing time series".to_string(),
        };
        assert!(!error.is_transport());
        assert!(!MarketDataError::InvalidSymbol(String::new()).is_transport());
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::InvalidSymbol("  ".to_string());
        assert_eq!(format!("{}", error), "Invalid symbol: '  '");

        let error = MarketDataError::RateLimited {
            provider: "ALPHA_VANTAGE".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate limited: ALPHA_VANTAGE");

        let error = MarketDataError::Transport {
            provider: "ALPHA_VANTAGE".to_string(),
            message: "HTTP 503 Service Unavailable".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Transport error from ALPHA_VANTAGE: HTTP 503 Service Unavailable"
        );

        let error = MarketDataError::DataUnavailable {
            symbol: "XYZ".to_string(),
            detail: "Invalid API call".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "No price data available for XYZ: Invalid API call"
        );
    }
}
