use std::{path::PathBuf, time::Duration};

use invtrack_market_data::OutputSize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Alpha Vantage key; prompted for when unset
    pub api_key: Option<String>,
    pub report_dir: PathBuf,
    pub request_timeout: Duration,
    pub output_size: OutputSize,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("ALPHA_VANTAGE_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let report_dir = lookup("INVTRACK_REPORT_DIR")
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| ".".into());
        let timeout_ms: u64 = lookup("INVTRACK_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".into())
            .parse()
            .unwrap_or(30000);
        let output_size = lookup("INVTRACK_OUTPUT_SIZE")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let log_format = match lookup("INVTRACK_LOG_FORMAT") {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Self {
            api_key,
            report_dir: PathBuf::from(report_dir),
            request_timeout: Duration::from_millis(timeout_ms),
            output_size,
            log_format,
        }
    }
}
