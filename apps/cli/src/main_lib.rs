use std::io;

use invtrack_core::reports::ReportWriter;
use invtrack_market_data::AlphaVantageProvider;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};
use crate::prompt::Prompter;
use crate::session::{self, API_KEY_PROMPT};

/// Logs go to stderr so they never interleave with the prompts on stdout.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(io::stderr),
            )
            .init(),
    }
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    prompter.say("\nWelcome to the Investment Tracker!")?;
    prompter.say("\nStep 1: Input your investment data.\n")?;

    let api_key = match config.api_key {
        Some(key) => key,
        None => prompter.ask(API_KEY_PROMPT)?,
    };
    let provider =
        AlphaVantageProvider::with_options(api_key, config.request_timeout, config.output_size);
    tracing::info!(
        "Using Alpha Vantage with outputsize={} and a {:?} timeout",
        config.output_size,
        config.request_timeout
    );

    let accounts = session::collect_accounts(&mut prompter, &provider).await?;
    tracing::info!("Collected {} account(s)", accounts.len());

    let writer = ReportWriter::new(&config.report_dir);
    session::present(&mut prompter, &accounts, &writer)?;
    Ok(())
}
