mod config;
mod main_lib;
mod prompt;
mod session;

use config::Config;
use main_lib::{init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(config.log_format);
    tracing::debug!("Reports will be written to {}", config.report_dir.display());
    run(config).await
}
