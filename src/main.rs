use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use jobsearch_bot::api::{AdzunaClient, TelegramClient};
use jobsearch_bot::bot::PollDriver;
use jobsearch_bot::core::{logging, Config};
use jobsearch_bot::notify::Notifier;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging first so a bad config is reported through it
    logging::init_logging(&logging::log_level_from(|key| env::var(key).ok()));

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("CRITICAL: {}", e);
            return Err(e).context("startup configuration is incomplete");
        }
    };

    tracing::info!("🚀 Job search bot starting...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Searching \"{}\" in {} ({} results per poll)",
        config.adzuna.keyword,
        config.adzuna.country,
        config.adzuna.results_per_page
    );

    let source = AdzunaClient::new(config.adzuna.clone()).context("failed to build HTTP client")?;
    let channel =
        TelegramClient::new(config.telegram.clone()).context("failed to build messaging client")?;
    let notifier = Notifier::new(Arc::new(channel), config.telegram.chat_id.clone());

    let driver = PollDriver::new(Arc::new(source), notifier, config.polling.interval);
    driver.run().await;

    Ok(())
}
