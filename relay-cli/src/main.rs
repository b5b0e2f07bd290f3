//! gemini-relay-bot: relays Telegram messages and files to Gemini. Config from env.

use anyhow::{Context, Result};
use clap::Parser;
use relay_cli::{Cli, RelayConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();

    let config = RelayConfig::from_env()?;
    config.validate()?;

    relay_core::init_tracing(&config.log_file).context("Initialize tracing")?;
    tracing::info!(log_file = %config.log_file, "Starting gemini-relay-bot");

    relay_cli::run(config).await
}
