//! Wires config, gateway, Telegram adapter and handlers together and starts polling.

use anyhow::{Context, Result};
use completion_gateway::CompletionGateway;
use handler_chain::HandlerChain;
use relay_core::Bot;
use relay_handlers::{LoggingHandler, RelayHandler, StartCommandHandler};
use relay_telegram::{run_polling, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};

/// Handler order: logging, start/help command, relay to the completion gateway.
pub fn build_handler_chain(bot: Arc<dyn Bot>, gateway: CompletionGateway) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartCommandHandler::new(bot.clone())))
        .add_handler(Arc::new(RelayHandler::new(bot, gateway)))
}

/// Runs the bot until polling stops. Expects tracing to be initialized.
#[instrument(skip(config))]
pub async fn run(config: crate::RelayConfig) -> Result<()> {
    info!("step: building completion gateway");
    let gateway = CompletionGateway::from_config(&config.gemini);
    info!(ready = gateway.is_ready(), "step: completion gateway built");

    let teloxide_bot = config
        .telegram
        .build_bot()
        .context("Build Telegram bot")?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let chain = build_handler_chain(bot, gateway);
    info!(handlers = chain.len(), "step: handler chain assembled");

    run_polling(teloxide_bot, chain).await
}
