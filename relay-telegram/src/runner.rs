//! Long-polling runner: converts teloxide messages to InboundEvent and hands them to the HandlerChain.
//! Interacts with the teloxide REPL, handler_chain::HandlerChain and get_me for the bot username.

use anyhow::Result;
use handler_chain::HandlerChain;
use relay_core::ToInboundEvent;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Starts long polling with the given teloxide Bot and HandlerChain.
/// Calls get_me() first so commands addressed to other bots are not mistaken for ours.
/// Each message is processed on its own task; a failure is logged and never stops polling.
#[instrument(skip(bot, handler_chain))]
pub async fn run_polling(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let bot_username: Option<String> = match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone();
            if let Some(name) = &username {
                info!(username = %name, "Bot username resolved before polling");
            }
            username
        }
        Err(e) => {
            warn!(error = %e, "get_me failed; commands addressed to any bot will be accepted");
            None
        }
    };
    let bot_username: Arc<Option<String>> = Arc::new(bot_username);

    info!(handlers = handler_chain.len(), "Bot started, polling for updates");

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let bot_username = Arc::clone(&bot_username);

        async move {
            let event = TelegramMessageWrapper(&msg).to_event(bot_username.as_deref());

            tokio::spawn(async move {
                info!(
                    chat_id = event.chat.id,
                    message_id = %event.id,
                    kind = event.kind_name(),
                    "step: processing message (handler chain started)"
                );
                if let Err(e) = chain.handle(&event).await {
                    error!(error = %e, chat_id = event.chat.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
