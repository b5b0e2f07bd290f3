//! `/start` and `/help`: fixed greeting.

use async_trait::async_trait;
use relay_core::{Bot, EventKind, Handler, HandlerResponse, InboundEvent, OutboundMessage, Result};
use std::sync::Arc;
use tracing::{info, instrument};

/// Greeting sent for the start and help commands.
pub const GREETING: &str = "Hi! Send me text or a file and I'll process it with Gemini.";

/// Replies to start/help commands with [`GREETING`]; every other event continues down the chain.
pub struct StartCommandHandler {
    bot: Arc<dyn Bot>,
}

impl StartCommandHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartCommandHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let EventKind::Command(command) = &event.kind else {
            return Ok(HandlerResponse::Continue);
        };
        info!(user_id = event.user.id, command = ?command, "Start command");
        let reply = OutboundMessage::Text(GREETING.to_string());
        self.bot.send(&event.chat, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
