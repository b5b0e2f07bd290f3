//! Catch-all relay: attachment → completion → dispatch, one reply per event.

use async_trait::async_trait;
use completion_gateway::CompletionGateway;
use relay_core::{Bot, Handler, HandlerResponse, InboundEvent, RelayError, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::attachment::fetch_attachment;
use crate::dispatch::dispatch;

/// Relays any event to the completion gateway and sends the result back to the originating chat.
///
/// Download, completion and send failures are returned as errors; nothing is sent in that case.
pub struct RelayHandler {
    bot: Arc<dyn Bot>,
    gateway: CompletionGateway,
}

impl RelayHandler {
    pub fn new(bot: Arc<dyn Bot>, gateway: CompletionGateway) -> Self {
        Self { bot, gateway }
    }

    /// Completion text for `event`. When the gateway is degraded its notice is returned
    /// without downloading the attachment.
    async fn completion_for(&self, event: &InboundEvent) -> Result<String> {
        if let Some(notice) = self.gateway.unavailable_notice() {
            info!(chat_id = event.chat.id, notice = %notice, "step: gateway unavailable");
            return Ok(notice.to_string());
        }
        let attachment = fetch_attachment(self.bot.as_ref(), event).await?;
        self.gateway
            .complete(event.text.as_deref(), attachment.as_deref())
            .await
            .map_err(|e| RelayError::Completion(format!("{:#}", e)))
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, event), fields(message_id = %event.id, kind = event.kind_name()))]
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let completion = self.completion_for(event).await?;
        info!(
            user_id = event.user.id,
            chat_id = event.chat.id,
            response_len = completion.chars().count(),
            "step: completion received"
        );
        let sent = dispatch(self.bot.as_ref(), &event.chat, completion).await?;
        Ok(HandlerResponse::Reply(sent))
    }
}
