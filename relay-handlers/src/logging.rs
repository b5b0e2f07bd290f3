//! Logs each inbound event in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, InboundEvent, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &InboundEvent) -> Result<bool> {
        info!(
            user_id = event.user.id,
            username = %event.user.username.as_deref().unwrap_or("unknown"),
            chat_id = event.chat.id,
            kind = event.kind_name(),
            message_content = %event.text.as_deref().unwrap_or(""),
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &InboundEvent, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(sent) => info!(
                message_id = %event.id,
                reply_kind = sent.kind_name(),
                "Processed message"
            ),
            other => debug!(message_id = %event.id, response = ?other, "Processed message without reply"),
        }
        Ok(())
    }
}
