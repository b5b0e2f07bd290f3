//! Response dispatcher: inline text for short completions, a `response.tex` document otherwise.

use relay_core::{Bot, Chat, OutboundMessage, Result};
use tracing::info;

/// Longest completion, in characters, that is sent inline.
pub const MAX_INLINE_CHARS: usize = 4000;

/// File name used when a completion is sent as a document.
pub const RESPONSE_FILE_NAME: &str = "response.tex";

/// Chooses the outbound shape. Length is counted in characters, not bytes.
pub fn to_outbound(message: String) -> OutboundMessage {
    if message.chars().count() > MAX_INLINE_CHARS {
        OutboundMessage::Document {
            file_name: RESPONSE_FILE_NAME.to_string(),
            content: message.into_bytes(),
        }
    } else {
        OutboundMessage::Text(message)
    }
}

/// Sends `message` to `chat` and returns what was sent.
pub async fn dispatch(bot: &dyn Bot, chat: &Chat, message: String) -> Result<OutboundMessage> {
    let outbound = to_outbound(message);
    bot.send(chat, &outbound).await?;
    info!(
        chat_id = chat.id,
        kind = outbound.kind_name(),
        "step: response sent"
    );
    Ok(outbound)
}
