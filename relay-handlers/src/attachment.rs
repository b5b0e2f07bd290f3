//! Attachment fetcher: picks the attachment reference of an event and downloads its bytes.

use relay_core::{Bot, EventKind, InboundEvent, Result};
use tracing::{info, instrument};

/// File id to download for `event`: the document, or the last (largest) photo variant.
pub fn select_attachment(event: &InboundEvent) -> Option<&str> {
    match &event.kind {
        EventKind::Document { file_id, .. } => Some(file_id.as_str()),
        EventKind::Photo { variants } => variants.last().map(|v| v.file_id.as_str()),
        EventKind::Command(_) | EventKind::Text | EventKind::Other => None,
    }
}

/// Downloads the event's attachment into memory. `Ok(None)` when the event has none.
#[instrument(skip(bot, event), fields(message_id = %event.id))]
pub async fn fetch_attachment(bot: &dyn Bot, event: &InboundEvent) -> Result<Option<Vec<u8>>> {
    let Some(file_id) = select_attachment(event) else {
        return Ok(None);
    };
    let bytes = bot.download_file(file_id).await?;
    info!(
        chat_id = event.chat.id,
        file_id = %file_id,
        size = bytes.len(),
        "step: attachment downloaded"
    );
    Ok(Some(bytes))
}
