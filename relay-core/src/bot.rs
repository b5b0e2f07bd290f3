//! Bot abstraction for sending replies and downloading attachments.
//!
//! [`Bot`] is transport-agnostic; relay-telegram implements it via teloxide and tests substitute mocks.

use crate::error::Result;
use crate::types::{Chat, OutboundMessage};
use async_trait::async_trait;

/// Abstraction for the chat platform's outbound and file APIs.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_text(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends an in-memory file as a document to the given chat.
    async fn send_document(&self, chat: &Chat, file_name: &str, content: Vec<u8>) -> Result<()>;
    /// Resolves a platform file id and downloads the whole file into memory.
    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>>;

    /// Sends an [`OutboundMessage`] using the matching primitive.
    async fn send(&self, chat: &Chat, message: &OutboundMessage) -> Result<()> {
        match message {
            OutboundMessage::Text(text) => self.send_text(chat, text).await,
            OutboundMessage::Document { file_name, content } => {
                self.send_document(chat, file_name, content.clone()).await
            }
        }
    }
}
