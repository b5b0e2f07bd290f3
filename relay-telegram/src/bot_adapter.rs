//! Wraps teloxide::Bot and implements [`relay_core::Bot`]. Production code talks to Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use relay_core::{Bot as CoreBot, Chat, RelayError, Result};
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId, InputFile};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements relay-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_text(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, file_name: &str, content: Vec<u8>) -> Result<()> {
        let input = InputFile::memory(content).file_name(file_name.to_string());
        self.bot
            .send_document(ChatId(chat.id), input)
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(|e| RelayError::Download(format!("get_file failed: {}", e)))?;
        debug!(file_id = %file_id, path = %file.path, size = file.size, "Telegram file resolved");

        let mut buf: Vec<u8> = Vec::new();
        self.bot
            .download_file(&file.path, &mut buf)
            .await
            .map_err(|e| RelayError::Download(format!("download_file failed: {}", e)))?;
        Ok(buf)
    }
}
