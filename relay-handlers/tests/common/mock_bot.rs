//! Mock implementation of [`relay_core::Bot`] for handler tests.
//!
//! Serves downloads from an in-memory map and records every outbound send so tests can
//! assert on what the user would have received without hitting Telegram.

use async_trait::async_trait;
use relay_core::{Bot, Chat, RelayError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentRecord {
    Text {
        chat_id: i64,
        text: String,
    },
    Document {
        chat_id: i64,
        file_name: String,
        content: Vec<u8>,
    },
}

/// Mock Bot with a file store; outbound sends go to `sent_tx`.
pub struct MockBot {
    files: Mutex<HashMap<String, Vec<u8>>>,
    downloaded: Mutex<Vec<String>>,
    download_count: AtomicUsize,
    sent_tx: mpsc::UnboundedSender<SentRecord>,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for sent records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SentRecord>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        let bot = Arc::new(Self {
            files: Mutex::new(HashMap::new()),
            downloaded: Mutex::new(Vec::new()),
            download_count: AtomicUsize::new(0),
            sent_tx,
        });
        (bot, sent_rx)
    }

    /// Makes `file_id` downloadable with the given content.
    pub fn add_file(&self, file_id: &str, content: Vec<u8>) {
        self.files
            .lock()
            .unwrap()
            .insert(file_id.to_string(), content);
    }

    pub fn download_count(&self) -> usize {
        self.download_count.load(Ordering::SeqCst)
    }

    pub fn downloaded_ids(&self) -> Vec<String> {
        self.downloaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_text(&self, chat: &Chat, text: &str) -> Result<()> {
        let _ = self.sent_tx.send(SentRecord::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, file_name: &str, content: Vec<u8>) -> Result<()> {
        let _ = self.sent_tx.send(SentRecord::Document {
            chat_id: chat.id,
            file_name: file_name.to_string(),
            content,
        });
        Ok(())
    }

    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>> {
        self.download_count.fetch_add(1, Ordering::SeqCst);
        self.downloaded.lock().unwrap().push(file_id.to_string());
        self.files
            .lock()
            .unwrap()
            .get(file_id)
            .cloned()
            .ok_or_else(|| RelayError::Download(format!("file not found: {}", file_id)))
    }
}
