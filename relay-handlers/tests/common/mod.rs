//! Shared test doubles: a recording [`relay_core::Bot`], mock models, and event builders.
#![allow(dead_code)]

pub mod mock_bot;

use async_trait::async_trait;
use chrono::Utc;
use completion_gateway::TextModel;
use relay_core::{Chat, EventKind, InboundEvent, PhotoVariant, User};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const CHAT_ID: i64 = 456;

/// Echoes the prompt back and records it.
#[derive(Default)]
pub struct EchoModel {
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
}

impl EchoModel {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextModel for EchoModel {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(prompt.to_string())
    }
}

/// Returns a fixed reply.
pub struct FixedModel(pub String);

#[async_trait]
impl TextModel for FixedModel {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(self.0.clone())
    }
}

pub fn event(text: Option<&str>, kind: EventKind) -> InboundEvent {
    InboundEvent {
        id: "msg_1".to_string(),
        user: User {
            id: 123,
            username: Some("user".to_string()),
            first_name: Some("User".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        text: text.map(String::from),
        kind,
        created_at: Utc::now(),
    }
}

pub fn text_event(text: &str) -> InboundEvent {
    event(Some(text), EventKind::Text)
}

pub fn document_event(file_id: &str) -> InboundEvent {
    event(
        None,
        EventKind::Document {
            file_id: file_id.to_string(),
            file_name: Some("notes.pdf".to_string()),
            mime_type: Some("application/pdf".to_string()),
        },
    )
}

pub fn photo_event(file_ids: &[&str]) -> InboundEvent {
    let variants = file_ids
        .iter()
        .enumerate()
        .map(|(i, id)| PhotoVariant {
            file_id: id.to_string(),
            width: 90 * (i as u32 + 1),
            height: 90 * (i as u32 + 1),
            file_size: None,
        })
        .collect();
    event(None, EventKind::Photo { variants })
}
