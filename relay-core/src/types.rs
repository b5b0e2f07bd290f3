//! Core types: user, chat, inbound event, outbound message, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity. Replies are always addressed to the originating chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Bot commands recognized by the start handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Help,
}

impl Command {
    /// Parses `/start` or `/help` at the beginning of `text`.
    ///
    /// Accepts an optional `@botname` suffix; when `bot_username` is known, commands addressed to
    /// another bot are rejected. Arguments after the command are ignored. Anything else is `None`.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        let name = first.strip_prefix('/')?;
        let (name, target) = match name.split_once('@') {
            Some((name, target)) => (name, Some(target)),
            None => (name, None),
        };
        if let (Some(target), Some(me)) = (target, bot_username) {
            if !target.eq_ignore_ascii_case(me) {
                return None;
            }
        }
        match name.to_ascii_lowercase().as_str() {
            "start" => Some(Command::Start),
            "help" => Some(Command::Help),
            _ => None,
        }
    }
}

/// One resolution variant of an uploaded photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoVariant {
    pub file_id: String,
    pub width: u32,
    pub height: u32,
    pub file_size: Option<u32>,
}

/// What kind of content an inbound event carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A recognized bot command.
    Command(Command),
    /// Plain text message.
    Text,
    /// Uploaded document.
    Document {
        file_id: String,
        file_name: Option<String>,
        mime_type: Option<String>,
    },
    /// Uploaded photo; variants are ordered smallest first, as the platform delivers them.
    Photo { variants: Vec<PhotoVariant> },
    /// Any other content (sticker, voice, location, ...). Carries no attachment.
    Other,
}

/// A single inbound chat event. Created by the transport adapter and consumed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text. `None` for attachments and other content.
    pub text: Option<String>,
    pub kind: EventKind,
    pub created_at: DateTime<Utc>,
}

impl InboundEvent {
    /// Short label of the event kind, used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            EventKind::Command(_) => "command",
            EventKind::Text => "text",
            EventKind::Document { .. } => "document",
            EventKind::Photo { .. } => "photo",
            EventKind::Other => "other",
        }
    }
}

/// What gets sent back to the user for one inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    /// Inline text reply.
    Text(String),
    /// File reply with a name and byte content.
    Document { file_name: String, content: Vec<u8> },
}

impl OutboundMessage {
    /// Short label of the message kind, used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            OutboundMessage::Text(_) => "text",
            OutboundMessage::Document { .. } => "document",
        }
    }
}

/// Handler result for the chain. `Reply` carries what was sent so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// Stop the chain; the handler sent this message.
    Reply(OutboundMessage),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to an [`InboundEvent`].
pub trait ToInboundEvent: Send + Sync {
    fn to_event(&self, bot_username: Option<&str>) -> InboundEvent;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _event: &InboundEvent) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the event. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _event: &InboundEvent) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _event: &InboundEvent,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
