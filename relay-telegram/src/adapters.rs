//! Adapters from Telegram (teloxide) types to relay_core types.
//! Depends only on teloxide and relay_core type definitions.

use relay_core::{
    Chat, Command, EventKind, InboundEvent, PhotoVariant, ToCoreUser, ToInboundEvent, User,
};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to an [`InboundEvent`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToInboundEvent for TelegramMessageWrapper<'a> {
    fn to_event(&self, bot_username: Option<&str>) -> InboundEvent {
        let (text, kind) = self.text_and_kind(bot_username);
        InboundEvent {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            text,
            kind,
            created_at: chrono::Utc::now(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Free text and the event kind. Only plain text messages carry free text; captions on
    /// documents and photos are not forwarded.
    fn text_and_kind(&self, bot_username: Option<&str>) -> (Option<String>, EventKind) {
        let msg = self.0;

        if let Some(doc) = msg.document() {
            let kind = EventKind::Document {
                file_id: doc.file.id.to_string(),
                file_name: doc.file_name.clone(),
                mime_type: doc.mime_type.as_ref().map(|m| m.to_string()),
            };
            return (None, kind);
        }

        if let Some(photos) = msg.photo() {
            let variants = photos
                .iter()
                .map(|p| PhotoVariant {
                    file_id: p.file.id.to_string(),
                    width: p.width,
                    height: p.height,
                    file_size: Some(p.file.size),
                })
                .collect();
            return (None, EventKind::Photo { variants });
        }

        if let Some(text) = msg.text() {
            let kind = match Command::parse(text, bot_username) {
                Some(command) => EventKind::Command(command),
                None => EventKind::Text,
            };
            return (Some(text.to_string()), kind);
        }

        (None, EventKind::Other)
    }
}
