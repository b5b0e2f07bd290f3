//! Integration tests for the assembled handler chain, using a recording Bot instead of Telegram.

use async_trait::async_trait;
use completion_gateway::{CompletionGateway, GeminiConfig, API_KEY_NOT_CONFIGURED};
use relay_cli::build_handler_chain;
use relay_core::{
    Bot, Chat, Command, EventKind, HandlerResponse, InboundEvent, OutboundMessage, RelayError,
    Result, User,
};
use relay_handlers::GREETING;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingBot {
    texts: Mutex<Vec<String>>,
    downloads: Mutex<usize>,
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_text(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_document(&self, _chat: &Chat, _file_name: &str, _content: Vec<u8>) -> Result<()> {
        Ok(())
    }

    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>> {
        *self.downloads.lock().unwrap() += 1;
        Err(RelayError::Download(format!("no such file: {}", file_id)))
    }
}

fn event(text: Option<&str>, kind: EventKind) -> InboundEvent {
    InboundEvent {
        id: "1".to_string(),
        user: User {
            id: 123,
            username: Some("ada".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        text: text.map(str::to_string),
        kind,
        created_at: chrono::Utc::now(),
    }
}

#[tokio::test]
async fn test_chain_without_api_key_replies_with_notice() {
    let bot = Arc::new(RecordingBot::default());
    let gateway = CompletionGateway::from_config(&GeminiConfig::with_api_key(None));
    let chain = build_handler_chain(bot.clone(), gateway);
    assert_eq!(chain.len(), 3);

    let response = chain
        .handle(&event(Some("What is gravity?"), EventKind::Text))
        .await
        .unwrap();

    assert_eq!(
        response,
        HandlerResponse::Reply(OutboundMessage::Text(API_KEY_NOT_CONFIGURED.to_string()))
    );
    assert_eq!(*bot.texts.lock().unwrap(), vec![API_KEY_NOT_CONFIGURED]);
}

#[tokio::test]
async fn test_chain_without_api_key_skips_download() {
    let bot = Arc::new(RecordingBot::default());
    let gateway = CompletionGateway::from_config(&GeminiConfig::with_api_key(None));
    let chain = build_handler_chain(bot.clone(), gateway);

    let kind = EventKind::Document {
        file_id: "doc-1".to_string(),
        file_name: Some("notes.txt".to_string()),
        mime_type: None,
    };
    chain.handle(&event(None, kind)).await.unwrap();

    assert_eq!(*bot.downloads.lock().unwrap(), 0);
    assert_eq!(*bot.texts.lock().unwrap(), vec![API_KEY_NOT_CONFIGURED]);
}

#[tokio::test]
async fn test_chain_start_command_greets() {
    let bot = Arc::new(RecordingBot::default());
    let gateway = CompletionGateway::from_config(&GeminiConfig::with_api_key(None));
    let chain = build_handler_chain(bot.clone(), gateway);

    chain
        .handle(&event(Some("/start"), EventKind::Command(Command::Start)))
        .await
        .unwrap();

    assert_eq!(*bot.texts.lock().unwrap(), vec![GREETING]);
}
