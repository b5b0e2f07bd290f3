//! Tests for [`completion_gateway::CompletionGateway::complete`] with mock models.
//!
//! Covers: prompt passed through unchanged for text-only input, size annotation for attachments,
//! degraded notices without model calls, model errors propagating.

use async_trait::async_trait;
use completion_gateway::{
    CompletionGateway, GeminiConfig, TextModel, API_KEY_NOT_CONFIGURED, LIBRARIES_NOT_INSTALLED,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Records every prompt and echoes it back.
#[derive(Default)]
struct EchoModel {
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl TextModel for EchoModel {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(prompt.to_string())
    }
}

struct FailingModel;

#[async_trait]
impl TextModel for FailingModel {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        anyhow::bail!("connection reset")
    }
}

#[tokio::test]
async fn test_text_only_prompt_is_passed_unchanged() {
    let model = Arc::new(EchoModel::default());
    let gateway = CompletionGateway::with_model(model.clone());

    let result = gateway.complete(Some("Explain gravity"), None).await.unwrap();

    assert_eq!(result, "Explain gravity");
    assert_eq!(*model.prompts.lock().unwrap(), vec!["Explain gravity".to_string()]);
}

#[tokio::test]
async fn test_attachment_appends_size_note() {
    let model = Arc::new(EchoModel::default());
    let gateway = CompletionGateway::with_model(model.clone());
    let bytes = vec![7u8; 2048];

    let result = gateway
        .complete(Some("What is this?"), Some(&bytes))
        .await
        .unwrap();

    assert!(result.ends_with("\n[File received of size 2048 bytes]"));
    assert!(result.starts_with("What is this?"));
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_key_returns_notice_without_model_call() {
    let model = Arc::new(EchoModel::default());
    let gateway =
        CompletionGateway::from_config_with_model(&GeminiConfig::with_api_key(None), model.clone());

    let first = gateway.complete(Some("hello"), None).await.unwrap();
    let second = gateway.complete(Some("hello"), Some(&[1, 2, 3])).await.unwrap();

    assert_eq!(first, API_KEY_NOT_CONFIGURED);
    assert_eq!(second, API_KEY_NOT_CONFIGURED);
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unavailable_returns_libraries_notice() {
    let gateway = CompletionGateway::Unavailable;

    let result = gateway.complete(Some("hello"), None).await.unwrap();

    assert_eq!(result, LIBRARIES_NOT_INSTALLED);
    assert_eq!(gateway.unavailable_notice(), Some(LIBRARIES_NOT_INSTALLED));
}

#[tokio::test]
async fn test_configured_key_wraps_model() {
    let model = Arc::new(EchoModel::default());
    let config = GeminiConfig::with_api_key(Some("test-key".to_string()));
    let gateway = CompletionGateway::from_config_with_model(&config, model.clone());

    let result = gateway.complete(Some("ping"), None).await.unwrap();

    if completion_gateway::gemini_available() {
        assert_eq!(result, "ping");
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    } else {
        assert_eq!(result, LIBRARIES_NOT_INSTALLED);
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn test_model_error_propagates() {
    let gateway = CompletionGateway::with_model(Arc::new(FailingModel));

    let err = gateway.complete(Some("hello"), None).await.unwrap_err();

    assert!(err.to_string().contains("connection reset"));
}
