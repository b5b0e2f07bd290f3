//! # Completion gateway
//!
//! Turns an optional prompt and optional attachment bytes into one text completion.
//! Defines the [`TextModel`] trait (the model seam tests replace) and [`CompletionGateway`],
//! which is decided once at startup and answers with a fixed notice when Gemini is not usable.

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub mod config;
#[cfg(feature = "gemini")]
mod gemini_model;

pub use config::GeminiConfig;
#[cfg(feature = "gemini")]
pub use gemini_model::GeminiTextModel;

/// Reply used when GEMINI_API_KEY is not set.
pub const API_KEY_NOT_CONFIGURED: &str = "Gemini API key not configured.";

/// Reply used when the binary was built without Gemini support.
pub const LIBRARIES_NOT_INSTALLED: &str = "Gemini libraries not installed.";

/// Text-in/text-out model interface. Single turn, no streaming.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Returns the model's completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Builds the effective prompt: the text (or empty) plus a size note for non-empty attachments.
///
/// Only the byte length of the attachment is disclosed; its content is never sent.
pub fn build_prompt(prompt: Option<&str>, attachment: Option<&[u8]>) -> String {
    let mut effective = prompt.unwrap_or_default().to_string();
    if let Some(bytes) = attachment.filter(|b| !b.is_empty()) {
        effective.push_str(&format!("\n[File received of size {} bytes]", bytes.len()));
    }
    effective
}

/// Whether Gemini support was compiled in.
pub const fn gemini_available() -> bool {
    cfg!(feature = "gemini")
}

/// Completion backend, chosen once from configuration.
#[derive(Clone)]
pub enum CompletionGateway {
    /// Requests go to the model.
    Ready(Arc<dyn TextModel>),
    /// No API key: every request gets [`API_KEY_NOT_CONFIGURED`].
    MissingApiKey,
    /// No Gemini support in this build: every request gets [`LIBRARIES_NOT_INSTALLED`].
    Unavailable,
}

impl CompletionGateway {
    /// Chooses the gateway variant. A missing key wins over missing Gemini support.
    pub fn from_config(config: &GeminiConfig) -> Self {
        let Some(api_key) = config.api_key.clone() else {
            warn!("GEMINI_API_KEY not set; replies will report the missing key");
            return Self::MissingApiKey;
        };
        Self::connect(api_key, config)
    }

    #[cfg(feature = "gemini")]
    fn connect(api_key: String, config: &GeminiConfig) -> Self {
        info!(model = %config.model, api_url = %config.api_url, "Gemini completion gateway ready");
        Self::Ready(Arc::new(GeminiTextModel::from_config(api_key, config)))
    }

    #[cfg(not(feature = "gemini"))]
    fn connect(_api_key: String, _config: &GeminiConfig) -> Self {
        warn!("built without the `gemini` feature; replies will report missing libraries");
        Self::Unavailable
    }

    /// Gateway over an arbitrary model, without configuration checks.
    pub fn with_model(model: Arc<dyn TextModel>) -> Self {
        Self::Ready(model)
    }

    /// Applies the same checks as [`from_config`](Self::from_config) but wraps `model` when they pass.
    pub fn from_config_with_model(config: &GeminiConfig, model: Arc<dyn TextModel>) -> Self {
        if config.api_key.is_none() {
            return Self::MissingApiKey;
        }
        if !gemini_available() {
            return Self::Unavailable;
        }
        Self::Ready(model)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The fixed reply for degraded variants, `None` when ready.
    pub fn unavailable_notice(&self) -> Option<&'static str> {
        match self {
            Self::Ready(_) => None,
            Self::MissingApiKey => Some(API_KEY_NOT_CONFIGURED),
            Self::Unavailable => Some(LIBRARIES_NOT_INSTALLED),
        }
    }

    /// Produces one completion. Degraded variants return their notice without any network call;
    /// model errors propagate.
    #[instrument(skip(self, prompt, attachment))]
    pub async fn complete(&self, prompt: Option<&str>, attachment: Option<&[u8]>) -> Result<String> {
        let model = match self {
            Self::Ready(model) => model,
            Self::MissingApiKey => return Ok(API_KEY_NOT_CONFIGURED.to_string()),
            Self::Unavailable => return Ok(LIBRARIES_NOT_INSTALLED.to_string()),
        };
        let effective = build_prompt(prompt, attachment);
        info!(
            prompt_len = effective.chars().count(),
            attachment_bytes = ?attachment.map(<[u8]>::len),
            "step: completion request"
        );
        model.generate(&effective).await
    }
}

impl fmt::Debug for CompletionGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(_) => f.write_str("CompletionGateway::Ready"),
            Self::MissingApiKey => f.write_str("CompletionGateway::MissingApiKey"),
            Self::Unavailable => f.write_str("CompletionGateway::Unavailable"),
        }
    }
}
