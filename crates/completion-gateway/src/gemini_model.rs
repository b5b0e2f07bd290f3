//! Gemini implementation of [`TextModel`]: one generateContent call per prompt.

use anyhow::Result;
use async_trait::async_trait;
use gemini_client::GeminiClient;
use tracing::instrument;

use super::TextModel;
use crate::config::GeminiConfig;

/// [`TextModel`] backed by [`gemini_client::GeminiClient`] and a fixed model name.
#[derive(Clone)]
pub struct GeminiTextModel {
    client: GeminiClient,
    model: String,
}

impl GeminiTextModel {
    pub fn new(client: GeminiClient, model: String) -> Self {
        Self { client, model }
    }

    /// Builds the client from config; `api_key` is passed separately because the config's key is optional.
    pub fn from_config(api_key: String, config: &GeminiConfig) -> Self {
        Self::new(
            GeminiClient::with_base_url(api_key, config.api_url.clone()),
            config.model.clone(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextModel for GeminiTextModel {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.client.generate_content(&self.model, prompt).await
    }
}
