//! # Gemini API client
//!
//! Thin wrapper around the Gemini `generateContent` REST endpoint for single-turn text prompts.
//! Provides token masking for safe logging and a simple prompt-in/text-out API.

mod wire;

use anyhow::Context;

pub use wire::{
    Candidate, Content, ErrorDetail, ErrorResponse, GenerateContentRequest,
    GenerateContentResponse, Part, PromptFeedback, UsageMetadata,
};

/// Public Gemini API base URL (v1beta).
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// Keys of length <= 11 are fully masked as "***".
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        return "***".to_string();
    }
    format!("{}***{}", &token[..7], &token[len - 4..])
}

/// Gemini client. Cheap to clone; the underlying reqwest client is shared.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Builds a client for the public API.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client against a custom base URL (proxies, test servers).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full `generateContent` URL for `model`. Accepts both `gemini-pro` and `models/gemini-pro`.
    pub fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Sends `prompt` as one user turn and returns the model's text.
    ///
    /// Logs masked API key and token usage. Fails on non-2xx status (with the API's error
    /// message when it can be parsed) and when the response carries no text.
    pub async fn generate_content(&self, model: &str, prompt: &str) -> anyhow::Result<String> {
        tracing::info!(
            model = %model,
            prompt_len = prompt.chars().count(),
            api_key = %mask_token(&self.api_key),
            "Gemini generate_content request"
        );

        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
        };

        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Gemini request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(err) = serde_json::from_str::<ErrorResponse>(&body) {
                anyhow::bail!("Gemini API error ({}): {}", status, err.error.message);
            }
            anyhow::bail!("Gemini API error: {} - {}", status, body);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        if let Some(ref u) = body.usage_metadata {
            tracing::info!(
                prompt_tokens = ?u.prompt_token_count,
                completion_tokens = ?u.candidates_token_count,
                total_tokens = ?u.total_token_count,
                "Gemini generate_content usage"
            );
        }

        match body.text() {
            Some(text) => Ok(text),
            None => {
                let reason = body
                    .prompt_feedback
                    .as_ref()
                    .and_then(|f| f.block_reason.clone())
                    .or_else(|| {
                        body.candidates
                            .as_ref()
                            .and_then(|c| c.first())
                            .and_then(|c| c.finish_reason.clone())
                    })
                    .unwrap_or_else(|| "unknown".to_string());
                anyhow::bail!("No text in Gemini response (reason: {})", reason)
            }
        }
    }
}
