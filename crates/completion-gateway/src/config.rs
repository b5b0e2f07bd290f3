//! Gemini configuration loaded from environment variables.

use std::env;

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Base URL used when `GEMINI_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini access settings. The API key is optional: without it the gateway runs degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// GEMINI_API_KEY; blank values count as unset.
    pub api_key: Option<String>,
    /// GEMINI_MODEL
    pub model: String,
    /// GEMINI_API_URL
    pub api_url: String,
}

impl GeminiConfig {
    /// Loads from the environment. Never fails; missing values fall back to defaults.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let model = env::var("GEMINI_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_url = env::var("GEMINI_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            api_key,
            model,
            api_url,
        }
    }

    /// Config with the given key and default model/URL.
    pub fn with_api_key(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
