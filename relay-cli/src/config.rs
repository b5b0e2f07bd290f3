//! Process-wide configuration: Telegram and Gemini sub-configs plus the log file path.

use anyhow::{Context, Result};
use completion_gateway::GeminiConfig;
use relay_telegram::TelegramConfig;
use std::env;

/// Log file used when `LOG_FILE` is not set.
pub const DEFAULT_LOG_FILE: &str = "logs/gemini-relay-bot.log";

/// Immutable configuration loaded once at startup and passed into each component.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub telegram: TelegramConfig,
    pub gemini: GeminiConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl RelayConfig {
    /// Loads every sub-config from the environment. Fails when the Telegram token is missing.
    pub fn from_env() -> Result<Self> {
        let telegram = TelegramConfig::from_env().context("Load Telegram config")?;
        let gemini = GeminiConfig::from_env();
        let log_file = env::var("LOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            telegram,
            gemini,
            log_file,
        })
    }

    /// Fails fast on values that would only break later (e.g. an unparseable Bot API URL).
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        Ok(())
    }
}
