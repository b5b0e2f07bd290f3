//! Telegram connection config: bot token and optional Bot API URL, loaded from the environment.

use anyhow::Result;
use std::env;
use tracing::info;

/// Telegram access settings.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// TELEGRAM_TOKEN (or BOT_TOKEN)
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from the environment. Fails when no bot token is set.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("TELEGRAM_TOKEN")
            .or_else(|_| env::var("BOT_TOKEN"))
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("TELEGRAM_TOKEN environment variable not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Config with the given token and the default API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Checks that `telegram_api_url`, when set, parses as a URL.
    pub fn validate(&self) -> Result<()> {
        self.api_url().map(|_| ())
    }

    fn api_url(&self) -> Result<Option<reqwest::Url>> {
        match self.telegram_api_url {
            Some(ref url_str) => reqwest::Url::parse(url_str).map(Some).map_err(|_| {
                anyhow::anyhow!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )
            }),
            None => Ok(None),
        }
    }

    /// Builds the teloxide bot, pointed at the custom API URL when one is set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        Ok(match self.api_url()? {
            Some(url) => {
                info!(api_url = %url, "Using custom Telegram API URL");
                bot.set_api_url(url)
            }
            None => bot,
        })
    }
}
