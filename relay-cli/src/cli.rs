//! CLI parser. All settings come from the environment; only `--help` and `--version` are accepted.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gemini-relay-bot")]
#[command(
    about = "Telegram bot that relays text and files to Google Gemini",
    long_about = "Telegram bot that relays text and files to Google Gemini.\n\n\
                  Configuration is read from the environment (and .env): TELEGRAM_TOKEN, \
                  GEMINI_API_KEY, GEMINI_MODEL, GEMINI_API_URL, TELEGRAM_API_URL, LOG_FILE, RUST_LOG."
)]
#[command(version)]
pub struct Cli {}
