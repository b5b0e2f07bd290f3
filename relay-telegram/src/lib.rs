//! # relay-telegram
//!
//! Telegram transport layer: adapters from teloxide messages to [`relay_core::InboundEvent`],
//! the [`relay_core::Bot`] implementation, minimal config, and the long-polling runner.
//! Handles only Telegram connectivity and handler-chain execution; no completion logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_polling;
