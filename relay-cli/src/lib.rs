//! # relay-cli
//!
//! Process bootstrap for the relay bot: argument parsing, config loading, handler chain assembly.
//! No completion or Telegram logic of its own.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{build_handler_chain, run};
pub use cli::Cli;
pub use config::RelayConfig;
