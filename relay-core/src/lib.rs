//! # relay-core
//!
//! Core types and traits for the relay bot: [`Bot`], [`Handler`], inbound events and outbound messages,
//! and tracing initialization. Transport-agnostic; used by relay-telegram, relay-handlers and handler-chain.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Command, EventKind, Handler, HandlerResponse, InboundEvent, OutboundMessage,
    PhotoVariant, ToCoreUser, ToInboundEvent, User,
};
