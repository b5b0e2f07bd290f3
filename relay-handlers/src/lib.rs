//! # relay-handlers
//!
//! Handlers registered on the chain for every inbound event: [`LoggingHandler`],
//! [`StartCommandHandler`] and the catch-all [`RelayHandler`], plus the attachment fetcher and
//! response dispatcher the relay flow is built from.

pub mod attachment;
pub mod dispatch;
mod logging;
mod relay;
mod start;

pub use attachment::{fetch_attachment, select_attachment};
pub use dispatch::{dispatch, to_outbound, MAX_INLINE_CHARS, RESPONSE_FILE_NAME};
pub use logging::LoggingHandler;
pub use relay::RelayHandler;
pub use start::{StartCommandHandler, GREETING};
