//! # Handler chain
//!
//! Runs a sequence of handlers for each inbound event. Every handler's `before` runs first (any
//! returning false stops the chain); then `handle` runs in order until one returns Stop or Reply;
//! finally every `after` runs in reverse order with the final response.

use relay_core::{Handler, HandlerResponse, InboundEvent, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered list of handlers shared by all event tasks.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Stop/Reply ends handler phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs before, handle and after phases. Returns the first Stop or Reply, or Continue.
    #[instrument(skip(self, event))]
    pub async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;

        info!(
            user_id = event.user.id,
            chat_id = event.chat.id,
            message_id = %event.id,
            kind = event.kind_name(),
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            if !handler.before(event).await? {
                info!(
                    user_id = event.user.id,
                    handler = %handler_name,
                    "step: handler before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            debug!(
                user_id = event.user.id,
                handler = %handler_name,
                "step: handler processing"
            );
            let response = handler.handle(event).await?;
            let (response_type, reply_kind) = match &response {
                HandlerResponse::Continue => ("Continue", None),
                HandlerResponse::Stop => ("Stop", None),
                HandlerResponse::Reply(m) => ("Reply", Some(m.kind_name())),
            };
            info!(
                user_id = event.user.id,
                handler = %handler_name,
                response_type = %response_type,
                reply_kind = ?reply_kind,
                "step: handler done"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue => continue,
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(event, &final_response).await?;
        }

        info!(
            user_id = event.user.id,
            chat_id = event.chat.id,
            message_id = %event.id,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
