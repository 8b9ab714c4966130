//! # Handler chain
//!
//! Runs a sequence of handlers for one inbound update. All `before` hooks run in order (any false
//! stops the chain); then `handle` runs until one returns Stop or Reply; then all `after` hooks run
//! in reverse with the final response.

use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the three phases for `message` and returns the response that ended the handle phase
    /// (Continue if no handler claimed the update).
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, kind = %message.message_type))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.run_before(message).await? {
            return Ok(HandlerResponse::Stop);
        }
        let response = self.run_handle(message).await?;
        self.run_after(message, &response).await?;
        info!(user_id = message.user.id, response = ?response, "step: handler chain finished");
        Ok(response)
    }

    async fn run_before(&self, message: &Message) -> Result<bool> {
        for h in &self.handlers {
            if !h.before(message).await? {
                info!(
                    user_id = message.user.id,
                    handler = %handler_name(h),
                    "step: before returned false, chain stopped"
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    async fn run_handle(&self, message: &Message) -> Result<HandlerResponse> {
        for h in &self.handlers {
            let response = h.handle(message).await?;
            debug!(handler = %handler_name(h), response = ?response, "Handler processed");
            if matches!(response, HandlerResponse::Stop | HandlerResponse::Reply(_)) {
                return Ok(response);
            }
        }
        Ok(HandlerResponse::Continue)
    }

    async fn run_after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        for h in self.handlers.iter().rev() {
            h.after(message, response).await?;
        }
        Ok(())
    }
}

fn handler_name(h: &Arc<dyn Handler>) -> &'static str {
    h.name()
}

// Chain behaviour tests live in tests/handler_chain_test.rs
