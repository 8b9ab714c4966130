//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide and tests substitute
//! a recording double.

use crate::error::Result;
use crate::types::{Chat, InlineButton, ReplyKeyboard};
use async_trait::async_trait;

/// Abstraction for sending text, keyboards and images. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a text message with link previews disabled.
    async fn send_message_without_preview(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a text message with one inline button per row.
    async fn send_message_with_buttons(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<()>;

    /// Sends a text message and replaces the chat's reply keyboard.
    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()>;

    /// Sends an in-memory PNG image with an optional caption.
    async fn send_photo(&self, chat: &Chat, png: Vec<u8>, caption: Option<&str>) -> Result<()>;
}
