//! Recording [`Bot`] double: every send is kept in order for assertions.

use std::sync::Mutex;

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, InlineButton, ReplyKeyboard, Result};

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text(String),
    TextWithoutPreview(String),
    Buttons(String, Vec<InlineButton>),
    Keyboard(String, ReplyKeyboard),
    /// `png` is true when the bytes carry the PNG signature.
    Photo { png: bool, caption: Option<String> },
}

#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<(i64, Sent)>>,
    fail: bool,
}

impl RecordingBot {
    /// Every send returns `DbotError::Bot`.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::default(),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().iter().map(|(_, s)| s.clone()).collect()
    }

    pub fn chats(&self) -> Vec<i64> {
        self.sent.lock().unwrap().iter().map(|(c, _)| *c).collect()
    }

    fn record(&self, chat: &Chat, sent: Sent) -> Result<()> {
        if self.fail {
            return Err(DbotError::Bot("send failed".to_string()));
        }
        self.sent.lock().unwrap().push((chat.id, sent));
        Ok(())
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, Sent::Text(text.to_string()))
    }

    async fn send_message_without_preview(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, Sent::TextWithoutPreview(text.to_string()))
    }

    async fn send_message_with_buttons(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<()> {
        self.record(chat, Sent::Buttons(text.to_string(), buttons.to_vec()))
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()> {
        self.record(chat, Sent::Keyboard(text.to_string(), keyboard.clone()))
    }

    async fn send_photo(&self, chat: &Chat, png: Vec<u8>, caption: Option<&str>) -> Result<()> {
        self.record(
            chat,
            Sent::Photo {
                png: png.starts_with(PNG_SIGNATURE),
                caption: caption.map(str::to_string),
            },
        )
    }
}
