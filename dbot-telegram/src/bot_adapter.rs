//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, InlineButton, ReplyKeyboard, Result};
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, KeyboardButton, KeyboardMarkup,
    LinkPreviewOptions,
};

const PHOTO_FILE_NAME: &str = "chart.png";

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn bot_error(e: teloxide::RequestError) -> DbotError {
    DbotError::Bot(e.to_string())
}

fn inline_markup(buttons: &[InlineButton]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(buttons.iter().map(|b| {
        vec![InlineKeyboardButton::callback(
            b.text.clone(),
            b.callback_data.clone(),
        )]
    }))
}

fn reply_markup(keyboard: &ReplyKeyboard) -> KeyboardMarkup {
    let markup = KeyboardMarkup::new(
        keyboard
            .rows
            .iter()
            .map(|row| row.iter().map(|c| KeyboardButton::new(c.clone())).collect::<Vec<_>>()),
    );
    if keyboard.resize {
        markup.resize_keyboard()
    } else {
        markup
    }
}

fn no_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_message_without_preview(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .link_preview_options(no_preview())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_message_with_buttons(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(inline_markup(buttons))
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(reply_markup(keyboard))
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, png: Vec<u8>, caption: Option<&str>) -> Result<()> {
        let photo = InputFile::memory(png).file_name(PHOTO_FILE_NAME);
        let request = self.bot.send_photo(ChatId(chat.id), photo);
        let request = match caption {
            Some(caption) => request.caption(caption.to_string()),
            None => request,
        };
        request.await.map_err(bot_error)?;
        Ok(())
    }
}
