//! Adapters from Telegram (teloxide) types to dbot_core types.

use dbot_core::{
    Chat, Message, MessageDirection, ToCoreMessage, ToCoreUser, User, MESSAGE_TYPE_CALLBACK,
    MESSAGE_TYPE_OTHER, MESSAGE_TYPE_TEXT,
};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn anonymous() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

fn chat_of(msg: &teloxide::types::Message) -> Chat {
    Chat {
        id: msg.chat.id.0,
        chat_type: format!("{:?}", msg.chat.kind),
    }
}

/// Wraps a teloxide Message. Text messages become [`MESSAGE_TYPE_TEXT`], everything else
/// [`MESSAGE_TYPE_OTHER`] with empty content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let (content, message_type) = match self.0.text() {
            Some(text) => (text.to_string(), MESSAGE_TYPE_TEXT),
            None => (String::new(), MESSAGE_TYPE_OTHER),
        };
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(anonymous),
            chat: chat_of(self.0),
            content,
            message_type: message_type.to_string(),
            direction: MessageDirection::Incoming,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Wraps a teloxide CallbackQuery. The payload becomes `content`; the chat is the one holding
/// the message the button was attached to.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> TelegramCallbackWrapper<'a> {
    /// `None` when the originating message is gone (too old) and there is no chat to answer in.
    pub fn to_core_checked(&self) -> Option<Message> {
        let message = self.0.message.as_ref()?;
        Some(Message {
            id: self.0.id.to_string(),
            user: TelegramUserWrapper(&self.0.from).to_core(),
            chat: Chat {
                id: message.chat().id.0,
                chat_type: format!("{:?}", message.chat().kind),
            },
            content: self.0.data.clone().unwrap_or_default(),
            message_type: MESSAGE_TYPE_CALLBACK.to_string(),
            direction: MessageDirection::Incoming,
            created_at: chrono::Utc::now(),
        })
    }
}
