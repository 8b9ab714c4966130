mod mock_bot;

use chrono::Utc;
use dbot_core::{Chat, Message, MessageDirection, User, MESSAGE_TYPE_CALLBACK, MESSAGE_TYPE_TEXT};

fn message(message_type: &str, content: &str) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: User {
            id: 42,
            username: Some("player".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 777,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: message_type.to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}

pub(crate) fn text_message(content: &str) -> Message {
    message(MESSAGE_TYPE_TEXT, content)
}

pub(crate) fn callback(payload: &str) -> Message {
    message(MESSAGE_TYPE_CALLBACK, payload)
}
