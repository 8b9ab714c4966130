//! # dbot-core
//!
//! Core types and traits for the Telegram bot: [`Bot`], [`Handler`], message, user and keyboard types,
//! and tracing initialization. Transport-agnostic; used by dbot-telegram, handler-chain and the handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, Result};
pub use logger::{init_stderr_tracing, init_tracing};
pub use types::{
    Chat, Handler, HandlerResponse, InlineButton, Message, MessageDirection, ReplyKeyboard,
    ToCoreMessage, ToCoreUser, User, MESSAGE_TYPE_CALLBACK, MESSAGE_TYPE_OTHER, MESSAGE_TYPE_TEXT,
};
