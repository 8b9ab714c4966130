//! Long-polling dispatcher: converts messages and callback queries to core::Message and hands
//! them to the HandlerChain, one spawned task per update.

use anyhow::Result;
use dbot_core::{Message as CoreMessage, ToCoreMessage};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Runs until the process is stopped. Callback queries are answered right away so the client
/// stops its loading indicator, whatever the chain then does with them.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Connected to Telegram");
        }
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .default_handler(|_| async {})
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    match msg.text() {
        Some(text) => info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            message_content = %text,
            "Received message"
        ),
        None => info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Received non-text message"
        ),
    }
    spawn_chain(chain, core_msg);
    Ok(())
}

async fn on_callback_query(bot: Bot, q: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }

    match TelegramCallbackWrapper(&q).to_core_checked() {
        Some(core_msg) => {
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                callback_data = %core_msg.content,
                "Received callback query"
            );
            spawn_chain(chain, core_msg);
        }
        None => warn!(user_id = q.from.id.0, "Callback query without message, skipped"),
    }
    Ok(())
}

fn spawn_chain(chain: HandlerChain, core_msg: CoreMessage) {
    tokio::spawn(async move {
        if let Err(e) = chain.handle(&core_msg).await {
            error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
        }
    });
}
