//! Answers keyboard captions, `/start` and match buttons with stats for the configured player.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Chat, Handler, HandlerResponse, InlineButton, Message, Result};
use dota_stats::{StatsProvider, DEFAULT_LIST_LIMIT};
use tracing::{info, instrument, warn};

use crate::command::{main_keyboard, BotCommand, GREETING, UNKNOWN_INPUT};

pub const CHART_UNAVAILABLE: &str = "Не удалось создать график для последнего матча";
pub const NO_RECENT_MATCHES: &str = "Не найдено последних матчей";

/// Terminal handler of the chain. Every recognised update gets exactly one logical reply
/// (plus a chart photo where one applies); unrecognised updates return `Ignore`.
pub struct DotaStatsHandler {
    stats: Arc<dyn StatsProvider>,
    bot: Arc<dyn Bot>,
}

impl DotaStatsHandler {
    pub fn new(stats: Arc<dyn StatsProvider>, bot: Arc<dyn Bot>) -> Self {
        Self { stats, bot }
    }

    async fn send_recent_matches(&self, chat: &Chat) -> Result<()> {
        let reply = self.stats.recent_matches(DEFAULT_LIST_LIMIT).await;
        if reply.actions.is_empty() {
            return self.bot.send_message(chat, &reply.text).await;
        }
        let buttons: Vec<InlineButton> = reply
            .actions
            .iter()
            .map(|a| InlineButton::new(a.label(), a.callback_data()))
            .collect();
        self.bot
            .send_message_with_buttons(chat, &reply.text, &buttons)
            .await
    }

    async fn send_latest_chart(&self, chat: &Chat) -> Result<()> {
        let Some(match_id) = self.stats.latest_match_id().await else {
            return self.bot.send_message(chat, NO_RECENT_MATCHES).await;
        };
        match self.stats.gold_xp_chart(match_id).await {
            Some(chart) => {
                let caption = chart.caption();
                self.bot.send_photo(chat, chart.png, Some(&caption)).await
            }
            None => self.bot.send_message(chat, CHART_UNAVAILABLE).await,
        }
    }

    /// Detail text first; the chart follows only when one could be drawn.
    async fn send_match_details(&self, chat: &Chat, match_id: u64) -> Result<()> {
        let details = self.stats.match_details(match_id).await;
        self.bot.send_message(chat, &details).await?;
        match self.stats.gold_xp_chart(match_id).await {
            Some(chart) => {
                let caption = chart.caption();
                self.bot.send_photo(chat, chart.png, Some(&caption)).await
            }
            None => {
                info!(match_id, "No chart for match");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl Handler for DotaStatsHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let chat = &message.chat;
        let command = BotCommand::parse(message);
        info!(command = ?command, "Dispatching");

        match command {
            BotCommand::Start => {
                self.bot
                    .send_message_with_keyboard(chat, GREETING, &main_keyboard())
                    .await?
            }
            BotCommand::Profile => {
                let text = self.stats.profile().await;
                self.bot.send_message_without_preview(chat, &text).await?
            }
            BotCommand::RecentMatches => self.send_recent_matches(chat).await?,
            BotCommand::TopHeroes => {
                let text = self.stats.top_heroes(DEFAULT_LIST_LIMIT).await;
                self.bot.send_message(chat, &text).await?
            }
            BotCommand::WinLoss => {
                let text = self.stats.win_loss().await;
                self.bot.send_message(chat, &text).await?
            }
            BotCommand::Peers => {
                let text = self.stats.peers(DEFAULT_LIST_LIMIT).await;
                self.bot.send_message(chat, &text).await?
            }
            BotCommand::GoldXpChart => self.send_latest_chart(chat).await?,
            BotCommand::MatchDetails(match_id) => self.send_match_details(chat, match_id).await?,
            BotCommand::Unknown => self.bot.send_message(chat, UNKNOWN_INPUT).await?,
            BotCommand::Ignored => {
                if message.is_callback() {
                    warn!(payload = %message.content, "Unrecognised callback payload");
                }
                return Ok(HandlerResponse::Ignore);
            }
        }

        Ok(HandlerResponse::Reply(format!("{:?}", command)))
    }
}
