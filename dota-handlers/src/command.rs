//! Incoming update → [`BotCommand`].

use dbot_core::{Message, ReplyKeyboard};
use dota_stats::MatchAction;

pub const PROFILE: &str = "📊 Профиль";
pub const RECENT_MATCHES: &str = "🎮 Последние матчи";
pub const TOP_HEROES: &str = "🏅 Топ герои";
pub const WIN_LOSS: &str = "📈 Статистика Win/Lose";
pub const PEERS: &str = "👥 Частые соратники";
pub const GOLD_XP_CHART: &str = "📈 График Gold/XP";

pub const GREETING: &str = "Привет! Выбирай действие:";
pub const UNKNOWN_INPUT: &str = "Не понял 🤔 Используй кнопки ниже.";

/// The 3×2 keyboard shown after `/start`.
pub fn main_keyboard() -> ReplyKeyboard {
    ReplyKeyboard::new([
        [PROFILE, RECENT_MATCHES],
        [TOP_HEROES, WIN_LOSS],
        [PEERS, GOLD_XP_CHART],
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Profile,
    RecentMatches,
    TopHeroes,
    WinLoss,
    Peers,
    GoldXpChart,
    MatchDetails(u64),
    /// Free text that matches no caption; answered with a hint.
    Unknown,
    /// Nothing to answer: other slash commands, non-text messages, foreign callback payloads.
    Ignored,
}

impl BotCommand {
    pub fn parse(message: &Message) -> Self {
        if message.is_callback() {
            return match MatchAction::from_callback_data(&message.content) {
                Some(action) => BotCommand::MatchDetails(action.match_id),
                None => BotCommand::Ignored,
            };
        }
        if !message.is_text() {
            return BotCommand::Ignored;
        }
        Self::from_text(&message.content)
    }

    fn from_text(text: &str) -> Self {
        if let Some(command) = text.strip_prefix('/') {
            let name = command
                .split_whitespace()
                .next()
                .unwrap_or("")
                .split('@')
                .next()
                .unwrap_or("");
            return if name == "start" {
                BotCommand::Start
            } else {
                BotCommand::Ignored
            };
        }
        match text {
            PROFILE => BotCommand::Profile,
            RECENT_MATCHES => BotCommand::RecentMatches,
            TOP_HEROES => BotCommand::TopHeroes,
            WIN_LOSS => BotCommand::WinLoss,
            PEERS => BotCommand::Peers,
            GOLD_XP_CHART => BotCommand::GoldXpChart,
            _ => BotCommand::Unknown,
        }
    }
}
