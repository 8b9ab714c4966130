use anyhow::{Context, Result};
use dbot_telegram::TelegramConfig;
use opendota_client::DEFAULT_BASE_URL;
use std::env;

const DEFAULT_LOG_FILE: &str = "logs/dota-bot.log";

/// What to report on and where to fetch it from. Enough for `show` without Telegram.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub player_id: u64,
    pub opendota_api_url: String,
}

impl StatsConfig {
    /// DOTA2_PLAYER_ID is required; OPENDOTA_API_URL defaults to the public API.
    pub fn from_env() -> Result<Self> {
        let raw = env::var("DOTA2_PLAYER_ID").context("DOTA2_PLAYER_ID not set")?;
        let player_id = raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("DOTA2_PLAYER_ID is not a valid account id: {:?}", raw))?;
        let opendota_api_url =
            env::var("OPENDOTA_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            player_id,
            opendota_api_url,
        })
    }
}

/// Full bot settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub log_file: String,
    pub stats: StatsConfig,
}

impl BotConfig {
    /// `token` (from `--token`) overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let stats = StatsConfig::from_env()?;

        Ok(Self {
            telegram,
            log_file,
            stats,
        })
    }
}
