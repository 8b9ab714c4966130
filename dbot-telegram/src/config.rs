//! Telegram connection settings: bot token and optional API base URL.
//! Loaded from TELEGRAM_BOT_TOKEN (or BOT_TOKEN) and TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// `token` (e.g. from a CLI flag) wins over the environment. The API URL is only set when
    /// pointing at a local Bot API server or a mock.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("TELEGRAM_BOT_TOKEN")
                .or_else(|_| env::var("BOT_TOKEN"))
                .map_err(|_| anyhow::anyhow!("TELEGRAM_BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds the teloxide client, honoring the API URL override.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(&self.bot_token);
        match &self.telegram_api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url)
                    .with_context(|| format!("invalid Telegram API URL: {}", url))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: Option<&str>) -> TelegramConfig {
        TelegramConfig {
            bot_token: "test_token".to_string(),
            telegram_api_url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_build_bot_rejects_bad_url() {
        assert!(config(Some("not a url")).build_bot().is_err());
    }

    #[test]
    fn test_build_bot_with_api_url() {
        let bot = config(Some("http://127.0.0.1:8081")).build_bot().unwrap();
        assert_eq!(bot.api_url().as_str(), "http://127.0.0.1:8081/");
    }

    #[test]
    fn test_build_bot_default_api_url() {
        let bot = config(None).build_bot().unwrap();
        assert_eq!(bot.api_url().as_str(), "https://api.telegram.org/");
    }
}
