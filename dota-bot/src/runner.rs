//! Wiring: OpenDota client → reference data → stats service → handler chain → Telegram dispatcher.

use std::sync::Arc;

use anyhow::Result;
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_dispatcher, TelegramBotAdapter};
use dota_handlers::{DotaStatsHandler, LoggingHandler};
use dota_stats::{ReferenceData, StatsProvider, StatsService, DEFAULT_LIST_LIMIT};
use handler_chain::HandlerChain;
use opendota_client::OpenDotaClient;
use tracing::{info, instrument};

use crate::cli::Report;
use crate::config::{BotConfig, StatsConfig};

/// Loads hero and item names once, then builds the service around them.
#[instrument(skip(config), fields(player_id = config.player_id))]
pub async fn build_stats(config: &StatsConfig) -> Arc<StatsService> {
    let client = OpenDotaClient::new(config.opendota_api_url.as_str());
    let reference = Arc::new(ReferenceData::load(&client).await);
    Arc::new(StatsService::new(client, reference, config.player_id))
}

/// Logging first, then the stats handler.
pub fn build_handler_chain(stats: Arc<dyn StatsProvider>, bot: Arc<dyn Bot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(DotaStatsHandler::new(stats, bot)))
}

/// Main entry: init logging, connect to Telegram, load reference data, then poll until stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(Some(config.log_file.as_str()))?;

    info!(
        player_id = config.stats.player_id,
        opendota_api_url = %config.stats.opendota_api_url,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let stats = build_stats(&config.stats).await;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(stats, bot);

    info!("Bot started successfully");

    run_dispatcher(teloxide_bot, handler_chain).await
}

/// Builds the handler chain without Telegram. Integration tests drive it with core messages and a
/// recording bot.
pub async fn run_bot_build_only(config: &StatsConfig, bot: Arc<dyn Bot>) -> HandlerChain {
    let stats = build_stats(config).await;
    build_handler_chain(stats, bot)
}

/// Text of one report, the same one the chat button would produce.
pub async fn show(config: &StatsConfig, report: Report) -> String {
    let stats = build_stats(config).await;
    match report {
        Report::Profile => stats.profile().await,
        Report::Recent => stats.recent_matches(DEFAULT_LIST_LIMIT).await.text,
        Report::Heroes => stats.top_heroes(DEFAULT_LIST_LIMIT).await,
        Report::Wl => stats.win_loss().await,
        Report::Peers => stats.peers(DEFAULT_LIST_LIMIT).await,
        Report::Match { match_id } => stats.match_details(match_id).await,
    }
}
