//! # dota-bot
//!
//! Telegram bot that reports Dota 2 statistics for one configured player. Config from env,
//! CLI via clap; `run` starts long polling, `show` prints a single report.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{Cli, Commands, Report};
pub use config::{BotConfig, StatsConfig};
pub use runner::{build_handler_chain, build_stats, run_bot, run_bot_build_only, show};
