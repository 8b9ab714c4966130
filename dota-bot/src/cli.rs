//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dota-bot")]
#[command(about = "Dota 2 stats Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print one report for DOTA2_PLAYER_ID to stdout without connecting to Telegram.
    Show {
        #[command(subcommand)]
        report: Report,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Profile,
    Recent,
    Heroes,
    Wl,
    Peers,
    /// Detailed report for one match.
    Match { match_id: u64 },
}
