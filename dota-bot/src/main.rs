use anyhow::Result;
use clap::Parser;
use dota_bot::{run_bot, show, BotConfig, Cli, Commands, StatsConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Show { report } => {
            let config = StatsConfig::from_env()?;
            dbot_core::init_stderr_tracing()?;
            println!("{}", show(&config, report).await);
            Ok(())
        }
    }
}
