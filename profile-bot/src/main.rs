//! Binary for the Facebook profile lookup bot.

use anyhow::Result;
use clap::Parser;
use profile_bot::{load_config, run_bot, run_lookup, Cli, Commands, TransportMode};
use profile_lookup::LookupConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, webhook } => {
            let config = load_config(token)?;
            let mode = TransportMode::select(webhook, config.webhook_url());
            run_bot(config, mode).await
        }
        Commands::Lookup { url } => run_lookup(LookupConfig::from_env(), &url).await,
    }
}
