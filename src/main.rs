//! newschat - embedded financial-news assistant CLI
//!
//! Main entry point: initializes tracing, loads configuration, and
//! dispatches to the selected command.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use newschat::cli::{Cli, Commands};
use newschat::commands;
use newschat::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse_args();

    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;
    config.validate()?;

    match cli.command.clone().unwrap_or(Commands::Chat) {
        Commands::Chat => {
            tracing::info!("Starting interactive chat session");
            commands::chat::run_chat(config).await
        }
        Commands::Health => {
            tracing::info!("Probing news service health");
            commands::health::run_health(config).await
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("newschat=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
