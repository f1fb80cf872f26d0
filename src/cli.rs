//! Command-line interface definition for newschat
//!
//! This module defines the CLI structure using clap's derive API,
//! providing the interactive chat session and a one-shot health probe.

use clap::{Parser, Subcommand};

/// newschat - embedded financial-news assistant
///
/// Chat with the news Q&A service from the terminal, using the same
/// session engine the embedded widget runs on.
#[derive(Parser, Debug, Clone)]
#[command(name = "newschat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the answer service base URL
    #[arg(short, long, env = "NEWSCHAT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Command to execute (defaults to chat)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for newschat
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session with the news assistant
    Chat,

    /// Probe the news service once and report its health
    Health,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_no_command() {
        let cli = Cli::try_parse_from(["newschat"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(cli.endpoint.is_none());
    }

    #[test]
    fn test_parse_chat_with_endpoint() {
        let cli =
            Cli::try_parse_from(["newschat", "--endpoint", "http://localhost:9000", "chat"])
                .unwrap();
        assert!(matches!(cli.command, Some(Commands::Chat)));
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_parse_health_command() {
        let cli = Cli::try_parse_from(["newschat", "health"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Health)));
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["newschat", "serve"]).is_err());
    }
}
