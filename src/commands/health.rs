//! One-shot health probe handler
//!
//! Runs the same probe a new session would run at creation and prints
//! the classified outcome.

use crate::client::HttpAnswerClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::monitor::{ConnectionMonitor, ProbeOutcome, OFFLINE_MESSAGE, UNREACHABLE_MESSAGE};
use colored::Colorize;
use std::sync::Arc;

/// Probe the news service and report the result
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
///
/// # Errors
///
/// Returns error only if the HTTP client cannot be constructed; a failed
/// probe is reported on stdout, not as an error.
pub async fn run_health(config: Config) -> Result<()> {
    let client = Arc::new(HttpAnswerClient::new(&config.service)?);
    let monitor = ConnectionMonitor::new(client);

    println!("Probing {} ...", config.service.base_url);

    match monitor.probe().await {
        ProbeOutcome::Healthy => {
            println!("{}", "News service is healthy".green());
        }
        ProbeOutcome::Unhealthy => {
            println!("{}", UNREACHABLE_MESSAGE.yellow());
        }
        ProbeOutcome::Offline(description) => {
            println!("{}", OFFLINE_MESSAGE.red());
            println!("  {}", description.dimmed());
        }
    }

    Ok(())
}
