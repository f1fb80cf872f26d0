//! One-shot connection health probe
//!
//! The monitor asks the answer service whether it can serve questions and
//! reports one of three outcomes. It runs exactly once, at session
//! creation; connectivity is a startup snapshot, not a live stream, and a
//! degraded result never blocks the conversation itself.

use crate::client::AnswerClient;
use std::sync::Arc;

/// Banner text when the probe settles with a structured failure
pub const UNREACHABLE_MESSAGE: &str = "Unable to connect to the news service";

/// Banner text when the probe itself errors out
pub const OFFLINE_MESSAGE: &str = "News service is offline";

/// Result of a single health probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The service reported itself healthy
    Healthy,
    /// The service answered the probe but reported itself unhealthy
    /// (including a `success: false` envelope)
    Unhealthy,
    /// The probe failed outright; carries the underlying description
    Offline(String),
}

/// Health probe over an answer client
pub struct ConnectionMonitor {
    client: Arc<dyn AnswerClient>,
}

impl ConnectionMonitor {
    /// Creates a monitor over the given client
    pub fn new(client: Arc<dyn AnswerClient>) -> Self {
        Self { client }
    }

    /// Runs the probe once and classifies the settlement
    pub async fn probe(&self) -> ProbeOutcome {
        match self.client.check_health().await {
            Ok(report) if report.healthy => {
                tracing::info!("News service probe: healthy");
                ProbeOutcome::Healthy
            }
            Ok(_) => {
                tracing::warn!("News service probe: service reported unhealthy");
                ProbeOutcome::Unhealthy
            }
            Err(e) => {
                let description = e.to_string();
                tracing::warn!("News service probe failed: {}", description);
                ProbeOutcome::Offline(description)
            }
        }
    }
}
