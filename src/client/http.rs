//! HTTP implementation of the answer client
//!
//! Talks to the news Q&A service over its JSON API: `POST /news-chat/ask`
//! for questions and `GET /news-chat/health` for the startup probe. The
//! service's `success`-flag envelope is converted into `AnswerOutcome`
//! here so nothing downstream ever branches on the raw flag.

use crate::client::{Answer, AnswerClient, AnswerOutcome, AskOptions, HealthReport, SourceArticle};
use crate::config::ServiceConfig;
use crate::error::{NewschatError, Result};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP answer client
///
/// # Examples
///
/// ```no_run
/// use newschat::client::{AnswerClient, AskOptions, HttpAnswerClient};
/// use newschat::config::ServiceConfig;
///
/// # async fn example() -> newschat::error::Result<()> {
/// let config = ServiceConfig {
///     base_url: "http://127.0.0.1:8000".to_string(),
///     timeout_seconds: 30,
/// };
/// let client = HttpAnswerClient::new(&config)?;
/// let outcome = client
///     .ask_question("What's moving tech stocks today?", &AskOptions::default())
///     .await?;
/// # let _ = outcome;
/// # Ok(())
/// # }
/// ```
pub struct HttpAnswerClient {
    client: Client,
    base_url: String,
}

/// Request body for /news-chat/ask
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AskRequest<'a> {
    question: &'a str,
    user_id: &'a str,
    include_sources: bool,
    context_limit: u32,
}

/// Response envelope from /news-chat/ask
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AskResponse {
    success: bool,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    sources: Option<Vec<SourceArticle>>,
    #[serde(default)]
    context_used: Option<u32>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Response envelope from /news-chat/health
#[derive(Debug, Deserialize)]
struct HealthResponse {
    success: bool,
    #[serde(default)]
    healthy: bool,
}

impl HttpAnswerClient {
    /// Create a new HTTP answer client
    ///
    /// # Arguments
    ///
    /// * `config` - Service endpoint and timeout settings
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    ///
    /// # Examples
    ///
    /// ```
    /// use newschat::client::HttpAnswerClient;
    /// use newschat::config::ServiceConfig;
    ///
    /// let client = HttpAnswerClient::new(&ServiceConfig::default());
    /// assert!(client.is_ok());
    /// ```
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("newschat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NewschatError::Service(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!("Initialized answer client: base_url={}", config.base_url);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured service base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AnswerClient for HttpAnswerClient {
    async fn ask_question(&self, question: &str, options: &AskOptions) -> Result<AnswerOutcome> {
        let url = format!("{}/news-chat/ask", self.base_url);
        tracing::debug!("Asking news service: {}", question);

        let body = AskRequest {
            question,
            user_id: &options.user_id,
            include_sources: options.include_sources,
            context_limit: options.context_limit,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Answer request failed to send: {}", e);
                NewschatError::Service(format!("Failed to reach news service: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("News service returned {}: {}", status, error_text);
            return Err(NewschatError::Service(format!(
                "News service returned {}: {}",
                status, error_text
            ))
            .into());
        }

        let envelope: AskResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse answer response: {}", e);
            NewschatError::Service(format!("Failed to parse answer response: {}", e))
        })?;

        Ok(convert_envelope(envelope))
    }

    async fn check_health(&self) -> Result<HealthReport> {
        let url = format!("{}/news-chat/health", self.base_url);
        tracing::debug!("Probing news service health: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!("Health probe failed to send: {}", e);
            NewschatError::Service(format!("Failed to reach news service: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewschatError::Service(format!(
                "Health endpoint returned {}",
                status
            ))
            .into());
        }

        let envelope: HealthResponse = response.json().await.map_err(|e| {
            NewschatError::Service(format!("Failed to parse health response: {}", e))
        })?;

        Ok(HealthReport {
            healthy: envelope.success && envelope.healthy,
        })
    }
}

/// Convert the wire envelope into the tagged outcome
///
/// A `success: true` envelope without answer text is treated as a failure;
/// the service only omits the answer when something went wrong upstream.
fn convert_envelope(envelope: AskResponse) -> AnswerOutcome {
    match (envelope.success, envelope.answer) {
        (true, Some(text)) => AnswerOutcome::Answered(Answer {
            text,
            sources: envelope.sources.unwrap_or_default(),
            context_used: envelope.context_used.unwrap_or(0),
            timestamp: envelope.timestamp,
        }),
        _ => AnswerOutcome::Failed {
            message: envelope.error,
        },
    }
}
