//! Answer client boundary for newschat
//!
//! This module defines the `AnswerClient` trait that the session engine
//! consumes, along with the request/response types shared across client
//! implementations. The external retrieval/QA service answers free-text
//! questions about financial news; everything about how answers are
//! produced lives on the other side of this boundary.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;

pub use http::HttpAnswerClient;

/// Caller identity sent with every question.
pub const DEFAULT_USER_ID: &str = "anonymous";

/// Number of retrieved articles used as answer context.
///
/// Kept small to bound response latency.
pub const DEFAULT_CONTEXT_LIMIT: u32 = 3;

/// Request options for a single question
///
/// The session engine always sends the defaults; the fields exist so the
/// boundary contract is explicit and testable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskOptions {
    /// Caller identity forwarded to the service
    pub user_id: String,
    /// Whether source articles should accompany the answer
    pub include_sources: bool,
    /// Number of articles to retrieve as context (1..=20)
    pub context_limit: u32,
}

impl Default for AskOptions {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            include_sources: true,
            context_limit: DEFAULT_CONTEXT_LIMIT,
        }
    }
}

/// A source article cited by an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceArticle {
    /// Article headline
    pub title: String,
    /// Publication or feed the article came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Link to the article
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Publication timestamp as reported by the feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl SourceArticle {
    /// Creates a source article with just a title
    ///
    /// # Examples
    ///
    /// ```
    /// use newschat::client::SourceArticle;
    ///
    /// let article = SourceArticle::titled("Fed holds rates steady");
    /// assert_eq!(article.title, "Fed holds rates steady");
    /// assert!(article.url.is_none());
    /// ```
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: None,
            url: None,
            published_at: None,
        }
    }
}

/// A successful answer from the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// Generated answer text
    pub text: String,
    /// Articles used as retrieval context
    pub sources: Vec<SourceArticle>,
    /// How many articles were actually used
    pub context_used: u32,
    /// Server-side timestamp of the answer, when reported
    pub timestamp: Option<String>,
}

/// Settlement of an answer request, as a tagged variant
///
/// The service speaks a duck-typed envelope with a `success` flag; client
/// implementations convert it into this variant at the boundary so the
/// session engine never inspects the flag itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The service produced a real answer
    Answered(Answer),
    /// The service reported a failure instead of an answer
    Failed {
        /// Error text supplied by the service, when present
        message: Option<String>,
    },
}

impl AnswerOutcome {
    /// Returns true when the outcome carries a real answer
    ///
    /// # Examples
    ///
    /// ```
    /// use newschat::client::AnswerOutcome;
    ///
    /// let outcome = AnswerOutcome::Failed { message: None };
    /// assert!(!outcome.is_answered());
    /// ```
    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered(_))
    }
}

/// Health probe result
///
/// `healthy: false` covers both an explicit unhealthy report and a
/// `success: false` envelope; transport problems surface as errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    /// Whether the service reported itself able to answer questions
    pub healthy: bool,
}

/// Client trait for the external question-answering service
///
/// The session engine holds this as a trait object so tests can substitute
/// scripted fakes for the HTTP implementation.
#[async_trait]
pub trait AnswerClient: Send + Sync {
    /// Asks a question and returns the settled outcome
    ///
    /// # Arguments
    ///
    /// * `question` - Free-text question, already trimmed by the caller
    /// * `options` - Caller identity and retrieval bounds
    ///
    /// # Errors
    ///
    /// Returns error on transport failures or malformed responses; a
    /// service-reported failure is `Ok(AnswerOutcome::Failed { .. })`,
    /// not an error.
    async fn ask_question(&self, question: &str, options: &AskOptions) -> Result<AnswerOutcome>;

    /// Probes service health
    ///
    /// # Errors
    ///
    /// Returns error when the service cannot be reached at all.
    async fn check_health(&self) -> Result<HealthReport>;
}
