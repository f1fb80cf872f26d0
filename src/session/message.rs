//! Conversation message types
//!
//! One immutable record per conversation turn. Messages are append-only:
//! the engine never mutates a message after creating it, and ordering is
//! positional in the session's message sequence. The transient typing
//! indicator shown while a request is in flight is a render-time overlay,
//! never a stored message.

use crate::client::SourceArticle;
use serde::{Deserialize, Serialize};

/// Sender role of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// Turn typed (or quick-action triggered) by the user
    User,
    /// Turn produced by the assistant, including greetings and fallbacks
    Assistant,
}

/// Retrieval metadata attached to answered assistant turns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageMetadata {
    /// Number of articles the service used as context
    pub context_used: u32,
    /// Server-side answer timestamp
    pub timestamp: String,
}

/// A single turn in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display text of the turn
    pub text: String,
    /// Who produced the turn
    pub sender: Sender,
    /// Source articles cited by the answer, when retrieval was used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceArticle>>,
    /// Retrieval metadata, when the service reported it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
    /// Creation instant in Unix milliseconds (display metadata; ordering
    /// is positional in the message sequence)
    pub timestamp_ms: i64,
}

impl Message {
    /// Creates a new user message
    ///
    /// # Examples
    ///
    /// ```
    /// use newschat::session::{Message, Sender};
    ///
    /// let msg = Message::user("What's AAPL doing today?");
    /// assert_eq!(msg.sender, Sender::User);
    /// assert!(msg.sources.is_none());
    /// ```
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            sources: None,
            metadata: None,
            timestamp_ms: now_ms(),
        }
    }

    /// Creates a new assistant message without retrieval context
    ///
    /// Used for greetings and fallback replies.
    ///
    /// # Examples
    ///
    /// ```
    /// use newschat::session::{Message, Sender};
    ///
    /// let msg = Message::assistant("Hi! How can I help?");
    /// assert_eq!(msg.sender, Sender::Assistant);
    /// ```
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
            sources: None,
            metadata: None,
            timestamp_ms: now_ms(),
        }
    }

    /// Creates an assistant message carrying retrieval context
    ///
    /// # Arguments
    ///
    /// * `text` - Answer text
    /// * `sources` - Cited source articles
    /// * `metadata` - Retrieval metadata reported by the service
    pub fn assistant_with_context(
        text: impl Into<String>,
        sources: Vec<SourceArticle>,
        metadata: Option<MessageMetadata>,
    ) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
            sources: if sources.is_empty() {
                None
            } else {
                Some(sources)
            },
            metadata,
            timestamp_ms: now_ms(),
        }
    }

    /// Returns true for user turns
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let msg = Message::user("Tell me about recent market trends");
        assert!(msg.is_user());
        assert_eq!(msg.text, "Tell me about recent market trends");
        assert!(msg.sources.is_none());
        assert!(msg.metadata.is_none());
        assert!(msg.timestamp_ms > 0);
    }

    #[test]
    fn test_assistant_message() {
        let msg = Message::assistant("Markets were mixed today.");
        assert!(!msg.is_user());
        assert!(msg.sources.is_none());
    }

    #[test]
    fn test_assistant_with_context() {
        let sources = vec![SourceArticle::titled("Tech stocks slide")];
        let metadata = MessageMetadata {
            context_used: 1,
            timestamp: "2024-03-01T12:00:00Z".to_string(),
        };
        let msg = Message::assistant_with_context("Tech is down.", sources, Some(metadata));
        assert_eq!(msg.sources.as_ref().unwrap().len(), 1);
        assert_eq!(msg.metadata.as_ref().unwrap().context_used, 1);
    }

    #[test]
    fn test_assistant_with_empty_sources_stores_none() {
        let msg = Message::assistant_with_context("No articles matched.", vec![], None);
        assert!(msg.sources.is_none());
    }

    #[test]
    fn test_message_serialization_skips_empty_optionals() {
        let msg = Message::user("hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("sources"));
        assert!(!json.contains("metadata"));
    }
}
