//! Quick-action menu
//!
//! A fixed, ordered menu of canned starter prompts shown above the chat
//! input. Selecting an entry funnels into the same dispatch path as free
//! text; the menu owns no state of its own. The `action_id` only keys menu
//! lookup; the label text is what gets dispatched, verbatim.

use crate::session::engine::ChatSession;
use serde::{Deserialize, Serialize};

/// One quick-action menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    /// Button label; also the exact text dispatched on selection
    pub label: String,
    /// Stable identifier for the entry
    pub action_id: String,
}

impl QuickAction {
    /// Creates a menu entry
    ///
    /// # Examples
    ///
    /// ```
    /// use newschat::session::QuickAction;
    ///
    /// let action = QuickAction::new("Latest News", "latest_news");
    /// assert_eq!(action.label, "Latest News");
    /// ```
    pub fn new(label: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action_id: action_id.into(),
        }
    }

    /// The product's default quick-action bar, in display order
    pub fn default_menu() -> Vec<QuickAction> {
        vec![
            QuickAction::new("Sentiment Check", "sentiment_check"),
            QuickAction::new("Market Pulse", "market_pulse"),
            QuickAction::new("Set Alerts", "set_alerts"),
            QuickAction::new("Trend Tracker", "trend_tracker"),
        ]
    }
}

/// Ordered quick-action menu bound to the dispatch path
#[derive(Debug, Clone)]
pub struct QuickActionMenu {
    actions: Vec<QuickAction>,
}

impl Default for QuickActionMenu {
    fn default() -> Self {
        Self::new(QuickAction::default_menu())
    }
}

impl QuickActionMenu {
    /// Creates a menu from configured entries
    pub fn new(actions: Vec<QuickAction>) -> Self {
        Self { actions }
    }

    /// All entries in display order
    pub fn actions(&self) -> &[QuickAction] {
        &self.actions
    }

    /// Looks up an entry by its identifier
    pub fn get(&self, action_id: &str) -> Option<&QuickAction> {
        self.actions.iter().find(|a| a.action_id == action_id)
    }

    /// Dispatches the entry's label through the session
    ///
    /// A no-op while a request is in flight, mirroring the engine's
    /// single-flight guard, and for unknown identifiers.
    pub async fn trigger(&self, session: &ChatSession, action_id: &str) {
        if session.is_awaiting_response() {
            tracing::debug!("Quick action ignored: a request is already in flight");
            return;
        }
        let Some(action) = self.get(action_id) else {
            tracing::warn!("Unknown quick action: {}", action_id);
            return;
        };
        session.dispatch(&action.label).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{Answer, AnswerClient, AnswerOutcome, AskOptions, HealthReport};
    use crate::config::SessionConfig;
    use crate::error::Result;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records every question it is asked and answers with a fixed reply
    struct RecordingClient {
        questions: Mutex<Vec<String>>,
    }

    impl RecordingClient {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                questions: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl AnswerClient for RecordingClient {
        async fn ask_question(&self, question: &str, _options: &AskOptions) -> Result<AnswerOutcome> {
            self.questions.lock().unwrap().push(question.to_string());
            Ok(AnswerOutcome::Answered(Answer {
                text: "canned reply".to_string(),
                sources: vec![],
                context_used: 0,
                timestamp: None,
            }))
        }

        async fn check_health(&self) -> Result<HealthReport> {
            Ok(HealthReport { healthy: true })
        }
    }

    #[test]
    fn test_default_menu_order() {
        let menu = QuickActionMenu::default();
        let ids: Vec<&str> = menu.actions().iter().map(|a| a.action_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["sentiment_check", "market_pulse", "set_alerts", "trend_tracker"]
        );
    }

    #[test]
    fn test_menu_lookup() {
        let menu = QuickActionMenu::default();
        assert_eq!(menu.get("market_pulse").unwrap().label, "Market Pulse");
        assert!(menu.get("nonexistent").is_none());
    }

    #[test]
    fn test_trigger_dispatches_label_verbatim() {
        let client = RecordingClient::new();
        let session = ChatSession::new(client.clone(), SessionConfig::default());
        let menu = QuickActionMenu::default();

        tokio_test::block_on(menu.trigger(&session, "sentiment_check"));

        assert_eq!(
            client.questions.lock().unwrap().as_slice(),
            ["Sentiment Check"]
        );
        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].text, "Sentiment Check");
        assert_eq!(messages[2].text, "canned reply");
    }

    #[test]
    fn test_trigger_equivalent_to_free_text_dispatch() {
        let menu = QuickActionMenu::new(vec![QuickAction::new("Latest News", "latest_news")]);

        let via_action = RecordingClient::new();
        let action_session = ChatSession::new(via_action.clone(), SessionConfig::default());
        tokio_test::block_on(menu.trigger(&action_session, "latest_news"));

        let via_text = RecordingClient::new();
        let text_session = ChatSession::new(via_text.clone(), SessionConfig::default());
        tokio_test::block_on(text_session.dispatch("Latest News"));

        assert_eq!(
            *via_action.questions.lock().unwrap(),
            *via_text.questions.lock().unwrap()
        );
        assert_eq!(action_session.message_count(), text_session.message_count());
    }

    #[test]
    fn test_trigger_unknown_id_is_noop() {
        let client = RecordingClient::new();
        let session = ChatSession::new(client.clone(), SessionConfig::default());
        let menu = QuickActionMenu::default();

        tokio_test::block_on(menu.trigger(&session, "set_alarms"));

        assert!(client.questions.lock().unwrap().is_empty());
        assert_eq!(session.message_count(), 1);
    }

    #[test]
    fn test_quick_action_wire_format() {
        let action = QuickAction::new("Trend Tracker", "trend_tracker");
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"actionId\":\"trend_tracker\""));
    }
}
