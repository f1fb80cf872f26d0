//! Conversation session engine
//!
//! `ChatSession` owns everything mutable about one conversation: the
//! append-only message sequence, the single-flight dispatch cycle, the
//! connection-status snapshot, unread accounting, and the most recent
//! error. One widget instance owns one session; there is no persistence
//! and no cross-session sharing.
//!
//! Failures are absorbed here by design. `dispatch` never returns an
//! error: a failed request settles into a fallback assistant message plus
//! `last_error`, and the conversation stays usable.

use crate::client::{AnswerClient, AnswerOutcome, AskOptions};
use crate::config::SessionConfig;
use crate::session::message::{Message, MessageMetadata};
use crate::session::monitor::{ConnectionMonitor, ProbeOutcome, OFFLINE_MESSAGE, UNREACHABLE_MESSAGE};
use std::sync::{Arc, RwLock};

/// Transcript fallback when the answer request cannot reach the service
pub const CONNECTION_FALLBACK_TEXT: &str =
    "I'm having trouble connecting to the news service right now. Please try again later.";

/// Transcript fallback when the service reports a failure without any
/// error text of its own
pub const GENERIC_FAILURE_TEXT: &str =
    "Sorry, I ran into a problem answering that. Please try again.";

/// Connection status snapshot for the life of a session
///
/// Transitions one way, `Checking` into either settled state, and never
/// returns to `Checking`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Probe has not settled yet
    #[default]
    Checking,
    /// Probe settled healthy
    Connected,
    /// Probe settled unhealthy or failed
    Disconnected,
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checking => write!(f, "checking"),
            Self::Connected => write!(f, "connected"),
            Self::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// Mutable state block, guarded by the session's lock
struct SessionState {
    messages: Vec<Message>,
    is_awaiting_response: bool,
    is_panel_open: bool,
    unread_count: u32,
    connection_status: ConnectionStatus,
    last_error: Option<String>,
    /// Generation tag; bumped by `new_conversation` so a stale in-flight
    /// settlement can be detected and discarded
    epoch: u64,
}

/// A single conversation session
///
/// Construct with [`ChatSession::connect`] in production (runs the health
/// probe once) or [`ChatSession::new`] when the probe is not wanted, as in
/// most tests. All methods take `&self`; state lives behind an internal
/// lock that is never held across an await, so observers on other tasks
/// see `is_awaiting_response` bracket the in-flight interval exactly.
///
/// # Examples
///
/// ```
/// use newschat::config::SessionConfig;
/// use newschat::session::ChatSession;
/// # use newschat::client::{AnswerClient, AnswerOutcome, AskOptions, HealthReport};
/// # use async_trait::async_trait;
/// # struct NoopClient;
/// # #[async_trait]
/// # impl AnswerClient for NoopClient {
/// #     async fn ask_question(&self, _question: &str, _options: &AskOptions) -> newschat::error::Result<AnswerOutcome> {
/// #         Ok(AnswerOutcome::Failed { message: None })
/// #     }
/// #     async fn check_health(&self) -> newschat::error::Result<HealthReport> {
/// #         Ok(HealthReport { healthy: true })
/// #     }
/// # }
///
/// let session = ChatSession::new(std::sync::Arc::new(NoopClient), SessionConfig::default());
/// assert_eq!(session.message_count(), 1);
/// assert!(!session.is_awaiting_response());
/// ```
pub struct ChatSession {
    state: RwLock<SessionState>,
    client: Arc<dyn AnswerClient>,
    greeting: String,
    ask_options: AskOptions,
}

impl ChatSession {
    /// Creates a session without probing the service
    ///
    /// The connection status stays `Checking`. Production code should use
    /// [`ChatSession::connect`] instead.
    pub fn new(client: Arc<dyn AnswerClient>, config: SessionConfig) -> Self {
        let greeting = config.greeting.clone();
        Self {
            state: RwLock::new(SessionState {
                messages: vec![Message::assistant(greeting.as_str())],
                is_awaiting_response: false,
                is_panel_open: false,
                unread_count: 0,
                connection_status: ConnectionStatus::Checking,
                last_error: None,
                epoch: 0,
            }),
            client,
            greeting,
            ask_options: config.ask_options(),
        }
    }

    /// Creates a session and runs the health probe exactly once
    ///
    /// A degraded probe result records `Disconnected` plus a banner
    /// message in `last_error`; it does not block the conversation.
    pub async fn connect(client: Arc<dyn AnswerClient>, config: SessionConfig) -> Self {
        let session = Self::new(client.clone(), config);
        let outcome = ConnectionMonitor::new(client).probe().await;
        session.apply_probe(outcome);
        session
    }

    fn apply_probe(&self, outcome: ProbeOutcome) {
        let Ok(mut state) = self.state.write() else {
            return;
        };
        match outcome {
            ProbeOutcome::Healthy => {
                state.connection_status = ConnectionStatus::Connected;
            }
            ProbeOutcome::Unhealthy => {
                state.connection_status = ConnectionStatus::Disconnected;
                state.last_error = Some(UNREACHABLE_MESSAGE.to_string());
            }
            ProbeOutcome::Offline(description) => {
                tracing::debug!("Probe transport failure: {}", description);
                state.connection_status = ConnectionStatus::Disconnected;
                state.last_error = Some(OFFLINE_MESSAGE.to_string());
            }
        }
    }

    /// Sends one user turn through the request/response cycle
    ///
    /// A no-op when the trimmed text is empty or another request is still
    /// in flight (single-flight guard). Otherwise appends the user message
    /// immediately, awaits the answer client, and appends exactly one
    /// assistant message at settlement; the message sequence therefore
    /// alternates strictly between user and assistant turns.
    pub async fn dispatch(&self, raw_text: &str) {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return;
        }

        let epoch_at_send = {
            let Ok(mut state) = self.state.write() else {
                return;
            };
            if state.is_awaiting_response {
                tracing::debug!("Dispatch ignored: a request is already in flight");
                return;
            }
            state.messages.push(Message::user(trimmed));
            state.is_awaiting_response = true;
            state.last_error = None;
            state.epoch
        };

        tracing::debug!("Dispatching question: {}", trimmed);
        let result = self.client.ask_question(trimmed, &self.ask_options).await;

        let Ok(mut state) = self.state.write() else {
            return;
        };
        if state.epoch != epoch_at_send {
            tracing::warn!("Discarding settlement from a superseded conversation");
            return;
        }

        let (reply, error) = match result {
            Ok(AnswerOutcome::Answered(answer)) => {
                let metadata = answer.timestamp.map(|timestamp| MessageMetadata {
                    context_used: answer.context_used,
                    timestamp,
                });
                (
                    Message::assistant_with_context(answer.text, answer.sources, metadata),
                    None,
                )
            }
            Ok(AnswerOutcome::Failed { message }) => {
                let text = message.unwrap_or_else(|| GENERIC_FAILURE_TEXT.to_string());
                (Message::assistant(text.as_str()), Some(text))
            }
            Err(e) => {
                let description = e.to_string();
                tracing::error!("Answer request failed: {}", description);
                (Message::assistant(CONNECTION_FALLBACK_TEXT), Some(description))
            }
        };

        state.messages.push(reply);
        if let Some(err) = error {
            state.last_error = Some(err);
        }
        state.is_awaiting_response = false;
        if !state.is_panel_open {
            state.unread_count += 1;
        }
    }

    /// Opens the panel: zeroes the unread count and clears the error banner
    pub fn open_panel(&self) {
        if let Ok(mut state) = self.state.write() {
            state.is_panel_open = true;
            state.unread_count = 0;
            state.last_error = None;
        }
    }

    /// Closes the panel; assistant messages start counting as unread again
    pub fn close_panel(&self) {
        if let Ok(mut state) = self.state.write() {
            state.is_panel_open = false;
        }
    }

    /// Starts a fresh conversation
    ///
    /// Replaces the transcript with a single greeting, clears the error
    /// banner, and bumps the session epoch so a still-in-flight request
    /// settles into nothing. Connection status and the unread count are
    /// untouched.
    pub fn new_conversation(&self) {
        if let Ok(mut state) = self.state.write() {
            state.messages = vec![Message::assistant(self.greeting.as_str())];
            state.last_error = None;
            state.epoch += 1;
            state.is_awaiting_response = false;
        }
    }

    /// Snapshot of the message sequence
    pub fn messages(&self) -> Vec<Message> {
        self.state
            .read()
            .map(|state| state.messages.clone())
            .unwrap_or_default()
    }

    /// Number of messages in the sequence
    pub fn message_count(&self) -> usize {
        self.state.read().map(|state| state.messages.len()).unwrap_or(0)
    }

    /// True while a request is in flight
    pub fn is_awaiting_response(&self) -> bool {
        self.state
            .read()
            .map(|state| state.is_awaiting_response)
            .unwrap_or(false)
    }

    /// True while the panel is open
    pub fn is_panel_open(&self) -> bool {
        self.state
            .read()
            .map(|state| state.is_panel_open)
            .unwrap_or(false)
    }

    /// Assistant messages that arrived while the panel was closed
    pub fn unread_count(&self) -> u32 {
        self.state.read().map(|state| state.unread_count).unwrap_or(0)
    }

    /// Connection status snapshot taken at session start
    pub fn connection_status(&self) -> ConnectionStatus {
        self.state
            .read()
            .map(|state| state.connection_status)
            .unwrap_or_default()
    }

    /// Most recent failure description, if any
    pub fn last_error(&self) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.last_error.clone())
    }
}
