//! Conversation session core
//!
//! Everything that makes up one conversation with the assistant: the
//! message model, the session engine with its single-flight dispatch
//! cycle, the one-shot connection monitor, and the quick-action menu.

pub mod engine;
pub mod message;
pub mod monitor;
pub mod quick_actions;

pub use engine::{ChatSession, ConnectionStatus, CONNECTION_FALLBACK_TEXT, GENERIC_FAILURE_TEXT};
pub use message::{Message, MessageMetadata, Sender};
pub use monitor::{ConnectionMonitor, ProbeOutcome, OFFLINE_MESSAGE, UNREACHABLE_MESSAGE};
pub use quick_actions::{QuickAction, QuickActionMenu};
