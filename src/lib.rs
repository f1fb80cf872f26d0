//! newschat - conversation session engine for an embedded news assistant
//!
//! This library implements the client-side core of a retrieval-backed
//! financial-news chat widget: message ordering, a single-flight
//! request/response cycle, a connection-health snapshot, unread
//! accounting, and failure recovery, all independent of how the widget
//! is painted on screen.
//!
//! # Architecture
//!
//! - `session`: the session engine, message model, connection monitor,
//!   and quick-action menu
//! - `client`: the answer-client boundary and its HTTP implementation
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli` / `commands`: the terminal driver around the engine
//!
//! # Example
//!
//! ```no_run
//! use newschat::client::HttpAnswerClient;
//! use newschat::config::Config;
//! use newschat::session::ChatSession;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let client = Arc::new(HttpAnswerClient::new(&config.service)?);
//!     let session = ChatSession::connect(client, config.session).await;
//!     session.dispatch("What's moving the market today?").await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use client::{AnswerClient, AnswerOutcome, AskOptions, HttpAnswerClient};
pub use config::Config;
pub use error::{NewschatError, Result};
pub use session::{ChatSession, ConnectionStatus, QuickActionMenu};
