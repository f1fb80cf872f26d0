//! Command handlers for the CLI
//!
//! This module provides the handlers invoked by the CLI entrypoint:
//!
//! - `chat`   — interactive chat session on the terminal
//! - `health` — one-shot service health probe
//!
//! These handlers are intentionally small and use the library components:
//! the answer client, the session engine, and the quick-action menu.

pub mod chat;
pub mod health;
