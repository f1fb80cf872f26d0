//! Interactive chat session handler
//!
//! Drives the session engine from a readline loop. The terminal
//! transcript is always visible, so the panel is opened at startup and
//! unread accounting stays dormant here; it belongs to the floating
//! widget rendering of the same engine.

use crate::client::HttpAnswerClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::message::{Message, Sender};
use crate::session::{ChatSession, ConnectionStatus, QuickActionMenu};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;

/// Start an interactive chat session
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
///
/// # Errors
///
/// Returns error if the HTTP client or the line editor cannot be
/// constructed; conversation failures are absorbed by the session and
/// surface as fallback messages in the transcript.
pub async fn run_chat(config: Config) -> Result<()> {
    let client = Arc::new(HttpAnswerClient::new(&config.service)?);
    let menu = QuickActionMenu::new(config.quick_actions.clone());
    let session = ChatSession::connect(client, config.session).await;

    // A terminal transcript has no closed state
    session.open_panel();

    print_banner(&session);

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                rl.add_history_entry(trimmed)?;

                match trimmed {
                    "/quit" | "/exit" => break,
                    "/new" => {
                        session.new_conversation();
                        println!();
                        print_latest_reply(&session);
                        continue;
                    }
                    "/status" => {
                        print_status(&session);
                        continue;
                    }
                    "/actions" => {
                        print_actions(&menu);
                        continue;
                    }
                    "/help" => {
                        print_help();
                        continue;
                    }
                    _ => {}
                }

                if let Some(index) = trimmed.strip_prefix("/a ") {
                    match index
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| menu.actions().get(n.checked_sub(1)?))
                    {
                        Some(action) => {
                            let action_id = action.action_id.clone();
                            println!("{}", format!("[{}]", action.label).cyan());
                            show_typing_overlay();
                            menu.trigger(&session, &action_id).await;
                            print_latest_reply(&session);
                        }
                        None => println!("Unknown action. Use /actions to list the menu."),
                    }
                    continue;
                }

                show_typing_overlay();
                session.dispatch(trimmed).await;
                print_latest_reply(&session);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("Bye!");
    Ok(())
}

fn print_banner(session: &ChatSession) {
    println!();
    println!("{}", "newschat - financial news assistant".bold());
    print_status(session);
    println!("Type /help for commands.");
    println!();
    print_latest_reply(session);
}

fn print_status(session: &ChatSession) {
    let status = session.connection_status();
    let label = match status {
        ConnectionStatus::Connected => status.to_string().green(),
        ConnectionStatus::Checking => status.to_string().yellow(),
        ConnectionStatus::Disconnected => status.to_string().red(),
    };
    println!("Service: {}", label);
    if let Some(error) = session.last_error() {
        println!("{}", error.yellow());
    }
}

fn print_actions(menu: &QuickActionMenu) {
    println!("Quick actions:");
    for (index, action) in menu.actions().iter().enumerate() {
        println!("  {}. {}", index + 1, action.label);
    }
    println!("Trigger one with /a <number>.");
}

fn print_help() {
    println!("Commands:");
    println!("  /new      start a new conversation");
    println!("  /actions  list quick actions");
    println!("  /a <n>    trigger quick action n");
    println!("  /status   show connection status");
    println!("  /quit     leave the chat");
}

/// The typing indicator is a render-time overlay, never part of the
/// transcript
fn show_typing_overlay() {
    println!("{}", "assistant is typing...".dimmed());
}

fn print_latest_reply(session: &ChatSession) {
    let messages = session.messages();
    if let Some(message) = messages.iter().rev().find(|m| m.sender == Sender::Assistant) {
        print_assistant_message(message);
    }
    if let Some(error) = session.last_error() {
        println!("{}", error.yellow());
    }
}

fn print_assistant_message(message: &Message) {
    println!("{} {}", "assistant>".purple().bold(), message.text);
    if let Some(sources) = &message.sources {
        for source in sources {
            match &source.url {
                Some(url) => println!("  {} {} ({})", "-".dimmed(), source.title.dimmed(), url.dimmed()),
                None => println!("  {} {}", "-".dimmed(), source.title.dimmed()),
            }
        }
    }
    println!();
}
