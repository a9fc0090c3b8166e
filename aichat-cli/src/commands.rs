//! Conversation commands
//!
//! Each command writes its user-facing output to `out`. Failures are
//! reported there as diagnostics and never returned; only a failed write to
//! `out` itself is an error.

use std::io::{self, Write};

use aichat_core::config::Config;
use aichat_core::store::{CredentialStore, SessionStore};
use aichat_core::ChatExchange;
use aichat_providers::ConversationService;
use tracing::{debug, info};

pub const USAGE: &str = "Usage:
  start          - Create and save a new conversation ID
  send <query>   - Send a message with the saved conversation ID";

pub const MISSING_QUERY: &str = "Please provide a query after 'send'";

pub const UNKNOWN_COMMAND: &str =
    "Unknown command. Use 'start' to create a conversation or 'send <query>' to send a message.";

/// Print the usage text
pub fn usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", USAGE)
}

/// Create a conversation and persist its id
pub fn start(
    config: &Config,
    service: &dyn ConversationService,
    out: &mut impl Write,
) -> io::Result<()> {
    let token = match CredentialStore::from_config(&config.storage).get_credential() {
        Ok(token) => token,
        Err(e) => return writeln!(out, "{}", e),
    };

    let conversation_id = match service.create_conversation(&token) {
        Ok(id) => id,
        Err(e) => {
            debug!("Conversation creation failed: {:?}", e);
            return writeln!(out, "{}", e);
        }
    };

    let sessions = SessionStore::from_config(&config.storage);
    if let Err(e) = sessions.save_session(&conversation_id) {
        debug!("Could not persist conversation id: {}", e);
        return writeln!(out, "Failed to save conversation ID: {}", e);
    }

    info!("Started conversation {}", conversation_id);
    writeln!(out, "Conversation ID saved: {}", conversation_id)
}

/// Send one query within the stored conversation and print the answer
pub fn send(
    config: &Config,
    service: &dyn ConversationService,
    query: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    let token = match CredentialStore::from_config(&config.storage).get_credential() {
        Ok(token) => token,
        Err(e) => return writeln!(out, "{}", e),
    };

    // An absent session is sent as an empty id.
    let conversation_id = SessionStore::from_config(&config.storage).load_session();

    match service.run(&token, query, &conversation_id) {
        Ok(reply) => {
            let exchange = ChatExchange::response(reply.date, query, reply.answer);
            writeln!(out, "{}", exchange)
        }
        Err(e) => {
            debug!("Query failed: {:?}", e);
            writeln!(out, "{}", e)
        }
    }
}
