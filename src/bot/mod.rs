//! Bot module for routing inbound platform events
//!
//! This module is split into several submodules:
//! - `message_handler`: text messages and the command table
//! - `callback_handler`: inline keyboard callback queries and their handlers
//! - `ui_builder`: keyboard layouts and markup serialization
//!
//! The entry point is [`handle_envelope`]: it classifies one delivered
//! envelope and contains every failure. Nothing propagates back to the
//! transport — a redelivered event would just fail the same way again.

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

use anyhow::Result;
use tracing::{debug, error};

use crate::app::App;
use crate::update::decode_envelope;

/// Route one raw inbound envelope. Errors are logged with full context and
/// swallowed so the invoking transport always sees success.
pub async fn handle_envelope(app: &App, raw: &str) {
    if let Err(err) = route_envelope(app, raw).await {
        error!(error = %err, envelope = raw, "error occurred while handling event");
    }
}

/// Classify the envelope's update and dispatch it. Callback queries win
/// over messages; an update carrying neither is dropped silently.
async fn route_envelope(app: &App, raw: &str) -> Result<()> {
    let (body, update) = decode_envelope(raw)?;

    if let Some(query) = update.callback_query {
        callback_handler::handle_callback(app, &query, &body).await
    } else if let Some(message) = update.message {
        message_handler::handle_message(app, &message).await
    } else {
        debug!("update carries neither message nor callback query, dropping");
        Ok(())
    }
}
