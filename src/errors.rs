//! # Error Types Module
//!
//! This module defines the error taxonomy used throughout the controller.
//! Routing failures, chat-platform failures, and collaborator failures are
//! distinct variants so each call site can decide between
//! log-and-continue and escalation.

/// Custom error types for controller operations
#[derive(Debug, Clone)]
pub enum BotError {
    /// Inbound envelope or update failed to decode
    MalformedEvent(String),
    /// Chat platform answered with a non-2xx status
    ChatApi { method: &'static str, status: u16 },
    /// Transport-level failure (connect, timeout, body read)
    Transport(String),
    /// External collaborator failed or returned an unusable payload
    Collaborator {
        service: &'static str,
        detail: String,
    },
}

impl std::fmt::Display for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotError::MalformedEvent(msg) => write!(f, "Malformed event: {msg}"),
            BotError::ChatApi { method, status } => {
                write!(f, "Chat API error: {method} returned status {status}")
            }
            BotError::Transport(msg) => write!(f, "Transport error: {msg}"),
            BotError::Collaborator { service, detail } => {
                write!(f, "Collaborator error: {service}: {detail}")
            }
        }
    }
}

impl std::error::Error for BotError {}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        BotError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for BotError {
    fn from(err: serde_json::Error) -> Self {
        BotError::MalformedEvent(err.to_string())
    }
}
