//! # Menubot Controller
//!
//! A webhook-driven chat-bot controller: inbound platform events (text
//! messages and inline-button callbacks) are classified, dispatched to
//! handlers through two independent action tables, and answered via the
//! chat platform's HTTP API. Business features (menu retrieval, login,
//! upload) live in external collaborators invoked with the original event
//! body as payload.

pub mod api_client;
pub mod app;
pub mod bot;
pub mod config;
pub mod errors;
pub mod server;
pub mod services;
pub mod update;
