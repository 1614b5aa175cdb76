//! # Application State Module
//!
//! Process-lifetime state shared by every invocation: the configuration,
//! the chat API client, the collaborator invokers, and the keyboard
//! catalog. Built once at startup and read-only afterwards, so concurrent
//! invocations can share it freely.

use anyhow::Result;

use crate::api_client::ChatApiClient;
use crate::bot::ui_builder::KeyboardCatalog;
use crate::config::Config;
use crate::services::Collaborators;

pub struct App {
    pub config: Config,
    pub chat: ChatApiClient,
    pub collaborators: Collaborators,
    pub keyboards: KeyboardCatalog,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let chat = ChatApiClient::new(&config)?;
        let collaborators = Collaborators::new(&config)?;
        let keyboards = KeyboardCatalog::new(&config);

        Ok(Self {
            config,
            chat,
            collaborators,
            keyboards,
        })
    }
}
