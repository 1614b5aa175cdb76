//! # External Collaborators Module
//!
//! Invokers for the three business services this controller delegates to.
//! Each call POSTs the full original update body as JSON and decodes a
//! typed response. The services are black boxes: menu content, login and
//! session state, and upload handling live entirely behind them.

use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::errors::BotError;

/// MenuService response
#[derive(Debug, Deserialize)]
pub struct MenuResponse {
    pub date: String,
    pub menu: String,
}

/// LoginService session-check response
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub is_logged_in: bool,
}

/// Clients for the configured collaborator endpoints
#[derive(Debug, Clone)]
pub struct Collaborators {
    client: reqwest::Client,
    menu_url: String,
    login_url: String,
    // Carried for the upload flow, which is dispatched outside this core
    #[allow(dead_code)]
    upload_url: String,
}

impl Collaborators {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            menu_url: config.menu_service_url.clone(),
            login_url: config.login_service_url.clone(),
            upload_url: config.upload_service_url.clone(),
        })
    }

    /// Fetch the menu for the event carried in `body`
    pub async fn menu(&self, body: &Value) -> Result<MenuResponse, BotError> {
        self.invoke("menu", &self.menu_url, body).await
    }

    /// Check whether the event's sender holds an admin session
    pub async fn session(&self, body: &Value) -> Result<SessionResponse, BotError> {
        self.invoke("login", &self.login_url, body).await
    }

    async fn invoke<T: for<'de> Deserialize<'de>>(
        &self,
        service: &'static str,
        url: &str,
        body: &Value,
    ) -> Result<T, BotError> {
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::Collaborator {
                service,
                detail: format!("status {}", status.as_u16()),
            });
        }

        let payload = response.text().await?;
        info!(service, payload = %payload, "collaborator response");

        serde_json::from_str(&payload).map_err(|err| BotError::Collaborator {
            service,
            detail: format!("unusable payload: {err}"),
        })
    }
}
