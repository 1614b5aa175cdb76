//! # Chat API Client Module
//!
//! Thin wrapper over the chat platform's HTTP API. Each operation is a
//! single GET against `{api_root}/bot{token}/<method>` with the parameters
//! in the query string, mirroring the platform's own contract.
//!
//! Response body, status, and reason are always logged. Non-2xx statuses
//! surface as `BotError::ChatApi`; transport failures (including the
//! request timeout) are retried a bounded number of times before becoming
//! `BotError::Transport`. The `extra` argument on every operation is an
//! already-encoded query-string suffix (leading `&` included) appended
//! verbatim — the caller owns its encoding.

use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};
use url::form_urlencoded;

use crate::config::Config;
use crate::errors::BotError;

/// Percent-encode a single query-string value (space becomes `+`)
pub fn encode_query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Client for the three chat-platform operations
#[derive(Debug, Clone)]
pub struct ChatApiClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl ChatApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url(),
            max_retries: config.http.max_retries,
            retry_delay: Duration::from_millis(config.http.retry_delay_ms),
        })
    }

    /// Post a text message to a chat
    pub async fn send_message(
        &self,
        chat_id: &str,
        text: &str,
        extra: Option<&str>,
    ) -> Result<(), BotError> {
        let query = format!(
            "chat_id={}&text={}{}",
            encode_query_value(chat_id),
            encode_query_value(text),
            extra.unwrap_or_default()
        );
        self.call("sendMessage", &query).await
    }

    /// Acknowledge a callback so the platform stops the button spinner.
    /// Must fire exactly once per callback_query_id, before or independent
    /// of any message edit.
    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        extra: Option<&str>,
    ) -> Result<(), BotError> {
        let query = format!(
            "callback_query_id={}{}",
            encode_query_value(callback_query_id),
            extra.unwrap_or_default()
        );
        self.call("answerCallbackQuery", &query).await
    }

    /// Rewrite an existing message's text and markup in place
    pub async fn edit_message_text(
        &self,
        chat_id: &str,
        text: &str,
        message_id: i64,
        extra: Option<&str>,
    ) -> Result<(), BotError> {
        let query = format!(
            "chat_id={}&message_id={}&text={}{}",
            encode_query_value(chat_id),
            message_id,
            encode_query_value(text),
            extra.unwrap_or_default()
        );
        self.call("editMessageText", &query).await
    }

    /// Standard two-step reply to a button press: acknowledge first, then
    /// edit the visible message. The edit fires even when the acknowledge
    /// fails; the acknowledge failure is logged, the edit result propagates.
    pub async fn respond_to_callback_query(
        &self,
        chat_id: &str,
        text: &str,
        message_id: i64,
        callback_query_id: &str,
        answer_extra: Option<&str>,
        edit_extra: Option<&str>,
    ) -> Result<(), BotError> {
        if let Err(err) = self.answer_callback_query(callback_query_id, answer_extra).await {
            warn!(
                callback_query_id,
                error = %err,
                "answerCallbackQuery failed, continuing with edit"
            );
        }

        self.edit_message_text(chat_id, text, message_id, edit_extra).await
    }

    /// Issue one GET, retrying transport failures. Non-2xx is not retried:
    /// the platform saw the request.
    async fn call(&self, method: &'static str, query: &str) -> Result<(), BotError> {
        let url = format!("{}/{}?{}", self.base_url, method, query);

        let mut attempt = 0;
        let response = loop {
            match self.client.get(&url).send().await {
                Ok(response) => break response,
                Err(err) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        method,
                        attempt,
                        error = %err,
                        "chat API transport failure, retrying"
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(err) => return Err(err.into()),
            }
        };

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("unknown");
        let body = response.text().await?;
        info!(method, status = status.as_u16(), reason, body = %body, "chat API response");

        if !status.is_success() {
            return Err(BotError::ChatApi {
                method,
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;

    /// Test percent-encoding of query values
    #[test]
    fn test_encode_query_value() {
        assert_eq!(encode_query_value("Mon Pasta"), "Mon+Pasta");
        assert_eq!(encode_query_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(
            encode_query_value("https://auth.example.com/login?client_id=1"),
            "https%3A%2F%2Fauth.example.com%2Flogin%3Fclient_id%3D1"
        );
    }

    /// Test that the client embeds the credential in its base URL
    #[test]
    fn test_client_base_url() {
        let config = Config {
            bot_token: "TEST".to_string(),
            api_root: "http://127.0.0.1:9999".to_string(),
            menu_service_url: String::new(),
            login_service_url: String::new(),
            upload_service_url: String::new(),
            login_authorization_url: String::new(),
            bind_address: String::new(),
            http: HttpConfig::default(),
        };

        let client = ChatApiClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:9999/botTEST");
    }
}
