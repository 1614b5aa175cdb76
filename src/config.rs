//! # Configuration Module
//!
//! This module defines the startup configuration for the controller.
//! Required values (bot credential, collaborator endpoints, login URL) are
//! fatal when absent; tuning values fall back to documented defaults.
//! The struct is built once in `main` and passed by reference — there are
//! no module-level globals.

use std::env;

use anyhow::{Context, Result};

// Defaults for optional environment variables
pub const DEFAULT_API_ROOT: &str = "https://api.telegram.org";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

/// Outbound HTTP behavior shared by the chat API client and the
/// collaborator invokers
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Timeout for a single outbound request in seconds
    pub timeout_secs: u64,
    /// Extra attempts after a transport-level failure (timeout is retryable)
    pub max_retries: u32,
    /// Delay between retry attempts in milliseconds
    pub retry_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }
}

/// Process-lifetime configuration, read from the environment at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot credential embedded in the chat API base URL
    pub bot_token: String,
    /// Chat API root, overridable so tests can point at a mock server
    pub api_root: String,
    /// MenuService endpoint
    pub menu_service_url: String,
    /// LoginService endpoint (also serves the admin session check)
    pub login_service_url: String,
    /// UploadService endpoint (invoked outside this core)
    pub upload_service_url: String,
    /// Authorization endpoint shown behind the login button
    pub login_authorization_url: String,
    /// Webhook listen address
    pub bind_address: String,
    /// Outbound HTTP tuning
    pub http: HttpConfig,
}

impl Config {
    /// Read configuration from the environment. Required variables are
    /// fatal when absent; call after `dotenv::dotenv()`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bot_token: required("API_BOT_TOKEN")?,
            api_root: optional("TELEGRAM_API_ROOT", DEFAULT_API_ROOT),
            menu_service_url: required("MENU_SERVICE_URL")?,
            login_service_url: required("LOGIN_SERVICE_URL")?,
            upload_service_url: required("UPLOAD_SERVICE_URL")?,
            login_authorization_url: required("LOGIN_AUTHORIZATION_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            http: HttpConfig {
                timeout_secs: parsed("HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
                max_retries: parsed("HTTP_MAX_RETRIES", DEFAULT_MAX_RETRIES)?,
                retry_delay_ms: parsed("HTTP_RETRY_DELAY_MS", DEFAULT_RETRY_DELAY_MS)?,
            },
        })
    }

    /// Chat API base URL with the embedded bot credential
    pub fn api_base_url(&self) -> String {
        format!("{}/bot{}", self.api_root, self.bot_token)
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} must be set"))
}

fn optional(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{name} is not a valid number")),
        Err(_) => Ok(default),
    }
}
