//! UI Builder module for keyboard layouts and markup serialization
//!
//! Holds the closed set of callback action keys, the inline-keyboard data
//! model (the platform's nested-array JSON shape), and the process-lifetime
//! catalog of named layouts. Callback data values come straight from
//! `CallbackAction`, so the catalog and the dispatcher cannot drift apart.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

use crate::api_client::encode_query_value;
use crate::config::Config;

/// Routable callback-button actions. The string forms are the wire values
/// carried in `callback_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum CallbackAction {
    #[strum(serialize = "login")]
    Login,
    #[strum(serialize = "menu_today")]
    MenuToday,
    #[strum(serialize = "menu_tomorrow")]
    MenuTomorrow,
    #[strum(serialize = "feedback")]
    Feedback,
    #[strum(serialize = "sys_admin")]
    SysAdmin,
    #[strum(serialize = "upload_menu")]
    UploadMenu,
    #[strum(serialize = "log_out")]
    LogOut,
}

/// One inline-keyboard button: a label plus either a callback action key or
/// an external URL target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl InlineKeyboardButton {
    /// Button that dispatches a callback action when pressed
    pub fn callback(text: &str, action: CallbackAction) -> Self {
        Self {
            text: text.to_string(),
            callback_data: Some(action.as_ref().to_string()),
            url: None,
        }
    }

    /// Button that opens an external URL when pressed
    pub fn url(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            callback_data: None,
            url: Some(url.to_string()),
        }
    }
}

/// Ordered rows of buttons in the platform's nested-array shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }

    /// Render the pre-encoded `&reply_markup=<json>` query-string suffix
    /// consumed by the chat API operations
    pub fn markup_param(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(format!("&reply_markup={}", encode_query_value(&json)))
    }
}

/// Static registry of the named keyboard layouts, built once at startup
/// from configuration and never mutated
#[derive(Debug, Clone)]
pub struct KeyboardCatalog {
    main_menu: InlineKeyboardMarkup,
    login_menu: InlineKeyboardMarkup,
    sys_admin_menu: InlineKeyboardMarkup,
}

impl KeyboardCatalog {
    pub fn new(config: &Config) -> Self {
        // Percent-encode the configured authorization URL so the markup
        // embeds safely inside a query-string parameter
        let login_url = encode_query_value(&config.login_authorization_url);

        Self {
            main_menu: InlineKeyboardMarkup::new(vec![
                vec![InlineKeyboardButton::callback(
                    "Menu Today",
                    CallbackAction::MenuToday,
                )],
                vec![InlineKeyboardButton::callback(
                    "Menu Tomorrow",
                    CallbackAction::MenuTomorrow,
                )],
                vec![InlineKeyboardButton::callback(
                    "Feedback",
                    CallbackAction::Feedback,
                )],
                vec![InlineKeyboardButton::callback(
                    "System Admin",
                    CallbackAction::SysAdmin,
                )],
            ]),
            login_menu: InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
                "Login", &login_url,
            )]]),
            sys_admin_menu: InlineKeyboardMarkup::new(vec![
                vec![InlineKeyboardButton::callback(
                    "Upload Menu",
                    CallbackAction::UploadMenu,
                )],
                vec![InlineKeyboardButton::callback(
                    "Log Out",
                    CallbackAction::LogOut,
                )],
            ]),
        }
    }

    pub fn main_menu(&self) -> &InlineKeyboardMarkup {
        &self.main_menu
    }

    pub fn login_menu(&self) -> &InlineKeyboardMarkup {
        &self.login_menu
    }

    pub fn sys_admin_menu(&self) -> &InlineKeyboardMarkup {
        &self.sys_admin_menu
    }
}
