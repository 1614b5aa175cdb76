//! Message Handler module for inbound text messages
//!
//! Only bot commands are routable: a message without text is dropped, and
//! so is one whose entities carry no `bot_command` kind. Unknown commands
//! fall through to the default no-op — not an error.

use std::str::FromStr;

use anyhow::Result;
use strum_macros::EnumString;
use tracing::{debug, info};

use crate::app::App;
use crate::update::Message;

/// Routable slash commands. Commands and callback actions are independent
/// namespaces with independent tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Command {
    #[strum(serialize = "/start")]
    Start,
    #[strum(serialize = "/menu")]
    Menu,
}

/// Handle one inbound message: gate on text and the bot-command invariant,
/// then dispatch through the command table
pub async fn handle_message(app: &App, message: &Message) -> Result<()> {
    let Some(text) = message.text.as_deref() else {
        debug!(chat_id = message.chat.id, "message without text, dropping");
        return Ok(());
    };

    if !message.is_bot_command() {
        debug!(chat_id = message.chat.id, "message is not a bot command, dropping");
        return Ok(());
    }

    let chat_id = message.chat.id.to_string();
    let user_id = message.from.as_ref().map(|from| from.id);
    info!(chat_id = %chat_id, user_id = ?user_id, command = text, "processing command");

    match Command::from_str(text) {
        Ok(Command::Start) | Ok(Command::Menu) => show_main_menu(app, &chat_id).await,
        Err(_) => default_action(text),
    }
}

/// Send the greeting with the main-menu keyboard
pub async fn show_main_menu(app: &App, chat_id: &str) -> Result<()> {
    let params = app.keyboards.main_menu().markup_param()?;
    app.chat
        .send_message(
            chat_id,
            "Main Menu. Please select a menu option.",
            Some(&params),
        )
        .await?;
    Ok(())
}

/// Universal fallback for unmatched command text: no outbound call, no error
fn default_action(text: &str) -> Result<()> {
    debug!(command = text, "no handler for command, ignoring");
    Ok(())
}
