//! Callback Handler module for inline keyboard callback queries
//!
//! Every button press gets the same two-step reply: acknowledge the
//! callback (stops the client-side spinner), then edit the message it was
//! attached to. Unknown callback data falls through to the default no-op.

use std::str::FromStr;

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::ui_builder::CallbackAction;
use crate::app::App;
use crate::update::CallbackQuery;

/// Handle one inline-button press: parse the action key and dispatch
/// through the callback table
pub async fn handle_callback(app: &App, query: &CallbackQuery, body: &Value) -> Result<()> {
    let chat_id = query.message.chat.id.to_string();
    let message_id = query.message.message_id;

    info!(
        chat_id = %chat_id,
        callback_query_id = %query.id,
        callback_data = %query.data,
        "processing callback query"
    );

    match CallbackAction::from_str(&query.data) {
        Ok(CallbackAction::MenuToday) | Ok(CallbackAction::MenuTomorrow) => {
            get_menu(app, &chat_id, message_id, &query.id, body).await
        }
        Ok(CallbackAction::SysAdmin) => sys_admin(app, &chat_id, message_id, &query.id, body).await,
        Ok(action) => stub(action),
        Err(_) => default_action(&query.data),
    }
}

/// Fetch the menu from the MenuService and reply with date + menu text
async fn get_menu(
    app: &App,
    chat_id: &str,
    message_id: i64,
    callback_query_id: &str,
    body: &Value,
) -> Result<()> {
    let menu = match app.collaborators.menu(body).await {
        Ok(menu) => menu,
        Err(err) => {
            warn!(callback_query_id, error = %err, "menu service call failed");
            // Stop the button spinner even though no content is coming
            app.chat.answer_callback_query(callback_query_id, None).await?;
            return Err(err.into());
        }
    };

    let text = format!("{}{}", menu.date, menu.menu);
    app.chat
        .respond_to_callback_query(chat_id, &text, message_id, callback_query_id, None, None)
        .await?;
    Ok(())
}

/// Check the admin session with the LoginService and show the matching menu
async fn sys_admin(
    app: &App,
    chat_id: &str,
    message_id: i64,
    callback_query_id: &str,
    body: &Value,
) -> Result<()> {
    let session = match app.collaborators.session(body).await {
        Ok(session) => session,
        Err(err) => {
            warn!(callback_query_id, error = %err, "login service call failed");
            app.chat.answer_callback_query(callback_query_id, None).await?;
            return Err(err.into());
        }
    };

    if session.is_logged_in {
        display_sys_admin_menu(app, chat_id, message_id, callback_query_id).await
    } else {
        display_login_menu(app, chat_id, message_id, callback_query_id).await
    }
}

/// Replace the pressed message with the system-admin menu
async fn display_sys_admin_menu(
    app: &App,
    chat_id: &str,
    message_id: i64,
    callback_query_id: &str,
) -> Result<()> {
    let params = app.keyboards.sys_admin_menu().markup_param()?;
    app.chat
        .respond_to_callback_query(
            chat_id,
            "System Admin. Please select a menu option.",
            message_id,
            callback_query_id,
            None,
            Some(&params),
        )
        .await?;
    Ok(())
}

/// Replace the pressed message with the login menu
async fn display_login_menu(
    app: &App,
    chat_id: &str,
    message_id: i64,
    callback_query_id: &str,
) -> Result<()> {
    let params = app.keyboards.login_menu().markup_param()?;
    app.chat
        .respond_to_callback_query(
            chat_id,
            "Login Menu. Please login to access System Admin features.",
            message_id,
            callback_query_id,
            None,
            Some(&params),
        )
        .await?;
    Ok(())
}

/// Actions whose real behavior lives in external collaborators: nothing to
/// do in this core
fn stub(action: CallbackAction) -> Result<()> {
    debug!(action = action.as_ref(), "action handled outside this core, ignoring");
    Ok(())
}

/// Universal fallback for unmatched callback data: no outbound call, no error
fn default_action(data: &str) -> Result<()> {
    debug!(callback_data = data, "no handler for callback data, ignoring");
    Ok(())
}
