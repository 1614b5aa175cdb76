//! # Inbound Event Module
//!
//! Typed data model for the delivery envelope and the platform update it
//! carries. Decoding happens once at the boundary; a missing required field
//! becomes a `BotError::MalformedEvent` instead of a key-error somewhere in
//! a handler.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::BotError;

/// Queue-style delivery envelope: `Records[0].body` holds a JSON-encoded
/// platform update
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(rename = "Records")]
    pub records: Vec<Record>,
}

#[derive(Debug, Deserialize)]
pub struct Record {
    pub body: String,
}

/// One platform update: exactly one of the two variants populated
#[derive(Debug, Deserialize)]
pub struct Update {
    pub callback_query: Option<CallbackQuery>,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Inbound text message. `text` and `entities` are genuinely optional:
/// a message without text is dropped, and only messages carrying a
/// `bot_command` entity are routable.
#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub message_id: i64,
    pub from: Option<User>,
    pub text: Option<String>,
    pub entities: Option<Vec<MessageEntity>>,
}

impl Message {
    /// A message is a bot command only if at least one entity has kind
    /// `bot_command`
    pub fn is_bot_command(&self) -> bool {
        self.entities
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|entity| entity.kind == "bot_command")
    }
}

/// The message an inline keyboard was attached to
#[derive(Debug, Deserialize)]
pub struct CallbackMessage {
    pub chat: Chat,
    pub message_id: i64,
}

/// Inline-button press. `data` and `message` are required here: a callback
/// without them is unanswerable and decodes as a malformed event.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub data: String,
    pub message: CallbackMessage,
}

/// Decode the raw envelope text down to the update JSON. The raw `Value` is
/// kept alongside the typed `Update` because collaborator invocations
/// receive the full original body as payload.
pub fn decode_envelope(raw: &str) -> Result<(Value, Update), BotError> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    let record = envelope
        .records
        .first()
        .ok_or_else(|| BotError::MalformedEvent("envelope contains no records".to_string()))?;
    let body: Value = serde_json::from_str(&record.body)?;
    let update: Update = serde_json::from_value(body.clone())?;
    Ok((body, update))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(body: &str) -> String {
        serde_json::json!({ "Records": [{ "body": body }] }).to_string()
    }

    /// Test that a callback envelope decodes with all required fields
    #[test]
    fn test_decode_callback_envelope() {
        let body = r#"{"callback_query":{"id":"cq1","data":"menu_today","message":{"chat":{"id":42},"message_id":7}}}"#;
        let (_, update) = decode_envelope(&wrap(body)).unwrap();

        let query = update.callback_query.unwrap();
        assert_eq!(query.id, "cq1");
        assert_eq!(query.data, "menu_today");
        assert_eq!(query.message.chat.id, 42);
        assert_eq!(query.message.message_id, 7);
        assert!(update.message.is_none());
    }

    /// Test that a command message decodes and reports the command invariant
    #[test]
    fn test_decode_command_message() {
        let body = r#"{"message":{"chat":{"id":1},"message_id":2,"from":{"id":9},"text":"/start","entities":[{"type":"bot_command"}]}}"#;
        let (_, update) = decode_envelope(&wrap(body)).unwrap();

        let message = update.message.unwrap();
        assert_eq!(message.chat.id, 1);
        assert_eq!(message.text.as_deref(), Some("/start"));
        assert!(message.is_bot_command());
    }

    /// Test that a plain text message is not a bot command
    #[test]
    fn test_plain_message_is_not_command() {
        let body = r#"{"message":{"chat":{"id":1},"message_id":2,"from":{"id":9},"text":"hello"}}"#;
        let (_, update) = decode_envelope(&wrap(body)).unwrap();

        let message = update.message.unwrap();
        assert!(!message.is_bot_command());
    }

    /// Test that entities without a bot_command kind do not qualify
    #[test]
    fn test_non_command_entities() {
        let body = r#"{"message":{"chat":{"id":1},"message_id":2,"text":"see https://a.b","entities":[{"type":"url"}]}}"#;
        let (_, update) = decode_envelope(&wrap(body)).unwrap();

        assert!(!update.message.unwrap().is_bot_command());
    }

    /// Test that a message without text still decodes (dropped later)
    #[test]
    fn test_message_without_text_decodes() {
        let body = r#"{"message":{"chat":{"id":1},"message_id":2}}"#;
        let (_, update) = decode_envelope(&wrap(body)).unwrap();

        assert!(update.message.unwrap().text.is_none());
    }

    /// Test that a callback missing its data field is a malformed event
    #[test]
    fn test_callback_without_data_is_malformed() {
        let body = r#"{"callback_query":{"id":"cq1","message":{"chat":{"id":42},"message_id":7}}}"#;
        let err = decode_envelope(&wrap(body)).unwrap_err();

        assert!(matches!(err, BotError::MalformedEvent(_)));
    }

    /// Test that an empty Records array is a malformed event
    #[test]
    fn test_empty_records_is_malformed() {
        let err = decode_envelope(r#"{"Records":[]}"#).unwrap_err();

        assert!(matches!(err, BotError::MalformedEvent(_)));
    }

    /// Test that non-JSON input is a malformed event
    #[test]
    fn test_garbage_envelope_is_malformed() {
        let err = decode_envelope("not json at all").unwrap_err();

        assert!(matches!(err, BotError::MalformedEvent(_)));
    }
}
