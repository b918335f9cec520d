//! Decoding of backend response bodies.
//!
//! Shape faults are tolerated through documented defaults rather than
//! escalated: a decodable JSON body always yields a usable value. The
//! defaulting rules are part of the client's contract with the backend, not
//! an accident of field access.

use serde_json::Value;

use brain_core::types::{Citation, ExtractionRow, ScheduleSnapshot};

/// Text used for an assistant turn when the backend supplies no `answer`.
pub const PLACEHOLDER_ANSWER: &str = "No answer received from backend";

/// A decoded `/chat` response, ready to commit as an assistant message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub answer: String,
    pub citations: Vec<Citation>,
}

/// Decode a `/chat` response body.
///
/// Defaulting rules:
/// - `answer` missing or not a string → [`PLACEHOLDER_ANSWER`].
/// - `citations` missing or malformed → empty.
pub fn decode_chat_reply(body: &Value) -> ChatReply {
    let answer = body
        .get("answer")
        .and_then(Value::as_str)
        .unwrap_or(PLACEHOLDER_ANSWER)
        .to_string();
    let citations = body
        .get("citations")
        .and_then(|v| serde_json::from_value::<Vec<Citation>>(v.clone()).ok())
        .unwrap_or_default();
    ChatReply { answer, citations }
}

/// Decode a `/door-schedule` response body.
///
/// Defaulting rules:
/// - `rows` missing or malformed → empty.
/// - `note` missing or not a string → absent.
pub fn decode_schedule(body: &Value) -> ScheduleSnapshot {
    let rows = body
        .get("rows")
        .and_then(|v| serde_json::from_value::<Vec<ExtractionRow>>(v.clone()).ok())
        .unwrap_or_default();
    let note = body
        .get("note")
        .and_then(Value::as_str)
        .map(str::to_string);
    ScheduleSnapshot { rows, note }
}
