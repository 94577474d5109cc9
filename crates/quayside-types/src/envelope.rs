//! The response envelope and the success/failure rules around it.
//!
//! Two backend generations are in service: the current one answers with
//! `code: 200` and a `message`, the older one with `code: 20000` and a `msg`.
//! Both count as success.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Codes that mark an envelope as successful.
pub const SUCCESS_CODES: [i64; 2] = [200, 20000];

/// Failure codes that end the client-side session.
///
/// 50008: illegal token; 50012: logged in from another client; 50014: token expired.
pub const SESSION_INVALIDATING_CODES: [i64; 3] = [50008, 50012, 50014];

/// Message used when a failing envelope carries neither `message` nor `msg`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error";

/// Message used when a transport failure carries nothing better.
pub const GENERIC_TRANSPORT_MESSAGE: &str = "Request Error";

/// Returns true if `code` is one of the success codes.
pub fn is_success_code(code: i64) -> bool {
    SUCCESS_CODES.contains(&code)
}

/// Returns true if a decoded body is an object with a `code` field.
pub fn has_code_field(body: &Value) -> bool {
    body.as_object().is_some_and(|obj| obj.contains_key("code"))
}

/// The `{ code, message?, msg?, data }` wrapper a backend may apply to a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T = Value> {
    /// Status code; see [`SUCCESS_CODES`].
    pub code: i64,
    /// Human-readable message (current backend).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Human-readable message (older backend and mock layer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    /// Coarse status string (`"ok"`, `"fail"`) some producers attach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The payload.
    pub data: T,
}

impl<T> ResponseEnvelope<T> {
    /// Build an envelope with the given code and no messages.
    pub fn new(code: i64, data: T) -> Self {
        Self {
            code,
            message: None,
            msg: None,
            status: None,
            data,
        }
    }

    /// Whether this envelope reports success.
    pub fn is_success(&self) -> bool {
        is_success_code(self.code)
    }

    /// The message to surface for a failing envelope: `message`, then `msg`,
    /// then [`GENERIC_FAILURE_MESSAGE`].
    pub fn failure_message(&self) -> String {
        failure_message_of(self.message.as_deref(), self.msg.as_deref())
    }
}

/// Pick the failure message from the two message fields, skipping empty strings.
pub(crate) fn failure_message_of(message: Option<&str>, msg: Option<&str>) -> String {
    message
        .filter(|m| !m.is_empty())
        .or(msg.filter(|m| !m.is_empty()))
        .unwrap_or(GENERIC_FAILURE_MESSAGE)
        .to_string()
}
