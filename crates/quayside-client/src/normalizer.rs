//! Response shape reconciliation and failure classification.
//!
//! Backends answer in one of three shapes: a bare payload with no `code`
//! field, a `{code, message?, msg?, data}` envelope, or (for auth endpoints)
//! something the caller wants to inspect whole. [`ResponseNormalizer`]
//! reduces all of them to a [`Normalized`] value or an
//! [`ApplicationFailure`].

use quayside_types::endpoints::{is_auth_endpoint, is_user_info};
use quayside_types::{
    GENERIC_TRANSPORT_MESSAGE, ResponseEnvelope, SESSION_INVALIDATING_CODES, TransportResponse,
    has_code_field,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// What reaches the caller after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Auth endpoint: the whole transport response, untouched.
    Transport(TransportResponse),
    /// No `code` field: the body as sent.
    Raw(Value),
    /// Successful envelope: its `data`.
    Data(Value),
}

impl Normalized {
    /// The payload: the body for [`Normalized::Transport`], the value otherwise.
    pub fn into_value(self) -> Value {
        match self {
            Normalized::Transport(response) => response.body,
            Normalized::Raw(value) | Normalized::Data(value) => value,
        }
    }

    /// Decode the payload into `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.into_value())?)
    }

    /// The transport response, if this came from an auth endpoint.
    pub fn into_transport(self) -> Option<TransportResponse> {
        match self {
            Normalized::Transport(response) => Some(response),
            _ => None,
        }
    }
}

/// An envelope whose code is not a success code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationFailure {
    pub code: i64,
    pub message: String,
}

impl From<ApplicationFailure> for Error {
    fn from(failure: ApplicationFailure) -> Self {
        Error::Application {
            code: failure.code,
            message: failure.message,
        }
    }
}

/// Stateless classifier for completed responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Reduce a 2xx response to what the caller sees.
    ///
    /// Auth endpoints pass through whole, bodies without a `code` field
    /// pass through raw, and envelopes are unwrapped by the dual success
    /// convention.
    pub fn normalize(
        &self,
        path: &str,
        response: TransportResponse,
    ) -> std::result::Result<Normalized, ApplicationFailure> {
        if is_auth_endpoint(path) {
            return Ok(Normalized::Transport(response));
        }
        if !has_code_field(&response.body) {
            return Ok(Normalized::Raw(response.body));
        }

        let envelope = envelope_of(response.body);
        if envelope.is_success() {
            Ok(Normalized::Data(envelope.data))
        } else {
            Err(ApplicationFailure {
                code: envelope.code,
                message: envelope.failure_message(),
            })
        }
    }

    /// Message for a transport-level failure.
    ///
    /// Priority: the body's `detail` (a string, or the first item's `msg`
    /// for validation arrays), `message`, `msg`, the transport error text,
    /// and finally `"Request Error"`. Empty strings are skipped.
    pub fn transport_message(&self, body: Option<&Value>, error_text: Option<&str>) -> String {
        let field = |key: &str| {
            body.and_then(|b| b.get(key))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        detail_message(body)
            .or_else(|| field("message"))
            .or_else(|| field("msg"))
            .or_else(|| error_text.filter(|s| !s.is_empty()).map(str::to_string))
            .unwrap_or_else(|| GENERIC_TRANSPORT_MESSAGE.to_string())
    }

    /// Whether a failure with `code` on `path` ends the session.
    ///
    /// `/api/user/info` is exempt so a stale session can be probed without
    /// triggering a logout loop.
    pub fn should_invalidate(&self, path: &str, code: i64) -> bool {
        SESSION_INVALIDATING_CODES.contains(&code) && !is_user_info(path)
    }

    /// Whether failures on `path` are reported to the host.
    pub fn should_notify(&self, path: &str) -> bool {
        !is_auth_endpoint(path)
    }
}

/// Read an envelope out of a body known to have a `code` field. Fields that
/// do not fit the envelope shape are treated as absent; a `code` that is not
/// an integer reads as 0 and so never counts as success.
fn envelope_of(body: Value) -> ResponseEnvelope {
    let text = |v: Option<&Value>| v.and_then(Value::as_str).map(str::to_string);
    let code = body.get("code").and_then(Value::as_i64).unwrap_or_default();
    let message = text(body.get("message"));
    let msg = text(body.get("msg"));
    let status = text(body.get("status"));
    let data = match body {
        Value::Object(mut obj) => obj.remove("data").unwrap_or(Value::Null),
        _ => Value::Null,
    };
    ResponseEnvelope {
        code,
        message,
        msg,
        status,
        data,
    }
}

fn detail_message(body: Option<&Value>) -> Option<String> {
    match body?.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        _ => None,
    }
}
