//! Transport-neutral request and response descriptors.
//!
//! The client builds an [`ApiRequest`] for every call; it is either handed to
//! the mock router or turned into a real HTTP request. Both paths produce a
//! [`TransportResponse`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;

use crate::envelope::ResponseEnvelope;

/// HTTP methods the dashboard uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outbound request before it reaches the mock router or the network.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Method.
    pub method: HttpMethod,
    /// Path relative to the base URL, e.g. `/api/equipment/inbound`.
    pub path: String,
    /// Query parameters in insertion order.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request with no query and no body.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Append a single query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append query parameters from any serializable struct or map.
    ///
    /// Nulls are skipped, arrays become repeated keys, nested objects are
    /// sent as JSON text.
    pub fn with_query<Q>(mut self, query: &Q) -> Result<Self, serde_json::Error>
    where
        Q: Serialize + ?Sized,
    {
        let Value::Object(map) = serde_json::to_value(query)? else {
            return Ok(self);
        };
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = scalar_text(&item) {
                            self.query.push((key.clone(), text));
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar_text(&other) {
                        self.query.push((key, text));
                    }
                }
            }
        }
        Ok(self)
    }

    /// Attach a JSON body.
    pub fn with_json<B>(mut self, body: &B) -> Result<Self, serde_json::Error>
    where
        B: Serialize + ?Sized,
    {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Look up the first query value for `key`.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The encoded query string without the leading `?`.
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }

    /// Path followed by `?query` when there are parameters.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// A completed transport response, whether it came off the wire or from the
/// mock router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Path the request was sent to.
    pub path: String,
    /// Decoded body. Non-JSON bodies arrive as a string, empty bodies as null.
    pub body: Value,
    /// Whether the response was produced by the mock router.
    #[serde(default)]
    pub mocked: bool,
}

impl TransportResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as an envelope.
    pub fn envelope<T>(&self) -> Result<ResponseEnvelope<T>, serde_json::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Filters {
        current: u32,
        page_size: u32,
        status: Option<String>,
        tags: Vec<String>,
    }

    #[test]
    fn test_with_query_flattens_struct() {
        let req = ApiRequest::get("/api/equipment/inbound")
            .with_query(&Filters {
                current: 2,
                page_size: 20,
                status: None,
                tags: vec!["a".to_string(), "b".to_string()],
            })
            .unwrap();

        assert_eq!(req.query_param("current"), Some("2"));
        assert_eq!(req.query_param("pageSize"), Some("20"));
        assert_eq!(req.query_param("status"), None);
        let tags: Vec<_> = req.query.iter().filter(|(k, _)| k == "tags").collect();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_path_and_query_encodes() {
        let req = ApiRequest::get("/api/popular/list").with_param("type", "crane & co");
        assert_eq!(req.path_and_query(), "/api/popular/list?type=crane+%26+co");

        let bare = ApiRequest::post("/api/settlement/fee");
        assert_eq!(bare.path_and_query(), "/api/settlement/fee");
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(
            serde_json::to_value(HttpMethod::Post).unwrap(),
            json!("POST")
        );
    }

    #[test]
    fn test_transport_response_envelope() {
        let resp = TransportResponse {
            status: 200,
            path: "/api/auth/login".to_string(),
            body: json!({"code": 200, "message": "ok", "data": {"user_id": 1}}),
            mocked: false,
        };
        assert!(resp.is_success());
        let env: ResponseEnvelope = resp.envelope().unwrap();
        assert_eq!(env.data["user_id"], 1);
    }
}
