//! The ordered mock route table.
//!
//! Routes are tried in registration order and the first one whose method
//! matches and whose pattern is found anywhere in the request URL wins.
//! Patterns are unanchored, so a broad pattern registered early shadows every
//! narrower one after it.

use std::fmt;
use std::sync::Arc;

use quayside_types::{ApiRequest, HttpMethod, PageRequest, ResponseEnvelope};
use regex::Regex;
use serde_json::Value;

use crate::error::{MockError, Result};
use crate::family::ResourceFamily;

/// Code the mock layer answers with.
pub const MOCK_SUCCESS_CODE: i64 = 20000;

/// Message the mock layer answers with.
pub const MOCK_SUCCESS_MSG: &str = "请求成功";

/// Wrap a payload in the mock layer's success envelope.
pub fn success_response_wrap(data: Value) -> ResponseEnvelope {
    ResponseEnvelope {
        code: MOCK_SUCCESS_CODE,
        message: None,
        msg: Some(MOCK_SUCCESS_MSG.to_string()),
        status: Some("ok".to_string()),
        data,
    }
}

/// Handler invoked for a matched request.
pub type MockHandler = Arc<dyn Fn(&MockRequest<'_>) -> ResponseEnvelope + Send + Sync>;

/// What a handler sees of the request.
#[derive(Debug, Clone)]
pub struct MockRequest<'a> {
    pub method: HttpMethod,
    /// Path plus encoded query string; what patterns are matched against.
    pub url: String,
    pub path: &'a str,
    pub query: &'a [(String, String)],
    pub body: Option<&'a Value>,
}

impl<'a> MockRequest<'a> {
    pub fn from_api(request: &'a ApiRequest) -> Self {
        Self {
            method: request.method,
            url: request.path_and_query(),
            path: &request.path,
            query: &request.query,
            body: request.body.as_ref(),
        }
    }

    /// Paging parameters parsed from the query string.
    pub fn page(&self) -> PageRequest {
        PageRequest::from_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// A string field of the JSON body.
    pub fn body_str(&self, key: &str) -> Option<&str> {
        self.body.and_then(|b| b.get(key)).and_then(Value::as_str)
    }
}

/// One `(method, pattern, handler)` entry.
#[derive(Clone)]
pub struct MockRoute {
    family: ResourceFamily,
    method: HttpMethod,
    pattern: Regex,
    handler: MockHandler,
}

impl MockRoute {
    pub fn family(&self) -> ResourceFamily {
        self.family
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Method must be equal; the pattern may match anywhere in `url`.
    pub fn matches(&self, method: HttpMethod, url: &str) -> bool {
        self.method == method && self.pattern.is_match(url)
    }

    pub fn handle(&self, request: &MockRequest<'_>) -> ResponseEnvelope {
        (self.handler)(request)
    }
}

impl fmt::Debug for MockRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockRoute")
            .field("family", &self.family)
            .field("method", &self.method)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Routes in registration order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<MockRoute>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Later registrations never take precedence over
    /// earlier ones.
    pub fn register<F>(
        &mut self,
        family: ResourceFamily,
        method: HttpMethod,
        pattern: &str,
        handler: F,
    ) -> Result<()>
    where
        F: Fn(&MockRequest<'_>) -> ResponseEnvelope + Send + Sync + 'static,
    {
        let regex = Regex::new(pattern).map_err(|source| MockError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.routes.push(MockRoute {
            family,
            method,
            pattern: regex,
            handler: Arc::new(handler),
        });
        Ok(())
    }

    /// First route matching `method` and `url`.
    pub fn find(&self, method: HttpMethod, url: &str) -> Option<&MockRoute> {
        self.routes.iter().find(|r| r.matches(method, url))
    }

    pub fn routes(&self) -> &[MockRoute] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
