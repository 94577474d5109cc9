//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use quayside_config::QuaysideConfig;
use quayside_mock::MockRouter;
use quayside_types::{ApiRequest, HttpMethod, TransportResponse};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::{AuthApi, DashboardApi, EquipmentApi, RentalApi, SettlementApi, UserApi};
use crate::auth::RequestAuthenticator;
use crate::error::{Error, Result};
use crate::normalizer::{Normalized, ResponseNormalizer};
use crate::session::{HeadlessHost, SessionInvalidator, SharedUiHost};
use crate::token_store::TokenStore;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Quayside API client.
///
/// Every request passes through the same pipeline: the bearer token is
/// attached, the mock router gets first refusal, the network is used
/// otherwise, and the response is normalized. Failures are reported to the
/// [`UiHost`](crate::UiHost) and may end the session.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use quayside_client::{HeadlessHost, QuaysideClient};
/// use quayside_config::QuaysideConfig;
/// use quayside_types::PageRequest;
///
/// # async fn example() -> quayside_client::Result<()> {
/// let client = QuaysideClient::init(&QuaysideConfig::default(), Arc::new(HeadlessHost))?;
/// let page = client.equipment().inbound_list(&PageRequest::new(1, 10)).await?;
/// println!("{} of {}", page.list.len(), page.total);
/// client.teardown();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct QuaysideClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    tokens: TokenStore,
    authenticator: RequestAuthenticator,
    normalizer: ResponseNormalizer,
    invalidator: SessionInvalidator,
    mock: MockRouter,
}

impl std::fmt::Debug for QuaysideClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuaysideClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("mock_routes", &self.inner.mock.routes().len())
            .finish_non_exhaustive()
    }
}

impl QuaysideClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Build a client from configuration.
    ///
    /// The durable token tier lives under `storage.dir`, and the mock router
    /// is built (and its datasets generated) from `mock`.
    pub fn init(config: &QuaysideConfig, host: SharedUiHost) -> Result<Self> {
        config.validate()?;
        let mut builder = Self::builder()
            .base_url(config.api.effective_base_url())
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .token_store(TokenStore::with_storage_dir(&config.storage.effective_dir()))
            .ui_host(host)
            .mock_router(MockRouter::new(&config.mock)?);
        if let Some(agent) = &config.api.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let client = builder.build()?;
        tracing::info!(
            base_url = %client.base_url(),
            mock = client.inner.mock.is_active(),
            "client initialized"
        );
        Ok(client)
    }

    /// End the client's life: the transient tier is emptied, the durable
    /// tier is left as is.
    pub fn teardown(self) {
        if let Err(e) = self.inner.tokens.clear_transient() {
            tracing::warn!(error = %e, "failed to clear transient storage");
        }
        tracing::info!("client torn down");
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The token store shared with the authenticator.
    pub fn tokens(&self) -> &TokenStore {
        &self.inner.tokens
    }

    pub fn session(&self) -> &SessionInvalidator {
        &self.inner.invalidator
    }

    pub fn mock(&self) -> &MockRouter {
        &self.inner.mock
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the auth API.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access the equipment API.
    pub fn equipment(&self) -> EquipmentApi {
        EquipmentApi::new(self.clone())
    }

    /// Access the rental API.
    pub fn rental(&self) -> RentalApi {
        RentalApi::new(self.clone())
    }

    /// Access the settlement API.
    pub fn settlement(&self) -> SettlementApi {
        SettlementApi::new(self.clone())
    }

    /// Access the dashboard API.
    pub fn dashboard(&self) -> DashboardApi {
        DashboardApi::new(self.clone())
    }

    /// Access the user API.
    pub fn user(&self) -> UserApi {
        UserApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request pipeline
    // ─────────────────────────────────────────────────────────────────────────

    /// Send a request through the full pipeline.
    pub async fn send(&self, request: ApiRequest) -> Result<Normalized> {
        let mut headers = HeaderMap::new();
        self.inner.authenticator.authenticate(&mut headers);

        let response = match self.inner.mock.dispatch(&request) {
            Some(response) => response,
            None => match self.transmit(&request, headers).await {
                Ok(response) => response,
                Err(Error::Http(e)) => {
                    let text = e.to_string();
                    let message = self.inner.normalizer.transport_message(None, Some(&text));
                    return Err(self.transport_failure(&request.path, 0, message));
                }
                Err(e) => return Err(e),
            },
        };
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = response.status,
            mocked = response.mocked,
            "response received"
        );

        if !response.is_success() {
            let message = self
                .inner
                .normalizer
                .transport_message(Some(&response.body), None);
            return Err(self.transport_failure(&request.path, response.status, message));
        }

        match self.inner.normalizer.normalize(&request.path, response) {
            Ok(normalized) => Ok(normalized),
            Err(failure) => {
                tracing::warn!(
                    path = %request.path,
                    code = failure.code,
                    message = %failure.message,
                    "application error"
                );
                if self.inner.normalizer.should_notify(&request.path) {
                    self.inner.invalidator.host().notify_error(&failure.message);
                }
                if self
                    .inner
                    .normalizer
                    .should_invalidate(&request.path, failure.code)
                {
                    self.inner.invalidator.invalidate(failure.code).await;
                }
                Err(failure.into())
            }
        }
    }

    fn transport_failure(&self, path: &str, status: u16, message: String) -> Error {
        tracing::warn!(%path, status, %message, "request failed");
        if self.inner.normalizer.should_notify(path) {
            self.inner.invalidator.host().notify_error(&message);
        }
        Error::Transport { status, message }
    }

    /// Put the request on the wire and read the whole body.
    ///
    /// Bodies that are not JSON come back as a string; empty bodies as null.
    async fn transmit(&self, request: &ApiRequest, headers: HeaderMap) -> Result<TransportResponse> {
        let url = self.url(&request.path)?;
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .inner
            .http
            .request(method, url)
            .headers(headers)
            .timeout(self.inner.timeout);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        Ok(TransportResponse {
            status,
            path: request.path.clone(),
            body,
            mocked: false,
        })
    }

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Typed helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(ApiRequest::get(path)).await?.decode()
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = ApiRequest::get(path).with_query(query)?;
        self.send(request).await?.decode()
    }

    /// Make a POST request.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::post(path).with_json(body)?;
        self.send(request).await?.decode()
    }

    /// Make a POST request without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(ApiRequest::post(path)).await?.decode()
    }

    /// Make a PUT request.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::put(path).with_json(body)?;
        self.send(request).await?.decode()
    }

    /// Make a DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(ApiRequest::delete(path)).await?.decode()
    }
}

/// Builder for creating a QuaysideClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
    tokens: Option<TokenStore>,
    host: Option<SharedUiHost>,
    mock: Option<MockRouter>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            tokens: None,
            host: None,
            mock: None,
        }
    }

    /// Set the base URL requests are resolved against.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use an existing token store. Defaults to an in-memory store.
    pub fn token_store(mut self, tokens: TokenStore) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Set the UI host. Defaults to [`HeadlessHost`].
    pub fn ui_host(mut self, host: SharedUiHost) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the mock router. Defaults to a router with nothing registered.
    pub fn mock_router(mut self, mock: MockRouter) -> Self {
        self.mock = Some(mock);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<QuaysideClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("quayside-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        let tokens = self.tokens.unwrap_or_else(TokenStore::in_memory);
        let host = self.host.unwrap_or_else(|| Arc::new(HeadlessHost));
        let invalidator = SessionInvalidator::new(tokens.clone(), host);

        Ok(QuaysideClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
                authenticator: RequestAuthenticator::new(tokens.clone()),
                normalizer: ResponseNormalizer::new(),
                invalidator,
                tokens,
                mock: self.mock.unwrap_or_default(),
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = ClientBuilder::new().build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:5173")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5173/");
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8000/backend")
            .build()
            .unwrap();

        let url = client.url("/api/equipment/inbound").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/backend/api/equipment/inbound");
    }

    #[test]
    fn test_init_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = QuaysideConfig::default();
        config.storage.dir = Some(dir.path().to_path_buf());
        config.api.base_url = Some("http://api.test:8000".to_string());

        let client = QuaysideClient::init(&config, Arc::new(HeadlessHost)).unwrap();
        assert_eq!(client.base_url().as_str(), "http://api.test:8000/");
        assert!(!client.mock().is_active());
        assert!(!client.tokens().is_logged_in());
    }

    #[test]
    fn test_init_rejects_invalid_config() {
        let mut config = QuaysideConfig::default();
        config.api.timeout_secs = 0;
        let err = QuaysideClient::init(&config, Arc::new(HeadlessHost)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_teardown_clears_transient_only() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:5173")
            .build()
            .unwrap();
        let tokens = client.tokens().clone();
        let user = quayside_types::UserInfo {
            username: "ops".to_string(),
            ..Default::default()
        };
        tokens.establish(&user, Some("tok"), false).unwrap();
        assert!(tokens.is_logged_in());

        client.teardown();
        assert!(!tokens.is_logged_in());
    }
}
