//! Auth API.
//!
//! Auth endpoints bypass envelope unwrapping and failure notifications, so
//! these calls hand back the transport response for the caller to inspect.

use quayside_types::endpoints::{AUTH_LOGIN, AUTH_REGISTER};
use quayside_types::{ApiRequest, LoginRequest, RegisterRequest, TransportResponse, UserInfo};
use serde_json::Value;

use crate::client::QuaysideClient;
use crate::error::{Error, Result};
use crate::token_store::Tier;

/// Auth API client.
pub struct AuthApi {
    client: QuaysideClient,
}

impl AuthApi {
    pub(crate) fn new(client: QuaysideClient) -> Self {
        Self { client }
    }

    async fn call(&self, path: &str, body: Value) -> Result<TransportResponse> {
        let request = ApiRequest::post(path).with_json(&body)?;
        self.client
            .send(request)
            .await?
            .into_transport()
            .ok_or_else(|| Error::Transport {
                status: 0,
                message: format!("{} was not passed through", path),
            })
    }

    /// Post the login form.
    pub async fn login(&self, request: &LoginRequest) -> Result<TransportResponse> {
        self.call(AUTH_LOGIN, serde_json::to_value(request)?).await
    }

    /// Post the registration form.
    pub async fn register(&self, request: &RegisterRequest) -> Result<TransportResponse> {
        self.call(AUTH_REGISTER, serde_json::to_value(request)?).await
    }

    /// Log in and establish the session.
    ///
    /// On success the user info is stored in the durable tier when
    /// `remember` is set, the transient tier otherwise, and any token the
    /// backend issued follows it.
    pub async fn sign_in(&self, request: &LoginRequest, remember: bool) -> Result<UserInfo> {
        let response = self.login(request).await?;
        let envelope = response.envelope::<Value>()?;
        if !envelope.is_success() {
            return Err(Error::Application {
                code: envelope.code,
                message: envelope.failure_message(),
            });
        }

        let user: UserInfo = serde_json::from_value(envelope.data)?;
        let tier = self
            .client
            .tokens()
            .establish(&user, user.token.as_deref(), remember)?;
        if tier == Tier::Transient {
            tracing::debug!(user = %user.username, "session will not survive a restart");
        }
        self.client.session().set_identity(Some(user.clone()));
        Ok(user)
    }

    /// Drop the local session. No request is sent.
    pub fn logout(&self) -> Result<()> {
        self.client.tokens().clear_session()?;
        self.client.session().set_identity(None);
        tracing::info!("logged out");
        Ok(())
    }
}
