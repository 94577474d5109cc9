//! User API.

use quayside_types::endpoints::{USER_INFO, USER_LATEST_ACTIVITY, USER_SAVE_INFO, item_path};
use quayside_types::{ApiRequest, BasicInfo, LatestActivity, UserInfo};
use serde_json::Value;

use crate::client::QuaysideClient;
use crate::error::Result;

/// User API client.
pub struct UserApi {
    client: QuaysideClient,
}

impl UserApi {
    pub(crate) fn new(client: QuaysideClient) -> Self {
        Self { client }
    }

    /// Fetch a user's info.
    ///
    /// Session-invalidating codes on this endpoint are reported but never
    /// log the user out.
    pub async fn info(&self, user_id: i64) -> Result<UserInfo> {
        let request = ApiRequest::get(USER_INFO).with_param("user_id", user_id.to_string());
        self.client.send(request).await?.decode()
    }

    /// Save the settings-page profile.
    pub async fn save_info(&self, user_id: i64, info: &BasicInfo) -> Result<Value> {
        let request = ApiRequest::post(USER_SAVE_INFO)
            .with_param("user_id", user_id.to_string())
            .with_json(info)?;
        self.client.send(request).await?.decode()
    }

    /// Replace a user's profile.
    pub async fn update_info(&self, user_id: i64, info: &BasicInfo) -> Result<Value> {
        self.client
            .put(&item_path(USER_INFO, &user_id.to_string()), info)
            .await
    }

    /// The user's activity feed.
    pub async fn latest_activity(&self) -> Result<Vec<LatestActivity>> {
        self.client.post_empty(USER_LATEST_ACTIVITY).await
    }
}
