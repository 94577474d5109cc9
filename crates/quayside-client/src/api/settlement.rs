//! Settlement API.

use quayside_types::endpoints::{SETTLEMENT_FEE, action_path};
use quayside_types::{Page, PageRequest, SettlementFeeRecord};
use serde_json::Value;

use crate::client::QuaysideClient;
use crate::error::Result;

/// Settlement API client.
pub struct SettlementApi {
    client: QuaysideClient,
}

impl SettlementApi {
    pub(crate) fn new(client: QuaysideClient) -> Self {
        Self { client }
    }

    /// List fee settlements.
    pub async fn fee_list(&self, page: &PageRequest) -> Result<Page<SettlementFeeRecord>> {
        self.client.get_with_query(SETTLEMENT_FEE, page).await
    }

    /// Create a fee settlement.
    pub async fn create_fee(&self, record: &SettlementFeeRecord) -> Result<Value> {
        self.client.post(SETTLEMENT_FEE, record).await
    }

    /// Mark a settlement paid.
    pub async fn pay_fee(&self, id: &str) -> Result<Value> {
        self.client
            .post_empty(&action_path(SETTLEMENT_FEE, id, "pay"))
            .await
    }
}
