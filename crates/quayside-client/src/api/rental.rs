//! Rental API: applications, voyages, returns and analysis.

use quayside_types::endpoints::{
    RENTAL_ANALYSIS, RENTAL_APPLICATION, RENTAL_RETURN, RENTAL_VOYAGE, action_path,
};
use quayside_types::{
    Page, PageRequest, RentalAnalysisStats, RentalApplicationRecord, RentalReturnRecord,
    RentalVoyageRecord,
};
use serde_json::Value;

use crate::client::QuaysideClient;
use crate::error::Result;

/// Rental API client.
pub struct RentalApi {
    client: QuaysideClient,
}

impl RentalApi {
    pub(crate) fn new(client: QuaysideClient) -> Self {
        Self { client }
    }

    pub async fn application_list(
        &self,
        page: &PageRequest,
    ) -> Result<Page<RentalApplicationRecord>> {
        self.client.get_with_query(RENTAL_APPLICATION, page).await
    }

    pub async fn create_application(&self, record: &RentalApplicationRecord) -> Result<Value> {
        self.client.post(RENTAL_APPLICATION, record).await
    }

    pub async fn approve_application(&self, id: &str) -> Result<Value> {
        self.client
            .post_empty(&action_path(RENTAL_APPLICATION, id, "approve"))
            .await
    }

    pub async fn reject_application(&self, id: &str) -> Result<Value> {
        self.client
            .post_empty(&action_path(RENTAL_APPLICATION, id, "reject"))
            .await
    }

    pub async fn voyage_list(&self, page: &PageRequest) -> Result<Page<RentalVoyageRecord>> {
        self.client.get_with_query(RENTAL_VOYAGE, page).await
    }

    pub async fn create_voyage(&self, record: &RentalVoyageRecord) -> Result<Value> {
        self.client.post(RENTAL_VOYAGE, record).await
    }

    pub async fn complete_voyage(&self, id: &str) -> Result<Value> {
        self.client
            .post_empty(&action_path(RENTAL_VOYAGE, id, "complete"))
            .await
    }

    pub async fn return_list(&self, page: &PageRequest) -> Result<Page<RentalReturnRecord>> {
        self.client.get_with_query(RENTAL_RETURN, page).await
    }

    pub async fn create_return(&self, record: &RentalReturnRecord) -> Result<Value> {
        self.client.post(RENTAL_RETURN, record).await
    }

    /// Submit an inspection; the record's `id` selects the return.
    pub async fn inspect_return(&self, record: &RentalReturnRecord) -> Result<Value> {
        self.client
            .post(&action_path(RENTAL_RETURN, &record.id, "inspect"), record)
            .await
    }

    /// Aggregate rental statistics.
    pub async fn analysis(&self) -> Result<RentalAnalysisStats> {
        self.client.get(RENTAL_ANALYSIS).await
    }
}
