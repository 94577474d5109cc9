//! Equipment API.

use quayside_types::endpoints::{
    EQUIPMENT, EQUIPMENT_INBOUND, EQUIPMENT_INVENTORY, EQUIPMENT_OUTBOUND, item_path,
};
use quayside_types::{
    EquipmentCreateRequest, EquipmentInboundRecord, EquipmentInventoryRecord,
    EquipmentOutboundRecord, EquipmentUpdateRequest, Page, PageRequest,
};
use serde_json::Value;

use crate::client::QuaysideClient;
use crate::error::Result;

/// Equipment API client.
pub struct EquipmentApi {
    client: QuaysideClient,
}

impl EquipmentApi {
    pub(crate) fn new(client: QuaysideClient) -> Self {
        Self { client }
    }

    /// List inbound records.
    pub async fn inbound_list(&self, page: &PageRequest) -> Result<Page<EquipmentInboundRecord>> {
        self.client.get_with_query(EQUIPMENT_INBOUND, page).await
    }

    /// Record an inbound delivery.
    pub async fn create_inbound(&self, record: &EquipmentInboundRecord) -> Result<Value> {
        self.client.post(EQUIPMENT_INBOUND, record).await
    }

    /// List inventory lines.
    pub async fn inventory_list(
        &self,
        page: &PageRequest,
    ) -> Result<Page<EquipmentInventoryRecord>> {
        self.client.get_with_query(EQUIPMENT_INVENTORY, page).await
    }

    /// List outbound records.
    pub async fn outbound_list(
        &self,
        page: &PageRequest,
    ) -> Result<Page<EquipmentOutboundRecord>> {
        self.client.get_with_query(EQUIPMENT_OUTBOUND, page).await
    }

    /// Record an outbound dispatch.
    pub async fn create_outbound(&self, record: &EquipmentOutboundRecord) -> Result<Value> {
        self.client.post(EQUIPMENT_OUTBOUND, record).await
    }

    /// Delete an outbound record.
    pub async fn delete_outbound(&self, id: &str) -> Result<Value> {
        self.client.delete(&item_path(EQUIPMENT_OUTBOUND, id)).await
    }

    /// Get an equipment master record.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.client.get(&item_path(EQUIPMENT, id)).await
    }

    /// Create an equipment master record.
    pub async fn create(&self, request: &EquipmentCreateRequest) -> Result<Value> {
        self.client.post(EQUIPMENT, request).await
    }

    /// Update an equipment master record.
    pub async fn update(&self, id: &str, request: &EquipmentUpdateRequest) -> Result<Value> {
        self.client.put(&item_path(EQUIPMENT, id), request).await
    }

    /// Delete an equipment master record.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.client.delete(&item_path(EQUIPMENT, id)).await
    }
}
