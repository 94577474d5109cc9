//! Resource records and request payloads.
//!
//! Listing records are camelCase on the wire; the equipment master data,
//! dashboard statistics and auth payloads use the backend's snake_case.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Equipment
// ─────────────────────────────────────────────────────────────────────────────

/// An equipment inbound (goods received) record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentInboundRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub equipment_code: String,
    #[serde(default)]
    pub equipment_name: String,
    #[serde(default)]
    pub equipment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specification: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub warehouse: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub inbound_time: String,
    /// `pending`, `completed` or `rejected`.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// A stock line in the equipment inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentInventoryRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub equipment_code: String,
    #[serde(default)]
    pub equipment_name: String,
    #[serde(default)]
    pub equipment_type: String,
    #[serde(default)]
    pub total_quantity: i64,
    #[serde(default)]
    pub available_quantity: i64,
    #[serde(default)]
    pub rented_quantity: i64,
    #[serde(default)]
    pub warehouse: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// `available`, `rented`, `maintenance` or `damaged`.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
}

/// An equipment outbound (dispatch) record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentOutboundRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub outbound_code: String,
    #[serde(default)]
    pub rental_order: String,
    #[serde(default)]
    pub equipment_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_name: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub outbound_time: String,
    #[serde(default)]
    pub operator: String,
    /// `pending`, `completed` or `cancelled`.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Fields accepted when updating an equipment master record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_rental_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Fields accepted when creating an equipment master record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentCreateRequest {
    /// Generated by the backend when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_code: Option<String>,
    pub equipment_name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_rental_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Rental
// ─────────────────────────────────────────────────────────────────────────────

/// A rental application awaiting or past approval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalApplicationRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub application_code: String,
    #[serde(default)]
    pub applicant: String,
    #[serde(default)]
    pub equipment_type: String,
    #[serde(default)]
    pub equipment_code: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default)]
    pub application_time: String,
    /// `pending`, `approved`, `rejected` or `completed`.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// A voyage the rented equipment is used on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalVoyageRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub voyage_number: String,
    #[serde(default)]
    pub rental_order: String,
    #[serde(default)]
    pub vessel_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_list: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_hours: Option<i64>,
    #[serde(default)]
    pub voyage_date: String,
    /// `in-progress`, `completed` or `cancelled`.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// A returned-equipment record and its inspection outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalReturnRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub return_code: String,
    #[serde(default)]
    pub rental_order: String,
    #[serde(default)]
    pub equipment_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_name: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub return_time: String,
    /// `good`, `normal` or `damaged`.
    #[serde(default)]
    pub equipment_condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspection_result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspector: Option<String>,
    /// `pending`, `passed` or `failed`.
    #[serde(default)]
    pub inspection_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// A `{name, value}` pair used by chart payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

/// A named numeric series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub name: String,
    pub value: Vec<f64>,
}

/// Rental counts per equipment model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularEquipment {
    pub equipment_name: String,
    pub rental_count: i64,
    pub rental_days: i64,
}

/// Period breakdown for the rental analysis chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodAnalysis {
    #[serde(rename = "xAxis", default)]
    pub x_axis: Vec<String>,
    #[serde(default)]
    pub data: Vec<NamedSeries>,
}

/// Aggregate rental statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalAnalysisStats {
    pub total_orders: i64,
    pub total_outbound: i64,
    pub total_renting: i64,
    pub total_returned: i64,
    pub orders_growth: f64,
    pub outbound_growth: f64,
    pub renting_growth: f64,
    pub returned_growth: f64,
    pub category_ratio: Vec<NamedValue>,
    pub popular_equipment: Vec<PopularEquipment>,
    pub period_analysis: PeriodAnalysis,
}

// ─────────────────────────────────────────────────────────────────────────────
// Settlement
// ─────────────────────────────────────────────────────────────────────────────

/// A fee settlement for a rental order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementFeeRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub settlement_code: String,
    #[serde(default)]
    pub rental_order: String,
    #[serde(default)]
    pub applicant: String,
    #[serde(default)]
    pub rental_days: i64,
    #[serde(default)]
    pub daily_rate: f64,
    #[serde(default)]
    pub equipment_fee: f64,
    #[serde(default)]
    pub usage_fee: f64,
    #[serde(default)]
    pub damage_fee: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub total_amount: f64,
    /// `cash`, `transfer`, `check` or `other`.
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub settlement_time: String,
    /// `pending`, `paid` or `overdue`.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────────────────────────────────────

/// Headline counters for the workplace dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_equipment: i64,
    pub in_stock: i64,
    pub out_stock: i64,
    pub maintenance: i64,
    pub pending_checkout: i64,
    pub in_progress_orders: i64,
    pub pending_inspection: i64,
    pub total_revenue: f64,
    pub pending_amount: f64,
    pub overdue_bills: i64,
}

/// One point on the rental trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDataRecord {
    pub x: String,
    pub y: f64,
}

/// One row of the popular-equipment table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularRecord {
    pub key: i64,
    pub click_number: String,
    pub title: String,
    pub increases: i64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth and user
// ─────────────────────────────────────────────────────────────────────────────

/// Login form payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The user-info record persisted next to the token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Bearer token, when the backend issues one with the login response.
    #[serde(default, alias = "access_token", skip_serializing)]
    pub token: Option<String>,
}

impl UserInfo {
    /// The name to display: real name when present, else username.
    pub fn display_name(&self) -> &str {
        self.real_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Profile fields edited on the user settings page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub email: String,
    pub nickname: String,
    pub country_region: String,
    pub area: String,
    pub address: String,
    pub profile: String,
}

/// An entry in the user's activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestActivity {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inbound_record_camel_case() {
        let record: EquipmentInboundRecord = serde_json::from_value(json!({
            "id": "A1B2",
            "equipmentCode": "EQ000001",
            "equipmentName": "叉车",
            "equipmentType": "forklift",
            "quantity": 3,
            "supplier": "港务公司",
            "warehouse": "1号仓库",
            "inboundTime": "2024-05-01 10:00:00",
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(record.equipment_code, "EQ000001");
        assert_eq!(record.quantity, 3);
        assert!(record.remark.is_none());
    }

    #[test]
    fn test_user_info_token_alias_not_serialized() {
        let info: UserInfo = serde_json::from_value(json!({
            "user_id": 7,
            "username": "ops",
            "real_name": "",
            "access_token": "abc"
        }))
        .unwrap();
        assert_eq!(info.token.as_deref(), Some("abc"));
        assert_eq!(info.display_name(), "ops");

        let value = serde_json::to_value(&info).unwrap();
        assert!(value.get("token").is_none());
    }

    #[test]
    fn test_period_analysis_axis_name() {
        let period: PeriodAnalysis = serde_json::from_value(json!({
            "xAxis": ["0:00", "2:00"],
            "data": [{"name": "叉车", "value": [1, 2]}]
        }))
        .unwrap();
        assert_eq!(period.x_axis.len(), 2);
        assert_eq!(period.data[0].value, vec![1.0, 2.0]);
    }
}
