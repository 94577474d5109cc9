//! API endpoint implementations.

mod auth;
mod dashboard;
mod equipment;
mod rental;
mod settlement;
mod user;

pub use auth::AuthApi;
pub use dashboard::{DashboardApi, PopularKind};
pub use equipment::EquipmentApi;
pub use rental::RentalApi;
pub use settlement::SettlementApi;
pub use user::UserApi;
