//! HTTP client middleware for the Quayside port-equipment rental dashboard.
//!
//! Every request the dashboard makes goes through [`QuaysideClient`], which
//! attaches the bearer token, lets the in-process mock backend answer when it
//! has a matching route, and reconciles the backend's response shapes into a
//! single result.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use quayside_client::{HeadlessHost, QuaysideClient, Result};
//! use quayside_config::load_config;
//! use quayside_types::{LoginRequest, PageRequest};
//!
//! # async fn example() -> Result<()> {
//! let loaded = load_config(None)?;
//! let client = QuaysideClient::init(&loaded.config, Arc::new(HeadlessHost))?;
//!
//! let login = LoginRequest {
//!     username: "ops".to_string(),
//!     password: "secret".to_string(),
//! };
//! let user = client.auth().sign_in(&login, true).await?;
//! println!("signed in as {}", user.display_name());
//!
//! let fees = client.settlement().fee_list(&PageRequest::new(1, 20)).await?;
//! println!("{} settlements", fees.total);
//!
//! client.teardown();
//! # Ok(())
//! # }
//! ```
//!
//! # Components
//!
//! - [`TokenStore`]: token and user info across a transient and a durable tier
//! - [`RequestAuthenticator`]: sets `Authorization: Bearer <token>`
//! - [`ResponseNormalizer`]: raw passthrough, auth passthrough or envelope unwrap
//! - [`SessionInvalidator`]: forced logout on session-invalidating codes
//! - [`UiHost`]: notifications, the re-login dialog and shell reload

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod normalizer;
pub mod session;
pub mod token_store;

pub use api::{AuthApi, DashboardApi, EquipmentApi, PopularKind, RentalApi, SettlementApi, UserApi};
pub use auth::RequestAuthenticator;
pub use client::{ClientBuilder, QuaysideClient};
pub use error::{Error, Result};
pub use normalizer::{ApplicationFailure, Normalized, ResponseNormalizer};
pub use session::{HeadlessHost, ReloginPrompt, SessionInvalidator, SharedUiHost, UiHost};
pub use token_store::{
    FileTier, MemoryTier, SharedTier, StorageTier, TOKEN_KEY, Tier, TokenStore, USER_INFO_KEY,
};
