//! In-process mock backend for the Quayside dashboard client.
//!
//! Stands in for the real server during development: requests that match a
//! registered route are answered from generated in-memory datasets without
//! any network I/O.
//!
//! # Components
//!
//! - [`route`]: the ordered `(method, pattern, handler)` table, first match wins
//! - [`dataset`]: declarative per-field generators and the per-family collections
//! - [`pagination`]: page slicing over a collection
//! - [`router`]: [`MockRouter`], which registers every enabled family and
//!   answers requests
//! - [`family`]: the resource families and their path prefixes

pub mod dataset;
pub mod error;
pub mod family;
mod families;
pub mod pagination;
pub mod route;
pub mod router;

pub use dataset::{Dataset, DatasetSpec, Datasets, FieldGen};
pub use error::{MockError, Result};
pub use family::ResourceFamily;
pub use pagination::{page_of, paginate};
pub use route::{MockHandler, MockRequest, MockRoute, RouteTable, success_response_wrap};
pub use router::MockRouter;
