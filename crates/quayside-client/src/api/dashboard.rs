//! Dashboard API.

use std::fmt;

use quayside_types::endpoints::{CONTENT_DATA, DASHBOARD_STATS, POPULAR_LIST};
use quayside_types::{ApiRequest, ContentDataRecord, DashboardStats, PopularRecord};

use crate::client::QuaysideClient;
use crate::error::Result;

/// Equipment category of the popular list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PopularKind {
    #[default]
    Crane,
    Forklift,
    Container,
}

impl PopularKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PopularKind::Crane => "crane",
            PopularKind::Forklift => "forklift",
            PopularKind::Container => "container",
        }
    }
}

impl fmt::Display for PopularKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dashboard API client.
pub struct DashboardApi {
    client: QuaysideClient,
}

impl DashboardApi {
    pub(crate) fn new(client: QuaysideClient) -> Self {
        Self { client }
    }

    /// Rental trend points.
    pub async fn content_data(&self) -> Result<Vec<ContentDataRecord>> {
        self.client.get(CONTENT_DATA).await
    }

    /// Most-rented models of one category.
    pub async fn popular_list(&self, kind: PopularKind) -> Result<Vec<PopularRecord>> {
        let request = ApiRequest::get(POPULAR_LIST).with_param("type", kind.as_str());
        self.client.send(request).await?.decode()
    }

    /// Headline counters. The backend answers without an envelope.
    pub async fn stats(&self) -> Result<DashboardStats> {
        self.client.get(DASHBOARD_STATS).await
    }
}
