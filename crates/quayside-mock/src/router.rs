//! The mock router: answers requests from the route table.

use quayside_config::MockConfig;
use quayside_types::{ApiRequest, TransportResponse};
use serde_json::Value;

use crate::dataset::Datasets;
use crate::error::Result;
use crate::families;
use crate::family::ResourceFamily;
use crate::route::{MockRequest, MockRoute, RouteTable};

/// In-process stand-in for the backend.
///
/// Built once from [`MockConfig`]; the route table and datasets are fixed
/// afterwards. When the master switch is off, or no family is enabled, the
/// table is empty and every request falls through to the network.
#[derive(Debug, Clone)]
pub struct MockRouter {
    table: RouteTable,
    datasets: Datasets,
    enabled: Vec<ResourceFamily>,
}

impl MockRouter {
    /// Generate datasets and register every enabled family in
    /// [`ResourceFamily::ALL`] order.
    pub fn new(config: &MockConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let datasets = Datasets::generate(seed);
        let mut table = RouteTable::new();
        let mut enabled = Vec::new();

        if config.enabled {
            for family in ResourceFamily::ALL {
                if !config.family_enabled(family.name(), family.default_enabled()) {
                    continue;
                }
                families::register(family, &mut table, &datasets)?;
                enabled.push(family);
            }
        }

        tracing::info!(
            active = config.enabled,
            families = enabled.len(),
            routes = table.len(),
            seed = datasets.seed(),
            "mock router ready"
        );

        Ok(Self {
            table,
            datasets,
            enabled,
        })
    }

    /// A router with nothing registered.
    pub fn disabled() -> Self {
        Self {
            table: RouteTable::new(),
            datasets: Datasets::default(),
            enabled: Vec::new(),
        }
    }

    /// Answer `request` if a route matches, otherwise `None`.
    ///
    /// A matched route always yields a 200 response carrying the handler's
    /// envelope.
    pub fn dispatch(&self, request: &ApiRequest) -> Option<TransportResponse> {
        let mock_request = MockRequest::from_api(request);
        let route = self.table.find(request.method, &mock_request.url)?;
        tracing::debug!(
            method = %request.method,
            url = %mock_request.url,
            family = %route.family(),
            pattern = route.pattern(),
            "mocked request"
        );
        let envelope = route.handle(&mock_request);
        let body = serde_json::to_value(envelope).unwrap_or(Value::Null);
        Some(TransportResponse {
            status: 200,
            path: request.path.clone(),
            body,
            mocked: true,
        })
    }

    /// The route table in match order.
    pub fn routes(&self) -> &[MockRoute] {
        self.table.routes()
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    /// Whether any route is registered.
    pub fn is_active(&self) -> bool {
        !self.table.is_empty()
    }

    pub fn is_family_enabled(&self, family: ResourceFamily) -> bool {
        self.enabled.contains(&family)
    }
}

impl Default for MockRouter {
    fn default() -> Self {
        Self::disabled()
    }
}
