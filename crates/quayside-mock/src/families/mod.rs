//! Per-family route registrations.
//!
//! Cross-family precedence follows [`ResourceFamily::ALL`]. Within a listing
//! family the order is: action routes, the listing, the create route.

mod analysis;
mod dashboard;
mod listing;
mod user;

use quayside_types::HttpMethod;
use serde_json::json;

use crate::dataset::Datasets;
use crate::error::Result;
use crate::family::ResourceFamily;
use crate::route::{RouteTable, success_response_wrap};

/// Append every route of `family` to `table`.
pub(crate) fn register(
    family: ResourceFamily,
    table: &mut RouteTable,
    datasets: &Datasets,
) -> Result<()> {
    match family {
        ResourceFamily::Dashboard => dashboard::register(table),
        ResourceFamily::UserSettings => user::register(table),
        ResourceFamily::DataAnalysis => analysis::register(table),
        other => listing::register(other, table, datasets),
    }
}

/// Register a route answering `{}` for any matching request.
fn empty_success(
    table: &mut RouteTable,
    family: ResourceFamily,
    method: HttpMethod,
    pattern: &str,
) -> Result<()> {
    table.register(family, method, pattern, |_| success_response_wrap(json!({})))
}
