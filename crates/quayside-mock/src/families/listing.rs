//! Paginated listing families: equipment, rental and settlement.

use quayside_types::HttpMethod;
use serde_json::json;

use super::empty_success;
use crate::dataset::Datasets;
use crate::error::Result;
use crate::family::ResourceFamily;
use crate::route::{RouteTable, success_response_wrap};

/// Routes a listing family exposes besides its GET listing.
struct ListingRoutes {
    /// `POST <prefix>/<id>/<action>` endpoints.
    actions: &'static [&'static str],
    /// Whether `POST <prefix>` creates a record.
    create: bool,
}

fn routes_for(family: ResourceFamily) -> ListingRoutes {
    match family {
        ResourceFamily::EquipmentInventory => ListingRoutes {
            actions: &[],
            create: false,
        },
        ResourceFamily::RentalApplication => ListingRoutes {
            actions: &["approve", "reject"],
            create: true,
        },
        ResourceFamily::RentalVoyage => ListingRoutes {
            actions: &["complete"],
            create: true,
        },
        ResourceFamily::RentalReturn => ListingRoutes {
            actions: &["inspect"],
            create: true,
        },
        ResourceFamily::SettlementFee => ListingRoutes {
            actions: &["pay"],
            create: true,
        },
        _ => ListingRoutes {
            actions: &[],
            create: true,
        },
    }
}

pub(super) fn register(
    family: ResourceFamily,
    table: &mut RouteTable,
    datasets: &Datasets,
) -> Result<()> {
    let (Some(prefix), Some(dataset)) = (family.listing_path(), datasets.get(family)) else {
        return Ok(());
    };
    let prefix = regex::escape(prefix);
    let routes = routes_for(family);

    for action in routes.actions {
        let pattern = format!("{prefix}/.*/{action}");
        empty_success(table, family, HttpMethod::Post, &pattern)?;
    }

    let dataset = dataset.clone();
    table.register(family, HttpMethod::Get, &prefix, move |request| {
        let page = dataset.page(&request.page());
        success_response_wrap(json!({ "list": page.list, "total": page.total }))
    })?;

    if routes.create {
        empty_success(table, family, HttpMethod::Post, &prefix)?;
    }
    Ok(())
}
