use quayside_types::{HttpMethod, endpoints};
use serde_json::json;

use crate::error::Result;
use crate::family::ResourceFamily;
use crate::route::{RouteTable, success_response_wrap};

pub(super) fn register(table: &mut RouteTable) -> Result<()> {
    for path in [endpoints::USER_SAVE_INFO, endpoints::USER_UPLOAD] {
        table.register(
            ResourceFamily::UserSettings,
            HttpMethod::Post,
            &regex::escape(path),
            |_| success_response_wrap(json!("ok")),
        )?;
    }
    Ok(())
}
