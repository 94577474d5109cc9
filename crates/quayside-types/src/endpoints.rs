//! Endpoint paths used by the dashboard.

/// Fragment that identifies authentication endpoints (login/register).
pub const AUTH_FRAGMENT: &str = "/api/auth/";

/// The "current user info" endpoint, exempt from session invalidation.
pub const USER_INFO: &str = "/api/user/info";

pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_REGISTER: &str = "/api/auth/register";

pub const EQUIPMENT: &str = "/api/equipment";
pub const EQUIPMENT_INBOUND: &str = "/api/equipment/inbound";
pub const EQUIPMENT_INVENTORY: &str = "/api/equipment/inventory";
pub const EQUIPMENT_OUTBOUND: &str = "/api/equipment/outbound";

pub const RENTAL_APPLICATION: &str = "/api/rental/application";
pub const RENTAL_VOYAGE: &str = "/api/rental/voyage";
pub const RENTAL_RETURN: &str = "/api/rental/return";
pub const RENTAL_ANALYSIS: &str = "/api/rental/analysis";

pub const SETTLEMENT_FEE: &str = "/api/settlement/fee";

pub const DASHBOARD_STATS: &str = "/api/dashboard/stats";
pub const CONTENT_DATA: &str = "/api/content-data";
pub const POPULAR_LIST: &str = "/api/popular/list";

pub const PUBLIC_OPINION_ANALYSIS: &str = "/api/public-opinion-analysis";
pub const CONTENT_PERIOD_ANALYSIS: &str = "/api/content-period-analysis";
pub const CONTENT_PUBLISH: &str = "/api/content-publish";
pub const POPULAR_AUTHOR_LIST: &str = "/api/popular-author/list";

pub const USER_SAVE_INFO: &str = "/api/user/save-info";
pub const USER_UPLOAD: &str = "/api/user/upload";
pub const USER_LATEST_ACTIVITY: &str = "/api/user/latest-activity";

/// Whether `path` targets an authentication endpoint.
///
/// Substring match, so a base-path prefix or query string does not matter.
pub fn is_auth_endpoint(path: &str) -> bool {
    path.contains(AUTH_FRAGMENT)
}

/// Whether `path` is exactly the current-user-info endpoint.
pub fn is_user_info(path: &str) -> bool {
    path == USER_INFO
}

/// Build `<base>/<id>/<action>`.
pub fn action_path(base: &str, id: &str, action: &str) -> String {
    format!("{}/{}/{}", base, id, action)
}

/// Build `<base>/<id>`.
pub fn item_path(base: &str, id: &str) -> String {
    format!("{}/{}", base, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_endpoint_detection() {
        assert!(is_auth_endpoint(AUTH_LOGIN));
        assert!(is_auth_endpoint("/prefix/api/auth/register?x=1"));
        assert!(!is_auth_endpoint("/api/authors"));
        assert!(!is_auth_endpoint(USER_INFO));
    }

    #[test]
    fn test_user_info_is_exact() {
        assert!(is_user_info("/api/user/info"));
        assert!(!is_user_info("/api/user/info/7"));
        assert!(!is_user_info("/api/user/info-extra"));
    }

    #[test]
    fn test_action_path() {
        assert_eq!(
            action_path(RENTAL_APPLICATION, "A1", "approve"),
            "/api/rental/application/A1/approve"
        );
        assert_eq!(item_path(EQUIPMENT, "12"), "/api/equipment/12");
    }
}
