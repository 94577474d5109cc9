//! Configuration types.
//!
//! ```toml
//! [api]
//! origin = "http://localhost:5173"
//! base_url = "http://localhost:8000"
//! timeout_secs = 30
//!
//! [storage]
//! dir = "/var/lib/quayside"
//!
//! [mock]
//! enabled = true
//! seed = 42
//!
//! [mock.families]
//! equipment-inbound = true
//! rental-application = true
//! ```
//!
//! # Environment Variables
//!
//! - `QUAYSIDE_API_BASE_URL` - Override the API base URL
//! - `QUAYSIDE_MOCK_ENABLED` - Enable/disable the mock backend ("true"/"false")

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV: &str = "QUAYSIDE_API_BASE_URL";

/// Environment variable overriding `mock.enabled`.
pub const MOCK_ENABLED_ENV: &str = "QUAYSIDE_MOCK_ENABLED";

/// Application name for directory resolution.
pub const APP_NAME: &str = "quayside";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuaysideConfig {
    /// API endpoint settings.
    pub api: ApiConfig,
    /// Token storage settings.
    pub storage: StorageConfig,
    /// Mock backend settings.
    pub mock: MockConfig,
}

impl QuaysideConfig {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_ENV)
            && !url.trim().is_empty()
        {
            self.api.base_url = Some(url.trim().to_string());
        }
        if let Some(flag) = lookup(MOCK_ENABLED_ENV)
            && !flag.trim().is_empty()
        {
            self.mock.enabled = parse_flag(&flag);
        }
    }

    /// Check values that serde alone cannot.
    pub fn validate(&self) -> Result<()> {
        if self.api.effective_base_url().trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api.base_url".to_string(),
                reason: "neither base_url nor origin is set".to_string(),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> bool {
    let raw = raw.trim();
    raw.eq_ignore_ascii_case("true") || raw == "1" || raw.eq_ignore_ascii_case("yes")
}

/// API endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin the dashboard is served from; the base URL when none is set.
    /// Default: `http://localhost:5173`
    pub origin: String,

    /// Explicit API base URL.
    ///
    /// Can be overridden by the `QUAYSIDE_API_BASE_URL` environment variable.
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    /// Default: 30
    pub timeout_secs: u64,

    /// Custom user agent.
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:5173".to_string(),
            base_url: None,
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// The base URL requests are resolved against.
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(&self.origin)
    }
}

/// Durable token storage settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the durable storage tier.
    /// Default: `<data dir>/quayside`
    pub dir: Option<PathBuf>,
}

impl StorageConfig {
    /// The directory the durable tier writes to.
    pub fn effective_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join(APP_NAME))
                .unwrap_or_else(|| PathBuf::from(".quayside"))
        })
    }
}

/// Mock backend settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Master switch. When false no request is ever mocked.
    pub enabled: bool,

    /// Seed for dataset generation. Random when absent.
    pub seed: Option<u64>,

    /// Per-family switches keyed by family name (e.g. `equipment-inbound`).
    /// Families not listed use their built-in default.
    pub families: BTreeMap<String, bool>,
}

impl MockConfig {
    /// Whether the named family is enabled, falling back to `default`.
    pub fn family_enabled(&self, family: &str, default: bool) -> bool {
        self.families.get(family).copied().unwrap_or(default)
    }

    /// Enable the mock backend with the given families switched on.
    pub fn with_families<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            seed: None,
            families: families.into_iter().map(|f| (f.into(), true)).collect(),
        }
    }
}
