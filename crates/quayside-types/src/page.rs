//! Page parameters and the listing payload.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Page used when `current` is absent or invalid.
pub const DEFAULT_CURRENT: u64 = 1;

/// Page size used when `pageSize` is absent or invalid.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Page/page-size parameters plus any remaining filters.
///
/// Serializes to the query shape the backend expects:
/// `current=1&pageSize=10&<filter>=<value>...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    pub current: u64,
    /// Records per page.
    #[serde(rename = "pageSize")]
    pub page_size: u64,
    /// Everything that is not a paging parameter.
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            current: DEFAULT_CURRENT,
            page_size: DEFAULT_PAGE_SIZE,
            filters: BTreeMap::new(),
        }
    }
}

impl PageRequest {
    /// A request for `current` with `page_size` records per page.
    ///
    /// Zero values fall back to the defaults.
    pub fn new(current: u64, page_size: u64) -> Self {
        Self {
            current: if current >= 1 { current } else { DEFAULT_CURRENT },
            page_size: if page_size >= 1 {
                page_size
            } else {
                DEFAULT_PAGE_SIZE
            },
            filters: BTreeMap::new(),
        }
    }

    /// Add a filter.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Build from decoded query pairs.
    ///
    /// `current` and `pageSize` default to 1 and 10 when absent, non-numeric,
    /// or below 1. All other keys land in `filters` (last value wins).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut page = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "current" => page.current = parse_positive(value.as_ref(), DEFAULT_CURRENT),
                "pageSize" => page.page_size = parse_positive(value.as_ref(), DEFAULT_PAGE_SIZE),
                other => {
                    page.filters.insert(other.to_string(), value.as_ref().to_string());
                }
            }
        }
        page
    }

    /// Build from a raw query string (with or without a leading `?`).
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// Half-open index range `[(current-1)*page_size, current*page_size)`,
    /// not yet clamped to any collection.
    pub fn range(&self) -> Range<u64> {
        let start = self.current.saturating_sub(1).saturating_mul(self.page_size);
        let end = self.current.saturating_mul(self.page_size);
        start..end
    }
}

fn parse_positive(raw: &str, default: u64) -> u64 {
    match raw.trim().parse::<u64>() {
        Ok(n) if n >= 1 => n,
        _ => default,
    }
}

/// A page of records plus the total the producer reports.
///
/// `total` is what the producer declares, not `list.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page.
    pub list: Vec<T>,
    /// Declared total across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(list: Vec<T>, total: u64) -> Self {
        Self { list, total }
    }
}
