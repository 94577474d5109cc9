//! Bearer token and user-info persistence.
//!
//! Two storage tiers mirror a browser's session and local storage: a
//! transient tier that lives as long as the process, and a durable tier
//! backed by a JSON file. The token lives in exactly one of them.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use quayside_types::UserInfo;

use crate::error::{Error, Result};

/// Key the bearer token is stored under.
pub const TOKEN_KEY: &str = "token";

/// Key the user-info record is stored under.
pub const USER_INFO_KEY: &str = "userInfo";

/// File name of the durable tier within the storage directory.
pub const STORAGE_FILE: &str = "storage.json";

// ============================================================================
// StorageTier Trait
// ============================================================================

/// A string key-value store.
pub trait StorageTier: Send + Sync + std::fmt::Debug {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove every value.
    fn clear(&self) -> Result<()>;

    /// Drop any cached state and re-read from the backing store.
    fn reload(&self) -> Result<()> {
        Ok(())
    }
}

/// Shared storage tier.
pub type SharedTier = Arc<dyn StorageTier>;

/// Which tier a value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Cleared when the session ends.
    Transient,
    /// Survives restarts.
    Durable,
}

// ============================================================================
// MemoryTier
// ============================================================================

/// Process-memory tier.
#[derive(Debug, Default)]
pub struct MemoryTier {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryTier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageTier for MemoryTier {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.values.write().clear();
        Ok(())
    }
}

// ============================================================================
// FileTier
// ============================================================================

/// JSON-file tier with a lazily filled in-memory cache.
#[derive(Debug)]
pub struct FileTier {
    path: PathBuf,
    cache: RwLock<Option<BTreeMap<String, String>>>,
}

impl FileTier {
    /// A tier stored as [`STORAGE_FILE`] inside `dir`.
    pub fn new(dir: &Path) -> Self {
        Self::with_path(dir.join(STORAGE_FILE))
    }

    /// A tier stored at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            cache: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::Storage(format!("Failed to read {}: {}", self.path.display(), e)))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| Error::Storage(format!("Failed to parse {}: {}", self.path.display(), e)))
    }

    fn write_file(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::Storage(format!("Failed to create storage directory: {}", e))
            })?;
        }
        let json = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, json)
            .map_err(|e| Error::Storage(format!("Failed to write {}: {}", self.path.display(), e)))
    }

    /// Apply `change` to the stored map and persist it.
    fn update<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut cache = self.cache.write();
        let mut values = match cache.take() {
            Some(values) => values,
            None => self.read_file()?,
        };
        let before = values.clone();
        change(&mut values);
        match self.write_file(&values) {
            Ok(()) => {
                *cache = Some(values);
                Ok(())
            }
            Err(e) => {
                *cache = Some(before);
                Err(e)
            }
        }
    }
}

impl StorageTier for FileTier {
    fn get(&self, key: &str) -> Option<String> {
        if let Some(values) = self.cache.read().as_ref() {
            return values.get(key).cloned();
        }

        let mut cache = self.cache.write();
        if cache.is_none() {
            match self.read_file() {
                Ok(values) => *cache = Some(values),
                Err(e) => {
                    tracing::warn!(error = %e, "durable storage unreadable");
                    return None;
                }
            }
        }
        cache.as_ref().and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|values| {
            values.remove(key);
        })
    }

    fn clear(&self) -> Result<()> {
        self.update(BTreeMap::clear)
    }

    fn reload(&self) -> Result<()> {
        let values = self.read_file()?;
        *self.cache.write() = Some(values);
        Ok(())
    }
}

// ============================================================================
// TokenStore
// ============================================================================

/// Holder of the bearer token and the user-info record.
///
/// Reads prefer the durable tier. Cheap to clone; clones share tiers.
#[derive(Debug, Clone)]
pub struct TokenStore {
    transient: SharedTier,
    durable: SharedTier,
}

impl TokenStore {
    pub fn new(transient: SharedTier, durable: SharedTier) -> Self {
        Self { transient, durable }
    }

    /// A store with an in-memory transient tier and a file-backed durable
    /// tier under `dir`.
    pub fn with_storage_dir(dir: &Path) -> Self {
        Self::new(Arc::new(MemoryTier::new()), Arc::new(FileTier::new(dir)))
    }

    /// A store with both tiers in memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTier::new()), Arc::new(MemoryTier::new()))
    }

    fn tier(&self, tier: Tier) -> &SharedTier {
        match tier {
            Tier::Transient => &self.transient,
            Tier::Durable => &self.durable,
        }
    }

    fn other(tier: Tier) -> Tier {
        match tier {
            Tier::Transient => Tier::Durable,
            Tier::Durable => Tier::Transient,
        }
    }

    /// The current token, durable tier first.
    pub fn token(&self) -> Option<String> {
        self.durable
            .get(TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .or_else(|| self.transient.get(TOKEN_KEY).filter(|t| !t.is_empty()))
    }

    /// Where the token currently lives.
    pub fn token_tier(&self) -> Option<Tier> {
        if self.durable.get(TOKEN_KEY).is_some_and(|t| !t.is_empty()) {
            Some(Tier::Durable)
        } else if self.transient.get(TOKEN_KEY).is_some_and(|t| !t.is_empty()) {
            Some(Tier::Transient)
        } else {
            None
        }
    }

    /// The tier a new token goes to: wherever the user-info record lives,
    /// durable when it lives nowhere.
    pub fn tier_for_token(&self) -> Tier {
        if self.durable.get(USER_INFO_KEY).is_some() {
            Tier::Durable
        } else if self.transient.get(USER_INFO_KEY).is_some() {
            Tier::Transient
        } else {
            Tier::Durable
        }
    }

    /// Store the token in the tier picked by [`tier_for_token`](Self::tier_for_token).
    ///
    /// Any copy in the other tier is removed, so the token lives in exactly
    /// one tier.
    pub fn set_token(&self, token: &str) -> Result<Tier> {
        let tier = self.tier_for_token();
        self.tier(tier).set(TOKEN_KEY, token)?;
        self.tier(Self::other(tier)).remove(TOKEN_KEY)?;
        tracing::debug!(?tier, "token stored");
        Ok(tier)
    }

    /// Record a login: user info goes durable when `remember` is set,
    /// transient otherwise, and the token follows it.
    pub fn establish(&self, user_info: &UserInfo, token: Option<&str>, remember: bool) -> Result<Tier> {
        let tier = if remember { Tier::Durable } else { Tier::Transient };
        let record = serde_json::to_string(user_info)?;
        self.tier(tier).set(USER_INFO_KEY, &record)?;
        self.tier(Self::other(tier)).remove(USER_INFO_KEY)?;

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.set_token(token)?;
        }
        tracing::info!(user = %user_info.username, ?tier, "session established");
        Ok(tier)
    }

    /// The stored user-info record, durable tier first.
    pub fn user_info(&self) -> Option<UserInfo> {
        let raw = self
            .durable
            .get(USER_INFO_KEY)
            .or_else(|| self.transient.get(USER_INFO_KEY))?;
        match serde_json::from_str(&raw) {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::warn!(error = %e, "stored user info is not valid JSON");
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Remove the token from both tiers.
    pub fn clear_token(&self) -> Result<()> {
        self.durable.remove(TOKEN_KEY)?;
        self.transient.remove(TOKEN_KEY)
    }

    /// Remove the token and the user-info record from both tiers.
    pub fn clear_session(&self) -> Result<()> {
        self.clear_token()?;
        self.durable.remove(USER_INFO_KEY)?;
        self.transient.remove(USER_INFO_KEY)
    }

    /// Re-read the durable tier from its backing store.
    pub fn reload(&self) -> Result<()> {
        self.durable.reload()
    }

    /// Empty the transient tier.
    pub fn clear_transient(&self) -> Result<()> {
        self.transient.clear()
    }
}
