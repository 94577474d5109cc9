//! Host UI hooks and forced logout.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use quayside_types::UserInfo;

use crate::token_store::TokenStore;

/// The blocking dialog shown when the backend ends the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloginPrompt {
    pub title: String,
    pub content: String,
    pub ok_text: String,
}

impl Default for ReloginPrompt {
    fn default() -> Self {
        Self {
            title: "Confirm logout".to_string(),
            content: "You have been logged out, you can cancel to stay on this page, or log in again"
                .to_string(),
            ok_text: "Re-Login".to_string(),
        }
    }
}

/// What the client needs from the application hosting it.
#[async_trait]
pub trait UiHost: Send + Sync + std::fmt::Debug {
    /// Show a transient error notification.
    fn notify_error(&self, message: &str);

    /// Show the blocking re-login dialog. Resolves `true` when the user
    /// acknowledges it, `false` when they dismiss it.
    async fn confirm_relogin(&self, prompt: &ReloginPrompt) -> bool;

    /// Reload the application shell after a forced logout.
    fn reload_shell(&self);
}

/// Shared host handle.
pub type SharedUiHost = Arc<dyn UiHost>;

/// Host with no UI: notifications go to the log and the re-login dialog is
/// acknowledged immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessHost;

#[async_trait]
impl UiHost for HeadlessHost {
    fn notify_error(&self, message: &str) {
        tracing::warn!(%message, "request failed");
    }

    async fn confirm_relogin(&self, prompt: &ReloginPrompt) -> bool {
        tracing::warn!(title = %prompt.title, "session ended by server");
        true
    }

    fn reload_shell(&self) {
        tracing::debug!("shell reload requested");
    }
}

/// Tears down the session when the backend reports it invalid.
#[derive(Debug, Clone)]
pub struct SessionInvalidator {
    inner: Arc<InvalidatorInner>,
}

#[derive(Debug)]
struct InvalidatorInner {
    tokens: TokenStore,
    host: SharedUiHost,
    prompt: ReloginPrompt,
    identity: RwLock<Option<UserInfo>>,
    invalidations: AtomicU64,
}

impl SessionInvalidator {
    pub fn new(tokens: TokenStore, host: SharedUiHost) -> Self {
        let identity = tokens.user_info();
        Self {
            inner: Arc::new(InvalidatorInner {
                tokens,
                host,
                prompt: ReloginPrompt::default(),
                identity: RwLock::new(identity),
                invalidations: AtomicU64::new(0),
            }),
        }
    }

    /// Show the re-login dialog and, once acknowledged, log out.
    ///
    /// Logging out clears the token and user info from both tiers, forgets
    /// the cached identity, reloads the durable tier and asks the host to
    /// reload the shell. A dismissed dialog leaves everything in place.
    /// Returns whether the session was torn down.
    pub async fn invalidate(&self, code: i64) -> bool {
        self.inner.invalidations.fetch_add(1, Ordering::SeqCst);
        tracing::info!(code, "session invalidated by server");

        if !self.inner.host.confirm_relogin(&self.inner.prompt).await {
            tracing::info!("re-login dismissed; keeping session");
            return false;
        }

        if let Err(e) = self.inner.tokens.clear_session() {
            tracing::warn!(error = %e, "failed to clear stored session");
        }
        *self.inner.identity.write() = None;
        if let Err(e) = self.inner.tokens.reload() {
            tracing::warn!(error = %e, "failed to reload durable storage");
        }
        self.inner.host.reload_shell();
        tracing::info!("logged out");
        true
    }

    /// How many times [`invalidate`](Self::invalidate) has run.
    pub fn invalidations(&self) -> u64 {
        self.inner.invalidations.load(Ordering::SeqCst)
    }

    /// The identity cached at sign-in.
    pub fn identity(&self) -> Option<UserInfo> {
        self.inner.identity.read().clone()
    }

    pub(crate) fn set_identity(&self, user: Option<UserInfo>) {
        *self.inner.identity.write() = user;
    }

    pub fn host(&self) -> &SharedUiHost {
        &self.inner.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    #[derive(Debug)]
    struct ScriptedHost {
        accept: bool,
        reloaded: AtomicBool,
    }

    #[async_trait]
    impl UiHost for ScriptedHost {
        fn notify_error(&self, _message: &str) {}

        async fn confirm_relogin(&self, prompt: &ReloginPrompt) -> bool {
            assert_eq!(prompt.ok_text, "Re-Login");
            self.accept
        }

        fn reload_shell(&self) {
            self.reloaded.store(true, Ordering::SeqCst);
        }
    }

    fn signed_in() -> TokenStore {
        let store = TokenStore::in_memory();
        let user = UserInfo {
            username: "ops".to_string(),
            ..Default::default()
        };
        store.establish(&user, Some("tok"), true).unwrap();
        store
    }

    #[tokio::test]
    async fn test_acknowledged_logs_out() {
        let store = signed_in();
        let host = Arc::new(ScriptedHost {
            accept: true,
            reloaded: AtomicBool::new(false),
        });
        let invalidator = SessionInvalidator::new(store.clone(), host.clone());
        assert_eq!(invalidator.identity().unwrap().username, "ops");

        assert!(invalidator.invalidate(50014).await);
        assert!(!store.is_logged_in());
        assert!(store.user_info().is_none());
        assert!(invalidator.identity().is_none());
        assert!(host.reloaded.load(Ordering::SeqCst));
        assert_eq!(invalidator.invalidations(), 1);
    }

    #[tokio::test]
    async fn test_dismissed_keeps_session() {
        let store = signed_in();
        let host = Arc::new(ScriptedHost {
            accept: false,
            reloaded: AtomicBool::new(false),
        });
        let invalidator = SessionInvalidator::new(store.clone(), host.clone());

        assert!(!invalidator.invalidate(50008).await);
        assert!(store.is_logged_in());
        assert!(!host.reloaded.load(Ordering::SeqCst));
        assert_eq!(invalidator.invalidations(), 1);
    }
}
