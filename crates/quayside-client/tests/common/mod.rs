//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use quayside_client::{ClientBuilder, QuaysideClient, ReloginPrompt, TokenStore, UiHost};
use quayside_config::MockConfig;
use quayside_mock::MockRouter;
use wiremock::MockServer;

/// A host that records every UI interaction.
#[derive(Debug)]
pub struct RecordingHost {
    accept_relogin: bool,
    notifications: Mutex<Vec<String>>,
    prompts: AtomicUsize,
    reloads: AtomicUsize,
}

impl RecordingHost {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::new(true))
    }

    pub fn dismissing() -> Arc<Self> {
        Arc::new(Self::new(false))
    }

    fn new(accept_relogin: bool) -> Self {
        Self {
            accept_relogin,
            notifications: Mutex::new(Vec::new()),
            prompts: AtomicUsize::new(0),
            reloads: AtomicUsize::new(0),
        }
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().clone()
    }

    pub fn prompts(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }

    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UiHost for RecordingHost {
    fn notify_error(&self, message: &str) {
        self.notifications.lock().push(message.to_string());
    }

    async fn confirm_relogin(&self, _prompt: &ReloginPrompt) -> bool {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        self.accept_relogin
    }

    fn reload_shell(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

/// Install a test subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A client pointed at `server` with in-memory token storage.
pub fn client_for(server: &MockServer, host: Arc<RecordingHost>) -> QuaysideClient {
    init_tracing();
    ClientBuilder::new()
        .base_url(server.uri())
        .token_store(TokenStore::in_memory())
        .ui_host(host)
        .build()
        .expect("client builds")
}

/// A client pointed at `server` whose mock router serves `families`.
pub fn mocked_client_for(
    server: &MockServer,
    host: Arc<RecordingHost>,
    families: &[&str],
) -> QuaysideClient {
    init_tracing();
    let mut config = MockConfig::with_families(families.iter().copied());
    config.seed = Some(42);
    ClientBuilder::new()
        .base_url(server.uri())
        .ui_host(host)
        .mock_router(MockRouter::new(&config).expect("mock router builds"))
        .build()
        .expect("client builds")
}
