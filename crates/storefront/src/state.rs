//! Application state shared across handlers.

use std::sync::Arc;

use tower_sessions::MemoryStore;

use crate::config::StorefrontConfig;
use crate::gate::{SharedClock, SystemClock};
use crate::services::provider::{IdentityProvider, SimulatedProvider};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration, the identity provider, the clock the session gate judges
/// expiry by, and the browser session store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    identity: Arc<dyn IdentityProvider>,
    clock: SharedClock,
    sessions: MemoryStore,
}

impl AppState {
    /// Create state with the simulated identity provider and wall-clock time.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let identity = Arc::new(SimulatedProvider::new(config.oauth_delay));
        Self::with_parts(config, identity, Arc::new(SystemClock))
    }

    /// Create state with a specific identity provider and clock.
    #[must_use]
    pub fn with_parts(
        config: StorefrontConfig,
        identity: Arc<dyn IdentityProvider>,
        clock: SharedClock,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                identity,
                clock,
                sessions: MemoryStore::default(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the identity provider used for social sign-in.
    #[must_use]
    pub fn identity(&self) -> &dyn IdentityProvider {
        self.inner.identity.as_ref()
    }

    /// The clock session records are checked against.
    #[must_use]
    pub fn clock(&self) -> SharedClock {
        Arc::clone(&self.inner.clock)
    }

    /// Store behind every browser session.
    #[must_use]
    pub fn session_store(&self) -> &MemoryStore {
        &self.inner.sessions
    }
}
