//! Session middleware configuration.
//!
//! Each browser gets an in-memory tower-sessions session keyed by a cookie.
//! It plays the part of the browser's local storage: the session gate's record
//! lives there, alongside the pending notice and the cart counter.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "roar_session";

/// Idle lifetime of the browser session (30 days).
///
/// Longer than the gate's 2-day record TTL, so the record's own expiry is what
/// signs users out.
const SESSION_IDLE_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Create the session layer over the given in-memory store.
#[must_use]
pub fn create_session_layer(
    store: MemoryStore,
    config: &StorefrontConfig,
) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_IDLE_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
