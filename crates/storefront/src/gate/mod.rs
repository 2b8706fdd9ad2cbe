//! Session gate: the single source of truth for "is this browser signed in".
//!
//! The gate owns a [`KeyValueStore`] and a [`Clock`]. Its state is derived
//! from a [`SessionRecord`] persisted under [`AUTH_STORAGE_KEY`]; a record is
//! valid while `now - created_at < ttl`. Expired or malformed records count as
//! absent and are removed the first time they are looked at.
//!
//! Every transition ends in [`SessionGate::refresh_visibility`], which projects
//! the state onto exactly one [`Surface`].
//!
//! ```
//! use roar_threads_core::{Email, UserProfile};
//! use roar_threads_storefront::gate::{MemoryStorage, SessionGate, Surface, SystemClock};
//!
//! let mut gate = SessionGate::new(MemoryStorage::new(), SystemClock);
//! assert_eq!(gate.active_surface(), Surface::Auth);
//!
//! gate.authenticate(UserProfile::with_email(Email::parse("a@b.com").unwrap()));
//! assert!(gate.check_status());
//! assert_eq!(gate.active_surface(), Surface::Home);
//!
//! gate.logout();
//! assert!(!gate.check_status());
//! ```

mod clock;
mod storage;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use storage::{KeyValueStore, MemoryStorage, SessionStorage};

use roar_threads_core::{AUTH_STORAGE_KEY, SessionRecord, UserProfile};

/// Whether the browser is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    SignedOut,
    SignedIn,
}

/// The two mutually exclusive presentation surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Login / signup screen.
    Auth,
    /// Homepage with the product grid.
    Home,
}

impl Surface {
    const fn for_state(state: SessionState) -> Self {
        match state {
            SessionState::SignedIn => Self::Home,
            SessionState::SignedOut => Self::Auth,
        }
    }
}

/// Decides and persists sign-in state for one browser.
#[derive(Debug)]
pub struct SessionGate<S, C> {
    storage: S,
    clock: C,
    state: SessionState,
    surface: Surface,
}

impl<S: KeyValueStore, C: Clock> SessionGate<S, C> {
    /// Build a gate, deriving the initial state from whatever is stored.
    pub fn new(storage: S, clock: C) -> Self {
        let mut gate = Self {
            storage,
            clock,
            state: SessionState::SignedOut,
            surface: Surface::Auth,
        };
        if gate.check_status() {
            gate.state = SessionState::SignedIn;
        }
        gate.refresh_visibility();
        gate
    }

    /// Whether a valid record is stored right now.
    ///
    /// Clears the record if it is expired or malformed. Never fails.
    pub fn check_status(&mut self) -> bool {
        self.valid_record().is_some()
    }

    /// Persist a fresh record for `profile` and switch to the home surface.
    ///
    /// No credential check happens here; callers validate input first.
    pub fn authenticate(&mut self, profile: UserProfile) {
        let record = SessionRecord::issue(profile, self.clock.now());
        match record.to_json() {
            Ok(json) => self.storage.set(AUTH_STORAGE_KEY, json),
            Err(e) => tracing::error!(error = %e, "Failed to serialize session record"),
        }
        tracing::info!(method = %record.user.method, "Session authenticated");
        self.state = SessionState::SignedIn;
        self.refresh_visibility();
    }

    /// Drop the record and switch to the auth surface. Idempotent.
    pub fn logout(&mut self) {
        self.storage.remove(AUTH_STORAGE_KEY);
        if self.state == SessionState::SignedIn {
            tracing::info!("Session signed out");
        }
        self.state = SessionState::SignedOut;
        self.refresh_visibility();
    }

    /// Project the current state onto exactly one surface.
    pub fn refresh_visibility(&mut self) -> Surface {
        let surface = Surface::for_state(self.state);
        if surface != self.surface {
            tracing::debug!(from = ?self.surface, to = ?surface, "Switching surface");
        }
        self.surface = surface;
        surface
    }

    /// Profile from the stored record, if it is still valid.
    pub fn current_user(&mut self) -> Option<UserProfile> {
        self.valid_record().map(|record| record.user)
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.state == SessionState::SignedIn
    }

    #[must_use]
    pub const fn active_surface(&self) -> Surface {
        self.surface
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the store, e.g. to flush staged writes.
    pub const fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Hand the store back to its owner, e.g. to commit it.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn valid_record(&mut self) -> Option<SessionRecord> {
        let raw = self.storage.get(AUTH_STORAGE_KEY)?;
        let Some(record) = SessionRecord::from_json(&raw) else {
            tracing::debug!("Removing malformed session record");
            self.storage.remove(AUTH_STORAGE_KEY);
            return None;
        };
        if !record.is_valid_at(self.clock.now()) {
            tracing::debug!(created_at = %record.created_at, "Removing expired session record");
            self.storage.remove(AUTH_STORAGE_KEY);
            return None;
        }
        Some(record)
    }
}
