//! Session gate extractors.
//!
//! Route handlers get the browser's session gate through these extractors.
//! The gate runs over a snapshot of the browser's session, judged by the
//! clock in [`AppState`]. Removal of an expired or malformed record is
//! written back while the extractor runs, so it happens whatever the handler
//! does next. Handlers call [`BrowserGate::commit`] once their action is done.

use std::ops::{Deref, DerefMut};

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::error::AppError;
use crate::gate::{SessionGate, SessionStorage, SharedClock};
use crate::models::session_keys;
use crate::state::AppState;

/// The gate as the HTTP shell uses it.
pub type StorefrontGate = SessionGate<SessionStorage, SharedClock>;

/// The requesting browser's session gate.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(mut gate: BrowserGate) -> Result<Response> {
///     gate.logout();
///     gate.commit().await?;
///     Ok(Redirect::to("/").into_response())
/// }
/// ```
pub struct BrowserGate {
    gate: StorefrontGate,
    session: Session,
}

impl BrowserGate {
    async fn load(parts: &Parts, state: &AppState) -> Result<Self, AppError> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;
        let storage = SessionStorage::load(&session, session_keys::GATE_KEYS).await?;

        let mut gate = SessionGate::new(storage, state.clock());
        if gate.storage().is_dirty() {
            gate.storage_mut().flush(&session).await?;
        }

        Ok(Self { gate, session })
    }

    /// Write the gate's pending changes to the session.
    ///
    /// Returns the session for any further writes (notices, cart counter).
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn commit(self) -> Result<Session, AppError> {
        let Self { gate, session } = self;
        let storage = gate.into_storage();
        if storage.is_dirty() {
            storage.commit(&session).await?;
        }
        Ok(session)
    }
}

impl Deref for BrowserGate {
    type Target = StorefrontGate;

    fn deref(&self) -> &Self::Target {
        &self.gate
    }
}

impl DerefMut for BrowserGate {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.gate
    }
}

impl FromRequestParts<AppState> for BrowserGate {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::load(parts, state).await
    }
}

/// Extractor for homepage-only actions.
///
/// Signed-out browsers are sent back to `/`, which shows the auth screen.
pub struct RequireSignedIn(pub BrowserGate);

/// Why a [`RequireSignedIn`] request was turned away.
pub enum SignedInRejection {
    /// Back to the auth screen.
    RedirectToAuth,
    /// The session could not be read or written.
    Error(AppError),
}

impl IntoResponse for SignedInRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToAuth => Redirect::to("/").into_response(),
            Self::Error(err) => err.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireSignedIn {
    type Rejection = SignedInRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let gate = BrowserGate::load(parts, state)
            .await
            .map_err(SignedInRejection::Error)?;
        if gate.is_signed_in() {
            Ok(Self(gate))
        } else {
            Err(SignedInRejection::RedirectToAuth)
        }
    }
}
