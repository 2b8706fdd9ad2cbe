//! Per-browser presentation state: the pending notice and the cart counter.

use tower_sessions::Session;

use crate::models::{Notice, session_keys};

/// Queue a notice for the next page render.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_notice(
    session: &Session,
    notice: Notice,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::NOTICE, notice).await
}

/// Take the pending notice, if any. It is shown once.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn take_notice(session: &Session) -> Result<Option<Notice>, tower_sessions::session::Error> {
    session.remove::<Notice>(session_keys::NOTICE).await
}

/// Current cart counter (0 if unset).
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn cart_count(session: &Session) -> Result<u32, tower_sessions::session::Error> {
    Ok(session
        .get::<u32>(session_keys::CART_COUNT)
        .await?
        .unwrap_or(0))
}

/// Add one to the cart counter and return the new value.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn increment_cart(session: &Session) -> Result<u32, tower_sessions::session::Error> {
    let count = cart_count(session).await?.saturating_add(1);
    session.insert(session_keys::CART_COUNT, count).await?;
    Ok(count)
}
