//! Authentication route handlers.
//!
//! Every sign-in path ends in the session gate. Validation failures do not
//! touch the gate; they queue an error notice and return to the form.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use tracing::instrument;

use super::{notify, notify_at};
use crate::error::{Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::middleware::{BrowserGate, StorefrontGate};
use crate::models::Notice;
use crate::services::auth::{self, LoginForm, SignupForm};
use crate::services::provider::OAuthProvider;
use crate::state::AppState;

/// Handle login form submission.
#[instrument(skip_all)]
pub async fn login(mut gate: BrowserGate, Form(form): Form<LoginForm>) -> Result<Redirect> {
    match auth::on_submit_login(&mut *gate, &form) {
        Ok(notice) => {
            signed_in(&mut *gate, "login");
            notify(gate, notice).await
        }
        Err(err) => {
            tracing::debug!(error = %err, "Login rejected");
            notify_at(gate, Notice::error(err.user_message()), "/?form=login").await
        }
    }
}

/// Handle signup form submission.
#[instrument(skip_all)]
pub async fn signup(mut gate: BrowserGate, Form(form): Form<SignupForm>) -> Result<Redirect> {
    match auth::on_submit_signup(&mut *gate, &form) {
        Ok(notice) => {
            signed_in(&mut *gate, "signup");
            notify(gate, notice).await
        }
        Err(err) => {
            tracing::debug!(error = %err, "Signup rejected");
            notify_at(gate, Notice::error(err.user_message()), "/?form=signup").await
        }
    }
}

/// Handle "continue with Google/Apple".
///
/// Unknown providers are a 404.
#[instrument(skip(state, gate))]
pub async fn oauth(
    State(state): State<AppState>,
    mut gate: BrowserGate,
    Path(provider): Path<String>,
) -> Result<Redirect> {
    let provider: OAuthProvider = provider.parse()?;
    let notice = auth::on_provider_sign_in(&mut *gate, state.identity(), provider).await?;
    signed_in(&mut *gate, provider.slug());
    notify(gate, notice).await
}

/// Handle logout.
#[instrument(skip_all)]
pub async fn logout(mut gate: BrowserGate) -> Result<Redirect> {
    auth::on_logout(&mut *gate);
    clear_sentry_user();
    add_breadcrumb("auth", "Signed out", None);
    gate.commit().await?;
    Ok(Redirect::to("/"))
}

fn signed_in(gate: &mut StorefrontGate, via: &str) {
    if let Some(user) = gate.current_user() {
        set_sentry_user(user.email.as_str(), user.method.as_str());
    }
    add_breadcrumb("auth", "Signed in", Some(&[("via", via)]));
}
