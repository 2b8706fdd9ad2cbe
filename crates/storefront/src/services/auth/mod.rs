//! Authentication service.
//!
//! Validates the login and signup forms and turns accepted input into session
//! gate transitions. There is no account store: any well-formed email and
//! password sign in.

mod error;

pub use error::AuthError;

use serde::Deserialize;

use roar_threads_core::{Email, UserProfile};

use crate::gate::{Clock, KeyValueStore, SessionGate};
use crate::models::Notice;
use crate::services::provider::{IdentityProvider, OAuthProvider, ProviderError};

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Login form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Signup form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Check a login submission.
///
/// # Errors
///
/// Returns `AuthError::InvalidLogin` for a malformed email or a short password.
pub fn validate_login(form: &LoginForm) -> Result<UserProfile, AuthError> {
    let email = Email::parse(&form.email).map_err(|_| AuthError::InvalidLogin)?;
    if password_length(&form.password) < MIN_PASSWORD_LENGTH {
        return Err(AuthError::InvalidLogin);
    }
    Ok(UserProfile::with_email(email))
}

/// Check a signup submission, stopping at the first problem.
///
/// Order: name, email, password length, confirmation.
///
/// # Errors
///
/// Returns the first failing `AuthError`.
pub fn validate_signup(form: &SignupForm) -> Result<UserProfile, AuthError> {
    if form.name.trim().is_empty() {
        return Err(AuthError::MissingName);
    }
    let email = Email::parse(&form.email)?;
    if password_length(&form.password) < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if form.password != form.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    Ok(UserProfile::with_email(email).named(form.name.as_str()))
}

/// Length in UTF-16 code units, the unit browser forms count in.
fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

// =============================================================================
// Command Handlers
// =============================================================================

/// Handle a login submission.
///
/// # Errors
///
/// Returns the validation error; the gate is untouched in that case.
pub fn on_submit_login<S: KeyValueStore, C: Clock>(
    gate: &mut SessionGate<S, C>,
    form: &LoginForm,
) -> Result<Notice, AuthError> {
    let profile = validate_login(form)?;
    gate.authenticate(profile);
    Ok(Notice::success(
        "Welcome Back!",
        "Successfully signed in to your account.",
    ))
}

/// Handle a signup submission.
///
/// # Errors
///
/// Returns the first validation error; the gate is untouched in that case.
pub fn on_submit_signup<S: KeyValueStore, C: Clock>(
    gate: &mut SessionGate<S, C>,
    form: &SignupForm,
) -> Result<Notice, AuthError> {
    let profile = validate_signup(form)?;
    gate.authenticate(profile);
    Ok(Notice::success(
        "Account Created!",
        "Welcome to Roar Threads! Your account has been created successfully.",
    ))
}

/// Handle the sign-out button.
pub fn on_logout<S: KeyValueStore, C: Clock>(gate: &mut SessionGate<S, C>) {
    gate.logout();
}

/// Handle a "continue with Google/Apple" button.
///
/// Waits for the provider, then takes the same path as a form sign-in.
///
/// # Errors
///
/// Returns the provider's error; the gate is untouched in that case.
pub async fn on_provider_sign_in<S, C, P>(
    gate: &mut SessionGate<S, C>,
    identity: &P,
    provider: OAuthProvider,
) -> Result<Notice, ProviderError>
where
    S: KeyValueStore,
    C: Clock,
    P: IdentityProvider + ?Sized,
{
    let profile = identity.sign_in(provider).await?;
    gate.authenticate(profile);
    let name = provider.display_name();
    Ok(Notice::success(
        format!("{name} Authentication"),
        format!("Successfully authenticated with {name}!"),
    ))
}
