//! Authentication error types.

use thiserror::Error;

/// Input rejected by the login or signup forms.
///
/// These never reach the session gate. Each maps to the blocking message the
/// form shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Login with a malformed email or a short password.
    #[error("invalid login input")]
    InvalidLogin,

    /// Signup without a name.
    #[error("name is required")]
    MissingName,

    /// Signup with a malformed email.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] roar_threads_core::EmailError),

    /// Signup password shorter than the minimum.
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    /// Signup password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl AuthError {
    /// The message shown to the user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidLogin => "Please enter a valid email and password (min 6 characters).",
            Self::MissingName => "Please enter your full name.",
            Self::InvalidEmail(_) => "Please enter a valid email address.",
            Self::PasswordTooShort { .. } => "Password must be at least 6 characters long.",
            Self::PasswordMismatch => "Passwords do not match.",
        }
    }
}
