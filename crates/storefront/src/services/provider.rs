//! Third-party identity providers.
//!
//! Sign-in with Google or Apple goes through an [`IdentityProvider`]. The
//! storefront ships [`SimulatedProvider`], which waits a fixed delay and hands
//! back a canned profile; a real OAuth client can replace it without touching
//! the session gate.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use roar_threads_core::{AuthMethod, Email, UserProfile};

/// Default latency of the simulated provider.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Supported social sign-in providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OAuthProvider {
    Google,
    Apple,
}

impl OAuthProvider {
    /// URL slug, e.g. `/auth/oauth/google`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Apple => "apple",
        }
    }

    /// Name shown to the user.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Apple => "Apple ID",
        }
    }

    #[must_use]
    pub const fn method(self) -> AuthMethod {
        match self {
            Self::Google => AuthMethod::Google,
            Self::Apple => AuthMethod::Apple,
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for OAuthProvider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Self::Google),
            "apple" => Ok(Self::Apple),
            other => Err(ProviderError::Unsupported(other.to_owned())),
        }
    }
}

/// Errors from an identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// No provider by that name.
    #[error("unsupported identity provider: {0}")]
    Unsupported(String),

    /// The provider returned something that is not a usable profile.
    #[error("identity provider returned an invalid profile: {0}")]
    InvalidProfile(String),
}

/// Something that can vouch for a user's identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Run the provider's sign-in flow and return the user's profile.
    async fn sign_in(&self, provider: OAuthProvider) -> Result<UserProfile, ProviderError>;
}

/// Stand-in provider: fixed delay, fake profile.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    delay: Duration,
}

impl SimulatedProvider {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new(SIMULATED_DELAY)
    }
}

#[async_trait]
impl IdentityProvider for SimulatedProvider {
    async fn sign_in(&self, provider: OAuthProvider) -> Result<UserProfile, ProviderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let address = format!("user@{}.com", provider.slug());
        let email =
            Email::parse(&address).map_err(|e| ProviderError::InvalidProfile(e.to_string()))?;
        tracing::debug!(%provider, "Simulated provider sign-in complete");
        Ok(UserProfile {
            name: Some("User Name".to_string()),
            email,
            method: provider.method(),
        })
    }
}
