//! Signed-in user profiles.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::email::Email;

/// How the user signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    Email,
    Google,
    Apple,
}

impl AuthMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Google => "google",
            Self::Apple => "apple",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-only identity carried in the session record.
///
/// Never checked against any account store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: Email,
    pub method: AuthMethod,
}

impl UserProfile {
    /// Profile for an email/password sign-in.
    #[must_use]
    pub const fn with_email(email: Email) -> Self {
        Self {
            name: None,
            email,
            method: AuthMethod::Email,
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name if present, otherwise the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.email.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_method_serializes_lowercase() {
        let json = serde_json::to_string(&AuthMethod::Google).unwrap();
        assert_eq!(json, "\"google\"");
        assert_eq!(AuthMethod::Apple.to_string(), "apple");
    }

    #[test]
    fn test_profile_without_name_omits_field() {
        let profile = UserProfile::with_email(Email::parse("a@b.com").unwrap());
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.com", "method": "email"}));
    }

    #[test]
    fn test_display_name() {
        let profile = UserProfile::with_email(Email::parse("a@b.com").unwrap());
        assert_eq!(profile.display_name(), "a@b.com");
        assert_eq!(profile.named("Ada").display_name(), "Ada");
    }
}
