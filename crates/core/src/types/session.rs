//! The persisted proof-of-session.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::profile::UserProfile;

/// Storage key the session record lives under.
pub const AUTH_STORAGE_KEY: &str = "roarThreadsAuth";

/// Lifetime of a freshly written record: 2 days (172 800 000 ms).
pub const SESSION_TTL: TimeDelta = TimeDelta::days(2);

/// A locally persisted claim that this browser session is authenticated.
///
/// Serialized as `{ "user": ..., "timestamp": <epoch-ms>, "expiresIn": <ms> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user: UserProfile,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "expiresIn", with = "millis")]
    pub ttl: TimeDelta,
}

impl SessionRecord {
    /// A record created at `now` with the standard TTL.
    #[must_use]
    pub const fn issue(user: UserProfile, now: DateTime<Utc>) -> Self {
        Self {
            user,
            created_at: now,
            ttl: SESSION_TTL,
        }
    }

    /// Valid iff `now - created_at < ttl`.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.created_at) < self.ttl
    }

    /// Parse a stored value. `None` for anything that is not a record.
    #[must_use]
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Serialize for storage.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; the record's shape cannot produce one in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// `TimeDelta` as whole milliseconds.
mod millis {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(ttl: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(ttl.num_milliseconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        let ms = i64::deserialize(deserializer)?;
        TimeDelta::try_milliseconds(ms).ok_or_else(|| de::Error::custom("ttl out of range"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{AuthMethod, Email};

    fn profile() -> UserProfile {
        UserProfile::with_email(Email::parse("a@b.com").unwrap())
    }

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn test_ttl_is_two_days_in_millis() {
        assert_eq!(SESSION_TTL.num_milliseconds(), 172_800_000);
    }

    #[test]
    fn test_wire_format() {
        let record = SessionRecord::issue(profile(), at(1_700_000_000_000));
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "user": {"email": "a@b.com", "method": "email"},
                "timestamp": 1_700_000_000_000_i64,
                "expiresIn": 172_800_000,
            })
        );
    }

    #[test]
    fn test_parses_browser_written_record() {
        let raw = r#"{"user":{"name":"User Name","email":"user@google.com","method":"google"},"timestamp":1700000000000,"expiresIn":172800000}"#;
        let record = SessionRecord::from_json(raw).unwrap();
        assert_eq!(record.user.method, AuthMethod::Google);
        assert_eq!(record.user.name.as_deref(), Some("User Name"));
        assert_eq!(record.created_at, at(1_700_000_000_000));
        assert_eq!(record.ttl, SESSION_TTL);
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        assert!(SessionRecord::from_json("not json").is_none());
        assert!(SessionRecord::from_json("{}").is_none());
        assert!(SessionRecord::from_json(r#"{"timestamp":"yesterday","expiresIn":1}"#).is_none());
        assert!(SessionRecord::from_json("null").is_none());
    }

    #[test]
    fn test_validity_boundary() {
        let record = SessionRecord::issue(profile(), at(0));
        assert!(record.is_valid_at(at(0)));
        assert!(record.is_valid_at(at(172_799_999)));
        assert!(!record.is_valid_at(at(172_800_000)));
        assert!(!record.is_valid_at(at(3 * 86_400_000)));
    }
}
