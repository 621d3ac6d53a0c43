use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A persisted registration.
///
/// Field names follow the stored JSON shape
/// (`{"id", "username", "email", "registeredAt"}`), so records written by any
/// other client of the same key read back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub email: String,
    pub registered_at: String,
}

impl UserRecord {
    pub fn new(id: String, username: String, email: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            email,
            registered_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Parsed registration time. `None` if the stored string is not RFC 3339.
    pub fn registered_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.registered_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Raw registration input. The password is only carried for the duration of
/// the call; it is never written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Shown when the store holds no records.
pub const NO_LATEST_USER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: usize,
    pub latest_user: String,
}

impl UserStats {
    pub fn from_records(users: &[UserRecord]) -> Self {
        Self {
            total_users: users.len(),
            latest_user: users
                .last()
                .map(|u| u.username.clone())
                .unwrap_or_else(|| NO_LATEST_USER.to_string()),
        }
    }
}
