/// User domain type
use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address, unique across the store
    pub email: String,

    /// Creation timestamp (RFC 3339 on the wire)
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub(crate) fn new(id: UserId, name: String, email: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields for creating a user
///
/// Missing fields deserialize as empty strings so the store reports them as
/// validation failures rather than parse errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name (required)
    #[serde(default)]
    pub name: String,

    /// Email address (required)
    #[serde(default)]
    pub email: String,
}

impl NewUser {
    /// Build a creation request
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Partial update of a user
///
/// `None` leaves a field untouched. A blank string is treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserPatch {
    /// Set the name to replace
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email to replace
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_json_shape() {
        let now = "2024-05-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let user = User::new(UserId::new(1), "Alice".into(), "alice@example.com".into(), now);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["created_at"], "2024-05-01T12:00:00Z");
        assert_eq!(json["created_at"], json["updated_at"]);
    }

    #[test]
    fn new_user_missing_fields_default_to_empty() {
        let req: NewUser = serde_json::from_str(r#"{"name":"Dan"}"#).unwrap();
        assert_eq!(req.name, "Dan");
        assert!(req.email.is_empty());
    }

    #[test]
    fn patch_distinguishes_absent_fields() {
        let patch: UserPatch = serde_json::from_str(r#"{"name":"Bobby"}"#).unwrap();
        assert_eq!(patch, UserPatch::default().with_name("Bobby"));
        assert!(patch.email.is_none());
    }
}
