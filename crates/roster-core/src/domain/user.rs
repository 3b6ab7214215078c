use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MissingField, ProfileError};

/// Timestamp layout appended to the email on logical delete.
const DELETED_EMAIL_SUFFIX_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// User entity - a profile record with logical delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned key; 0 until persisted.
    #[serde(skip)]
    pub id: i64,
    pub uid: String,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create an unpersisted user. Timestamps stay at their zero value until
    /// storage or a mutation sets them.
    pub fn new(
        uid: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            uid: uid.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            email: email.into(),
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Replace the profile fields. All three are required; every missing one
    /// is reported.
    pub fn update_profile(
        &mut self,
        last_name: &str,
        first_name: &str,
        email: &str,
    ) -> Result<(), ProfileError> {
        let missing: Vec<MissingField> = [
            (MissingField::LastName, last_name),
            (MissingField::FirstName, first_name),
            (MissingField::Email, email),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ProfileError { missing });
        }

        self.last_name = last_name.to_string();
        self.first_name = first_name.to_string();
        self.email = email.to_string();
        self.updated_at = Utc::now();

        Ok(())
    }

    /// Mark the user deleted and free its email for reuse by suffixing it
    /// with the deletion time.
    ///
    /// Already-deleted users are not guarded against.
    pub fn set_delete(&mut self) {
        let now = Utc::now();
        self.email = format!("{}{}", self.email, now.format(DELETED_EMAIL_SUFFIX_FORMAT));
        self.updated_at = now;
        self.deleted_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_user() -> User {
        User {
            id: 1,
            uid: "xxxx-xxxx-xxxx-0001".to_string(),
            last_name: "Tanaka".to_string(),
            first_name: "Taro".to_string(),
            email: "t.tanaka@example.com".to_string(),
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
            deleted_at: None,
        }
    }

    #[test]
    fn test_new_user() {
        let user = User::new("uid-1", "Tanaka", "Taro", "t.tanaka@example.com");

        assert_eq!(user.id, 0);
        assert_eq!(user.uid, "uid-1");
        assert_eq!(user.last_name, "Tanaka");
        assert_eq!(user.first_name, "Taro");
        assert_eq!(user.email, "t.tanaka@example.com");
        assert_eq!(user.created_at, DateTime::<Utc>::default());
        assert_eq!(user.updated_at, DateTime::<Utc>::default());
        assert!(user.deleted_at.is_none());
    }

    #[test]
    fn test_update_profile() {
        let mut user = base_user();
        let before = user.updated_at;

        user.update_profile("Sato", "Jiro", "z.sato@example.com").unwrap();

        assert_eq!(user.last_name, "Sato");
        assert_eq!(user.first_name, "Jiro");
        assert_eq!(user.email, "z.sato@example.com");
        assert!(user.updated_at > before);
        assert!(user.deleted_at.is_none());
    }

    #[test]
    fn test_update_profile_missing_last_name() {
        let mut user = base_user();

        let err = user.update_profile("", "x", "y").unwrap_err();

        assert_eq!(err.missing, vec![MissingField::LastName]);
        assert!(err.to_string().contains("last_name is required"));
        assert_eq!(user.last_name, "Tanaka");
    }

    #[test]
    fn test_update_profile_missing_first_name() {
        let mut user = base_user();
        let err = user.update_profile("Sato", "", "z.sato@example.com").unwrap_err();
        assert!(err.to_string().contains("first_name is required"));
    }

    #[test]
    fn test_update_profile_missing_email() {
        let mut user = base_user();
        let err = user.update_profile("Sato", "Jiro", "").unwrap_err();
        assert!(err.to_string().contains("email is required"));
    }

    #[test]
    fn test_update_profile_reports_every_missing_field() {
        let mut user = base_user();
        let before = user.clone();

        let err = user.update_profile("", "", "").unwrap_err();
        let message = err.to_string();

        assert!(message.contains("last_name is required"));
        assert!(message.contains("first_name is required"));
        assert!(message.contains("email is required"));
        assert_eq!(user, before);
    }

    #[test]
    fn test_set_delete() {
        let mut user = base_user();
        let email = user.email.clone();

        user.set_delete();

        assert_ne!(user.email, email);
        assert!(user.email.starts_with(&email));
        assert!(user.is_deleted());
        assert_eq!(user.deleted_at, Some(user.updated_at));

        // "YYYY-MM-DD HH:MM:SS"
        let suffix = &user.email[email.len()..];
        assert_eq!(suffix.len(), 19);
        assert!(
            chrono::NaiveDateTime::parse_from_str(suffix, DELETED_EMAIL_SUFFIX_FORMAT).is_ok()
        );
    }

    #[test]
    fn test_serialization_hides_id() {
        let json = serde_json::to_value(base_user()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["uid"], "xxxx-xxxx-xxxx-0001");
        assert!(json["deleted_at"].is_null());
    }
}
