//! Credential record stored in the `console_users` table.

use chrono::{DateTime, Utc};
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// A console user allowed through the login gate.
///
/// Usernames are unique across all records. The password is stored as a plain
/// value and compared by exact equality; see [`crate::application::services::LoginService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub designation: String,
    pub created_at: DateTime<Utc>,
}

impl CredentialRecord {
    /// Returns `true` if `candidate` is exactly the stored password.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Input data for creating a credential record.
///
/// Length limits match the `console_users` column widths.
#[derive(Debug, Clone, Validate)]
pub struct NewCredential {
    #[validate(length(min = 1, max = 25))]
    pub username: String,

    #[validate(length(min = 1, max = 30))]
    pub password: String,

    #[validate(length(min = 1, max = 5))]
    pub designation: String,
}

impl NewCredential {
    /// Builds a new record input, checking the column length limits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any field is empty or too long.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        designation: impl Into<String>,
    ) -> Result<Self, AppError> {
        let credential = Self {
            username: username.into(),
            password: password.into(),
            designation: designation.into(),
        };

        credential.validate().map_err(|e| {
            AppError::bad_request(
                "Invalid credential record",
                json!({ "fields": e.to_string() }),
            )
        })?;

        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(password: &str) -> CredentialRecord {
        CredentialRecord {
            id: 1,
            username: "alice".to_string(),
            password: password.to_string(),
            designation: "ad".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_matches_exact_value() {
        let record = record("secret123");

        assert!(record.password_matches("secret123"));
        assert!(!record.password_matches("Secret123"));
        assert!(!record.password_matches("secret123 "));
        assert!(!record.password_matches(""));
    }

    #[test]
    fn test_new_credential_valid() {
        let credential = NewCredential::new("alice", "secret123", "ad").unwrap();

        assert_eq!(credential.username, "alice");
        assert_eq!(credential.password, "secret123");
        assert_eq!(credential.designation, "ad");
    }

    #[test]
    fn test_new_credential_empty_username() {
        let result = NewCredential::new("", "secret123", "ad");
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_new_credential_length_limits() {
        let long_name = "a".repeat(26);
        assert!(NewCredential::new(long_name, "pw", "ad").is_err());

        let long_password = "p".repeat(31);
        assert!(NewCredential::new("alice", long_password, "ad").is_err());

        assert!(NewCredential::new("alice", "pw", "admin1").is_err());
        assert!(NewCredential::new("a".repeat(25), "p".repeat(30), "admin").is_ok());
    }
}
