use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::errors::DomainError;

/// Email value object representing a valid email address
///
/// # Invariants
/// - Must contain '@' character
/// - Must be at least 3 characters long
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Returns
    /// * `Ok(Email)` - If email is valid
    /// * `Err(DomainError::InvalidEmail)` - If email is invalid
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let email = email.into();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(DomainError::InvalidEmail(email))
        }
    }

    /// Validates an email string
    ///
    /// # Validation Rules
    /// - Must contain '@' character
    /// - Must be at least 3 characters long
    fn is_valid(email: &str) -> bool {
        email.contains('@') && email.len() >= 3
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The logged-in user identity
///
/// There is no credential backend: a user is just a validated display name
/// and email persisted locally so the session survives restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: Email,
}

impl User {
    /// Creates a new User from login form input
    ///
    /// # Business Rules Enforced
    /// - Display name must be non-empty after trimming
    /// - Email must pass [`Email`] validation
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyDisplayName);
        }

        Ok(User {
            id: Uuid::new_v4(),
            name: trimmed.to_string(),
            email: Email::new(email)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email() {
        assert!(Email::new("test@example.com").is_ok());
    }

    #[test]
    fn valid_email_minimum_length() {
        assert!(Email::new("a@b").is_ok());
    }

    #[test]
    fn invalid_email_no_at_symbol() {
        assert!(Email::new("invalid").is_err());
    }

    #[test]
    fn invalid_email_too_short() {
        assert!(Email::new("a@").is_err());
    }

    #[test]
    fn email_display() {
        let email = Email::new("test@example.com").unwrap();
        assert_eq!(format!("{}", email), "test@example.com");
    }

    #[test]
    fn user_with_valid_input() {
        let user = User::new("Ada", "ada@example.com").unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email.as_str(), "ada@example.com");
    }

    #[test]
    fn user_name_is_trimmed() {
        let user = User::new("  Ada  ", "ada@example.com").unwrap();
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn user_with_blank_name_fails() {
        assert!(matches!(
            User::new("   ", "ada@example.com"),
            Err(DomainError::EmptyDisplayName)
        ));
    }

    #[test]
    fn user_with_invalid_email_fails() {
        assert!(User::new("Ada", "nope").is_err());
    }
}
