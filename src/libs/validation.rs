//! Input checks performed before calling into the store.
//!
//! These gate the registration, login and task forms. They are not part of the
//! store error taxonomy: a form that fails here never reaches a repository.

use super::formatter::parse_due_date;
use super::user::Role;
use chrono::{DateTime, TimeZone};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter both email and password")]
    MissingCredentials,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Title is required")]
    MissingTitle,

    #[error("Unrecognized due date '{0}', expected YYYY-MM-DD [HH:MM]")]
    InvalidDueDate(String),

    #[error("Due date cannot be in the past")]
    DueDateInPast,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
        .is_match(email)
}

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl RegistrationForm {
    /// Checks, in order: all fields present, email syntax, matching
    /// passwords, minimum password length.
    pub fn validate(&self, min_password_length: usize) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < min_password_length {
            return Err(ValidationError::PasswordTooShort(min_password_length));
        }
        Ok(())
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validates a task form and returns the parsed due date.
///
/// Students may not pick a day before today; a due date earlier today is
/// accepted. Teachers and admins may set any date.
pub fn validate_task<Tz: TimeZone>(role: Role, title: &str, due_date: &str, now: &DateTime<Tz>) -> Result<DateTime<Tz>, ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    let due = parse_due_date(due_date, &now.timezone()).ok_or_else(|| ValidationError::InvalidDueDate(due_date.to_string()))?;

    if role == Role::Student && due.date_naive() < now.date_naive() {
        return Err(ValidationError::DueDateInPast);
    }

    Ok(due)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@school.edu.au"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("a x@y.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@@x.com"));
    }

    #[test]
    fn credentials_need_both_fields() {
        assert_eq!(validate_credentials("", "secret1"), Err(ValidationError::MissingCredentials));
        assert_eq!(validate_credentials("a@x.com", ""), Err(ValidationError::MissingCredentials));
        assert_eq!(validate_credentials("nope", "secret1"), Err(ValidationError::InvalidEmail));
        assert!(validate_credentials("a@x.com", "secret1").is_ok());
    }
}
