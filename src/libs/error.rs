//! Error taxonomy for the store-facing operations.
//!
//! Repository and session operations never let a raw `rusqlite` fault escape
//! uninterpreted: constraint violations are mapped to the specific kinds below
//! and anything else is wrapped in [`Error::Store`].

use rusqlite::ffi;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("A user with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid role '{0}': expected student, teacher or admin")]
    InvalidRole(String),

    #[error("A task must belong to a user")]
    MissingOwner,

    #[error("User {0} does not exist")]
    ForeignKeyViolation(i64),

    #[error("No user found with email '{0}'")]
    UserNotFound(String),

    #[error("Incorrect password")]
    BadCredentials,

    #[error("Session storage error: {0}")]
    SessionStorage(String),

    #[error("Database error: {0}")]
    Store(#[from] rusqlite::Error),
}

/// Constraint classes reported by SQLite that callers care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Unique,
    ForeignKey,
    Check,
}

/// Returns the violated constraint class, if `err` is a constraint violation.
pub fn constraint_of(err: &rusqlite::Error) -> Option<Constraint> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => match e.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => Some(Constraint::Unique),
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(Constraint::ForeignKey),
            ffi::SQLITE_CONSTRAINT_CHECK => Some(Constraint::Check),
            _ => None,
        },
        _ => None,
    }
}

impl Error {
    /// True for the failures a caller can present as an actionable message.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Error::Store(_) | Error::SessionStorage(_))
    }
}
