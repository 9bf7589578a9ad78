// src/error.rs

use std::fmt;

/// Global store error enum.
/// Centralizes the failure modes the presentation layer has to render.
#[derive(Debug)]
pub enum StoreError {
    /// Connection or schema failure. Logged at the call site; never fatal.
    Unavailable(String),

    /// Update/delete target absent.
    NotFound(String),

    /// Duplicate username (UNIQUE constraint violation).
    Conflict(String),

    /// Login denial. Deliberately carries no detail so callers cannot tell
    /// an unknown username from a wrong password.
    InvalidCredentials,

    /// Request DTO failed validation before reaching the store.
    Validation(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {msg}"),
            StoreError::NotFound(msg) => write!(f, "not found: {msg}"),
            StoreError::Conflict(msg) => write!(f, "conflict: {msg}"),
            StoreError::InvalidCredentials => write!(f, "invalid username or password"),
            StoreError::Validation(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Converts `sqlx::Error` into `StoreError`.
/// Allows using `?` operator on database queries.
///
/// Unique-constraint violations become `Conflict` so that duplicate-username
/// detection is constraint-driven rather than a check-then-insert race.
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound("row not found".to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Conflict(db.to_string())
            }
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}
