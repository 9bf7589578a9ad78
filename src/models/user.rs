// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique username.
    pub username: String,

    pub email: String,

    /// Base64-encoded salted SHA-256 digest.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password_hash: String,

    /// Base64-encoded 16-byte salt for this account.
    #[serde(skip)]
    pub salt: String,

    pub is_admin: bool,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for creating a new account (registration).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Username must not be empty."
    ))]
    pub username: String,

    #[validate(email(message = "Email address is not valid."))]
    pub email: String,

    #[validate(length(
        min = 1,
        max = 128,
        message = "Password must not be empty."
    ))]
    pub password: String,

    pub is_admin: bool,
}
