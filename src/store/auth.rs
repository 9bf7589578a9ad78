// src/store/auth.rs

use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::StoreError,
    models::user::{RegisterRequest, User},
    utils::hash::{generate_salt, hash_password, verify_password},
};

/// Registers a new account.
///
/// Generates a fresh 16-byte salt, digests the password with it and stores
/// both base64-encoded. Username uniqueness is enforced by the store's UNIQUE
/// constraint; the violation maps to `Conflict` instead of a check-then-insert
/// race.
pub async fn register(pool: &SqlitePool, payload: &RegisterRequest) -> Result<User, StoreError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(StoreError::Validation(validation_errors.to_string()));
    }

    let salt = generate_salt();
    let digest = hash_password(&payload.password, &salt)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password_hash, salt, is_admin)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, username, email, password_hash, salt, is_admin, created_at
        "#,
    )
    .bind(&payload.username)
    .bind(&payload.email)
    .bind(&digest)
    .bind(&salt)
    .bind(payload.is_admin)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::Conflict(format!("Username '{}' already exists", payload.username))
        }
        other => {
            tracing::error!("Failed to register user: {:?}", other);
            StoreError::from(other)
        }
    })?;

    Ok(user)
}

/// Authenticates a login attempt.
///
/// Recomputes the digest from the supplied password and the stored salt, and
/// returns the account only on an exact digest match. Unknown usernames and
/// wrong passwords produce the same `InvalidCredentials` so the caller cannot
/// probe which usernames exist.
pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<User, StoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, salt, is_admin, created_at
        FROM users
        WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        tracing::error!("Login DB error: {:?}", e);
        StoreError::from(e)
    })?;

    let Some(user) = user else {
        return Err(StoreError::InvalidCredentials);
    };

    if verify_password(password, &user.salt, &user.password_hash)? {
        Ok(user)
    } else {
        Err(StoreError::InvalidCredentials)
    }
}
