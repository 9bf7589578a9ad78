// tests/auth_tests.rs

use quizapp_core::{
    config::Config,
    db,
    error::StoreError,
    models::user::RegisterRequest,
    store::auth,
    utils::hash::{generate_salt, hash_password, verify_password},
};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Helper that opens a fresh in-memory store with the schema applied and the
/// default admin seeded.
async fn test_store() -> (SqlitePool, Config) {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        rust_log: "error".to_string(),
        admin_username: "admin".to_string(),
        admin_email: "admin@quizapp.com".to_string(),
        admin_password: "admin123".to_string(),
    };

    // A single connection keeps every query on the same in-memory database.
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse in-memory SQLite URL")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory SQLite");

    db::initialize(&pool, &config)
        .await
        .expect("Failed to initialize store");

    (pool, config)
}

fn request(username: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        is_admin: false,
    }
}

#[tokio::test]
async fn register_works() {
    // Arrange
    let (pool, _config) = test_store().await;
    let unique_name = format!("u_{}", &uuid::Uuid::new_v4().to_string()[..8]);

    // Act
    let user = auth::register(&pool, &request(&unique_name, "u@example.com", "password123"))
        .await
        .expect("Registration failed");

    // Assert
    assert_eq!(user.username, unique_name);
    assert!(!user.is_admin);
    assert_ne!(user.password_hash, "password123");
    assert!(!user.salt.is_empty());
}

#[tokio::test]
async fn register_duplicate_username_conflicts() {
    // Arrange
    let (pool, _config) = test_store().await;

    // Act
    let first = auth::register(&pool, &request("bob", "b@x.com", "pw1")).await;
    let second = auth::register(&pool, &request("bob", "other@x.com", "different")).await;

    // Assert: first succeeds, second is a conflict regardless of other fields
    assert!(first.is_ok());
    assert!(matches!(second, Err(StoreError::Conflict(_))));
}

#[tokio::test]
async fn register_fails_validation() {
    // Arrange
    let (pool, _config) = test_store().await;

    // Act: empty username must be rejected before reaching the store
    let result = auth::register(&pool, &request("", "u@example.com", "password123")).await;

    // Assert
    assert!(matches!(result, Err(StoreError::Validation(_))));
}

#[tokio::test]
async fn authenticate_roundtrip() {
    // Arrange
    let (pool, _config) = test_store().await;
    auth::register(&pool, &request("bob", "b@x.com", "pw1"))
        .await
        .expect("Registration failed");

    // Act
    let ok = auth::authenticate(&pool, "bob", "pw1").await;
    let wrong_password = auth::authenticate(&pool, "bob", "wrong").await;
    let one_char_off = auth::authenticate(&pool, "bob", "pw2").await;
    let unknown_user = auth::authenticate(&pool, "nobody", "pw1").await;

    // Assert: only the exact password matches, and denials are uniform
    assert_eq!(ok.expect("Login failed").username, "bob");
    assert!(matches!(wrong_password, Err(StoreError::InvalidCredentials)));
    assert!(matches!(one_char_off, Err(StoreError::InvalidCredentials)));
    assert!(matches!(unknown_user, Err(StoreError::InvalidCredentials)));
}

#[tokio::test]
async fn bootstrap_admin_is_created_exactly_once() {
    // Arrange
    let (pool, config) = test_store().await;

    // Act: a second initialize must not create a second admin
    db::initialize(&pool, &config)
        .await
        .expect("Re-initialize failed");

    let admin_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = 'admin'")
        .fetch_one(&pool)
        .await
        .expect("Count query failed");

    let admin = auth::authenticate(&pool, "admin", "admin123")
        .await
        .expect("Default admin login failed");

    // Assert
    assert_eq!(admin_count, 1);
    assert!(admin.is_admin);
}

#[test]
fn salted_digest_is_deterministic_and_salt_sensitive() {
    // Arrange
    let salt_a = generate_salt();
    let salt_b = generate_salt();

    // Act
    let digest_1 = hash_password("secret", &salt_a).expect("Hashing failed");
    let digest_2 = hash_password("secret", &salt_a).expect("Hashing failed");
    let digest_other_salt = hash_password("secret", &salt_b).expect("Hashing failed");

    // Assert
    assert_ne!(salt_a, salt_b);
    assert_eq!(digest_1, digest_2);
    assert_ne!(digest_1, digest_other_salt);
    assert!(verify_password("secret", &salt_a, &digest_1).expect("Verify failed"));
    assert!(!verify_password("Secret", &salt_a, &digest_1).expect("Verify failed"));
}
