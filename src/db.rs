// src/db.rs

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;
use crate::error::StoreError;
use crate::models::user::RegisterRequest;
use crate::store::auth;

/// Schema DDL, executed idempotently on every startup.
/// Column names match the original store layout verbatim so existing
/// `quiz_app.db` files keep working.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL,
        email TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        salt TEXT NOT NULL,
        is_admin BOOLEAN DEFAULT FALSE,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS quizzes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        created_by INTEGER NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (created_by) REFERENCES users(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS questions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        quiz_id INTEGER NOT NULL,
        question_text TEXT NOT NULL,
        option_a TEXT NOT NULL,
        option_b TEXT NOT NULL,
        option_c TEXT NOT NULL,
        option_d TEXT NOT NULL,
        correct_answer TEXT NOT NULL,
        FOREIGN KEY (quiz_id) REFERENCES quizzes(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS quiz_results (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        quiz_id INTEGER NOT NULL,
        quiz_title TEXT NOT NULL,
        score INTEGER NOT NULL,
        total_questions INTEGER NOT NULL,
        percentage REAL NOT NULL,
        date_taken TEXT NOT NULL,
        FOREIGN KEY (user_id) REFERENCES users(id),
        FOREIGN KEY (quiz_id) REFERENCES quizzes(id)
    )
    "#,
];

/// Opens the connection pool for the configured database file.
///
/// `foreign_keys` is enabled per connection; SQLite does not enforce the
/// question cascade without it. Failure is logged and returned, never fatal —
/// the embedding application keeps running with a non-functional store and
/// every subsequent operation reports `Unavailable`.
pub async fn connect(config: &Config) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| {
            tracing::error!("Invalid database URL '{}': {}", config.database_url, e);
            StoreError::Unavailable(e.to_string())
        })?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
        .map_err(|e| {
            tracing::error!("Failed to open database '{}': {}", config.database_url, e);
            StoreError::Unavailable(e.to_string())
        })?;

    tracing::info!("Database connected...");

    Ok(pool)
}

/// Idempotently ensures the schema exists and the bootstrap administrator
/// account is present.
pub async fn initialize(pool: &SqlitePool, config: &Config) -> Result<(), StoreError> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await.map_err(|e| {
            tracing::error!("Schema initialization failed: {}", e);
            StoreError::from(e)
        })?;
    }

    seed_admin(pool, config).await
}

/// Creates the default administrator on first run only.
///
/// The default credentials (`admin` / `admin123`) are a documented,
/// security-relevant compatibility default; the creation is always logged,
/// never silently skipped.
async fn seed_admin(pool: &SqlitePool, config: &Config) -> Result<(), StoreError> {
    let existing: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?1")
            .bind(&config.admin_username)
            .fetch_one(pool)
            .await?;

    if existing > 0 {
        return Ok(());
    }

    tracing::info!("Seeding administrator account: {}", config.admin_username);

    auth::register(
        pool,
        &RegisterRequest {
            username: config.admin_username.clone(),
            email: config.admin_email.clone(),
            password: config.admin_password.clone(),
            is_admin: true,
        },
    )
    .await?;

    tracing::info!(
        "Default administrator '{}' created with the documented default password.",
        config.admin_username
    );

    Ok(())
}
