// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Default credentials for the bootstrap administrator account.
///
/// These reproduce the store's documented first-run default verbatim so that
/// existing `quiz_app.db` files keep working. Override them with the
/// `ADMIN_USERNAME` / `ADMIN_EMAIL` / `ADMIN_PASSWORD` environment variables.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@quizapp.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:quiz_app.db".to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let admin_username = env::var("ADMIN_USERNAME")
            .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string());

        let admin_email = env::var("ADMIN_EMAIL")
            .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());

        let admin_password = env::var("ADMIN_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

        Self {
            database_url,
            rust_log,
            admin_username,
            admin_email,
            admin_password,
        }
    }
}
