// src/lib.rs

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;
pub mod telemetry;
pub mod utils;

// Re-export specific items for convenience if needed
pub use error::StoreError;
