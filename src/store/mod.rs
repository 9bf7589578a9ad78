// src/store/mod.rs

pub mod auth;
pub mod questions;
pub mod quizzes;
pub mod results;
