// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,

    pub title: String,

    pub description: Option<String>,

    /// Account id of the administrator who authored the quiz.
    pub created_by: i64,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for creating or editing a quiz.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewQuiz {
    #[validate(length(min = 1, max = 200, message = "Title must not be empty."))]
    pub title: String,

    pub description: String,

    pub created_by: i64,
}
