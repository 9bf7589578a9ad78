// src/models/result.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'quiz_results' table in the database.
/// One immutable row per completed attempt; repeated attempts produce
/// repeated rows.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: i64,

    pub user_id: i64,

    pub quiz_id: i64,

    /// Denormalized snapshot of the quiz title at completion time, so history
    /// survives later quiz edits or deletion.
    pub quiz_title: String,

    pub score: i64,

    pub total_questions: i64,

    pub percentage: f64,

    pub date_taken: chrono::DateTime<chrono::Utc>,
}

/// DTO for recording a completed attempt.
#[derive(Debug, Clone, Deserialize)]
pub struct NewResult {
    pub user_id: i64,
    pub quiz_id: i64,
    pub quiz_title: String,
    pub score: i64,
    pub total_questions: i64,
    pub percentage: f64,
    pub date_taken: chrono::DateTime<chrono::Utc>,
}

/// Aggregated struct for displaying the leaderboard.
/// Represents a row grouped from `quiz_results` joined with `users`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LeaderboardEntry {
    pub username: String,

    /// Average over all of this user's attempts.
    pub average_percentage: f64,

    pub attempts: i64,

    pub total_score: i64,
}
