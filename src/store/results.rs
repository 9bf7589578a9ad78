// src/store/results.rs

use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    error::StoreError,
    models::{
        question::Question,
        result::{LeaderboardEntry, NewResult, QuizResult},
    },
};

/// One answer slot of a submitted attempt, aligned with the question order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The literal option text the user selected.
    Selected(String),
    /// The user skipped the question.
    Unanswered,
}

/// Outcome of grading one attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub score: i64,
    pub total: i64,
    pub percentage: f64,
}

/// Grades an attempt.
///
/// Pure function: one point per index where the selected text equals the
/// question's stored grading key, case-sensitive. No partial credit, no
/// negative marking. An empty quiz scores 0 at 0.0%.
pub fn score_attempt(questions: &[Question], answers: &[Answer]) -> ScoreSummary {
    let total = questions.len() as i64;
    let mut score = 0i64;

    for (question, answer) in questions.iter().zip(answers) {
        if let Answer::Selected(text) = answer {
            if *text == question.correct_answer {
                score += 1;
            }
        }
    }

    let percentage = if total == 0 {
        0.0
    } else {
        score as f64 / total as f64 * 100.0
    };

    ScoreSummary {
        score,
        total,
        percentage,
    }
}

/// Appends one immutable result row.
///
/// Repeated attempts by the same user at the same quiz produce repeated rows;
/// nothing is ever updated or merged.
pub async fn record_result(pool: &SqlitePool, result: &NewResult) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        INSERT INTO quiz_results (user_id, quiz_id, quiz_title, score, total_questions, percentage, date_taken)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(result.user_id)
    .bind(result.quiz_id)
    .bind(&result.quiz_title)
    .bind(result.score)
    .bind(result.total_questions)
    .bind(result.percentage)
    .bind(result.date_taken)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to save quiz result: {:?}", e);
        StoreError::from(e)
    })?;

    Ok(())
}

/// A user's attempt history, most recent first.
pub async fn history(pool: &SqlitePool, user_id: i64) -> Result<Vec<QuizResult>, StoreError> {
    let results = sqlx::query_as::<_, QuizResult>(
        r#"
        SELECT id, user_id, quiz_id, quiz_title, score, total_questions, percentage, date_taken
        FROM quiz_results
        WHERE user_id = ?1
        ORDER BY date_taken DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch quiz results for user {}: {:?}", user_id, e);
        StoreError::from(e)
    })?;

    Ok(results)
}

/// Per-username aggregate over all recorded attempts, best average first.
pub async fn leaderboard(pool: &SqlitePool) -> Result<Vec<LeaderboardEntry>, StoreError> {
    let entries = sqlx::query_as::<_, LeaderboardEntry>(
        r#"
        SELECT
            u.username,
            AVG(qr.percentage) AS average_percentage,
            COUNT(qr.id) AS attempts,
            SUM(qr.score) AS total_score
        FROM quiz_results qr
        JOIN users u ON qr.user_id = u.id
        GROUP BY u.username
        ORDER BY average_percentage DESC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch leaderboard: {:?}", e);
        StoreError::from(e)
    })?;

    Ok(entries)
}
