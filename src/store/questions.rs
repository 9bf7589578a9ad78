// src/store/questions.rs

use sqlx::SqlitePool;

use crate::{
    error::StoreError,
    models::question::{NewQuestion, Question},
};

/// Lists all questions belonging to a quiz, in the store's natural order.
pub async fn list_questions(pool: &SqlitePool, quiz_id: i64) -> Result<Vec<Question>, StoreError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, quiz_id, question_text,
               option_a, option_b, option_c, option_d,
               correct_answer
        FROM questions
        WHERE quiz_id = ?1
        "#,
    )
    .bind(quiz_id)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch questions for quiz {}: {:?}", quiz_id, e);
        StoreError::from(e)
    })?;

    Ok(questions)
}

/// Creates a new question under its quiz and returns the stored row.
///
/// Contents are stored as given; `NewQuestion::validate` is the caller's
/// contract.
pub async fn create_question(
    pool: &SqlitePool,
    payload: &NewQuestion,
) -> Result<Question, StoreError> {
    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions (quiz_id, question_text, option_a, option_b, option_c, option_d, correct_answer)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        RETURNING id, quiz_id, question_text, option_a, option_b, option_c, option_d, correct_answer
        "#,
    )
    .bind(payload.quiz_id)
    .bind(&payload.question_text)
    .bind(&payload.option_a)
    .bind(&payload.option_b)
    .bind(&payload.option_c)
    .bind(&payload.option_d)
    .bind(&payload.correct_answer)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to add question: {:?}", e);
        StoreError::from(e)
    })?;

    Ok(question)
}

/// Updates a question's prompt, options and grading key.
pub async fn update_question(
    pool: &SqlitePool,
    id: i64,
    payload: &NewQuestion,
) -> Result<(), StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE questions
        SET question_text = ?1, option_a = ?2, option_b = ?3,
            option_c = ?4, option_d = ?5, correct_answer = ?6
        WHERE id = ?7
        "#,
    )
    .bind(&payload.question_text)
    .bind(&payload.option_a)
    .bind(&payload.option_b)
    .bind(&payload.option_c)
    .bind(&payload.option_d)
    .bind(&payload.correct_answer)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update question {}: {:?}", id, e);
        StoreError::from(e)
    })?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(format!("Question {id} not found")));
    }

    Ok(())
}

/// Deletes a single question.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            StoreError::from(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(format!("Question {id} not found")));
    }

    Ok(())
}
