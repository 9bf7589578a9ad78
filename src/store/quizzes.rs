// src/store/quizzes.rs

use sqlx::SqlitePool;

use crate::{
    error::StoreError,
    models::quiz::{NewQuiz, Quiz},
};

/// Lists all quizzes in the store's natural order.
pub async fn list_quizzes(pool: &SqlitePool) -> Result<Vec<Quiz>, StoreError> {
    let quizzes = sqlx::query_as::<_, Quiz>(
        r#"
        SELECT id, title, description, created_by, created_at
        FROM quizzes
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list quizzes: {:?}", e);
        StoreError::from(e)
    })?;

    Ok(quizzes)
}

/// Fetches a single quiz by id.
pub async fn get_quiz(pool: &SqlitePool, id: i64) -> Result<Quiz, StoreError> {
    sqlx::query_as::<_, Quiz>(
        r#"
        SELECT id, title, description, created_by, created_at
        FROM quizzes
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StoreError::NotFound(format!("Quiz {id} not found")))
}

/// Creates a new quiz and returns the stored row.
pub async fn create_quiz(pool: &SqlitePool, payload: &NewQuiz) -> Result<Quiz, StoreError> {
    let quiz = sqlx::query_as::<_, Quiz>(
        r#"
        INSERT INTO quizzes (title, description, created_by)
        VALUES (?1, ?2, ?3)
        RETURNING id, title, description, created_by, created_at
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(payload.created_by)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create quiz: {:?}", e);
        StoreError::from(e)
    })?;

    Ok(quiz)
}

/// Updates a quiz's title and description.
pub async fn update_quiz(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    description: &str,
) -> Result<(), StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE quizzes SET title = ?1, description = ?2 WHERE id = ?3
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update quiz {}: {:?}", id, e);
        StoreError::from(e)
    })?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(format!("Quiz {id} not found")));
    }

    Ok(())
}

/// Deletes a quiz. Its questions are removed by the store's cascade.
pub async fn delete_quiz(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM quizzes WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete quiz {}: {:?}", id, e);
            StoreError::from(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(format!("Quiz {id} not found")));
    }

    Ok(())
}
