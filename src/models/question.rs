// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    pub quiz_id: i64,

    /// The text content of the question.
    pub question_text: String,

    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,

    /// The grading key: a copy of one option's text, not a letter.
    pub correct_answer: String,
}

impl Question {
    /// The four options in display order.
    pub fn options(&self) -> [&str; 4] {
        [
            &self.option_a,
            &self.option_b,
            &self.option_c,
            &self.option_d,
        ]
    }
}

/// DTO for creating or editing a question.
///
/// The store does not re-validate question contents; callers are expected to
/// run `validate()` before invoking the repository.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = validate_correct_answer))]
pub struct NewQuestion {
    pub quiz_id: i64,

    #[validate(length(min = 1, max = 1000, message = "Question text must not be empty."))]
    pub question_text: String,

    #[validate(length(min = 1, max = 500, message = "Option A must not be empty."))]
    pub option_a: String,
    #[validate(length(min = 1, max = 500, message = "Option B must not be empty."))]
    pub option_b: String,
    #[validate(length(min = 1, max = 500, message = "Option C must not be empty."))]
    pub option_c: String,
    #[validate(length(min = 1, max = 500, message = "Option D must not be empty."))]
    pub option_d: String,

    #[validate(length(min = 1, max = 500, message = "Correct answer must not be empty."))]
    pub correct_answer: String,
}

/// The correct answer must equal one of the four option texts at save time.
fn validate_correct_answer(question: &NewQuestion) -> Result<(), ValidationError> {
    let options = [
        &question.option_a,
        &question.option_b,
        &question.option_c,
        &question.option_d,
    ];
    if options.contains(&&question.correct_answer) {
        Ok(())
    } else {
        Err(ValidationError::new("correct_answer_not_among_options"))
    }
}
