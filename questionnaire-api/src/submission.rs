//! Response submission flow
//!
//! Resolve the question, validate the answer against its variant, then store
//! the response under a fresh id. An unknown question is always reported as
//! not found, whatever the answer looks like.

use questionnaire_common::{uuid_utils, validate_answer, AnswerError, Response};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::db;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Question not found: {0}")]
    QuestionNotFound(Uuid),

    #[error(transparent)]
    InvalidAnswer(#[from] AnswerError),

    #[error(transparent)]
    Storage(#[from] questionnaire_common::Error),
}

pub async fn submit_response(
    pool: &SqlitePool,
    question_id: Uuid,
    answer: String,
) -> Result<Response, SubmitError> {
    let question = db::get_question(pool, question_id)
        .await?
        .ok_or(SubmitError::QuestionNotFound(question_id))?;

    if let Err(e) = validate_answer(&question.kind, &answer) {
        debug!(
            "Rejected answer {:?} for {} question {}: {}",
            answer,
            question.variant(),
            question.id,
            e
        );
        return Err(e.into());
    }

    let response = Response {
        id: uuid_utils::generate(),
        question_id: question.id,
        answer,
    };
    db::insert_response(pool, &response).await?;

    info!(
        "Stored response {} for question {}",
        response.id, response.question_id
    );

    Ok(response)
}
