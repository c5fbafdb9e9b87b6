//! Response endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use questionnaire_common::Response;
use serde::Deserialize;
use uuid::Uuid;

use super::ApiError;
use crate::{submission, AppState};

/// POST /response body
///
/// Any `Id` sent by the caller is ignored; the server assigns one.
#[derive(Debug, Deserialize)]
pub struct SubmitResponseRequest {
    #[serde(rename = "QuestionId", alias = "questionId")]
    pub question_id: Uuid,
    #[serde(rename = "Answer", alias = "answer", default)]
    pub answer: String,
}

/// POST /response
///
/// 200 with the stored response, 404 for an unknown question, 400 when the
/// answer does not satisfy the question's rule.
pub async fn post_response(
    State(state): State<AppState>,
    body: Result<Json<SubmitResponseRequest>, JsonRejection>,
) -> Result<Json<Response>, ApiError> {
    let Json(request) =
        body.map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))?;

    let response =
        submission::submit_response(&state.db, request.question_id, request.answer).await?;

    Ok(Json(response))
}
