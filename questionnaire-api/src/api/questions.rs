//! Question endpoints
//!
//! PUT /question/:id creates or replaces a question (caller-assigned id).
//! GET /question/:id returns it.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use questionnaire_common::{decode_question, Question};
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use super::ApiError;
use crate::{db, AppState};

/// PUT /question/:id
///
/// Body: `{"Title", "Type", "MinValue"/"MaxValue" | "Options"}`.
/// Returns 201 with the stored question.
pub async fn put_question(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(format!("Invalid question id: {}", e)))?;
    let Json(body) =
        body.map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))?;

    let question = decode_question(id, body).map_err(|e| {
        debug!("Rejected question {}: {}", id, e);
        ApiError::from(e)
    })?;

    db::put_question(&state.db, &question).await?;
    info!(
        "Stored {} question {} ({:?})",
        question.variant(),
        question.id,
        question.title
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/question/{}", question.id))],
        Json(question),
    ))
}

/// GET /question/:id
pub async fn get_question(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Question>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(format!("Invalid question id: {}", e)))?;

    db::get_question(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Question not found".to_string()))
}
