//! API error responses
//!
//! Every error is returned as a plain-text body with the matching status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use questionnaire_common::PayloadError;
use tracing::error;

use crate::submission::SubmitError;

#[derive(Debug)]
pub enum ApiError {
    /// Unknown question type or body not matching the type's shape
    InvalidVariant(PayloadError),
    /// Malformed request (unparsable JSON, bad path id, variant change)
    BadRequest(String),
    /// Answer rejected by the question's rule
    InvalidAnswer(String),
    NotFound(String),
    Internal(String),
}

impl From<SubmitError> for ApiError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::QuestionNotFound(_) => {
                ApiError::NotFound("Question not found".to_string())
            }
            SubmitError::InvalidAnswer(reason) => ApiError::InvalidAnswer(reason.to_string()),
            SubmitError::Storage(e) => ApiError::from(e),
        }
    }
}

impl From<questionnaire_common::Error> for ApiError {
    fn from(err: questionnaire_common::Error) -> Self {
        match err {
            questionnaire_common::Error::VariantChange { .. } => {
                ApiError::BadRequest(err.to_string())
            }
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        ApiError::InvalidVariant(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidVariant(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InvalidAnswer(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => {
                error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, message).into_response()
    }
}
