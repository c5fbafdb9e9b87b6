//! Common error types for the questionnaire service

use thiserror::Error;
use uuid::Uuid;

use crate::db::models::QuestionVariant;

/// Common result type for questionnaire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the questionnaire crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A stored question's variant cannot be replaced by another variant
    #[error("Question {id} is a {stored} and cannot be changed to a {requested}")]
    VariantChange {
        id: Uuid,
        stored: String,
        requested: QuestionVariant,
    },

    /// Internal server error (e.g. a stored row that cannot be reconstructed)
    #[error("Internal error: {0}")]
    Internal(String),
}
