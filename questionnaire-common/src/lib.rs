//! # Questionnaire Common Library
//!
//! Shared code for the questionnaire service including:
//! - Question and response models
//! - Question payload decoding
//! - Answer validation rules
//! - Database initialization
//! - Configuration loading

pub mod config;
pub mod db;
pub mod error;
pub mod payload;
pub mod uuid_utils;
pub mod validation;

pub use db::models::{Question, QuestionKind, QuestionVariant, Response};
pub use error::{Error, Result};
pub use payload::{decode_question, PayloadError};
pub use validation::{validate_answer, AnswerError};
