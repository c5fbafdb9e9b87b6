//! Database access layer for questionnaire-api

pub mod questions;
pub mod responses;

pub use questions::{get_question, put_question};
pub use responses::{count_responses_for_question, get_response, insert_response};
