//! HTTP API handlers for questionnaire-api

pub mod error;
pub mod health;
pub mod questions;
pub mod responses;

pub use error::ApiError;
pub use health::health_routes;
pub use questions::{get_question, put_question};
pub use responses::post_response;
