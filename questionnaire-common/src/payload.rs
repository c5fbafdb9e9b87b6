//! Question payload decoding
//!
//! A `PUT /question/:id` body is first read as a generic JSON document. The
//! `Type` field selects the variant, then the whole document is decoded
//! against that variant's shape.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::db::models::{Question, QuestionKind, QuestionVariant};

/// Question payload decoding errors
///
/// Both cases are reported to clients as an invalid question type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
    /// `Type` missing, not a string, or not a known tag
    #[error("Invalid question type")]
    InvalidVariant,

    /// `Type` recognized but the body does not fit that variant's shape
    #[error("Invalid question type: body does not match {variant}: {reason}")]
    InvalidShape {
        variant: QuestionVariant,
        reason: String,
    },
}

#[derive(Debug, Deserialize)]
struct StarRatingBody {
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "MinValue", default = "default_min_value")]
    min_value: i32,
    #[serde(rename = "MaxValue", default = "default_max_value")]
    max_value: i32,
}

#[derive(Debug, Deserialize)]
struct SelectBody {
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Options", default)]
    options: Vec<String>,
}

fn default_min_value() -> i32 {
    1
}

fn default_max_value() -> i32 {
    5
}

/// Read the variant tag from a JSON document
///
/// Field names are case-sensitive: only `Type` is consulted.
pub fn read_variant(body: &Value) -> Result<QuestionVariant, PayloadError> {
    body.get("Type")
        .and_then(Value::as_str)
        .and_then(QuestionVariant::from_tag)
        .ok_or(PayloadError::InvalidVariant)
}

/// Decode a question body, assigning it the given id
///
/// Any `Id` inside the body is ignored. `MinValue > MaxValue` is accepted.
pub fn decode_question(id: Uuid, body: Value) -> Result<Question, PayloadError> {
    if !body.is_object() {
        return Err(PayloadError::InvalidVariant);
    }

    let variant = read_variant(&body)?;

    let (title, kind) = match variant {
        QuestionVariant::StarRating => {
            let shape: StarRatingBody = decode_shape(variant, body)?;
            (
                shape.title,
                QuestionKind::StarRating {
                    min_value: shape.min_value,
                    max_value: shape.max_value,
                },
            )
        }
        QuestionVariant::SingleSelect => {
            let shape: SelectBody = decode_shape(variant, body)?;
            (
                shape.title,
                QuestionKind::SingleSelect {
                    options: shape.options,
                },
            )
        }
        QuestionVariant::MultiSelect => {
            let shape: SelectBody = decode_shape(variant, body)?;
            (
                shape.title,
                QuestionKind::MultiSelect {
                    options: shape.options,
                },
            )
        }
    };

    Ok(Question { id, title, kind })
}

fn decode_shape<T: DeserializeOwned>(
    variant: QuestionVariant,
    body: Value,
) -> Result<T, PayloadError> {
    serde_json::from_value(body).map_err(|e| PayloadError::InvalidShape {
        variant,
        reason: e.to_string(),
    })
}
