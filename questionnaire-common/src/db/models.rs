//! Database models
//!
//! Questions are stored single-table with a `question_type` discriminator.
//! The same tag strings appear as the `Type` field of the JSON form.

use serde::Serialize;
use uuid::Uuid;

/// Question variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionVariant {
    StarRating,
    SingleSelect,
    MultiSelect,
}

impl QuestionVariant {
    pub const ALL: [QuestionVariant; 3] = [
        QuestionVariant::StarRating,
        QuestionVariant::SingleSelect,
        QuestionVariant::MultiSelect,
    ];

    /// Discriminator string used in JSON and in the `question_type` column
    pub fn as_tag(self) -> &'static str {
        match self {
            QuestionVariant::StarRating => "StarRatingQuestion",
            QuestionVariant::SingleSelect => "SingleSelectQuestion",
            QuestionVariant::MultiSelect => "MultiSelectQuestion",
        }
    }

    /// Exact-match lookup of a discriminator string
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_tag() == tag)
    }
}

impl std::fmt::Display for QuestionVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Variant-specific question payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "Type")]
pub enum QuestionKind {
    #[serde(rename = "StarRatingQuestion", rename_all = "PascalCase")]
    StarRating { min_value: i32, max_value: i32 },

    #[serde(rename = "SingleSelectQuestion", rename_all = "PascalCase")]
    SingleSelect { options: Vec<String> },

    #[serde(rename = "MultiSelectQuestion", rename_all = "PascalCase")]
    MultiSelect { options: Vec<String> },
}

impl QuestionKind {
    pub fn variant(&self) -> QuestionVariant {
        match self {
            QuestionKind::StarRating { .. } => QuestionVariant::StarRating,
            QuestionKind::SingleSelect { .. } => QuestionVariant::SingleSelect,
            QuestionKind::MultiSelect { .. } => QuestionVariant::MultiSelect,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    #[serde(rename = "Id")]
    pub id: Uuid,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    pub fn variant(&self) -> QuestionVariant {
        self.kind.variant()
    }
}

/// A stored answer to a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Response {
    pub id: Uuid,
    pub question_id: Uuid,
    pub answer: String,
}
