//! Question persistence
//!
//! All variants share the `questions` table. Writing sets the columns of the
//! question's own variant and NULLs the rest; reading rebuilds the variant
//! from the `question_type` tag. A question's variant is fixed once stored.

use questionnaire_common::uuid_utils::parse_stored;
use questionnaire_common::{Error, Question, QuestionKind, QuestionVariant, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Create or fully replace the question with `question.id`
///
/// Replacing is only allowed with the same variant; otherwise the stored row
/// is left untouched and `Error::VariantChange` is returned.
pub async fn put_question(pool: &SqlitePool, question: &Question) -> Result<()> {
    let (min_value, max_value, options) = match &question.kind {
        QuestionKind::StarRating {
            min_value,
            max_value,
        } => (Some(*min_value), Some(*max_value), None),
        QuestionKind::SingleSelect { options } | QuestionKind::MultiSelect { options } => {
            let encoded = serde_json::to_string(options)
                .map_err(|e| Error::Internal(format!("Cannot encode options: {}", e)))?;
            (None, None, Some(encoded))
        }
    };

    let result = sqlx::query(
        r#"
        INSERT INTO questions (id, title, question_type, min_value, max_value, options)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            title = excluded.title,
            min_value = excluded.min_value,
            max_value = excluded.max_value,
            options = excluded.options,
            updated_at = CURRENT_TIMESTAMP
        WHERE questions.question_type = excluded.question_type
        "#,
    )
    .bind(question.id.to_string())
    .bind(&question.title)
    .bind(question.variant().as_tag())
    .bind(min_value)
    .bind(max_value)
    .bind(options)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        let stored: String =
            sqlx::query_scalar("SELECT question_type FROM questions WHERE id = ?")
                .bind(question.id.to_string())
                .fetch_one(pool)
                .await?;
        return Err(Error::VariantChange {
            id: question.id,
            stored,
            requested: question.variant(),
        });
    }

    Ok(())
}

/// Exact-match lookup by id
pub async fn get_question(pool: &SqlitePool, id: Uuid) -> Result<Option<Question>> {
    let row = sqlx::query(
        r#"
        SELECT id, title, question_type, min_value, max_value, options
        FROM questions
        WHERE id = ?
        "#,
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    row.map(|r| question_from_row(&r)).transpose()
}

fn question_from_row(row: &SqliteRow) -> Result<Question> {
    let id: String = row.try_get("id")?;
    let title: String = row.try_get("title")?;
    let tag: String = row.try_get("question_type")?;

    let variant = QuestionVariant::from_tag(&tag).ok_or_else(|| {
        Error::Internal(format!("Question {} has unknown type '{}'", id, tag))
    })?;

    let kind = match variant {
        QuestionVariant::StarRating => QuestionKind::StarRating {
            min_value: required_column(row, "min_value", &id)?,
            max_value: required_column(row, "max_value", &id)?,
        },
        QuestionVariant::SingleSelect => QuestionKind::SingleSelect {
            options: options_column(row, &id)?,
        },
        QuestionVariant::MultiSelect => QuestionKind::MultiSelect {
            options: options_column(row, &id)?,
        },
    };

    Ok(Question {
        id: parse_stored("question id", &id)?,
        title,
        kind,
    })
}

fn required_column(row: &SqliteRow, column: &str, id: &str) -> Result<i32> {
    row.try_get::<Option<i32>, _>(column)?
        .ok_or_else(|| Error::Internal(format!("Question {} is missing {}", id, column)))
}

fn options_column(row: &SqliteRow, id: &str) -> Result<Vec<String>> {
    match row.try_get::<Option<String>, _>("options")? {
        Some(json) => serde_json::from_str(&json)
            .map_err(|e| Error::Internal(format!("Question {} has malformed options: {}", id, e))),
        None => Ok(Vec::new()),
    }
}
