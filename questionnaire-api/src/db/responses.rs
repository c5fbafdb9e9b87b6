//! Response persistence
//!
//! Responses are insert-only.

use questionnaire_common::uuid_utils::parse_stored;
use questionnaire_common::{Response, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

pub async fn insert_response(pool: &SqlitePool, response: &Response) -> Result<()> {
    sqlx::query("INSERT INTO responses (id, question_id, answer) VALUES (?, ?, ?)")
        .bind(response.id.to_string())
        .bind(response.question_id.to_string())
        .bind(&response.answer)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn get_response(pool: &SqlitePool, id: Uuid) -> Result<Option<Response>> {
    let row = sqlx::query_as::<_, (String, String, String)>(
        "SELECT id, question_id, answer FROM responses WHERE id = ?",
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    row.map(|(id, question_id, answer)| -> Result<Response> {
        Ok(Response {
            id: parse_stored("response id", &id)?,
            question_id: parse_stored("question id", &question_id)?,
            answer,
        })
    })
    .transpose()
}

/// Number of stored responses referencing a question
pub async fn count_responses_for_question(pool: &SqlitePool, question_id: Uuid) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM responses WHERE question_id = ?")
        .bind(question_id.to_string())
        .fetch_one(pool)
        .await?;

    Ok(count)
}
