//! GET /health: liveness plus a `SELECT 1` probe of the questionnaire store.
//! An unreachable store reports `"status": "degraded"` with 503.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    status: &'static str,
    module: &'static str,
    version: &'static str,
    database: String,
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    let (code, status, database) = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => (StatusCode::OK, "ok", "ok".to_string()),
        Err(e) => {
            warn!("Health check cannot reach database: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", e.to_string())
        }
    };

    (
        code,
        Json(Health {
            status,
            module: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
