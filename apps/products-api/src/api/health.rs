//! Readiness probe backed by the configured storage.

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;

use crate::state::{AppState, Storage};

/// 200 when storage answers, 503 otherwise. In-memory storage is always ready.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = match &state.storage {
        Storage::Postgres(db) => vec![(
            "database",
            Box::pin(async move { check_health(db).await.map_err(|e| e.to_string()) }),
        )],
        Storage::InMemory(_) => vec![("storage", Box::pin(async { Ok(()) }))],
    };

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
}
