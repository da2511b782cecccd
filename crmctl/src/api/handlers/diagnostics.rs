//! Liveness and database connectivity checks.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, instrument};

use crate::{AppState, db};

pub async fn healthz() -> &'static str {
    "OK"
}

/// Report the database server's clock, proving a query round-trip works.
#[instrument(skip_all)]
pub async fn test_mysql(State(state): State<AppState>) -> Response {
    match db::database_now(&state.db).await {
        Ok(now) => format!("Current MySQL time: {}", now.format("%Y-%m-%d %H:%M:%S")).into_response(),
        Err(e) => {
            error!("Error executing query: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error executing query").into_response()
        }
    }
}
