//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::HEALTH_PROBE_TABLE;

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint - verifies the database answers and the schema exists.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable or schema missing", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    match probe(&state).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                error: None,
            }),
        )
            .into_response(),
        Err(reason) => {
            tracing::warn!(%reason, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    error: Some(reason),
                }),
            )
                .into_response()
        }
    }
}

async fn probe(state: &AppState) -> Result<(), String> {
    state
        .database
        .ping()
        .await
        .map_err(|e| format!("database unreachable: {}", e))?;

    let exists = state
        .database
        .table_exists(HEALTH_PROBE_TABLE)
        .await
        .map_err(|e| format!("schema check failed: {}", e))?;

    if !exists {
        return Err(format!("table '{}' does not exist", HEALTH_PROBE_TABLE));
    }
    Ok(())
}
