use crate::error::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The store lives in memory, so the service is healthy whenever it can answer.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let pastes = state.store.read().await.len();
    tracing::debug!("Health check passed ({} pastes)", pastes);

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            pastes,
        }),
    )
}
