use crate::models::PasteListResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /pastes handler - List every paste in insertion order
#[utoipa::path(
    get,
    path = routes::PASTES,
    responses(
        (status = 200, description = "All stored pastes", body = PasteListResponse)
    ),
    tag = "pastes"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<PasteListResponse>) {
    let data = state.store.read().await.list().to_vec();

    tracing::info!("Listed {} pastes", data.len());
    (StatusCode::OK, Json(PasteListResponse { data }))
}
