use crate::error::{ApiError, ErrorResponse};
use crate::models::PasteResponse;
use crate::routes;
use crate::state::AppState;
use crate::validation;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /pastes/:paste_id handler - Retrieve a single paste
#[utoipa::path(
    get,
    path = routes::PASTE_ITEM,
    params(
        ("paste_id" = String, Path, description = "Numeric id of the paste")
    ),
    responses(
        (status = 200, description = "Paste found", body = PasteResponse),
        (status = 404, description = "Paste not found", body = ErrorResponse)
    ),
    tag = "pastes"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(paste_id): Path<String>,
) -> Result<(StatusCode, Json<PasteResponse>), ApiError> {
    let store = state.store.read().await;
    let id = validation::paste_exists(&store, &paste_id)?;

    let paste = store
        .find(id)
        .cloned()
        .ok_or(ApiError::PasteNotFound(paste_id))?;

    tracing::info!("Retrieved paste {}", id);
    Ok((StatusCode::OK, Json(PasteResponse { data: paste })))
}
