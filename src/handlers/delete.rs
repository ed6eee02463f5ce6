use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use crate::validation;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /pastes/:paste_id handler - Remove a paste
#[utoipa::path(
    delete,
    path = routes::PASTE_ITEM,
    params(
        ("paste_id" = String, Path, description = "Numeric id of the paste")
    ),
    responses(
        (status = 204, description = "Paste deleted"),
        (status = 404, description = "Paste not found", body = ErrorResponse)
    ),
    tag = "pastes"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(paste_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    let id = validation::paste_exists(&store, &paste_id)?;

    store
        .remove(id)
        .ok_or(ApiError::PasteNotFound(paste_id))?;

    tracing::info!("Deleted paste {}", id);
    Ok(StatusCode::NO_CONTENT)
}
