use crate::error::{ApiError, ErrorResponse};
use crate::models::{PasteResponse, UpdatePasteRequest};
use crate::routes;
use crate::state::AppState;
use crate::validation;
use axum::{body::Bytes, http::HeaderMap, extract::Path, extract::State, http::StatusCode, Json};

/// PUT /pastes/:paste_id handler - Overwrite the mutable fields of a paste
///
/// The paste must exist before the body is checked. `id` and `user_id`
/// are never changed.
#[utoipa::path(
    put,
    path = routes::PASTE_ITEM,
    params(
        ("paste_id" = String, Path, description = "Numeric id of the paste")
    ),
    request_body = UpdatePasteRequest,
    responses(
        (status = 200, description = "Paste updated", body = PasteResponse),
        (status = 400, description = "Missing or invalid field, or malformed JSON", body = ErrorResponse),
        (status = 404, description = "Paste not found", body = ErrorResponse)
    ),
    tag = "pastes"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(paste_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<PasteResponse>), ApiError> {
    let data = validation::body_data(&headers, &body)?;

    let mut store = state.store.write().await;
    let id = validation::paste_exists(&store, &paste_id)?;
    let update = validation::validate_update(&data)?;

    let paste = store
        .update(id, update)
        .ok_or(ApiError::PasteNotFound(paste_id))?;

    tracing::info!("Updated paste {}", id);
    Ok((StatusCode::OK, Json(PasteResponse { data: paste })))
}
