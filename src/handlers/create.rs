use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreatePasteRequest, PasteResponse};
use crate::routes;
use crate::state::AppState;
use crate::validation;
use axum::{body::Bytes, http::HeaderMap, extract::State, http::StatusCode, Json};

/// POST /pastes handler - Validate and store a new paste
///
/// Checks run in a fixed order and the first failure is returned. The new
/// paste gets the next id from the store's counter.
#[utoipa::path(
    post,
    path = routes::PASTES,
    request_body = CreatePasteRequest,
    responses(
        (status = 201, description = "Paste created", body = PasteResponse),
        (status = 400, description = "Missing or invalid field, or malformed JSON", body = ErrorResponse),
        (status = 500, description = "Unexpected error", body = ErrorResponse)
    ),
    tag = "pastes"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<PasteResponse>), ApiError> {
    let data = validation::body_data(&headers, &body)?;
    let new = validation::validate_create(&data)?;

    let paste = state.store.write().await.create(new)?;

    tracing::info!("Created paste {} for user {}", paste.id, paste.user_id);
    Ok((StatusCode::CREATED, Json(PasteResponse { data: paste })))
}
