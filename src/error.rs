use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message returned for any failure that is not classified
pub const UNEXPECTED_MESSAGE: &str = "Something went wrong!";

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub pastes: usize,
}

/// Custom error type for API endpoints
///
/// Every failure raised while handling a request ends up here and is
/// rendered as a `{ "error": <message> }` body with the matching status.
#[derive(Debug)]
pub enum ApiError {
    /// A required field is missing or a field value is out of range
    Validation(String),
    /// No paste matches the identifier from the path
    PasteNotFound(String),
    /// No route matches the request path
    RouteNotFound(String),
    /// The path exists but not for this method
    MethodNotAllowed { method: String, path: String },
    /// Request body is not valid JSON
    JsonError(serde_json::Error),
    /// Anything else
    Unexpected(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::JsonError(_) => StatusCode::BAD_REQUEST,
            ApiError::PasteNotFound(_) | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => f.write_str(msg),
            ApiError::PasteNotFound(id) => write!(f, "Paste id not found: {}", id),
            ApiError::RouteNotFound(path) => write!(f, "Not found: {}", path),
            ApiError::MethodNotAllowed { method, path } => {
                write!(f, "{} not allowed for {}", method, path)
            }
            ApiError::JsonError(err) => write!(f, "JSON parse error: {}", err),
            ApiError::Unexpected(_) => f.write_str(UNEXPECTED_MESSAGE),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Unexpected(err) => tracing::error!("Unexpected error: {:#}", err),
            other => tracing::debug!("Request failed ({}): {}", status, other),
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Unexpected(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_keeps_message() {
        let (status, body) =
            render(ApiError::Validation("Must include a name property.".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Must include a name property.");
    }

    #[tokio::test]
    async fn test_not_found_echoes_identifier() {
        let (status, body) = render(ApiError::PasteNotFound("42".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Paste id not found: 42");
    }

    #[tokio::test]
    async fn test_unexpected_hides_cause() {
        let (status, body) =
            render(ApiError::from(anyhow::anyhow!("connection reset by peer"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Something went wrong!");
    }

    #[tokio::test]
    async fn test_json_error_is_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let (status, body) = render(ApiError::from(err)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.starts_with("JSON parse error:"));
    }
}
