use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{
    CreatePasteRequest, Exposure, NewPaste, Paste, PasteListResponse, PasteResponse, PasteUpdate,
    Syntax, UpdatePasteRequest, UserId,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "pastes-api",
        version = "0.1.0",
        description = "A small REST API for text pastes held in memory"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Paste,
            Syntax,
            Exposure,
            UserId,
            NewPaste,
            PasteUpdate,
            CreatePasteRequest,
            UpdatePasteRequest,
            PasteResponse,
            PasteListResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "pastes", description = "Paste operations")
    )
)]
pub struct ApiDoc;
