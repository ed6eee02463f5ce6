// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const PASTES: &str = "/pastes";
pub const PASTE_ITEM: &str = "/pastes/{paste_id}";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
