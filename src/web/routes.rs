//! Page route configuration.

use crate::domain::docs_token::DocsToken;
use crate::state::AppState;
use crate::web::handlers::{
    login_page_handler, login_submit_handler, openapi_handler, swagger_handler,
};
use axum::{Router, routing::get};

/// Login page routes.
///
/// # Endpoints
///
/// - `GET  /` - Login form
/// - `POST /` - Credential submission
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/", get(login_page_handler).post(login_submit_handler))
}

/// Documentation routes mounted under the startup docs token.
///
/// Only the exact token path is registered; any other `/swagger/...` path
/// falls through to `404 Not Found`.
///
/// # Endpoints
///
/// - `GET /swagger/{token}`              - Swagger UI
/// - `GET /swagger/{token}/openapi.json` - OpenAPI document
pub fn docs_routes(docs_token: &DocsToken) -> Router<AppState> {
    Router::new()
        .route(&docs_token.swagger_path(), get(swagger_handler))
        .route(&docs_token.openapi_path(), get(openapi_handler))
}
