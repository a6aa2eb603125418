//! Swagger UI handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, extract::State, response::IntoResponse};
use utoipa::OpenApi;

use crate::api::openapi::ApiDoc;
use crate::state::AppState;

/// Template for the Swagger UI page.
///
/// Renders `templates/swagger.html`, which loads Swagger UI and points it at
/// `spec_url`.
#[derive(Template, WebTemplate)]
#[template(path = "swagger.html")]
struct SwaggerTemplate {
    spec_url: String,
}

/// Renders the Swagger UI.
///
/// # Endpoint
///
/// `GET /swagger/{token}`
pub async fn swagger_handler(State(state): State<AppState>) -> impl IntoResponse {
    SwaggerTemplate {
        spec_url: state.docs_token.openapi_path(),
    }
}

/// Serves the OpenAPI document.
///
/// # Endpoint
///
/// `GET /swagger/{token}/openapi.json`
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
