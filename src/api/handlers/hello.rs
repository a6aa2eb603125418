//! Handler for the authenticated hello endpoint.

use axum::{Extension, Json};

use crate::api::dto::hello::HelloResponse;
use crate::application::services::Claims;

/// Greets the user the access token was issued for.
///
/// # Endpoint
///
/// `GET /api/hello`
///
/// # Response
///
/// ```json
/// { "message": "Hello, alice!" }
/// ```
#[utoipa::path(
    get,
    path = "/api/hello/",
    tag = "api",
    security(("jwt" = [])),
    responses(
        (status = 200, description = "Greeting for the token subject", body = HelloResponse),
        (status = 401, description = "Missing, invalid or expired access token")
    )
)]
pub async fn hello_handler(Extension(claims): Extension<Claims>) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: format!("Hello, {}!", claims.sub),
    })
}
