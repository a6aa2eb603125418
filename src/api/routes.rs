//! API route configuration.

use crate::api::handlers::{
    hello_handler, token_obtain_handler, token_refresh_handler, token_verify_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Token endpoints, open to anonymous callers.
///
/// # Endpoints
///
/// - `POST /token`         - Exchange username/password for an access/refresh pair
/// - `POST /token/refresh` - Exchange a refresh token for a new access token
/// - `POST /token/verify`  - Check that a token is valid
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/token", post(token_obtain_handler))
        .route("/token/refresh", post(token_refresh_handler))
        .route("/token/verify", post(token_verify_handler))
}

/// Routes requiring a Bearer access token, see [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `GET /hello` - Greets the authenticated user
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/hello", get(hello_handler))
}
