//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET|POST /`                       - Login page (public)
//! - `GET  /swagger/{token}`            - Swagger UI, path fixed at startup
//! - `GET  /swagger/{token}/openapi.json` - OpenAPI document
//! - `/api/token/*`                     - JWT obtain / refresh / verify (public)
//! - `GET  /api/hello`                  - Bearer access token required
//! - `GET  /health`                     - Credential store health (public)
//! - `/static/*`                        - Static assets, only when `DEBUG` is set
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer JWT on protected API routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use crate::web;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router without path normalization.
///
/// Routes are registered without trailing slashes; use [`app_router`] to accept
/// both forms.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `serve_static` - when `true`, serves `./static` under `/static`
pub fn build_router(state: AppState, serve_static: bool) -> Router {
    let api_router = api::routes::public_routes().merge(
        api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
    );

    let mut router = Router::new()
        .merge(web::routes::login_routes())
        .merge(web::routes::docs_routes(&state.docs_token))
        .route("/health", get(health_handler))
        .nest("/api", api_router);

    if serve_static {
        router = router.nest_service("/static", ServeDir::new("static"));
    }

    router.with_state(state).layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, serve_static: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, serve_static))
}
