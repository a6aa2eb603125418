//! Handlers for JWT obtain, refresh and verify.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::token::{
    TokenObtainRequest, TokenPairResponse, TokenRefreshRequest, TokenRefreshResponse,
    TokenVerifyRequest, TokenVerifyResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges credentials for an access/refresh token pair.
///
/// # Endpoint
///
/// `POST /api/token`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "secret123" }
/// ```
///
/// # Errors
///
/// - 400 if a field is blank
/// - 401 if no record matches the credentials
#[utoipa::path(
    post,
    path = "/api/token/",
    tag = "auth",
    request_body = TokenObtainRequest,
    responses(
        (status = 200, description = "Token pair issued", body = TokenPairResponse),
        (status = 400, description = "Blank username or password"),
        (status = 401, description = "No account matches the credentials")
    )
)]
pub async fn token_obtain_handler(
    State(state): State<AppState>,
    Json(payload): Json<TokenObtainRequest>,
) -> Result<Json<TokenPairResponse>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::bad_request("Invalid request", json!({ "fields": e.to_string() })))?;

    let record = state
        .login_service
        .verify_credentials(&payload.username, &payload.password)
        .await?
        .ok_or_else(|| {
            AppError::unauthorized(
                "No active account found with the given credentials",
                json!({}),
            )
        })?;

    let pair = state.token_service.issue_pair(&record.username)?;
    tracing::info!(username = %record.username, "Token pair issued");

    Ok(Json(pair.into()))
}

/// Exchanges a refresh token for a new access token.
///
/// # Endpoint
///
/// `POST /api/token/refresh`
#[utoipa::path(
    post,
    path = "/api/token/refresh/",
    tag = "auth",
    request_body = TokenRefreshRequest,
    responses(
        (status = 200, description = "New access token", body = TokenRefreshResponse),
        (status = 401, description = "Refresh token invalid, expired or of the wrong type")
    )
)]
pub async fn token_refresh_handler(
    State(state): State<AppState>,
    Json(payload): Json<TokenRefreshRequest>,
) -> Result<Json<TokenRefreshResponse>, AppError> {
    let access = state.token_service.refresh(&payload.refresh)?;

    Ok(Json(TokenRefreshResponse { access }))
}

/// Checks that a token is valid.
///
/// # Endpoint
///
/// `POST /api/token/verify`
///
/// Accepts both access and refresh tokens and answers with an empty object.
#[utoipa::path(
    post,
    path = "/api/token/verify/",
    tag = "auth",
    request_body = TokenVerifyRequest,
    responses(
        (status = 200, description = "Token is valid", body = TokenVerifyResponse),
        (status = 401, description = "Token invalid or expired")
    )
)]
pub async fn token_verify_handler(
    State(state): State<AppState>,
    Json(payload): Json<TokenVerifyRequest>,
) -> Result<Json<TokenVerifyResponse>, AppError> {
    state.token_service.verify(&payload.token)?;

    Ok(Json(TokenVerifyResponse {}))
}
