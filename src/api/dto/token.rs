//! DTOs for the JWT endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::TokenPair;

/// Credentials exchanged for a token pair.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TokenObtainRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub username: String,

    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: String,
}

/// Access and refresh tokens.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access: pair.access,
            refresh: pair.refresh,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenRefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenRefreshResponse {
    pub access: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenVerifyRequest {
    pub token: String,
}

/// Empty body returned for a valid token.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenVerifyResponse {}
