//! JWT issuance and validation for the `/api/token/*` endpoints.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;

/// Purpose of a token, carried in the `token_type` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub token_type: TokenType,
    /// Username of the credential record the token was issued for.
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

/// Access/refresh pair returned by the obtain endpoint.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Signs and verifies HS256 tokens with the server secret key.
///
/// Access tokens authenticate API calls. Refresh tokens can only be exchanged
/// for new access tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl_seconds: u64,
    refresh_ttl_seconds: u64,
}

impl TokenService {
    /// Creates a new token service.
    ///
    /// # Arguments
    ///
    /// - `secret` - HMAC signing key
    /// - `access_ttl_seconds` - lifetime of access tokens
    /// - `refresh_ttl_seconds` - lifetime of refresh tokens
    pub fn new(secret: &str, access_ttl_seconds: u64, refresh_ttl_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
            access_ttl_seconds,
            refresh_ttl_seconds,
        }
    }

    /// Expiry instant for a token issued at `now`, or `None` if the lifetime
    /// does not fit in a timestamp.
    fn expires_at(now: DateTime<Utc>, ttl_seconds: u64) -> Option<DateTime<Utc>> {
        let ttl = i64::try_from(ttl_seconds).ok().and_then(Duration::try_seconds)?;
        now.checked_add_signed(ttl)
    }

    fn sign(&self, subject: &str, token_type: TokenType) -> Result<String, AppError> {
        let ttl_seconds = match token_type {
            TokenType::Access => self.access_ttl_seconds,
            TokenType::Refresh => self.refresh_ttl_seconds,
        };
        let now = Utc::now();
        let expires_at = Self::expires_at(now, ttl_seconds).ok_or_else(|| {
            AppError::internal(
                "Token lifetime is out of range",
                json!({ "ttl_seconds": ttl_seconds }),
            )
        })?;

        let claims = Claims {
            token_type,
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().simple().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            AppError::internal("Failed to sign token", json!({ "reason": e.to_string() }))
        })
    }

    /// Issues a fresh access/refresh pair for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails or a configured lifetime
    /// overflows the expiry timestamp.
    pub fn issue_pair(&self, username: &str) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access: self.sign(username, TokenType::Access)?,
            refresh: self.sign(username, TokenType::Refresh)?,
        })
    }

    /// Verifies signature and expiry of any issued token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidToken`] if the token is malformed, tampered with
    /// or expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AppError::invalid_token(
                    "Token is invalid or expired",
                    json!({ "reason": e.to_string() }),
                )
            })
    }

    fn verify_type(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let claims = self.verify(token)?;

        if claims.token_type != expected {
            return Err(AppError::invalid_token(
                "Token has wrong type",
                json!({ "expected": expected, "actual": claims.token_type }),
            ));
        }

        Ok(claims)
    }

    /// Verifies an access token presented as a bearer credential.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidToken`] if the token is invalid or is not an
    /// access token.
    pub fn verify_access(&self, token: &str) -> Result<Claims, AppError> {
        self.verify_type(token, TokenType::Access)
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidToken`] if the token is invalid or is not a
    /// refresh token.
    pub fn refresh(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims = self.verify_type(refresh_token, TokenType::Refresh)?;
        self.sign(&claims.sub, TokenType::Access)
    }
}
