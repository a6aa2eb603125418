//! Random path segment guarding the API documentation.

use rand::{Rng, distr::Alphanumeric};
use std::fmt;
use std::sync::Arc;

/// Number of characters in a generated token.
pub const DOCS_TOKEN_LEN: usize = 32;

/// Token that forms the Swagger UI path, `/swagger/<token>`.
///
/// Generated once when the server starts and stored in [`crate::state::AppState`].
/// It is never persisted or rotated, so every restart mounts the documentation
/// under a new path. Clones share the same allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsToken(Arc<str>);

impl DocsToken {
    /// Generates a fresh alphanumeric token of [`DOCS_TOKEN_LEN`] characters.
    pub fn generate() -> Self {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(DOCS_TOKEN_LEN)
            .map(char::from)
            .collect();

        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the Swagger UI, e.g. `/swagger/Ab3...`.
    pub fn swagger_path(&self) -> String {
        format!("/swagger/{}", self.0)
    }

    /// Path of the OpenAPI document rendered by the Swagger UI.
    pub fn openapi_path(&self) -> String {
        format!("/swagger/{}/openapi.json", self.0)
    }
}

impl From<&str> for DocsToken {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for DocsToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
