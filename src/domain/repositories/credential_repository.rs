//! Repository trait for the credential store.

use crate::domain::entities::{CredentialRecord, NewCredential};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for console user credentials.
///
/// The store exclusively owns records; callers get owned copies scoped to a
/// single request. Records are created out-of-band (see the `admin` binary)
/// and never updated or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCredentialRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryCredentialRepository`] - process memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Looks up the record with exactly this username.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if the username exists
    /// - `Ok(None)` if no record matches, including for an empty `username`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<CredentialRecord>, AppError>;

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, credential: &NewCredential) -> Result<CredentialRecord, AppError>;

    /// Lists all records ordered by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<CredentialRecord>, AppError>;

    /// Returns `true` if the store is reachable.
    async fn health_check(&self) -> bool;
}
