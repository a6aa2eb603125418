//! Login gate: checks submitted credentials against the credential store.

use std::sync::Arc;

use crate::domain::docs_token::DocsToken;
use crate::domain::entities::{CredentialRecord, LoginOutcome};
use crate::domain::repositories::CredentialRepository;
use crate::error::AppError;

/// Service validating login submissions.
///
/// Passwords are compared by plain equality against the stored value. There is
/// no hashing and no constant-time comparison.
pub struct LoginService {
    repository: Arc<dyn CredentialRepository>,
    redirect_to: String,
}

impl LoginService {
    /// Creates a new login service.
    ///
    /// # Arguments
    ///
    /// - `repository` - credential store used for lookups
    /// - `docs_token` - startup token; successful logins redirect to its Swagger path
    pub fn new(repository: Arc<dyn CredentialRepository>, docs_token: &DocsToken) -> Self {
        Self {
            repository,
            redirect_to: docs_token.swagger_path(),
        }
    }

    /// Redirect target handed out on every successful login.
    pub fn redirect_target(&self) -> &str {
        &self.redirect_to
    }

    /// Returns the record for `username` if `password` matches it exactly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store lookup fails.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<CredentialRecord>, AppError> {
        if username.is_empty() {
            return Ok(None);
        }

        let record = self.repository.find_by_username(username).await?;

        Ok(record.filter(|r| r.password_matches(password)))
    }

    /// Resolves one login submission.
    ///
    /// An unknown username and a wrong password both produce
    /// [`LoginOutcome::rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store lookup fails.
    pub async fn attempt_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, AppError> {
        match self.verify_credentials(username, password).await? {
            Some(record) => {
                tracing::info!(username = %record.username, "Login succeeded");
                Ok(LoginOutcome::success(self.redirect_to.clone()))
            }
            None => {
                tracing::info!(username = %username, "Login rejected");
                Ok(LoginOutcome::rejected())
            }
        }
    }
}
