//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LoginService, TokenService};
use crate::domain::docs_token::DocsToken;
use crate::domain::repositories::CredentialRepository;

/// Immutable state built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialRepository>,
    pub login_service: Arc<LoginService>,
    pub token_service: Arc<TokenService>,
    pub docs_token: DocsToken,
}

impl AppState {
    /// Wires services around a credential store and the startup docs token.
    pub fn new(
        credentials: Arc<dyn CredentialRepository>,
        token_service: TokenService,
        docs_token: DocsToken,
    ) -> Self {
        let login_service = Arc::new(LoginService::new(credentials.clone(), &docs_token));

        Self {
            credentials,
            login_service,
            token_service: Arc::new(token_service),
            docs_token,
        }
    }
}
