//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::login_service::LoginService`] - Credential check behind the login page
//! - [`services::token_service::TokenService`] - JWT issuance, refresh and verification

pub mod services;
