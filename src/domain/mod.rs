//! Domain layer containing the credential model and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Credential records and the login outcome
//! - [`repositories`] - Credential store trait definition
//! - [`docs_token`] - Process-lifetime token guarding the API documentation
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Business logic lives in [`crate::application::services`].

pub mod docs_token;
pub mod entities;
pub mod repositories;
