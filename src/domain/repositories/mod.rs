//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Testing
//!
//! See `tests/repository_credential.rs` for the PostgreSQL implementation.

pub mod credential_repository;

pub use credential_repository::CredentialRepository;

#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
