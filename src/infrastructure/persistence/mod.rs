//! Credential store implementations.
//!
//! # Repositories
//!
//! - [`PgCredentialRepository`] - `console_users` table via SQLx
//! - [`InMemoryCredentialRepository`] - process-local map for tests and local runs

pub mod memory_credential_repository;
pub mod pg_credential_repository;

pub use memory_credential_repository::InMemoryCredentialRepository;
pub use pg_credential_repository::PgCredentialRepository;
