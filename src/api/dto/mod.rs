//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization and expose a `utoipa` schema for
//! the OpenAPI document.

pub mod health;
pub mod hello;
pub mod token;
