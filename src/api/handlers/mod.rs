//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod hello;
pub mod token;

pub use health::health_handler;
pub use hello::hello_handler;
pub use token::{token_obtain_handler, token_refresh_handler, token_verify_handler};
