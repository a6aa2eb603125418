//! Business logic services for the application layer.

pub mod login_service;
pub mod token_service;

pub use login_service::LoginService;
pub use token_service::{Claims, TokenPair, TokenService, TokenType};
