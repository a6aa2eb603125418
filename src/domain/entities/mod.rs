//! Core domain entities.
//!
//! - [`CredentialRecord`] - A stored username/password/designation triple
//! - [`NewCredential`] - Validated input for creating a record out-of-band
//! - [`LoginOutcome`] - Result of a single login attempt

pub mod credential;
pub mod login_outcome;

pub use credential::{CredentialRecord, NewCredential};
pub use login_outcome::{LOGIN_FAILURE_MESSAGE, LoginOutcome};
