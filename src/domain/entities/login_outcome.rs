//! Outcome of a single login attempt.

/// Message shown when a login attempt is rejected.
///
/// Used both for unknown usernames and wrong passwords.
pub const LOGIN_FAILURE_MESSAGE: &str = "please login with correct credentials";

/// Terminal state of one login submission.
///
/// A submission moves from awaiting input straight to one of these two
/// outcomes; there is no retry state and nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched; the browser is sent to `redirect_to`.
    Success { redirect_to: String },
    /// Credentials were rejected; the form is shown again with `message`.
    Failure { message: String },
}

impl LoginOutcome {
    pub fn success(redirect_to: impl Into<String>) -> Self {
        Self::Success {
            redirect_to: redirect_to.into(),
        }
    }

    /// Rejection carrying [`LOGIN_FAILURE_MESSAGE`].
    pub fn rejected() -> Self {
        Self::Failure {
            message: LOGIN_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_fixed_message() {
        assert_eq!(
            LoginOutcome::rejected(),
            LoginOutcome::Failure {
                message: "please login with correct credentials".to_string()
            }
        );
    }

    #[test]
    fn test_is_success() {
        assert!(LoginOutcome::success("/swagger/abc").is_success());
        assert!(!LoginOutcome::rejected().is_success());
    }
}
