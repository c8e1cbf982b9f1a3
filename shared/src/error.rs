use thiserror::Error;

/// Message shown when either credential field is empty.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Both username and password are required.";

/// Message shown for every failure after validation passed.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password. Please try again.";

/// Errors a login attempt surfaces to the user.
///
/// Authentication, transport and decoding failures all collapse into
/// [`LoginError::Rejected`]; the underlying [`AuthFailure`] is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Both username and password are required.")]
    MissingCredentials,
    #[error("Invalid username or password. Please try again.")]
    Rejected,
    /// A submission arrived while another one was still in flight.
    #[error("A login request is already in progress.")]
    AlreadySubmitting,
}

impl LoginError {
    /// Text rendered under the form, if this error is user-facing.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            LoginError::MissingCredentials => Some(MISSING_CREDENTIALS_MESSAGE),
            LoginError::Rejected => Some(LOGIN_FAILED_MESSAGE),
            LoginError::AlreadySubmitting => None,
        }
    }
}

/// Why the authentication endpoint call did not produce a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("login endpoint responded with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not decode login response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for AuthFailure {
    fn from(err: serde_json::Error) -> Self {
        AuthFailure::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("token storage failed: {0}")]
pub struct StorageError(pub String);

impl From<AuthFailure> for LoginError {
    fn from(_: AuthFailure) -> Self {
        LoginError::Rejected
    }
}

impl From<StorageError> for LoginError {
    fn from(_: StorageError) -> Self {
        LoginError::Rejected
    }
}
