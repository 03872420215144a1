//! Session error types.

use ledgershare_core::error::PortalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("no active session")]
    NotAuthenticated,

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("session could not be encoded: {0}")]
    SessionEncoding(#[from] serde_json::Error),
}

impl From<AuthError> for PortalError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => PortalError::InvalidCredentials,
            AuthError::NotAuthenticated => PortalError::NotAuthenticated,
            AuthError::InvalidInput { .. } => PortalError::Validation {
                message: err.to_string(),
            },
            AuthError::SessionEncoding(_) => PortalError::OperationFailed(err.to_string()),
        }
    }
}
