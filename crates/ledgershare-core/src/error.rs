//! Error types for the LedgerShare system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("A {entity} with email {email} already exists")]
    DuplicateEmail { entity: String, email: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No active session")]
    NotAuthenticated,

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Client {client_id} still has {count} document(s)")]
    HasDocuments { client_id: String, count: usize },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl PortalError {
    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn duplicate_email(entity: &str, email: &str) -> Self {
        Self::DuplicateEmail {
            entity: entity.into(),
            email: email.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type PortalResult<T> = Result<T, PortalError>;
