//! Identity domain model.
//!
//! An identity is a person who can sign in to the portal, either as an
//! accountant who manages clients or as a client who reads shared documents.

use serde::{Deserialize, Serialize};

use super::record_id;

record_id!(
    /// Identifier of an [`Identity`].
    IdentityId
);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Accountant,
    Client,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Accountant => "accountant",
            Role::Client => "client",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: IdentityId,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl Identity {
    pub fn is_accountant(&self) -> bool {
        self.role == Role::Accountant
    }
}

/// Fields required to register a new identity.
#[derive(Debug, Clone)]
pub struct CreateIdentity {
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Profile fields that can be edited on an existing identity.
#[derive(Debug, Clone, Default)]
pub struct UpdateIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
}
