//! Client domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::IdentityId;
use super::record_id;

record_id!(
    /// Identifier of a [`Client`]. Documents refer to clients through it.
    ClientId
);

impl From<&IdentityId> for ClientId {
    /// A client-role identity shares its ID with its client record.
    fn from(id: &IdentityId) -> Self {
        Self::new(id.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a new client. ID and creation time are
/// assigned by the registry.
#[derive(Debug, Clone)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

/// Partial update merged into an existing client.
#[derive(Debug, Clone, Default)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub email: Option<String>,
    /// `Some(Some(val))` = set, `Some(None)` = clear, `None` = no change.
    pub phone: Option<Option<String>>,
    /// `Some(Some(val))` = set, `Some(None)` = clear, `None` = no change.
    pub company: Option<Option<String>>,
}

impl UpdateClient {
    /// Merge this update into `client`. `id` and `created_at` never change.
    pub fn apply_to(self, client: &mut Client) {
        if let Some(name) = self.name {
            client.name = name;
        }
        if let Some(email) = self.email {
            client.email = email;
        }
        if let Some(phone) = self.phone {
            client.phone = phone;
        }
        if let Some(company) = self.company {
            client.company = company;
        }
    }
}
