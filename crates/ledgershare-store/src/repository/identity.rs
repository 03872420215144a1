//! In-memory implementation of [`IdentityRepository`].

use std::sync::Arc;

use ledgershare_core::error::{PortalError, PortalResult};
use ledgershare_core::models::identity::{CreateIdentity, Identity, IdentityId, UpdateIdentity};
use ledgershare_core::repository::IdentityRepository;
use tokio::sync::RwLock;
use tracing::debug;

use super::{Record, Table};
use crate::error::StoreError;
use crate::latency::Latency;

impl Record for Identity {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

fn not_found(id: &IdentityId) -> PortalError {
    StoreError::NotFound {
        entity: "identity".into(),
        id: id.to_string(),
    }
    .into()
}

/// In-memory implementation of the Identity repository.
///
/// Lookups by email and all writes stand in for a call to an
/// authentication backend and therefore await the configured latency.
#[derive(Clone)]
pub struct InMemoryIdentityRepository {
    table: Arc<RwLock<Table<Identity>>>,
    latency: Latency,
}

impl InMemoryIdentityRepository {
    pub fn new(latency: Latency) -> Self {
        Self::with_identities(Vec::new(), latency)
    }

    pub fn with_identities(identities: Vec<Identity>, latency: Latency) -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::new(identities))),
            latency,
        }
    }
}

impl IdentityRepository for InMemoryIdentityRepository {
    async fn create(&self, input: CreateIdentity) -> PortalResult<Identity> {
        self.latency.wait().await;
        let mut table = self.table.write().await;

        if table.rows().iter().any(|i| i.email == input.email) {
            return Err(PortalError::duplicate_email("user", &input.email));
        }

        let identity = Identity {
            id: IdentityId::new(table.next_id()),
            email: input.email,
            name: input.name,
            role: input.role,
        };
        table.push(identity.clone());
        debug!(id = %identity.id, role = identity.role.as_str(), "identity created");
        Ok(identity)
    }

    async fn get_by_id(&self, id: &IdentityId) -> PortalResult<Identity> {
        let table = self.table.read().await;
        table.find(id.as_str()).cloned().ok_or_else(|| not_found(id))
    }

    async fn get_by_email(&self, email: &str) -> PortalResult<Identity> {
        self.latency.wait().await;
        let table = self.table.read().await;
        table
            .rows()
            .iter()
            .find(|i| i.email == email)
            .cloned()
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: "identity".into(),
                    id: email.into(),
                }
                .into()
            })
    }

    async fn update(&self, id: &IdentityId, input: UpdateIdentity) -> PortalResult<Identity> {
        self.latency.wait().await;
        let mut table = self.table.write().await;

        if let Some(email) = &input.email {
            if table.rows().iter().any(|i| &i.email == email && &i.id != id) {
                return Err(PortalError::duplicate_email("user", email));
            }
        }

        let identity = table.find_mut(id.as_str()).ok_or_else(|| not_found(id))?;
        if let Some(name) = input.name {
            identity.name = name;
        }
        if let Some(email) = input.email {
            identity.email = email;
        }
        Ok(identity.clone())
    }

    async fn delete(&self, id: &IdentityId) -> PortalResult<()> {
        self.latency.wait().await;
        if self.table.write().await.remove(id.as_str()) {
            debug!(%id, "identity deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    async fn list(&self) -> PortalResult<Vec<Identity>> {
        Ok(self.table.read().await.rows().to_vec())
    }
}
