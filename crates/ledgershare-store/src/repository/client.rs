//! In-memory implementation of [`ClientRepository`].

use std::sync::Arc;

use chrono::Utc;
use ledgershare_core::error::{PortalError, PortalResult};
use ledgershare_core::models::client::{Client, ClientId, CreateClient, UpdateClient};
use ledgershare_core::repository::ClientRepository;
use tokio::sync::RwLock;
use tracing::debug;

use super::{Record, Table};
use crate::error::StoreError;
use crate::latency::Latency;

impl Record for Client {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

fn not_found(id: &ClientId) -> PortalError {
    StoreError::NotFound {
        entity: "client".into(),
        id: id.to_string(),
    }
    .into()
}

/// In-memory implementation of the Client repository.
#[derive(Clone)]
pub struct InMemoryClientRepository {
    table: Arc<RwLock<Table<Client>>>,
    latency: Latency,
}

impl InMemoryClientRepository {
    pub fn new(latency: Latency) -> Self {
        Self::with_clients(Vec::new(), latency)
    }

    pub fn with_clients(clients: Vec<Client>, latency: Latency) -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::new(clients))),
            latency,
        }
    }
}

impl ClientRepository for InMemoryClientRepository {
    async fn create(&self, input: CreateClient) -> PortalResult<Client> {
        self.latency.wait().await;
        let mut table = self.table.write().await;

        if table.rows().iter().any(|c| c.email == input.email) {
            return Err(PortalError::duplicate_email("client", &input.email));
        }

        let client = Client {
            id: ClientId::new(table.next_id()),
            name: input.name,
            email: input.email,
            phone: input.phone,
            company: input.company,
            created_at: Utc::now(),
        };
        table.push(client.clone());
        debug!(id = %client.id, "client created");
        Ok(client)
    }

    async fn get_by_id(&self, id: &ClientId) -> PortalResult<Client> {
        let table = self.table.read().await;
        table.find(id.as_str()).cloned().ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: &ClientId, input: UpdateClient) -> PortalResult<Client> {
        self.latency.wait().await;
        let mut table = self.table.write().await;

        if let Some(email) = &input.email {
            if table.rows().iter().any(|c| &c.email == email && &c.id != id) {
                return Err(PortalError::duplicate_email("client", email));
            }
        }

        let client = table.find_mut(id.as_str()).ok_or_else(|| not_found(id))?;
        input.apply_to(client);
        Ok(client.clone())
    }

    async fn delete(&self, id: &ClientId) -> PortalResult<()> {
        self.latency.wait().await;
        if self.table.write().await.remove(id.as_str()) {
            debug!(%id, "client deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    async fn list(&self) -> PortalResult<Vec<Client>> {
        Ok(self.table.read().await.rows().to_vec())
    }
}
