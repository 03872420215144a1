//! Client registry — add, update, delete and look up clients.
//!
//! Every mutation emits a notification and hands failures back to the
//! caller. Updating or deleting a client that does not exist is a no-op.

use std::collections::BTreeMap;
use std::sync::Arc;

use ledgershare_core::error::{PortalError, PortalResult};
use ledgershare_core::models::client::{Client, ClientId, CreateClient, UpdateClient};
use ledgershare_core::notify::{Notice, Notifier, report};
use ledgershare_core::repository::{ClientRepository, DocumentRepository};
use tracing::{debug, info};

use crate::config::{ClientDeletePolicy, RegistryConfig};
use crate::views;

/// Client registry.
///
/// Holds the document repository as well so that client deletion can
/// apply the configured [`ClientDeletePolicy`].
pub struct ClientRegistry<C: ClientRepository, D: DocumentRepository> {
    clients: C,
    documents: D,
    notifier: Arc<dyn Notifier>,
    config: RegistryConfig,
}

impl<C: ClientRepository, D: DocumentRepository> ClientRegistry<C, D> {
    pub fn new(clients: C, documents: D, notifier: Arc<dyn Notifier>, config: RegistryConfig) -> Self {
        Self {
            clients,
            documents,
            notifier,
            config,
        }
    }

    pub async fn add(&self, input: CreateClient) -> PortalResult<Client> {
        let result = self.clients.create(input).await;
        if let Ok(client) = &result {
            info!(id = %client.id, "client added");
        }
        report(self.notifier.as_ref(), result, "Failed to add client", |_| {
            Notice::success("Client added successfully")
        })
    }

    pub async fn update(&self, id: &ClientId, input: UpdateClient) -> PortalResult<()> {
        let result = match self.clients.update(id, input).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => {
                debug!(%id, "update of unknown client ignored");
                Ok(())
            }
            Err(e) => Err(e),
        };
        report(self.notifier.as_ref(), result, "Failed to update client", |_| {
            Notice::success("Client updated successfully")
        })
    }

    pub async fn delete(&self, id: &ClientId) -> PortalResult<()> {
        let result = self.delete_inner(id).await;
        report(self.notifier.as_ref(), result, "Failed to delete client", |_| {
            Notice::success("Client deleted successfully")
        })
    }

    async fn delete_inner(&self, id: &ClientId) -> PortalResult<()> {
        if self.get(id).await?.is_none() {
            debug!(%id, "delete of unknown client ignored");
            return Ok(());
        }

        if self.config.delete_policy == ClientDeletePolicy::Restrict {
            let count = self.documents.list_by_client(id).await?.len();
            if count > 0 {
                return Err(PortalError::HasDocuments {
                    client_id: id.to_string(),
                    count,
                });
            }
        }

        match self.clients.delete(id).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => return Ok(()),
            Err(e) => return Err(e),
        }

        if self.config.delete_policy == ClientDeletePolicy::Cascade {
            let removed = self.documents.delete_by_client(id).await?;
            info!(%id, removed, "client deleted with its documents");
        } else {
            info!(%id, "client deleted");
        }
        Ok(())
    }

    /// Pure lookup.
    pub async fn get(&self, id: &ClientId) -> PortalResult<Option<Client>> {
        match self.clients.get_by_id(id).await {
            Ok(client) => Ok(Some(client)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// All clients in registry order.
    pub async fn list(&self) -> PortalResult<Vec<Client>> {
        self.clients.list().await
    }

    /// Number of documents referencing each client. Clients without
    /// documents are absent; orphaned client IDs are present.
    pub async fn document_counts(&self) -> PortalResult<BTreeMap<ClientId, usize>> {
        let documents = self.documents.list().await?;
        Ok(views::document_counts_by_client(&documents))
    }
}
