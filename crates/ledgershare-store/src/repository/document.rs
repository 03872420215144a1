//! In-memory implementation of [`DocumentRepository`].

use std::sync::Arc;

use chrono::Utc;
use ledgershare_core::error::{PortalError, PortalResult};
use ledgershare_core::models::client::ClientId;
use ledgershare_core::models::document::{CreateDocument, Document, DocumentId};
use ledgershare_core::repository::DocumentRepository;
use tokio::sync::RwLock;
use tracing::debug;

use super::{Record, Table};
use crate::error::StoreError;
use crate::latency::Latency;

impl Record for Document {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

fn not_found(id: &DocumentId) -> PortalError {
    StoreError::NotFound {
        entity: "document".into(),
        id: id.to_string(),
    }
    .into()
}

/// In-memory implementation of the Document repository.
///
/// Uploads and deletions have separate simulated latencies.
#[derive(Clone)]
pub struct InMemoryDocumentRepository {
    table: Arc<RwLock<Table<Document>>>,
    upload_latency: Latency,
    delete_latency: Latency,
}

impl InMemoryDocumentRepository {
    pub fn new(upload_latency: Latency, delete_latency: Latency) -> Self {
        Self::with_documents(Vec::new(), upload_latency, delete_latency)
    }

    pub fn with_documents(
        documents: Vec<Document>,
        upload_latency: Latency,
        delete_latency: Latency,
    ) -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::new(documents))),
            upload_latency,
            delete_latency,
        }
    }
}

impl DocumentRepository for InMemoryDocumentRepository {
    async fn create(&self, input: CreateDocument) -> PortalResult<Document> {
        self.upload_latency.wait().await;
        let mut table = self.table.write().await;

        let document = Document {
            id: DocumentId::new(table.next_id()),
            name: input.name,
            doc_type: input.doc_type,
            size: input.size,
            uploaded_at: Utc::now(),
            client_id: input.client_id,
            url: input.url,
        };
        table.push(document.clone());
        debug!(id = %document.id, client_id = %document.client_id, size = document.size, "document stored");
        Ok(document)
    }

    async fn get_by_id(&self, id: &DocumentId) -> PortalResult<Document> {
        let table = self.table.read().await;
        table.find(id.as_str()).cloned().ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: &DocumentId) -> PortalResult<()> {
        self.delete_latency.wait().await;
        if self.table.write().await.remove(id.as_str()) {
            debug!(%id, "document deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    async fn delete_by_client(&self, client_id: &ClientId) -> PortalResult<usize> {
        self.delete_latency.wait().await;
        let removed = self
            .table
            .write()
            .await
            .remove_where(|d| &d.client_id == client_id);
        debug!(%client_id, removed, "client documents deleted");
        Ok(removed)
    }

    async fn list(&self) -> PortalResult<Vec<Document>> {
        Ok(self.table.read().await.rows().to_vec())
    }

    async fn list_by_client(&self, client_id: &ClientId) -> PortalResult<Vec<Document>> {
        let table = self.table.read().await;
        Ok(table
            .rows()
            .iter()
            .filter(|d| &d.client_id == client_id)
            .cloned()
            .collect())
    }
}
