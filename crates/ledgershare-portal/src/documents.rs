//! Document registry — upload, delete and list documents.

use std::sync::Arc;

use ledgershare_core::error::PortalResult;
use ledgershare_core::models::client::ClientId;
use ledgershare_core::models::document::{CreateDocument, Document, DocumentId, UploadFile};
use ledgershare_core::notify::{Notice, Notifier, report};
use ledgershare_core::repository::DocumentRepository;
use tracing::{debug, info};
use uuid::Uuid;

/// Ephemeral object reference handed out for a freshly uploaded file.
fn object_url() -> String {
    format!("blob:ledgershare/{}", Uuid::new_v4())
}

pub struct DocumentRegistry<D: DocumentRepository> {
    documents: D,
    notifier: Arc<dyn Notifier>,
}

impl<D: DocumentRepository> DocumentRegistry<D> {
    pub fn new(documents: D, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            documents,
            notifier,
        }
    }

    /// Store `file` for `client_id`. The client is not checked for
    /// existence.
    pub async fn upload(&self, file: UploadFile, client_id: &ClientId) -> PortalResult<Document> {
        let result = self.upload_inner(file, client_id).await;
        report(self.notifier.as_ref(), result, "Upload failed", |_| {
            Notice::success("Document uploaded successfully")
        })
    }

    async fn upload_inner(&self, file: UploadFile, client_id: &ClientId) -> PortalResult<Document> {
        let doc_type = file.document_type();
        let document = self
            .documents
            .create(CreateDocument {
                name: file.name,
                doc_type,
                size: file.size,
                client_id: client_id.clone(),
                url: object_url(),
            })
            .await?;
        info!(
            id = %document.id,
            client_id = %document.client_id,
            doc_type = %document.doc_type,
            "document uploaded"
        );
        Ok(document)
    }

    /// Remove a document; absent IDs are ignored.
    pub async fn delete(&self, id: &DocumentId) -> PortalResult<()> {
        let result = match self.documents.delete(id).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => {
                debug!(%id, "delete of unknown document ignored");
                Ok(())
            }
            Err(e) => Err(e),
        };
        report(self.notifier.as_ref(), result, "Deletion failed", |_| {
            Notice::success("Document deleted successfully")
        })
    }

    pub async fn get(&self, id: &DocumentId) -> PortalResult<Option<Document>> {
        match self.documents.get_by_id(id).await {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// All documents in registry order.
    pub async fn list(&self) -> PortalResult<Vec<Document>> {
        self.documents.list().await
    }

    /// A client's documents in registry order; callers re-sort for display.
    pub async fn list_for_client(&self, client_id: &ClientId) -> PortalResult<Vec<Document>> {
        self.documents.list_by_client(client_id).await
    }
}
