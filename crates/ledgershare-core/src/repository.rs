//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async so that the in-memory backend can
//! be swapped for a remote one without touching call sites. Mutations
//! report a missing record as [`PortalError::NotFound`]; callers decide
//! whether that is an error or a no-op.
//!
//! [`PortalError::NotFound`]: crate::error::PortalError::NotFound

use crate::error::PortalResult;
use crate::models::{
    client::{Client, ClientId, CreateClient, UpdateClient},
    document::{CreateDocument, Document, DocumentId},
    identity::{CreateIdentity, Identity, IdentityId, UpdateIdentity},
};

// ---------------------------------------------------------------------------
// Identities
// ---------------------------------------------------------------------------

pub trait IdentityRepository: Send + Sync {
    /// Fails with `DuplicateEmail` if the email is already registered.
    fn create(&self, input: CreateIdentity) -> impl Future<Output = PortalResult<Identity>> + Send;
    fn get_by_id(&self, id: &IdentityId) -> impl Future<Output = PortalResult<Identity>> + Send;
    fn get_by_email(&self, email: &str) -> impl Future<Output = PortalResult<Identity>> + Send;
    fn update(
        &self,
        id: &IdentityId,
        input: UpdateIdentity,
    ) -> impl Future<Output = PortalResult<Identity>> + Send;
    fn delete(&self, id: &IdentityId) -> impl Future<Output = PortalResult<()>> + Send;
    fn list(&self) -> impl Future<Output = PortalResult<Vec<Identity>>> + Send;
}

// ---------------------------------------------------------------------------
// Clients & documents
// ---------------------------------------------------------------------------

pub trait ClientRepository: Send + Sync {
    /// Fails with `DuplicateEmail` if another client has the email.
    fn create(&self, input: CreateClient) -> impl Future<Output = PortalResult<Client>> + Send;
    fn get_by_id(&self, id: &ClientId) -> impl Future<Output = PortalResult<Client>> + Send;
    /// Fails with `DuplicateEmail` if the update moves the email onto
    /// another client's address.
    fn update(
        &self,
        id: &ClientId,
        input: UpdateClient,
    ) -> impl Future<Output = PortalResult<Client>> + Send;
    fn delete(&self, id: &ClientId) -> impl Future<Output = PortalResult<()>> + Send;
    /// All clients in registry (insertion) order.
    fn list(&self) -> impl Future<Output = PortalResult<Vec<Client>>> + Send;
}

pub trait DocumentRepository: Send + Sync {
    fn create(&self, input: CreateDocument)
    -> impl Future<Output = PortalResult<Document>> + Send;
    fn get_by_id(&self, id: &DocumentId) -> impl Future<Output = PortalResult<Document>> + Send;
    fn delete(&self, id: &DocumentId) -> impl Future<Output = PortalResult<()>> + Send;
    /// Remove every document owned by a client, returning how many were
    /// removed.
    fn delete_by_client(
        &self,
        client_id: &ClientId,
    ) -> impl Future<Output = PortalResult<usize>> + Send;
    /// All documents in registry (insertion) order.
    fn list(&self) -> impl Future<Output = PortalResult<Vec<Document>>> + Send;
    /// Documents owned by a client, in registry order.
    fn list_by_client(
        &self,
        client_id: &ClientId,
    ) -> impl Future<Output = PortalResult<Vec<Document>>> + Send;
}

// ---------------------------------------------------------------------------
// Device storage
// ---------------------------------------------------------------------------

/// String key-value storage local to the device, surviving reloads.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> impl Future<Output = PortalResult<Option<String>>> + Send;
    fn set_item(&self, key: &str, value: String)
    -> impl Future<Output = PortalResult<()>> + Send;
    /// Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> impl Future<Output = PortalResult<()>> + Send;
}
