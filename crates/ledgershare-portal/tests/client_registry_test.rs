//! Integration tests for the client registry.

use std::sync::Arc;

use ledgershare_core::error::PortalError;
use ledgershare_core::models::client::{ClientId, CreateClient, UpdateClient};
use ledgershare_core::notify::{Notice, NoticeLevel, RecordingNotifier};
use ledgershare_core::repository::DocumentRepository;
use ledgershare_portal::{ClientDeletePolicy, ClientRegistry, RegistryConfig};
use ledgershare_store::{InMemoryBackend, InMemoryClientRepository, InMemoryDocumentRepository};

type Registry = ClientRegistry<InMemoryClientRepository, InMemoryDocumentRepository>;

fn setup(policy: ClientDeletePolicy) -> (Registry, InMemoryBackend, RecordingNotifier) {
    let backend = InMemoryBackend::seeded();
    let notifier = RecordingNotifier::new();
    let registry = ClientRegistry::new(
        backend.clients.clone(),
        backend.documents.clone(),
        Arc::new(notifier.clone()),
        RegistryConfig {
            delete_policy: policy,
            ..Default::default()
        },
    );
    (registry, backend, notifier)
}

fn new_client(name: &str, email: &str) -> CreateClient {
    CreateClient {
        name: name.into(),
        email: email.into(),
        phone: None,
        company: None,
    }
}

#[tokio::test]
async fn add_grows_registry_by_one_and_is_retrievable() {
    let (registry, _backend, notifier) = setup(ClientDeletePolicy::default());
    let before = registry.list().await.unwrap().len();

    let client = registry
        .add(new_client("Walter White", "walter@example.com"))
        .await
        .unwrap();

    assert_eq!(registry.list().await.unwrap().len(), before + 1);
    assert_eq!(registry.get(&client.id).await.unwrap(), Some(client));
    assert_eq!(notifier.last(), Some(Notice::success("Client added successfully")));
}

#[tokio::test]
async fn add_duplicate_email_signals_and_leaves_registry_unchanged() {
    let (registry, _backend, notifier) = setup(ClientDeletePolicy::default());
    let before = registry.list().await.unwrap();

    let err = registry
        .add(new_client("Someone", "client@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, PortalError::DuplicateEmail { .. }));
    assert_eq!(registry.list().await.unwrap(), before);
    let notice = notifier.last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.starts_with("Failed to add client:"));
}

#[tokio::test]
async fn update_unknown_client_is_a_no_op() {
    let (registry, _backend, _notifier) = setup(ClientDeletePolicy::default());
    let before = registry.list().await.unwrap();

    registry
        .update(
            &ClientId::new("404"),
            UpdateClient {
                name: Some("Ghost".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(registry.list().await.unwrap(), before);
}

#[tokio::test]
async fn update_merges_fields() {
    let (registry, _backend, _notifier) = setup(ClientDeletePolicy::default());
    let id = ClientId::new("2");

    registry
        .update(
            &id,
            UpdateClient {
                phone: Some(None),
                name: Some("Client Person".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let client = registry.get(&id).await.unwrap().unwrap();
    assert_eq!(client.name, "Client Person");
    assert!(client.phone.is_none());
    assert_eq!(client.company.as_deref(), Some("Client Company Inc."));
}

#[tokio::test]
async fn delete_unknown_client_is_a_no_op() {
    let (registry, backend, _notifier) = setup(ClientDeletePolicy::Cascade);

    registry.delete(&ClientId::new("404")).await.unwrap();

    assert_eq!(registry.list().await.unwrap().len(), 1);
    assert_eq!(backend.documents.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn cascade_delete_removes_documents() {
    let (registry, backend, _notifier) = setup(ClientDeletePolicy::Cascade);
    let id = ClientId::new("2");

    registry.delete(&id).await.unwrap();

    assert!(registry.get(&id).await.unwrap().is_none());
    assert!(backend.documents.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn restrict_delete_refuses_while_documents_exist() {
    let (registry, backend, notifier) = setup(ClientDeletePolicy::Restrict);
    let id = ClientId::new("2");

    let err = registry.delete(&id).await.unwrap_err();

    match err {
        PortalError::HasDocuments { client_id, count } => {
            assert_eq!(client_id, "2");
            assert_eq!(count, 3);
        }
        other => panic!("expected HasDocuments, got {other:?}"),
    }
    assert!(registry.get(&id).await.unwrap().is_some());
    assert_eq!(notifier.last().unwrap().level, NoticeLevel::Error);

    backend.documents.delete_by_client(&id).await.unwrap();
    registry.delete(&id).await.unwrap();
    assert!(registry.get(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn orphan_delete_keeps_documents() {
    let (registry, backend, _notifier) = setup(ClientDeletePolicy::Orphan);
    let id = ClientId::new("2");

    registry.delete(&id).await.unwrap();

    assert!(registry.get(&id).await.unwrap().is_none());
    assert_eq!(backend.documents.list_by_client(&id).await.unwrap().len(), 3);
    let counts = registry.document_counts().await.unwrap();
    assert_eq!(counts.get(&id), Some(&3));
}
