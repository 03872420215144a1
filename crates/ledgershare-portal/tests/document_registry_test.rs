//! Integration tests for the document registry.

use std::sync::Arc;

use ledgershare_core::models::client::ClientId;
use ledgershare_core::models::document::{DocumentId, UploadFile};
use ledgershare_core::notify::{Notice, NoticeLevel, RecordingNotifier};
use ledgershare_portal::DocumentRegistry;
use ledgershare_portal::views;
use ledgershare_store::{InMemoryBackend, InMemoryDocumentRepository};

fn setup() -> (DocumentRegistry<InMemoryDocumentRepository>, RecordingNotifier) {
    let backend = InMemoryBackend::seeded();
    let notifier = RecordingNotifier::new();
    let registry = DocumentRegistry::new(backend.documents, Arc::new(notifier.clone()));
    (registry, notifier)
}

#[tokio::test]
async fn upload_adds_document_visible_for_client() {
    let (registry, notifier) = setup();
    let client = ClientId::new("2");
    let before = registry.list().await.unwrap().len();

    let doc = registry
        .upload(UploadFile::new("Payroll March.csv", 2048), &client)
        .await
        .unwrap();

    assert_eq!(registry.list().await.unwrap().len(), before + 1);
    assert_eq!(doc.doc_type, "csv");
    assert_eq!(doc.size, 2048);
    assert!(doc.url.starts_with("blob:"));
    let for_client = registry.list_for_client(&client).await.unwrap();
    assert!(for_client.iter().any(|d| d.id == doc.id));
    assert_eq!(
        notifier.last(),
        Some(Notice::success("Document uploaded successfully"))
    );
}

#[tokio::test]
async fn upload_without_extension_is_unknown_type() {
    let (registry, _notifier) = setup();

    let doc = registry
        .upload(UploadFile::new("NOTES", 10), &ClientId::new("2"))
        .await
        .unwrap();

    assert_eq!(doc.doc_type, "unknown");
}

#[tokio::test]
async fn upload_blank_name_is_stored_with_unknown_type() {
    let (registry, notifier) = setup();

    let doc = registry
        .upload(UploadFile::new("", 10), &ClientId::new("2"))
        .await
        .unwrap();

    assert_eq!(doc.doc_type, "unknown");
    assert_eq!(registry.list().await.unwrap().len(), 4);
    assert_eq!(notifier.last().unwrap().level, NoticeLevel::Success);
}

#[tokio::test]
async fn delete_then_lookup_is_absent_and_repeat_is_idempotent() {
    let (registry, _notifier) = setup();
    let id = DocumentId::new("2");

    registry.delete(&id).await.unwrap();
    assert!(registry.get(&id).await.unwrap().is_none());
    let after_first = registry.list().await.unwrap();

    registry.delete(&id).await.unwrap();
    assert_eq!(registry.list().await.unwrap(), after_first);
}

#[tokio::test]
async fn uploads_after_deletion_get_fresh_ids() {
    let (registry, _notifier) = setup();
    let client = ClientId::new("2");

    registry.delete(&DocumentId::new("3")).await.unwrap();
    let doc = registry
        .upload(UploadFile::new("replacement.pdf", 1), &client)
        .await
        .unwrap();

    assert_eq!(doc.id.as_str(), "4");
    let ids: Vec<_> = registry.list().await.unwrap().into_iter().map(|d| d.id).collect();
    let unique: std::collections::BTreeSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn seeded_client_views() {
    let (registry, _notifier) = setup();
    let docs = registry.list_for_client(&ClientId::new("2")).await.unwrap();

    let histogram = views::type_histogram(&docs);
    assert_eq!(histogram.get("pdf"), Some(&2));
    assert_eq!(histogram.get("xlsx"), Some(&1));
    assert_eq!(views::most_recent(&docs).unwrap().name, "Financial Statement Q1");
}
