//! Demo data loaded at startup.
//!
//! Clients and documents are never persisted, so every process start
//! begins from this state.

use chrono::{DateTime, TimeZone, Utc};
use ledgershare_core::models::client::{Client, ClientId};
use ledgershare_core::models::document::{Document, DocumentId};
use ledgershare_core::models::identity::{Identity, IdentityId, Role};
use tracing::info;

use crate::config::StoreConfig;
use crate::repository::{
    InMemoryClientRepository, InMemoryDocumentRepository, InMemoryIdentityRepository,
};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn identities() -> Vec<Identity> {
    vec![
        Identity {
            id: IdentityId::new("1"),
            email: "admin@example.com".into(),
            name: "Admin User".into(),
            role: Role::Accountant,
        },
        Identity {
            id: IdentityId::new("2"),
            email: "client@example.com".into(),
            name: "Client User".into(),
            role: Role::Client,
        },
    ]
}

/// The seeded client shares ID `2` with the client-role identity.
pub fn clients() -> Vec<Client> {
    vec![Client {
        id: ClientId::new("2"),
        name: "Client User".into(),
        email: "client@example.com".into(),
        phone: Some("(123) 456-7890".into()),
        company: Some("Client Company Inc.".into()),
        created_at: date(2023, 1, 1),
    }]
}

pub fn documents() -> Vec<Document> {
    let doc = |id: &str, name: &str, doc_type: &str, size: u64, uploaded_at| Document {
        id: DocumentId::new(id),
        name: name.into(),
        doc_type: doc_type.into(),
        size,
        uploaded_at,
        client_id: ClientId::new("2"),
        url: "#".into(),
    };
    vec![
        doc("1", "Invoice - January 2023", "pdf", 342_000, date(2023, 1, 15)),
        doc("2", "Tax Return 2022", "pdf", 1_240_000, date(2023, 2, 10)),
        doc("3", "Financial Statement Q1", "xlsx", 654_000, date(2023, 3, 20)),
    ]
}

/// The three in-memory repositories, built together from one config.
#[derive(Clone)]
pub struct InMemoryBackend {
    pub identities: InMemoryIdentityRepository,
    pub clients: InMemoryClientRepository,
    pub documents: InMemoryDocumentRepository,
}

impl InMemoryBackend {
    pub fn from_config(config: &StoreConfig) -> Self {
        let (identities, clients, documents) = if config.seed {
            (identities(), clients(), documents())
        } else {
            (Vec::new(), Vec::new(), Vec::new())
        };
        info!(
            identities = identities.len(),
            clients = clients.len(),
            documents = documents.len(),
            "Initializing in-memory backend"
        );

        Self {
            identities: InMemoryIdentityRepository::with_identities(
                identities,
                config.identity_latency(),
            ),
            clients: InMemoryClientRepository::with_clients(clients, config.client_latency()),
            documents: InMemoryDocumentRepository::with_documents(
                documents,
                config.upload_latency(),
                config.document_delete_latency(),
            ),
        }
    }

    /// Seeded backend without simulated latency.
    pub fn seeded() -> Self {
        Self::from_config(&StoreConfig::without_latency())
    }

    /// Empty backend without simulated latency.
    pub fn empty() -> Self {
        Self::from_config(&StoreConfig {
            seed: false,
            ..StoreConfig::without_latency()
        })
    }
}

