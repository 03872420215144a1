//! Dashboard summaries for the two roles.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ledgershare_core::models::client::{Client, ClientId};
use ledgershare_core::models::document::Document;
use ledgershare_core::models::identity::Identity;
use serde::Serialize;

use crate::views;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopClient {
    pub id: ClientId,
    pub name: String,
    pub documents: usize,
}

/// Overview shown to an accountant.
#[derive(Debug, Clone, Serialize)]
pub struct AccountantDashboard {
    pub total_clients: usize,
    pub total_documents: usize,
    pub clients_this_month: usize,
    pub uploads_this_month: usize,
    pub storage_used: u64,
    pub recent_documents: Vec<Document>,
    pub recent_clients: Vec<Client>,
    pub top_client: Option<TopClient>,
}

impl AccountantDashboard {
    pub fn build(
        clients: &[Client],
        documents: &[Document],
        now: DateTime<Utc>,
        limit: usize,
    ) -> Self {
        let since = views::month_start(now);
        let top_client = views::top_client(documents).map(|(id, count)| TopClient {
            name: views::client_name(clients, &id).to_owned(),
            id,
            documents: count,
        });

        Self {
            total_clients: clients.len(),
            total_documents: documents.len(),
            clients_this_month: views::clients_since(clients, since),
            uploads_this_month: views::documents_since(documents, since),
            storage_used: views::total_size(documents),
            recent_documents: views::recent_documents(documents, None, Some(limit))
                .into_iter()
                .cloned()
                .collect(),
            recent_clients: views::clients_by_newest(clients, Some(limit))
                .into_iter()
                .cloned()
                .collect(),
            top_client,
        }
    }
}

/// Overview shown to a client, limited to their own documents.
#[derive(Debug, Clone, Serialize)]
pub struct ClientDashboard {
    pub document_count: usize,
    pub uploads_this_month: usize,
    pub storage_used: u64,
    pub most_recent: Option<Document>,
    pub type_histogram: BTreeMap<String, usize>,
    pub recent_documents: Vec<Document>,
}

impl ClientDashboard {
    pub fn build(
        viewer: &Identity,
        documents: &[Document],
        now: DateTime<Utc>,
        limit: usize,
    ) -> Self {
        let own_id = ClientId::from(&viewer.id);
        let own: Vec<Document> = documents
            .iter()
            .filter(|d| d.client_id == own_id)
            .cloned()
            .collect();

        Self {
            document_count: own.len(),
            uploads_this_month: views::documents_since(&own, views::month_start(now)),
            storage_used: views::total_size(&own),
            most_recent: views::most_recent(&own).cloned(),
            type_histogram: views::type_histogram(&own),
            recent_documents: views::recent_documents(&own, None, Some(limit))
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
