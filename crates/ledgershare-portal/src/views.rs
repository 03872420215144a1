//! Derived views over registry contents.
//!
//! Everything here is a pure function of the slices passed in. Nothing is
//! cached; callers recompute on every render.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use ledgershare_core::models::client::{Client, ClientId};
use ledgershare_core::models::document::Document;
use ledgershare_core::models::identity::{Identity, Role};

/// Display name used when a document points at a deleted client.
pub const UNKNOWN_CLIENT: &str = "Unknown Client";

/// Which client's documents a listing is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClientFilter {
    #[default]
    All,
    Only(ClientId),
}

impl ClientFilter {
    /// Interpret a `clientId` query parameter; absent or `"all"` means all.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("") | Some("all") => ClientFilter::All,
            Some(id) => ClientFilter::Only(ClientId::new(id)),
        }
    }

    fn matches(&self, client_id: &ClientId) -> bool {
        match self {
            ClientFilter::All => true,
            ClientFilter::Only(id) => id == client_id,
        }
    }
}

/// Search box plus client selector of the document listing.
#[derive(Debug, Clone, Default)]
pub struct DocumentQuery {
    pub search: String,
    pub client: ClientFilter,
}

/// Latest upload; on equal timestamps the later element wins.
pub fn most_recent(documents: &[Document]) -> Option<&Document> {
    documents.iter().max_by_key(|d| d.uploaded_at)
}

/// Document count per lower-cased type.
pub fn type_histogram(documents: &[Document]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for doc in documents {
        *counts.entry(doc.doc_type.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

pub fn document_counts_by_client(documents: &[Document]) -> BTreeMap<ClientId, usize> {
    let mut counts = BTreeMap::new();
    for doc in documents {
        *counts.entry(doc.client_id.clone()).or_insert(0) += 1;
    }
    counts
}

/// Client owning the most documents. Ties go to the lexicographically
/// smallest client ID.
pub fn top_client(documents: &[Document]) -> Option<(ClientId, usize)> {
    let mut best: Option<(ClientId, usize)> = None;
    // BTreeMap iterates in ascending ID order, so strict `>` keeps the
    // smallest ID among equals.
    for (id, count) in document_counts_by_client(documents) {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((id, count));
        }
    }
    best
}

/// Newest first. Equal timestamps keep registry order.
pub fn sort_by_recent<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
) -> Vec<&'a Document> {
    let mut sorted: Vec<&Document> = documents.into_iter().collect();
    sorted.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
    sorted
}

/// Newest documents, optionally for one client, optionally truncated.
pub fn recent_documents<'a>(
    documents: &'a [Document],
    client_id: Option<&ClientId>,
    limit: Option<usize>,
) -> Vec<&'a Document> {
    let mut sorted = sort_by_recent(
        documents
            .iter()
            .filter(|d| client_id.is_none_or(|id| &d.client_id == id)),
    );
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}

/// Newest clients first, optionally truncated.
pub fn clients_by_newest(clients: &[Client], limit: Option<usize>) -> Vec<&Client> {
    let mut sorted: Vec<&Client> = clients.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}

/// Case-insensitive match on name, email or company.
pub fn search_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    let needle = query.to_lowercase();
    clients
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
                || c.company
                    .as_ref()
                    .is_some_and(|company| company.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Documents visible to `viewer` that match `query`.
///
/// A client-role viewer only ever sees documents filed under their own
/// identity ID; the client selector is ignored for them.
pub fn filter_documents<'a>(
    documents: &'a [Document],
    query: &DocumentQuery,
    viewer: &Identity,
) -> Vec<&'a Document> {
    let needle = query.search.to_lowercase();
    let own_id = ClientId::from(&viewer.id);
    documents
        .iter()
        .filter(|d| d.name.to_lowercase().contains(&needle))
        .filter(|d| match viewer.role {
            Role::Client => d.client_id == own_id,
            Role::Accountant => query.client.matches(&d.client_id),
        })
        .collect()
}

pub fn client_name<'a>(clients: &'a [Client], id: &ClientId) -> &'a str {
    clients
        .iter()
        .find(|c| &c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNKNOWN_CLIENT)
}

/// Total bytes across `documents`.
pub fn total_size(documents: &[Document]) -> u64 {
    documents.iter().map(|d| d.size).sum()
}

pub fn documents_since(documents: &[Document], since: DateTime<Utc>) -> usize {
    documents.iter().filter(|d| d.uploaded_at >= since).count()
}

pub fn clients_since(clients: &[Client], since: DateTime<Utc>) -> usize {
    clients.iter().filter(|c| c.created_at >= since).count()
}

/// Midnight UTC on the first day of `now`'s month.
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

/// Human-readable size: bytes below 1 KiB, then KB and MB with one decimal.
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Up to two upper-cased initials, e.g. `"Client User"` → `"CU"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
