//! Document domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::ClientId;
use super::record_id;

record_id!(
    /// Identifier of a [`Document`].
    DocumentId
);

/// Type recorded for files whose name carries no extension.
pub const UNKNOWN_DOCUMENT_TYPE: &str = "unknown";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    /// File extension captured at upload time, e.g. `pdf`.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Size in bytes.
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    /// Weak reference; the client may no longer exist.
    pub client_id: ClientId,
    pub url: String,
}

/// A file handed to the portal for upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub size: u64,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Text after the last `.` of the file name, or
    /// [`UNKNOWN_DOCUMENT_TYPE`] when there is none.
    pub fn document_type(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext.to_owned(),
            _ => UNKNOWN_DOCUMENT_TYPE.to_owned(),
        }
    }
}

/// Fields required to store a new document. ID and upload time are
/// assigned by the registry.
#[derive(Debug, Clone)]
pub struct CreateDocument {
    pub name: String,
    pub doc_type: String,
    pub size: u64,
    pub client_id: ClientId,
    pub url: String,
}
