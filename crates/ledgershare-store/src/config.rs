//! Store configuration.

use serde::Deserialize;

use crate::latency::Latency;

/// Configuration for the in-memory backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Simulated round trip for identity lookups and writes (login, signup).
    pub identity_latency_ms: u64,
    /// Simulated round trip for client writes.
    pub client_latency_ms: u64,
    /// Simulated round trip for document uploads.
    pub upload_latency_ms: u64,
    /// Simulated round trip for document deletion.
    pub document_delete_latency_ms: u64,
    /// Load the demo identities, clients and documents at startup.
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            identity_latency_ms: 1000,
            client_latency_ms: 1000,
            upload_latency_ms: 1500,
            document_delete_latency_ms: 500,
            seed: true,
        }
    }
}

impl StoreConfig {
    /// Seeded backend that answers immediately.
    pub fn without_latency() -> Self {
        Self {
            identity_latency_ms: 0,
            client_latency_ms: 0,
            upload_latency_ms: 0,
            document_delete_latency_ms: 0,
            seed: true,
        }
    }

    pub fn identity_latency(&self) -> Latency {
        Latency::from_millis(self.identity_latency_ms)
    }

    pub fn client_latency(&self) -> Latency {
        Latency::from_millis(self.client_latency_ms)
    }

    pub fn upload_latency(&self) -> Latency {
        Latency::from_millis(self.upload_latency_ms)
    }

    pub fn document_delete_latency(&self) -> Latency {
        Latency::from_millis(self.document_delete_latency_ms)
    }
}
