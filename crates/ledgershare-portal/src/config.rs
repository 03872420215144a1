//! Registry configuration.

use serde::Deserialize;

/// What happens to a client's documents when the client is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientDeletePolicy {
    /// Delete the client's documents along with it.
    #[default]
    Cascade,
    /// Refuse to delete a client that still owns documents.
    Restrict,
    /// Leave the documents in place, pointing at a missing client.
    Orphan,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub delete_policy: ClientDeletePolicy,
    /// Number of entries shown in "recent" lists on dashboards.
    pub recent_limit: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            delete_policy: ClientDeletePolicy::default(),
            recent_limit: 5,
        }
    }
}
