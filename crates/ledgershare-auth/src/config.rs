//! Session store configuration.

use serde::Deserialize;

/// Configuration for the session service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Device-storage key holding the serialized active identity.
    pub session_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_key: "user".into(),
        }
    }
}
