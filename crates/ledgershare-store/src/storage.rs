//! Device-local session storage backends.
//!
//! Both backends implement [`SessionStorage`], a string key-value store in
//! the spirit of browser local storage.
//!
//! ## File layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json      # stored value, written atomically via <key>.json.tmp
//! ```

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ledgershare_core::error::PortalResult;
use ledgershare_core::repository::SessionStorage;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreError;

/// Session storage that lives only as long as the process.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    async fn get_item(&self, key: &str) -> PortalResult<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> PortalResult<()> {
        self.items.write().await.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> PortalResult<()> {
        self.items.write().await.remove(key);
        Ok(())
    }
}

/// Filesystem-backed session storage that survives restarts.
#[derive(Clone, Debug)]
pub struct FileSessionStorage {
    base: PathBuf,
}

impl FileSessionStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    fn item_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.base.join(format!("{key}.json")))
    }
}

impl SessionStorage for FileSessionStorage {
    async fn get_item(&self, key: &str) -> PortalResult<Option<String>> {
        let path = self.item_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e).into()),
        }
    }

    async fn set_item(&self, key: &str, value: String) -> PortalResult<()> {
        let path = self.item_path(key)?;
        tokio::fs::create_dir_all(&self.base)
            .await
            .map_err(StoreError::Io)?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await.map_err(StoreError::Io)?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(StoreError::Io)?;
        debug!(path = %path.display(), "session item written");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> PortalResult<()> {
        let path = self.item_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!(path = %path.display(), "session item removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e).into()),
        }
    }
}
