//! Runtime settings assembled from defaults, `ledgershare.toml` and the
//! environment.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File, FileFormat};
use ledgershare_auth::AuthConfig;
use ledgershare_portal::RegistryConfig;
use ledgershare_store::StoreConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Session {
    /// Directory for the persisted session. Unset keeps it in memory.
    pub storage_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub store: StoreConfig,
    pub auth: AuthConfig,
    pub registry: RegistryConfig,
    pub session: Session,
}

impl Settings {
    /// Defaults, then `ledgershare.toml` if present, then `LEDGERSHARE_*`
    /// environment variables (`__` separates nested keys).
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name("ledgershare")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("LEDGERSHARE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    #[cfg(test)]
    fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
