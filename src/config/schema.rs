use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/scrobcache/config.toml` or
/// `~/.config/scrobcache/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SCROBCACHE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub client: ClientSettings,
    pub storage: StorageSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client: ClientSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Identifier written to the `product` attribute of the persisted
    /// submissions document, naming the client that queued the scrobbles.
    pub product: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            product: "scrobcache".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StorageSettings {
    /// Override for the runtime-data directory holding the per-user cache
    /// files. When unset, `SCROBCACHE_DATA_PATH` and then the platform
    /// data dir apply.
    pub data_dir: Option<PathBuf>,
}
