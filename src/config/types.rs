use mediaaccess_common::{CapabilityKind, ProviderId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    4322
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Which built-in backend serves a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// JSON catalog file (movies, TV shows, music)
    Catalog,
    /// Picture folders scanned from disk
    Pictures,
    /// Plain directory browsing
    FileSystem,
}

impl BackendKind {
    /// Whether this backend can be registered under `kind`.
    pub fn supports(self, kind: CapabilityKind) -> bool {
        match self {
            BackendKind::Catalog => matches!(
                kind,
                CapabilityKind::Movie | CapabilityKind::TvShow | CapabilityKind::Music
            ),
            BackendKind::Pictures => kind == CapabilityKind::Picture,
            BackendKind::FileSystem => kind == CapabilityKind::FileSystem,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BackendKind::Catalog => "catalog",
            BackendKind::Pictures => "pictures",
            BackendKind::FileSystem => "filesystem",
        };
        write!(f, "{}", s)
    }
}

/// One `[[providers]]` entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Provider id, unique within `kind`
    pub id: ProviderId,

    pub kind: CapabilityKind,

    /// Display name reported in the service description
    pub name: String,

    pub backend: BackendKind,

    /// Catalog file (catalog backend)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Root folders (pictures and filesystem backends)
    #[serde(default)]
    pub roots: Vec<PathBuf>,
}
