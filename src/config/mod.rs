mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    prepare_providers(&mut config.providers);

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./mediaaccess.toml",
        "~/.config/mediaaccess/config.toml",
        "/etc/mediaaccess/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

fn expand(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

fn prepare_providers(providers: &mut [ProviderConfig]) {
    for provider in providers.iter_mut() {
        provider.path = provider.path.as_deref().map(expand);
        for root in provider.roots.iter_mut() {
            *root = expand(root);
        }
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    // Validate server config
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    let mut seen = HashSet::new();
    for provider in &config.providers {
        if !seen.insert((provider.kind, provider.id)) {
            anyhow::bail!(
                "Duplicate {} provider id {} ('{}')",
                provider.kind,
                provider.id,
                provider.name
            );
        }

        if !provider.backend.supports(provider.kind) {
            anyhow::bail!(
                "Provider '{}' uses the {} backend, which cannot serve {} libraries",
                provider.name,
                provider.backend,
                provider.kind
            );
        }

        match provider.backend {
            BackendKind::Catalog => match &provider.path {
                None => anyhow::bail!("Provider '{}' needs a catalog path", provider.name),
                Some(path) if !path.exists() => {
                    tracing::warn!("Catalog for provider '{}' does not exist: {:?}", provider.name, path);
                }
                Some(_) => {}
            },
            BackendKind::Pictures | BackendKind::FileSystem => {
                if provider.roots.is_empty() {
                    anyhow::bail!("Provider '{}' needs at least one root folder", provider.name);
                }
                for root in &provider.roots {
                    if !root.exists() {
                        tracing::warn!("Root folder for provider '{}' does not exist: {:?}", provider.name, root);
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediaaccess_common::{CapabilityKind, ProviderId};

    fn provider(id: u32, kind: CapabilityKind, backend: BackendKind) -> ProviderConfig {
        ProviderConfig {
            id: ProviderId::new(id),
            kind,
            name: format!("p{id}"),
            backend,
            path: Some(PathBuf::from("/nonexistent/catalog.json")),
            roots: vec![PathBuf::from("/nonexistent")],
        }
    }

    fn config(providers: Vec<ProviderConfig>) -> Config {
        Config {
            providers,
            ..Default::default()
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn rejects_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_duplicate_ids_within_kind() {
        let dup = config(vec![
            provider(1, CapabilityKind::Movie, BackendKind::Catalog),
            provider(1, CapabilityKind::Movie, BackendKind::Catalog),
        ]);
        let err = validate_config(&dup).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));

        let across_kinds = config(vec![
            provider(1, CapabilityKind::Movie, BackendKind::Catalog),
            provider(1, CapabilityKind::Music, BackendKind::Catalog),
        ]);
        assert!(validate_config(&across_kinds).is_ok());
    }

    #[test]
    fn rejects_incompatible_backend() {
        let bad = config(vec![provider(1, CapabilityKind::Picture, BackendKind::Catalog)]);
        assert!(validate_config(&bad).is_err());
    }

    #[test]
    fn requires_backend_inputs() {
        let mut catalog = provider(1, CapabilityKind::Movie, BackendKind::Catalog);
        catalog.path = None;
        assert!(validate_config(&config(vec![catalog])).is_err());

        let mut pictures = provider(1, CapabilityKind::Picture, BackendKind::Pictures);
        pictures.roots.clear();
        assert!(validate_config(&config(vec![pictures])).is_err());
    }

    #[test]
    fn tilde_is_expanded() {
        let mut providers = vec![provider(1, CapabilityKind::FileSystem, BackendKind::FileSystem)];
        providers[0].roots = vec![PathBuf::from("~/media")];
        prepare_providers(&mut providers);
        assert!(!providers[0].roots[0].starts_with("~"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [server]
            port = 5000

            [[providers]]
            id = 2
            kind = "picture"
            name = "Photos"
            backend = "pictures"
            roots = ["/srv/photos"]
            "#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.providers[0].kind, CapabilityKind::Picture);

        let explicit = load_config_or_default(Some(&path)).unwrap();
        assert_eq!(explicit.providers.len(), 1);
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();
        assert!(load_config(&path).is_err());
    }
}
