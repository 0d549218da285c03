//! Built-in backends and startup composition.
//!
//! The core treats these exactly like third-party plugins: each one
//! implements a capability trait from [`crate::library`] and is registered
//! through [`RegistryBuilder`](crate::registry::RegistryBuilder).
//!
//! - [`catalog`] -- JSON catalog file for movies, TV shows, and music
//! - [`pictures`] -- picture folders scanned from disk
//! - [`filesystem`] -- plain directory browsing
//! - [`local`] -- shared helpers for files on the local disk

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use mediaaccess_common::CapabilityKind;

use crate::config::{BackendKind, ProviderConfig};
use crate::registry::{Library, ProviderDescriptor, ProviderRegistry};

pub mod catalog;
pub mod filesystem;
pub mod local;
pub mod pictures;

pub use catalog::{Catalog, CatalogLibrary};
pub use filesystem::LocalFileSystem;
pub use pictures::PictureFolders;

/// Construct and register a backend for every configured provider.
///
/// Any failure aborts startup; a half-composed registry is never returned.
pub fn build_registry(providers: &[ProviderConfig]) -> Result<ProviderRegistry> {
    let mut builder = ProviderRegistry::builder();

    for provider in providers {
        let library = build_library(provider)
            .with_context(|| format!("Failed to set up provider '{}'", provider.name))?;
        let descriptor = ProviderDescriptor::new(
            provider.kind,
            provider.id,
            provider.name.clone(),
            provider.backend.to_string(),
        );
        builder.register(descriptor, library)?;
    }

    Ok(builder.build())
}

fn build_library(provider: &ProviderConfig) -> Result<Library> {
    if !provider.backend.supports(provider.kind) {
        anyhow::bail!(
            "The {} backend cannot serve {} libraries",
            provider.backend,
            provider.kind
        );
    }

    let library = match provider.backend {
        BackendKind::Catalog => {
            let path = provider
                .path
                .as_deref()
                .context("Catalog backend needs a path")?;
            let catalog = Catalog::load(path)?;
            let library = CatalogLibrary::new(catalog, provider.kind);
            match provider.kind {
                CapabilityKind::Movie => Library::Movie(Box::new(library)),
                CapabilityKind::TvShow => Library::TvShow(Box::new(library)),
                _ => Library::Music(Box::new(library)),
            }
        }
        BackendKind::Pictures => Library::Picture(Box::new(PictureFolders::new(provider.roots.clone()))),
        BackendKind::FileSystem => {
            Library::FileSystem(Box::new(LocalFileSystem::new(provider.roots.clone())))
        }
    };

    Ok(library)
}

/// Opaque, URL-safe id for a local path.
pub fn encode_path_id(path: &Path) -> String {
    URL_SAFE_NO_PAD.encode(path.to_string_lossy().as_bytes())
}

/// Reverse of [`encode_path_id`]. `None` for anything that is not a valid id.
pub fn decode_path_id(id: &str) -> Option<PathBuf> {
    let bytes = URL_SAFE_NO_PAD.decode(id).ok()?;
    String::from_utf8(bytes).ok().map(PathBuf::from)
}

/// Whether `path` lies inside one of `roots` without escaping it through `..`.
pub fn within_roots(roots: &[PathBuf], path: &Path) -> bool {
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return false;
    }
    roots.iter().any(|root| path.starts_with(root))
}
