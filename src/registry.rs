//! Provider registry mapping (capability kind, provider id) to a backend.
//!
//! The [`ProviderRegistry`] is composed once at startup through a
//! [`RegistryBuilder`] and is read-only afterwards. It owns every backend
//! instance exclusively; callers only ever borrow them for the duration of a
//! call, so the registry can be shared behind an `Arc` and read from any
//! number of threads without locking.

use std::collections::BTreeMap;

use mediaaccess_common::{CapabilityKind, Error, ProviderId, Result};
use serde::{Deserialize, Serialize};

use crate::library::{
    FileStream, FileSystemLibrary, Items, MovieLibrary, MusicLibrary, PictureLibrary,
    TvShowLibrary,
};
use crate::media::{Category, FileInfo, Genre, SearchResult};

/// Static metadata a backend declares at composition time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    /// Unique within `kind`.
    pub id: ProviderId,
    /// Human readable name (e.g. "Moving Pictures").
    pub name: String,
    pub kind: CapabilityKind,
    /// Opaque tag naming the backend implementation (e.g. "catalog").
    pub backend: String,
}

impl ProviderDescriptor {
    pub fn new(
        kind: CapabilityKind,
        id: impl Into<ProviderId>,
        name: impl Into<String>,
        backend: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            backend: backend.into(),
        }
    }
}

/// A backend instance, typed by the capability it implements.
pub enum Library {
    Movie(Box<dyn MovieLibrary>),
    TvShow(Box<dyn TvShowLibrary>),
    Music(Box<dyn MusicLibrary>),
    Picture(Box<dyn PictureLibrary>),
    FileSystem(Box<dyn FileSystemLibrary>),
}

/// Dispatch one base-contract call to whichever capability trait object the
/// library holds.
macro_rules! with_base {
    ($library:expr, $lib:ident => $call:expr) => {
        match $library {
            Library::Movie($lib) => $call,
            Library::TvShow($lib) => $call,
            Library::Music($lib) => $call,
            Library::Picture($lib) => $call,
            Library::FileSystem($lib) => $call,
        }
    };
}

impl Library {
    pub fn kind(&self) -> CapabilityKind {
        match self {
            Library::Movie(_) => CapabilityKind::Movie,
            Library::TvShow(_) => CapabilityKind::TvShow,
            Library::Music(_) => CapabilityKind::Music,
            Library::Picture(_) => CapabilityKind::Picture,
            Library::FileSystem(_) => CapabilityKind::FileSystem,
        }
    }

    pub fn search(&self, text: &str) -> anyhow::Result<Items<'_, SearchResult>> {
        with_base!(self, lib => lib.search(text))
    }

    pub fn genres(&self) -> anyhow::Result<Items<'_, Genre>> {
        with_base!(self, lib => lib.genres())
    }

    pub fn categories(&self) -> anyhow::Result<Items<'_, Category>> {
        with_base!(self, lib => lib.categories())
    }

    pub fn file_info(&self, path: &str) -> anyhow::Result<FileInfo> {
        with_base!(self, lib => lib.file_info(path))
    }

    pub fn open_file(&self, path: &str) -> anyhow::Result<FileStream> {
        with_base!(self, lib => lib.open_file(path))
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Library::{}", self.kind())
    }
}

#[derive(Debug)]
struct Registration {
    descriptor: ProviderDescriptor,
    library: Library,
}

/// Collects registrations during startup.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<(CapabilityKind, ProviderId), Registration>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend under the kind and id named by its descriptor.
    ///
    /// Fails with [`Error::DuplicateProvider`] if the pair is already taken;
    /// the earlier registration is kept untouched.
    pub fn register(&mut self, descriptor: ProviderDescriptor, library: Library) -> Result<&mut Self> {
        if descriptor.kind != library.kind() {
            return Err(Error::config(format!(
                "Provider '{}' declares kind {} but implements {}",
                descriptor.name,
                descriptor.kind,
                library.kind()
            )));
        }

        let key = (descriptor.kind, descriptor.id);
        if self.entries.contains_key(&key) {
            return Err(Error::DuplicateProvider {
                kind: descriptor.kind,
                id: descriptor.id,
            });
        }

        tracing::info!(
            kind = %descriptor.kind,
            id = %descriptor.id,
            backend = %descriptor.backend,
            "Registered provider '{}'",
            descriptor.name
        );
        self.entries.insert(key, Registration { descriptor, library });
        Ok(self)
    }

    /// Freeze the registrations. The result is immutable.
    pub fn build(self) -> ProviderRegistry {
        ProviderRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable lookup table from (capability kind, provider id) to backend.
///
/// # Examples
///
/// ```rust,ignore
/// use mediaaccess::registry::{Library, ProviderDescriptor, ProviderRegistry};
/// use mediaaccess_common::{CapabilityKind, ProviderId};
///
/// let mut builder = ProviderRegistry::builder();
/// builder.register(
///     ProviderDescriptor::new(CapabilityKind::Movie, ProviderId::new(3), "Movies", "catalog"),
///     Library::Movie(Box::new(my_backend)),
/// )?;
/// let registry = builder.build();
///
/// let movies = registry.movies(ProviderId::new(3))?;
/// ```
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    entries: BTreeMap<(CapabilityKind, ProviderId), Registration>,
}

impl ProviderRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn registration(&self, kind: CapabilityKind, id: ProviderId) -> Result<&Registration> {
        self.entries
            .get(&(kind, id))
            .ok_or(Error::ProviderNotFound { kind, id })
    }

    /// The backend registered for `(kind, id)`.
    pub fn resolve(&self, kind: CapabilityKind, id: ProviderId) -> Result<&Library> {
        self.registration(kind, id).map(|r| &r.library)
    }

    pub fn descriptor(&self, kind: CapabilityKind, id: ProviderId) -> Result<&ProviderDescriptor> {
        self.registration(kind, id).map(|r| &r.descriptor)
    }

    /// Every backend of one kind with its descriptor, ordered by provider id.
    pub fn providers(
        &self,
        kind: CapabilityKind,
    ) -> impl Iterator<Item = (&ProviderDescriptor, &Library)> + '_ {
        self.entries
            .range((kind, ProviderId::new(0))..=(kind, ProviderId::new(u32::MAX)))
            .map(|(_, r)| (&r.descriptor, &r.library))
    }

    /// Descriptors of one kind, ordered by provider id.
    pub fn descriptors(&self, kind: CapabilityKind) -> Vec<ProviderDescriptor> {
        self.providers(kind).map(|(d, _)| d.clone()).collect()
    }

    pub fn movies(&self, id: ProviderId) -> Result<&dyn MovieLibrary> {
        match self.resolve(CapabilityKind::Movie, id)? {
            Library::Movie(lib) => Ok(lib.as_ref()),
            other => Err(mismatch(CapabilityKind::Movie, other)),
        }
    }

    pub fn tvshows(&self, id: ProviderId) -> Result<&dyn TvShowLibrary> {
        match self.resolve(CapabilityKind::TvShow, id)? {
            Library::TvShow(lib) => Ok(lib.as_ref()),
            other => Err(mismatch(CapabilityKind::TvShow, other)),
        }
    }

    pub fn music(&self, id: ProviderId) -> Result<&dyn MusicLibrary> {
        match self.resolve(CapabilityKind::Music, id)? {
            Library::Music(lib) => Ok(lib.as_ref()),
            other => Err(mismatch(CapabilityKind::Music, other)),
        }
    }

    pub fn pictures(&self, id: ProviderId) -> Result<&dyn PictureLibrary> {
        match self.resolve(CapabilityKind::Picture, id)? {
            Library::Picture(lib) => Ok(lib.as_ref()),
            other => Err(mismatch(CapabilityKind::Picture, other)),
        }
    }

    pub fn filesystem(&self, id: ProviderId) -> Result<&dyn FileSystemLibrary> {
        match self.resolve(CapabilityKind::FileSystem, id)? {
            Library::FileSystem(lib) => Ok(lib.as_ref()),
            other => Err(mismatch(CapabilityKind::FileSystem, other)),
        }
    }
}

// The builder rejects kind mismatches, so this only fires on a broken invariant.
fn mismatch(expected: CapabilityKind, found: &Library) -> Error {
    Error::Internal(format!(
        "registry entry for {} holds a {} library",
        expected,
        found.kind()
    ))
}
