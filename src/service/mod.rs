//! The dispatch facade: one entry point per media operation.
//!
//! [`MediaService`] is constructed once from a frozen
//! [`ProviderRegistry`](crate::registry::ProviderRegistry) and shared by
//! reference for the life of the process. Every operation follows the same
//! steps:
//!
//! 1. resolve the backend for the request's kind and provider id
//!    (a miss is [`Error::ProviderNotFound`]),
//! 2. call the backend (a failure is [`Error::Backend`]),
//! 3. run the result through the [query pipeline](crate::query),
//! 4. tag every entity with the provider it came from.
//!
//! Singular lookups that come back empty are [`Error::EntityNotFound`].
//! The service holds no mutable state, so concurrent calls are independent.
//!
//! The operations are split by domain:
//!
//! - [`movies`] -- movie listings, counts, and lookups
//! - [`tvshows`] -- shows, seasons, and episodes
//! - [`music`] -- tracks, albums, and artists
//! - [`pictures`] -- pictures and picture folders
//! - [`filesystem`] -- drives, folders, and files
//!
//! File resolution lives in [`crate::files`].

use mediaaccess_common::{CapabilityKind, Error, ProviderId, Result, WebMediaType};
use serde::{Deserialize, Serialize};

use crate::files::PathTable;
use crate::media::{MediaEntity, MediaItem, SearchResult};
use crate::query::QueryExt;
use crate::registry::{ProviderDescriptor, ProviderRegistry};

pub mod filesystem;
pub mod movies;
pub mod music;
pub mod pictures;
pub mod tvshows;

/// API revision reported for every domain.
pub const API_VERSION: u32 = 3;

/// Aggregation and dispatch over every registered backend.
pub struct MediaService {
    registry: ProviderRegistry,
    paths: PathTable,
}

impl MediaService {
    /// Wrap a built registry with the standard file path rules.
    pub fn new(registry: ProviderRegistry) -> Result<Self> {
        Ok(Self::with_path_table(registry, PathTable::standard()?))
    }

    pub fn with_path_table(registry: ProviderRegistry, paths: PathTable) -> Self {
        Self { registry, paths }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub(crate) fn path_table(&self) -> &PathTable {
        &self.paths
    }

    /// API versions, the crate version, and the libraries available per kind.
    pub fn service_description(&self) -> ServiceDescription {
        let libraries = |kind| -> Vec<BackendProvider> {
            self.registry
                .descriptors(kind)
                .into_iter()
                .map(BackendProvider::from)
                .collect()
        };

        ServiceDescription {
            movie_api: API_VERSION,
            tvshow_api: API_VERSION,
            music_api: API_VERSION,
            picture_api: API_VERSION,
            filesystem_api: API_VERSION,
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            available_movie_libraries: libraries(CapabilityKind::Movie),
            available_tvshow_libraries: libraries(CapabilityKind::TvShow),
            available_music_libraries: libraries(CapabilityKind::Music),
            available_picture_libraries: libraries(CapabilityKind::Picture),
            available_filesystem_libraries: libraries(CapabilityKind::FileSystem),
        }
    }

    /// Run a free-text search on every provider of every kind.
    ///
    /// Results are concatenated in kind order, then provider id order, with
    /// no de-duplication. Any backend failure aborts the search.
    pub fn search(&self, text: &str) -> Result<Vec<SearchResult>> {
        let mut results = Vec::new();
        for kind in CapabilityKind::ALL {
            for (descriptor, library) in self.registry.providers(kind) {
                let found = library
                    .search(text)
                    .map_err(backend(kind, descriptor.id))?
                    .tagged(descriptor.id);
                results.extend(found);
            }
        }
        Ok(results)
    }

    /// Fetch any single entity by media type and wrap it as a [`MediaItem`].
    ///
    /// The provider is resolved under the media type's capability kind.
    pub fn media_item(
        &self,
        provider: ProviderId,
        media_type: WebMediaType,
        id: &str,
    ) -> Result<MediaItem> {
        let item: MediaItem = match media_type {
            WebMediaType::Movie => self.movie_detailed_by_id(provider, id)?.into(),
            WebMediaType::MusicTrack => self.music_track_detailed_by_id(provider, id)?.into(),
            WebMediaType::MusicAlbum => self.music_album_basic_by_id(provider, id)?.into(),
            WebMediaType::MusicArtist => self.music_artist_basic_by_id(provider, id)?.into(),
            WebMediaType::Picture => self.picture_detailed_by_id(provider, id)?.into(),
            WebMediaType::TvShow => self.tvshow_detailed_by_id(provider, id)?.into(),
            WebMediaType::TvSeason => self.tvseason_detailed_by_id(provider, id)?.into(),
            WebMediaType::TvEpisode => self.tvepisode_detailed_by_id(provider, id)?.into(),
            WebMediaType::File => self.filesystem_file_basic_by_id(provider, id)?.into(),
            WebMediaType::Folder => self.filesystem_folder_basic_by_id(provider, id)?.into(),
        };
        Ok(item)
    }
}

/// Wrap a backend failure with the kind and provider it came from.
pub(crate) fn backend(kind: CapabilityKind, provider: ProviderId) -> impl FnOnce(anyhow::Error) -> Error {
    move |source| Error::backend(kind, provider, source)
}

/// Turn an absent singular lookup into [`Error::EntityNotFound`] and tag a
/// present one.
pub(crate) fn found<T: MediaEntity>(
    entity: &'static str,
    id: &str,
    provider: ProviderId,
    value: Option<T>,
) -> Result<T> {
    let mut value = value.ok_or_else(|| Error::not_found(entity, id))?;
    value.set_provider(provider);
    Ok(value)
}

/// One available library as listed in the service description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendProvider {
    pub id: ProviderId,
    pub name: String,
    pub backend: String,
}

impl From<ProviderDescriptor> for BackendProvider {
    fn from(descriptor: ProviderDescriptor) -> Self {
        Self {
            id: descriptor.id,
            name: descriptor.name,
            backend: descriptor.backend,
        }
    }
}

/// What this service instance offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescription {
    pub movie_api: u32,
    pub tvshow_api: u32,
    pub music_api: u32,
    pub picture_api: u32,
    pub filesystem_api: u32,
    pub service_version: String,
    pub available_movie_libraries: Vec<BackendProvider>,
    pub available_tvshow_libraries: Vec<BackendProvider>,
    pub available_music_libraries: Vec<BackendProvider>,
    pub available_picture_libraries: Vec<BackendProvider>,
    pub available_filesystem_libraries: Vec<BackendProvider>,
}
