//! JSON catalog backend.
//!
//! A catalog is a single JSON document listing movies, TV shows with their
//! seasons and episodes, and music tracks, albums, and artists in their
//! detailed shape. The file is read once when the backend is constructed;
//! afterwards the backend only hands out clones.
//!
//! One catalog file can back several providers. Each registration gets its
//! own [`CatalogLibrary`] scoped to one capability kind, so a movie provider
//! never returns music from [`MediaLibrary::search`].

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use mediaaccess_common::{CapabilityKind, WebMediaType};
use serde::{Deserialize, Serialize};

use super::local;
use crate::library::{
    items, FileStream, Items, MediaLibrary, MovieLibrary, MusicLibrary, TvShowLibrary,
};
use crate::media::{
    Category, FileInfo, Genre, MediaEntity, MovieBasic, MovieDetailed, MusicAlbumBasic,
    MusicArtistBasic, MusicTrackBasic, MusicTrackDetailed, SearchResult, TvEpisodeBasic,
    TvEpisodeDetailed, TvSeasonBasic, TvSeasonDetailed, TvShowBasic, TvShowDetailed,
};

/// On-disk catalog document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub movies: Vec<MovieDetailed>,
    #[serde(default)]
    pub tvshows: Vec<TvShowDetailed>,
    #[serde(default)]
    pub seasons: Vec<TvSeasonDetailed>,
    #[serde(default)]
    pub episodes: Vec<TvEpisodeDetailed>,
    #[serde(default)]
    pub tracks: Vec<MusicTrackDetailed>,
    #[serde(default)]
    pub albums: Vec<MusicAlbumBasic>,
    #[serde(default)]
    pub artists: Vec<MusicArtistBasic>,
}

impl Catalog {
    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))
    }
}

/// A [`Catalog`] served as one capability kind.
#[derive(Debug, Clone)]
pub struct CatalogLibrary {
    catalog: Catalog,
    scope: CapabilityKind,
}

impl CatalogLibrary {
    pub fn new(catalog: Catalog, scope: CapabilityKind) -> Self {
        Self { catalog, scope }
    }

    pub fn load(path: &Path, scope: CapabilityKind) -> Result<Self> {
        Ok(Self::new(Catalog::load(path)?, scope))
    }

    pub fn scope(&self) -> CapabilityKind {
        self.scope
    }

    fn search_results(&self) -> Vec<SearchResult> {
        fn hits<'c, T: MediaEntity + 'c>(
            media_type: WebMediaType,
            entities: impl IntoIterator<Item = (&'c T, &'c str)>,
        ) -> Vec<SearchResult> {
            entities
                .into_iter()
                .map(|(e, title)| SearchResult::new(media_type, e.id(), title))
                .collect()
        }

        let c = &self.catalog;
        match self.scope {
            CapabilityKind::Movie => hits(
                WebMediaType::Movie,
                c.movies.iter().map(|m| (m, m.basic.title.as_str())),
            ),
            CapabilityKind::TvShow => {
                let mut out = hits(
                    WebMediaType::TvShow,
                    c.tvshows.iter().map(|s| (s, s.basic.title.as_str())),
                );
                out.extend(hits(
                    WebMediaType::TvEpisode,
                    c.episodes.iter().map(|e| (e, e.basic.title.as_str())),
                ));
                out
            }
            CapabilityKind::Music => {
                let mut out = hits(
                    WebMediaType::MusicTrack,
                    c.tracks.iter().map(|t| (t, t.basic.title.as_str())),
                );
                out.extend(hits(
                    WebMediaType::MusicAlbum,
                    c.albums.iter().map(|a| (a, a.title.as_str())),
                ));
                out.extend(hits(
                    WebMediaType::MusicArtist,
                    c.artists.iter().map(|a| (a, a.title.as_str())),
                ));
                out
            }
            CapabilityKind::Picture | CapabilityKind::FileSystem => Vec::new(),
        }
    }

    fn scoped_genres(&self) -> BTreeSet<&str> {
        let c = &self.catalog;
        let genres: Box<dyn Iterator<Item = &String> + '_> = match self.scope {
            CapabilityKind::Movie => Box::new(c.movies.iter().flat_map(|m| m.genres())),
            CapabilityKind::TvShow => Box::new(c.tvshows.iter().flat_map(|s| s.genres())),
            CapabilityKind::Music => Box::new(
                c.tracks
                    .iter()
                    .flat_map(|t| t.genres())
                    .chain(c.albums.iter().flat_map(|a| a.genres())),
            ),
            CapabilityKind::Picture | CapabilityKind::FileSystem => Box::new(std::iter::empty()),
        };
        genres.map(String::as_str).collect()
    }

    fn scoped_categories(&self) -> Vec<Category> {
        let c = &self.catalog;
        let all: Box<dyn Iterator<Item = &Category> + '_> = match self.scope {
            CapabilityKind::Movie => Box::new(c.movies.iter().flat_map(|m| m.categories())),
            CapabilityKind::TvShow => Box::new(c.tvshows.iter().flat_map(|s| s.categories())),
            CapabilityKind::Music => Box::new(
                c.albums
                    .iter()
                    .flat_map(|a| a.categories())
                    .chain(c.artists.iter().flat_map(|a| a.categories())),
            ),
            CapabilityKind::Picture | CapabilityKind::FileSystem => Box::new(std::iter::empty()),
        };

        let mut seen = BTreeSet::new();
        all.filter(|cat| seen.insert(cat.id.clone()))
            .cloned()
            .collect()
    }
}

impl MediaLibrary for CatalogLibrary {
    /// Case-insensitive substring match on titles within this library's scope.
    fn search(&self, text: &str) -> Result<Items<'_, SearchResult>> {
        let needle = text.to_lowercase();
        Ok(items(
            self.search_results()
                .into_iter()
                .filter(move |r| r.title.to_lowercase().contains(&needle)),
        ))
    }

    fn genres(&self) -> Result<Items<'_, Genre>> {
        Ok(items(self.scoped_genres().into_iter().map(Genre::new)))
    }

    fn categories(&self) -> Result<Items<'_, Category>> {
        Ok(items(self.scoped_categories()))
    }

    fn file_info(&self, path: &str) -> Result<FileInfo> {
        local::file_info(path)
    }

    fn open_file(&self, path: &str) -> Result<FileStream> {
        local::open_file(path)
    }
}

impl MovieLibrary for CatalogLibrary {
    fn movies_basic(&self) -> Result<Items<'_, MovieBasic>> {
        Ok(items(self.catalog.movies.iter().map(|m| m.basic.clone())))
    }

    fn movies_detailed(&self) -> Result<Items<'_, MovieDetailed>> {
        Ok(items(self.catalog.movies.iter().cloned()))
    }
}

impl TvShowLibrary for CatalogLibrary {
    fn tvshows_basic(&self) -> Result<Items<'_, TvShowBasic>> {
        Ok(items(self.catalog.tvshows.iter().map(|s| s.basic.clone())))
    }

    fn tvshows_detailed(&self) -> Result<Items<'_, TvShowDetailed>> {
        Ok(items(self.catalog.tvshows.iter().cloned()))
    }

    fn seasons_basic(&self) -> Result<Items<'_, TvSeasonBasic>> {
        Ok(items(self.catalog.seasons.iter().map(|s| s.basic.clone())))
    }

    fn seasons_detailed(&self) -> Result<Items<'_, TvSeasonDetailed>> {
        Ok(items(self.catalog.seasons.iter().cloned()))
    }

    fn episodes_basic(&self) -> Result<Items<'_, TvEpisodeBasic>> {
        Ok(items(self.catalog.episodes.iter().map(|e| e.basic.clone())))
    }

    fn episodes_detailed(&self) -> Result<Items<'_, TvEpisodeDetailed>> {
        Ok(items(self.catalog.episodes.iter().cloned()))
    }
}

impl MusicLibrary for CatalogLibrary {
    fn tracks_basic(&self) -> Result<Items<'_, MusicTrackBasic>> {
        Ok(items(self.catalog.tracks.iter().map(|t| t.basic.clone())))
    }

    fn tracks_detailed(&self) -> Result<Items<'_, MusicTrackDetailed>> {
        Ok(items(self.catalog.tracks.iter().cloned()))
    }

    fn albums_basic(&self) -> Result<Items<'_, MusicAlbumBasic>> {
        Ok(items(self.catalog.albums.iter().cloned()))
    }

    fn artists_basic(&self) -> Result<Items<'_, MusicArtistBasic>> {
        Ok(items(self.catalog.artists.iter().cloned()))
    }
}
