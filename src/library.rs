//! Backend capability contracts.
//!
//! This module defines the five traits a backend plugin implements, one per
//! [`CapabilityKind`](mediaaccess_common::CapabilityKind), plus the
//! [`MediaLibrary`] base every one of them extends. The core never knows how
//! a backend stores its data; it only consumes the lazy sequences these
//! traits hand out.
//!
//! Backend calls are synchronous and may block on file or database I/O.
//! Failures are reported as `anyhow::Error` and surface unchanged to the
//! caller wrapped in [`Error::Backend`](mediaaccess_common::Error::Backend).

use std::io::Read;

use anyhow::Result;

use crate::media::{
    Category, DriveBasic, FileBasic, FileInfo, FolderBasic, Genre, MediaEntity, MovieBasic,
    MovieDetailed, MusicAlbumBasic, MusicArtistBasic, MusicTrackBasic, MusicTrackDetailed,
    PictureBasic, PictureDetailed, SearchResult, TvEpisodeBasic, TvEpisodeDetailed,
    TvSeasonBasic, TvSeasonDetailed, TvShowBasic, TvShowDetailed,
};

/// A finite, single-pass, lazily produced sequence of entities.
///
/// Backends may hand out non-repeatable generators; consumers must not
/// assume they can iterate twice.
pub type Items<'a, T> = Box<dyn Iterator<Item = T> + Send + 'a>;

/// A readable byte stream for one file.
pub type FileStream = Box<dyn Read + Send>;

/// Wrap any iterator as [`Items`].
pub fn items<'a, I>(iter: I) -> Items<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: Send + 'a,
{
    Box::new(iter.into_iter())
}

fn first_with_id<T: MediaEntity>(mut items: Items<'_, T>, id: &str) -> Option<T> {
    items.find(|item| item.id() == id)
}

// ---------------------------------------------------------------------------
// Base contract
// ---------------------------------------------------------------------------

/// Operations shared by every backend regardless of capability kind.
pub trait MediaLibrary: Send + Sync {
    /// Free-text search over this backend's entities.
    fn search(&self, text: &str) -> Result<Items<'_, SearchResult>>;

    /// Genres known to this backend. Backends without genres keep the default.
    fn genres(&self) -> Result<Items<'_, Genre>> {
        Ok(items(Vec::new()))
    }

    /// Categories known to this backend. Backends without categories keep the
    /// default.
    fn categories(&self) -> Result<Items<'_, Category>> {
        Ok(items(Vec::new()))
    }

    /// Describe the file at `path`. A missing file is `exists == false`, not
    /// an error.
    fn file_info(&self, path: &str) -> Result<FileInfo>;

    /// Open the file at `path` for reading.
    fn open_file(&self, path: &str) -> Result<FileStream>;
}

// ---------------------------------------------------------------------------
// Capability contracts
// ---------------------------------------------------------------------------

pub trait MovieLibrary: MediaLibrary {
    fn movies_basic(&self) -> Result<Items<'_, MovieBasic>>;

    fn movies_detailed(&self) -> Result<Items<'_, MovieDetailed>>;

    fn movie_basic_by_id(&self, id: &str) -> Result<Option<MovieBasic>> {
        Ok(first_with_id(self.movies_basic()?, id))
    }

    fn movie_detailed_by_id(&self, id: &str) -> Result<Option<MovieDetailed>> {
        Ok(first_with_id(self.movies_detailed()?, id))
    }
}

pub trait TvShowLibrary: MediaLibrary {
    fn tvshows_basic(&self) -> Result<Items<'_, TvShowBasic>>;

    fn tvshows_detailed(&self) -> Result<Items<'_, TvShowDetailed>>;

    fn seasons_basic(&self) -> Result<Items<'_, TvSeasonBasic>>;

    fn seasons_detailed(&self) -> Result<Items<'_, TvSeasonDetailed>>;

    fn episodes_basic(&self) -> Result<Items<'_, TvEpisodeBasic>>;

    fn episodes_detailed(&self) -> Result<Items<'_, TvEpisodeDetailed>>;

    fn tvshow_basic_by_id(&self, id: &str) -> Result<Option<TvShowBasic>> {
        Ok(first_with_id(self.tvshows_basic()?, id))
    }

    fn tvshow_detailed_by_id(&self, id: &str) -> Result<Option<TvShowDetailed>> {
        Ok(first_with_id(self.tvshows_detailed()?, id))
    }

    fn season_basic_by_id(&self, id: &str) -> Result<Option<TvSeasonBasic>> {
        Ok(first_with_id(self.seasons_basic()?, id))
    }

    fn season_detailed_by_id(&self, id: &str) -> Result<Option<TvSeasonDetailed>> {
        Ok(first_with_id(self.seasons_detailed()?, id))
    }

    fn episode_basic_by_id(&self, id: &str) -> Result<Option<TvEpisodeBasic>> {
        Ok(first_with_id(self.episodes_basic()?, id))
    }

    fn episode_detailed_by_id(&self, id: &str) -> Result<Option<TvEpisodeDetailed>> {
        Ok(first_with_id(self.episodes_detailed()?, id))
    }
}

pub trait MusicLibrary: MediaLibrary {
    fn tracks_basic(&self) -> Result<Items<'_, MusicTrackBasic>>;

    fn tracks_detailed(&self) -> Result<Items<'_, MusicTrackDetailed>>;

    fn albums_basic(&self) -> Result<Items<'_, MusicAlbumBasic>>;

    fn artists_basic(&self) -> Result<Items<'_, MusicArtistBasic>>;

    fn track_basic_by_id(&self, id: &str) -> Result<Option<MusicTrackBasic>> {
        Ok(first_with_id(self.tracks_basic()?, id))
    }

    fn track_detailed_by_id(&self, id: &str) -> Result<Option<MusicTrackDetailed>> {
        Ok(first_with_id(self.tracks_detailed()?, id))
    }

    fn album_basic_by_id(&self, id: &str) -> Result<Option<MusicAlbumBasic>> {
        Ok(first_with_id(self.albums_basic()?, id))
    }

    fn artist_basic_by_id(&self, id: &str) -> Result<Option<MusicArtistBasic>> {
        Ok(first_with_id(self.artists_basic()?, id))
    }
}

pub trait PictureLibrary: MediaLibrary {
    fn pictures_basic(&self) -> Result<Items<'_, PictureBasic>>;

    fn pictures_detailed(&self) -> Result<Items<'_, PictureDetailed>>;

    fn picture_basic_by_id(&self, id: &str) -> Result<Option<PictureBasic>> {
        Ok(first_with_id(self.pictures_basic()?, id))
    }

    fn picture_detailed_by_id(&self, id: &str) -> Result<Option<PictureDetailed>> {
        Ok(first_with_id(self.pictures_detailed()?, id))
    }

    fn pictures_basic_by_category(&self, category: &str) -> Result<Items<'_, PictureBasic>> {
        let category = category.to_string();
        Ok(Box::new(self.pictures_basic()?.filter(move |p| {
            p.categories.iter().any(|c| c.id == category)
        })))
    }

    fn pictures_detailed_by_category(&self, category: &str) -> Result<Items<'_, PictureDetailed>> {
        let category = category.to_string();
        Ok(Box::new(self.pictures_detailed()?.filter(move |p| {
            p.basic.categories.iter().any(|c| c.id == category)
        })))
    }
}

pub trait FileSystemLibrary: MediaLibrary {
    /// Browse roots exposed by this backend.
    fn drives(&self) -> Result<Items<'_, DriveBasic>>;

    /// Sub-folders of the drive or folder with the given id.
    fn folders_listing(&self, id: &str) -> Result<Items<'_, FolderBasic>>;

    /// Files directly inside the drive or folder with the given id.
    fn files_listing(&self, id: &str) -> Result<Items<'_, FileBasic>>;

    fn file_basic_by_id(&self, id: &str) -> Result<Option<FileBasic>>;

    fn folder_basic_by_id(&self, id: &str) -> Result<Option<FolderBasic>>;
}
