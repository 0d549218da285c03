//! The type-erased media item envelope.
//!
//! [`MediaItem`] lets heterogeneous results travel through one channel at the
//! outermost service boundary. Wrapping is lossless: each variant holds the
//! richest entity shape its domain has.

use mediaaccess_common::{ProviderId, WebMediaType};
use serde::{Deserialize, Serialize};

use super::{
    FileBasic, FolderBasic, MediaEntity, MovieDetailed, MusicAlbumBasic, MusicArtistBasic,
    MusicTrackDetailed, PictureDetailed, TvEpisodeDetailed, TvSeasonDetailed, TvShowDetailed,
};

/// One entity of any media type, tagged with its [`WebMediaType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaItem {
    Movie(MovieDetailed),
    MusicTrack(MusicTrackDetailed),
    Picture(PictureDetailed),
    TvEpisode(TvEpisodeDetailed),
    File(FileBasic),
    MusicArtist(MusicArtistBasic),
    MusicAlbum(MusicAlbumBasic),
    TvShow(TvShowDetailed),
    TvSeason(TvSeasonDetailed),
    Folder(FolderBasic),
}

impl MediaItem {
    /// The discriminant of the wrapped entity.
    pub fn media_type(&self) -> WebMediaType {
        match self {
            Self::Movie(_) => WebMediaType::Movie,
            Self::MusicTrack(_) => WebMediaType::MusicTrack,
            Self::Picture(_) => WebMediaType::Picture,
            Self::TvEpisode(_) => WebMediaType::TvEpisode,
            Self::File(_) => WebMediaType::File,
            Self::MusicArtist(_) => WebMediaType::MusicArtist,
            Self::MusicAlbum(_) => WebMediaType::MusicAlbum,
            Self::TvShow(_) => WebMediaType::TvShow,
            Self::TvSeason(_) => WebMediaType::TvSeason,
            Self::Folder(_) => WebMediaType::Folder,
        }
    }

    fn entity(&self) -> &dyn MediaEntity {
        match self {
            Self::Movie(e) => e,
            Self::MusicTrack(e) => e,
            Self::Picture(e) => e,
            Self::TvEpisode(e) => e,
            Self::File(e) => e,
            Self::MusicArtist(e) => e,
            Self::MusicAlbum(e) => e,
            Self::TvShow(e) => e,
            Self::TvSeason(e) => e,
            Self::Folder(e) => e,
        }
    }

    pub fn id(&self) -> &str {
        self.entity().id()
    }

    pub fn provider(&self) -> Option<ProviderId> {
        self.entity().provider()
    }
}

macro_rules! impl_from_entity {
    ($($entity:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$entity> for MediaItem {
                fn from(entity: $entity) -> Self {
                    Self::$variant(entity)
                }
            }
        )+
    };
}

impl_from_entity!(
    MovieDetailed => Movie,
    MusicTrackDetailed => MusicTrack,
    PictureDetailed => Picture,
    TvEpisodeDetailed => TvEpisode,
    FileBasic => File,
    MusicArtistBasic => MusicArtist,
    MusicAlbumBasic => MusicAlbum,
    TvShowDetailed => TvShow,
    TvSeasonDetailed => TvSeason,
    FolderBasic => Folder,
);
