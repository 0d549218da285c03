//! Core type definitions for capability kinds, media types, and sorting.
//!
//! All enums are closed sets. They serialize in lowercase and parse from the
//! same lowercase spelling so they can travel in URLs and config files.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// One of the five domains a backend can implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityKind {
    /// Movie libraries.
    Movie,
    /// TV show libraries (shows, seasons, episodes).
    TvShow,
    /// Music libraries (tracks, albums, artists).
    Music,
    /// Picture libraries.
    Picture,
    /// Generic filesystem browsing.
    FileSystem,
}

impl CapabilityKind {
    /// Every capability kind, in service description order.
    pub const ALL: [CapabilityKind; 5] = [
        Self::Movie,
        Self::TvShow,
        Self::Music,
        Self::Picture,
        Self::FileSystem,
    ];
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::TvShow => write!(f, "tvshow"),
            Self::Music => write!(f, "music"),
            Self::Picture => write!(f, "picture"),
            Self::FileSystem => write!(f, "filesystem"),
        }
    }
}

impl std::str::FromStr for CapabilityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "tvshow" => Ok(Self::TvShow),
            "music" => Ok(Self::Music),
            "picture" => Ok(Self::Picture),
            "filesystem" => Ok(Self::FileSystem),
            _ => Err(Error::Config(format!("Unknown capability kind: {}", s))),
        }
    }
}

/// Discriminant of every entity shape that can cross the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebMediaType {
    Movie,
    MusicTrack,
    Picture,
    TvEpisode,
    File,
    MusicArtist,
    MusicAlbum,
    TvShow,
    TvSeason,
    Folder,
}

impl WebMediaType {
    /// All media types.
    pub const ALL: [WebMediaType; 10] = [
        Self::Movie,
        Self::MusicTrack,
        Self::Picture,
        Self::TvEpisode,
        Self::File,
        Self::MusicArtist,
        Self::MusicAlbum,
        Self::TvShow,
        Self::TvSeason,
        Self::Folder,
    ];

    /// The capability kind whose backends own entities of this type.
    pub fn capability(self) -> CapabilityKind {
        match self {
            Self::Movie => CapabilityKind::Movie,
            Self::TvShow | Self::TvSeason | Self::TvEpisode => CapabilityKind::TvShow,
            Self::MusicTrack | Self::MusicAlbum | Self::MusicArtist => CapabilityKind::Music,
            Self::Picture => CapabilityKind::Picture,
            Self::File | Self::Folder => CapabilityKind::FileSystem,
        }
    }
}

impl fmt::Display for WebMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::MusicTrack => write!(f, "musictrack"),
            Self::Picture => write!(f, "picture"),
            Self::TvEpisode => write!(f, "tvepisode"),
            Self::File => write!(f, "file"),
            Self::MusicArtist => write!(f, "musicartist"),
            Self::MusicAlbum => write!(f, "musicalbum"),
            Self::TvShow => write!(f, "tvshow"),
            Self::TvSeason => write!(f, "tvseason"),
            Self::Folder => write!(f, "folder"),
        }
    }
}

impl std::str::FromStr for WebMediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.to_string() == s)
            .ok_or_else(|| Error::InvalidMediaType(s.to_string()))
    }
}

/// Purpose of a path within an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    /// The media file itself (video, audio track, picture, plain file).
    Content,
    /// Background / fanart images.
    Backdrop,
    /// Wide banner images.
    Banner,
    /// Portrait poster images.
    Poster,
    /// Cover art.
    Cover,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content => write!(f, "content"),
            Self::Backdrop => write!(f, "backdrop"),
            Self::Banner => write!(f, "banner"),
            Self::Poster => write!(f, "poster"),
            Self::Cover => write!(f, "cover"),
        }
    }
}

impl std::str::FromStr for FileRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(Self::Content),
            "backdrop" => Ok(Self::Backdrop),
            "banner" => Ok(Self::Banner),
            "poster" => Ok(Self::Poster),
            "cover" => Ok(Self::Cover),
            _ => Err(Error::InvalidMediaType(format!("Invalid file role: {}", s))),
        }
    }
}

/// Sort key for list operations. Each domain supports a subset; entities
/// without the requested field sort as if the key were missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Title,
    DateAdded,
    Year,
    Genre,
    Rating,
    Runtime,
    TrackNumber,
    SeasonNumber,
    EpisodeNumber,
    DateAired,
    DateTaken,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Asc,
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_serialization() {
        let json = serde_json::to_string(&WebMediaType::TvEpisode).unwrap();
        assert_eq!(json, r#""tvepisode""#);

        let mt: WebMediaType = serde_json::from_str(r#""musicalbum""#).unwrap();
        assert_eq!(mt, WebMediaType::MusicAlbum);
    }

    #[test]
    fn test_media_type_display_matches_serde() {
        for mt in WebMediaType::ALL {
            let json = serde_json::to_string(&mt).unwrap();
            assert_eq!(json, format!("\"{}\"", mt));
        }
    }

    #[test]
    fn test_media_type_parse() {
        assert_eq!("tvseason".parse::<WebMediaType>().unwrap(), WebMediaType::TvSeason);
        let err = "podcast".parse::<WebMediaType>().unwrap_err();
        assert!(matches!(err, Error::InvalidMediaType(_)));
    }

    #[test]
    fn test_media_type_capability() {
        assert_eq!(WebMediaType::Movie.capability(), CapabilityKind::Movie);
        assert_eq!(WebMediaType::TvEpisode.capability(), CapabilityKind::TvShow);
        assert_eq!(WebMediaType::MusicArtist.capability(), CapabilityKind::Music);
        assert_eq!(WebMediaType::Picture.capability(), CapabilityKind::Picture);
        assert_eq!(WebMediaType::Folder.capability(), CapabilityKind::FileSystem);
    }

    #[test]
    fn test_capability_kind_round_trip() {
        for kind in CapabilityKind::ALL {
            assert_eq!(kind.to_string().parse::<CapabilityKind>().unwrap(), kind);
        }
        assert!("radio".parse::<CapabilityKind>().is_err());
    }

    #[test]
    fn test_file_role_parse() {
        assert_eq!("backdrop".parse::<FileRole>().unwrap(), FileRole::Backdrop);
        assert_eq!(FileRole::Cover.to_string(), "cover");
        assert!("thumb".parse::<FileRole>().is_err());
    }

    #[test]
    fn test_sort_defaults() {
        assert_eq!(SortBy::default(), SortBy::Title);
        assert_eq!(OrderBy::default(), OrderBy::Asc);

        let sort: SortBy = serde_json::from_str(r#""dateadded""#).unwrap();
        assert_eq!(sort, SortBy::DateAdded);
    }
}
