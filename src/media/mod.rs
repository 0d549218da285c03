//! Media entities and the shape contract shared by all of them.
//!
//! Every domain has a Basic and (usually) a Detailed entity. Detailed entities
//! embed their Basic counterpart as `basic` and flatten it on the wire, so a
//! detailed value always carries every basic field. The query pipeline only
//! talks to entities through [`MediaEntity`], which is what lets one filter /
//! sort / paginate implementation serve both shapes of all five domains.
//!
//! # Module layout
//!
//! - [`movie`], [`tvshow`], [`music`], [`picture`], [`filesystem`] -- Domain entities.
//! - [`item`] -- The type-erased [`MediaItem`] envelope.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use mediaaccess_common::{ProviderId, SortBy, WebMediaType};
use serde::{Deserialize, Serialize};

pub mod filesystem;
pub mod item;
pub mod movie;
pub mod music;
pub mod picture;
pub mod tvshow;

pub use filesystem::{DriveBasic, FileBasic, FolderBasic};
pub use item::MediaItem;
pub use movie::{MovieBasic, MovieDetailed};
pub use music::{MusicAlbumBasic, MusicArtistBasic, MusicTrackBasic, MusicTrackDetailed};
pub use picture::{PictureBasic, PictureDetailed};
pub use tvshow::{
    TvEpisodeBasic, TvEpisodeDetailed, TvSeasonBasic, TvSeasonDetailed, TvShowBasic,
    TvShowDetailed,
};

// ---------------------------------------------------------------------------
// Entity contract
// ---------------------------------------------------------------------------

/// The fields the query pipeline needs from any entity.
///
/// Entities never know their own provider: backends leave it unset and the
/// dispatch facade fills it in with [`MediaEntity::set_provider`].
pub trait MediaEntity {
    /// Backend-scoped identifier.
    fn id(&self) -> &str;

    /// Provider that produced this entity, once tagged.
    fn provider(&self) -> Option<ProviderId>;

    /// Tag this entity with the provider that produced it.
    fn set_provider(&mut self, provider: ProviderId);

    /// Genre names, for entities that have them.
    fn genres(&self) -> &[String] {
        &[]
    }

    /// Categories, for entities that have them.
    fn categories(&self) -> &[Category] {
        &[]
    }

    /// Value of the given sort key, or [`SortValue::Missing`] when this
    /// entity has no such field.
    fn sort_value(&self, sort: SortBy) -> SortValue;
}

/// Implements [`MediaEntity`] for a detailed entity by forwarding to its
/// embedded `basic`, and `From<Detailed> for Basic`.
macro_rules! delegate_to_basic {
    ($($detailed:ty => $basic:ty),+ $(,)?) => {
        $(
            impl $crate::media::MediaEntity for $detailed {
                fn id(&self) -> &str {
                    $crate::media::MediaEntity::id(&self.basic)
                }

                fn provider(&self) -> Option<mediaaccess_common::ProviderId> {
                    $crate::media::MediaEntity::provider(&self.basic)
                }

                fn set_provider(&mut self, provider: mediaaccess_common::ProviderId) {
                    $crate::media::MediaEntity::set_provider(&mut self.basic, provider);
                }

                fn genres(&self) -> &[String] {
                    $crate::media::MediaEntity::genres(&self.basic)
                }

                fn categories(&self) -> &[$crate::media::Category] {
                    $crate::media::MediaEntity::categories(&self.basic)
                }

                fn sort_value(&self, sort: mediaaccess_common::SortBy) -> $crate::media::SortValue {
                    $crate::media::MediaEntity::sort_value(&self.basic, sort)
                }
            }

            impl From<$detailed> for $basic {
                fn from(detailed: $detailed) -> Self {
                    detailed.basic
                }
            }
        )+
    };
}

pub(crate) use delegate_to_basic;

// ---------------------------------------------------------------------------
// Sort values
// ---------------------------------------------------------------------------

/// A single comparable sort key extracted from an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// The entity has no value for this key.
    Missing,
    Number(f64),
    /// Text key, already lowercased.
    Text(String),
    Date(DateTime<Utc>),
}

impl SortValue {
    /// Total order used by the sort stage: missing values first, text compared
    /// case-insensitively, numbers by IEEE total order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Missing, Self::Missing) => Ordering::Equal,
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
            Self::Date(_) => 3,
        }
    }

    pub(crate) fn text(value: &str) -> Self {
        Self::Text(value.to_lowercase())
    }

    pub(crate) fn first_text(values: &[String]) -> Self {
        values.first().map_or(Self::Missing, |v| Self::text(v))
    }

    pub(crate) fn number<N: Into<f64>>(value: Option<N>) -> Self {
        value.map_or(Self::Missing, |v| Self::Number(v.into()))
    }

    pub(crate) fn date(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Self::Missing, Self::Date)
    }
}

// ---------------------------------------------------------------------------
// Shared small shapes
// ---------------------------------------------------------------------------

/// A genre name as reported by one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider: None,
        }
    }
}

/// A backend-defined grouping (collection, picture folder, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Backend-scoped identifier; category filters compare against this.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            provider: None,
        }
    }
}

/// The minimal shape every backend can produce for free-text search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub media_type: WebMediaType,
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

impl SearchResult {
    pub fn new(media_type: WebMediaType, id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            media_type,
            id: id.into(),
            title: title.into(),
            provider: None,
        }
    }
}

/// Result of the count operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCount {
    pub count: usize,
}

/// Metadata about one resolved file, produced by the owning backend.
///
/// `exists == false` is a normal answer, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub exists: bool,
    pub is_local_file: bool,
    pub is_read_only: bool,
    pub name: Option<String>,
    pub path: Option<String>,
    pub extension: Option<String>,
    pub size: u64,
    pub last_modified: Option<DateTime<Utc>>,
    pub last_access: Option<DateTime<Utc>>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

impl FileInfo {
    /// The descriptor returned whenever a file cannot be found.
    pub fn not_found() -> Self {
        Self::default()
    }
}

// Small categories and genres travel through the pipeline's tagging stage too.
impl MediaEntity for Genre {
    fn id(&self) -> &str {
        &self.name
    }

    fn provider(&self) -> Option<ProviderId> {
        self.provider
    }

    fn set_provider(&mut self, provider: ProviderId) {
        self.provider = Some(provider);
    }

    fn sort_value(&self, sort: SortBy) -> SortValue {
        match sort {
            SortBy::Title | SortBy::Genre => SortValue::text(&self.name),
            _ => SortValue::Missing,
        }
    }
}

impl MediaEntity for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn provider(&self) -> Option<ProviderId> {
        self.provider
    }

    fn set_provider(&mut self, provider: ProviderId) {
        self.provider = Some(provider);
    }

    fn sort_value(&self, sort: SortBy) -> SortValue {
        match sort {
            SortBy::Title => SortValue::text(&self.title),
            _ => SortValue::Missing,
        }
    }
}

impl MediaEntity for SearchResult {
    fn id(&self) -> &str {
        &self.id
    }

    fn provider(&self) -> Option<ProviderId> {
        self.provider
    }

    fn set_provider(&mut self, provider: ProviderId) {
        self.provider = Some(provider);
    }

    fn sort_value(&self, sort: SortBy) -> SortValue {
        match sort {
            SortBy::Title => SortValue::text(&self.title),
            _ => SortValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sorts_before_values() {
        assert_eq!(
            SortValue::Missing.compare(&SortValue::Number(0.0)),
            Ordering::Less
        );
        assert_eq!(
            SortValue::text("a").compare(&SortValue::Missing),
            Ordering::Greater
        );
        assert_eq!(SortValue::Missing.compare(&SortValue::Missing), Ordering::Equal);
    }

    #[test]
    fn text_compares_case_insensitively() {
        assert_eq!(
            SortValue::text("alien").compare(&SortValue::text("Brazil")),
            Ordering::Less
        );
        assert_eq!(
            SortValue::text("Heat").compare(&SortValue::text("heat")),
            Ordering::Equal
        );
    }

    #[test]
    fn text_key_is_lowercased_when_built() {
        assert_eq!(SortValue::text("The Wire"), SortValue::Text("the wire".into()));
        assert_eq!(
            SortValue::first_text(&["Sci-Fi".to_string()]),
            SortValue::Text("sci-fi".into())
        );
    }

    #[test]
    fn numbers_use_total_order() {
        assert_eq!(
            SortValue::Number(7.5).compare(&SortValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            SortValue::number(Some(2000)).compare(&SortValue::number::<i32>(None)),
            Ordering::Greater
        );
    }

    #[test]
    fn file_info_not_found_is_default() {
        let info = FileInfo::not_found();
        assert!(!info.exists);
        assert!(!info.is_local_file);
        assert_eq!(info.size, 0);
        assert!(info.provider.is_none());
    }

    #[test]
    fn search_result_serializes_type_field() {
        let result = SearchResult::new(WebMediaType::Movie, "m1", "Alien");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "movie");
        assert_eq!(json["title"], "Alien");
    }
}
