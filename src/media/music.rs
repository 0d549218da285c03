//! Music entities: tracks, albums, and artists.

use chrono::{DateTime, Utc};
use mediaaccess_common::{ProviderId, SortBy};
use serde::{Deserialize, Serialize};

use super::{delegate_to_basic, Category, MediaEntity, SortValue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MusicTrackBasic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub album_id: Option<String>,
    #[serde(default)]
    pub artist_ids: Vec<String>,
    #[serde(default)]
    pub track_number: Option<u32>,
    #[serde(default)]
    pub disc_number: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MusicTrackDetailed {
    #[serde(flatten)]
    pub basic: MusicTrackBasic,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub album_artist: Option<String>,
}

impl MediaEntity for MusicTrackBasic {
    fn id(&self) -> &str {
        &self.id
    }

    fn provider(&self) -> Option<ProviderId> {
        self.provider
    }

    fn set_provider(&mut self, provider: ProviderId) {
        self.provider = Some(provider);
    }

    fn genres(&self) -> &[String] {
        &self.genres
    }

    fn sort_value(&self, sort: SortBy) -> SortValue {
        match sort {
            SortBy::Title => SortValue::text(&self.title),
            SortBy::TrackNumber => SortValue::number(self.track_number),
            SortBy::Year => SortValue::number(self.year),
            SortBy::Runtime => SortValue::number(self.duration),
            SortBy::DateAdded => SortValue::date(self.date_added),
            SortBy::Genre => SortValue::first_text(&self.genres),
            _ => SortValue::Missing,
        }
    }
}

delegate_to_basic!(MusicTrackDetailed => MusicTrackBasic);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MusicAlbumBasic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub album_artist_id: Option<String>,
    #[serde(default)]
    pub album_artist: Option<String>,
    #[serde(default)]
    pub artist_ids: Vec<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub cover_paths: Vec<String>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

impl MediaEntity for MusicAlbumBasic {
    fn id(&self) -> &str {
        &self.id
    }

    fn provider(&self) -> Option<ProviderId> {
        self.provider
    }

    fn set_provider(&mut self, provider: ProviderId) {
        self.provider = Some(provider);
    }

    fn genres(&self) -> &[String] {
        &self.genres
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn sort_value(&self, sort: SortBy) -> SortValue {
        match sort {
            SortBy::Title => SortValue::text(&self.title),
            SortBy::Year => SortValue::number(self.year),
            SortBy::DateAdded => SortValue::date(self.date_added),
            SortBy::Genre => SortValue::first_text(&self.genres),
            _ => SortValue::Missing,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MusicArtistBasic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

impl MediaEntity for MusicArtistBasic {
    fn id(&self) -> &str {
        &self.id
    }

    fn provider(&self) -> Option<ProviderId> {
        self.provider
    }

    fn set_provider(&mut self, provider: ProviderId) {
        self.provider = Some(provider);
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn sort_value(&self, sort: SortBy) -> SortValue {
        match sort {
            SortBy::Title => SortValue::text(&self.title),
            _ => SortValue::Missing,
        }
    }
}
