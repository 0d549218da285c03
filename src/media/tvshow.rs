//! TV show, season, and episode entities.
//!
//! Seasons and episodes point back at their show (and episodes at their
//! season) by backend-scoped id, which is what the relationship queries
//! filter on.

use chrono::{DateTime, NaiveDate, Utc};
use mediaaccess_common::{ProviderId, SortBy};
use serde::{Deserialize, Serialize};

use super::{delegate_to_basic, Category, MediaEntity, SortValue};

// ---------------------------------------------------------------------------
// Shows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TvShowBasic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub episode_count: u32,
    #[serde(default)]
    pub season_count: u32,
    #[serde(default)]
    pub banner_paths: Vec<String>,
    #[serde(default)]
    pub backdrop_paths: Vec<String>,
    #[serde(default)]
    pub poster_paths: Vec<String>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TvShowDetailed {
    #[serde(flatten)]
    pub basic: TvShowBasic,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub content_rating: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub tvdb_id: Option<String>,
}

impl MediaEntity for TvShowBasic {
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
            SortBy::Rating => SortValue::number(self.rating),
            SortBy::DateAdded => SortValue::date(self.date_added),
            SortBy::Genre => SortValue::first_text(&self.genres),
            _ => SortValue::Missing,
        }
    }
}

// ---------------------------------------------------------------------------
// Seasons
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TvSeasonBasic {
    pub id: String,
    pub show_id: String,
    pub title: String,
    pub season_number: u32,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub episode_count: u32,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub banner_paths: Vec<String>,
    #[serde(default)]
    pub backdrop_paths: Vec<String>,
    #[serde(default)]
    pub poster_paths: Vec<String>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TvSeasonDetailed {
    #[serde(flatten)]
    pub basic: TvSeasonBasic,
    #[serde(default)]
    pub summary: Option<String>,
}

impl MediaEntity for TvSeasonBasic {
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
            SortBy::SeasonNumber => SortValue::number(Some(self.season_number)),
            SortBy::Year => SortValue::number(self.year),
            SortBy::DateAdded => SortValue::date(self.date_added),
            _ => SortValue::Missing,
        }
    }
}

// ---------------------------------------------------------------------------
// Episodes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TvEpisodeBasic {
    pub id: String,
    pub show_id: String,
    pub season_id: String,
    pub title: String,
    pub season_number: u32,
    pub episode_number: u32,
    #[serde(default)]
    pub first_aired: Option<NaiveDate>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub banner_paths: Vec<String>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TvEpisodeDetailed {
    #[serde(flatten)]
    pub basic: TvEpisodeBasic,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub writers: Vec<String>,
    #[serde(default)]
    pub guest_stars: Vec<String>,
}

impl MediaEntity for TvEpisodeBasic {
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
            SortBy::SeasonNumber => SortValue::number(Some(self.season_number)),
            SortBy::EpisodeNumber => SortValue::number(Some(self.episode_number)),
            SortBy::Rating => SortValue::number(self.rating),
            SortBy::DateAdded => SortValue::date(self.date_added),
            SortBy::DateAired => SortValue::date(
                self.first_aired
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|dt| dt.and_utc()),
            ),
            _ => SortValue::Missing,
        }
    }
}

delegate_to_basic!(
    TvShowDetailed => TvShowBasic,
    TvSeasonDetailed => TvSeasonBasic,
    TvEpisodeDetailed => TvEpisodeBasic,
);
