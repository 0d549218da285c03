//! Movie entities.

use chrono::{DateTime, Utc};
use mediaaccess_common::{ProviderId, SortBy};
use serde::{Deserialize, Serialize};

use super::{delegate_to_basic, Category, MediaEntity, SortValue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieBasic {
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
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    /// Content files; multi-part movies have several.
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub cover_paths: Vec<String>,
    #[serde(default)]
    pub backdrop_paths: Vec<String>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetailed {
    #[serde(flatten)]
    pub basic: MovieBasic,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub writers: Vec<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub tmdb_id: Option<String>,
}

impl MediaEntity for MovieBasic {
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
            SortBy::Runtime => SortValue::number(self.runtime),
            SortBy::DateAdded => SortValue::date(self.date_added),
            SortBy::Genre => SortValue::first_text(&self.genres),
            _ => SortValue::Missing,
        }
    }
}

delegate_to_basic!(MovieDetailed => MovieBasic);
