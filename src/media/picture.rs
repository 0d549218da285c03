//! Picture entities.

use chrono::{DateTime, Utc};
use mediaaccess_common::{ProviderId, SortBy};
use serde::{Deserialize, Serialize};

use super::{delegate_to_basic, Category, MediaEntity, SortValue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PictureBasic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub date_taken: Option<DateTime<Utc>>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PictureDetailed {
    #[serde(flatten)]
    pub basic: PictureBasic,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub camera: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl MediaEntity for PictureBasic {
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
            SortBy::DateTaken => SortValue::date(self.date_taken),
            SortBy::DateAdded => SortValue::date(self.date_added),
            _ => SortValue::Missing,
        }
    }
}

delegate_to_basic!(PictureDetailed => PictureBasic);
