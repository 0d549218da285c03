//! Filesystem entities: drives (browse roots), folders, and files.
//!
//! Filesystem backends have no detailed variants; the basic shapes are what
//! the media item envelope carries.

use chrono::{DateTime, Utc};
use mediaaccess_common::{ProviderId, SortBy};
use serde::{Deserialize, Serialize};

use super::{MediaEntity, SortValue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveBasic {
    pub id: String,
    pub title: String,
    pub path: Vec<String>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderBasic {
    pub id: String,
    pub title: String,
    pub path: Vec<String>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileBasic {
    pub id: String,
    pub title: String,
    pub path: Vec<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub provider: Option<ProviderId>,
}

impl MediaEntity for DriveBasic {
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

impl MediaEntity for FolderBasic {
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
            SortBy::DateAdded => SortValue::date(self.date_added),
            _ => SortValue::Missing,
        }
    }
}

impl MediaEntity for FileBasic {
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
            SortBy::DateAdded => SortValue::date(self.date_added),
            _ => SortValue::Missing,
        }
    }
}
