//! File resolution: from (media type, file role, entity id, offset) to a
//! concrete file owned by some backend.
//!
//! A [`PathTable`] maps each supported (media type, role) pair to a rule that
//! looks the entity up through the [`MediaService`] and returns the list of
//! paths it carries for that role (the movie file itself, its backdrops, a
//! show's banners, and so on). The offset then picks one path, and the
//! owning backend describes or opens it.
//!
//! Lookups that fail for any reason end up as a not-found [`FileInfo`], never
//! as an error: clients probe for artwork that often does not exist.

use std::collections::HashMap;

use mediaaccess_common::{Error, FileRole, ProviderId, Result, WebMediaType};

use crate::library::FileStream;
use crate::media::FileInfo;
use crate::service::{backend, MediaService};

/// Produces the paths an entity carries for one file role.
pub type PathRule = fn(&MediaService, ProviderId, &str) -> Result<Vec<String>>;

type RuleKey = (WebMediaType, FileRole);

/// Lookup table from (media type, file role) to a [`PathRule`].
pub struct PathTable {
    rules: HashMap<RuleKey, PathRule>,
}

impl PathTable {
    /// Build a table from explicit rules. A key that appears twice is
    /// rejected.
    pub fn new(entries: impl IntoIterator<Item = (RuleKey, PathRule)>) -> Result<Self> {
        let mut rules = HashMap::new();
        for ((media_type, role), rule) in entries {
            if rules.insert((media_type, role), rule).is_some() {
                return Err(Error::config(format!(
                    "Duplicate path rule for {media_type} / {role}"
                )));
            }
        }
        Ok(Self { rules })
    }

    /// The fifteen rules every deployment serves.
    pub fn standard() -> Result<Self> {
        Self::new(standard_rules())
    }

    pub fn get(&self, media_type: WebMediaType, role: FileRole) -> Option<PathRule> {
        self.rules.get(&(media_type, role)).copied()
    }

    pub fn contains(&self, media_type: WebMediaType, role: FileRole) -> bool {
        self.rules.contains_key(&(media_type, role))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn standard_rules() -> [(RuleKey, PathRule); 15] {
    use FileRole::*;
    use WebMediaType as M;

    [
        ((M::File, Content), |s, p, id| {
            Ok(s.filesystem_file_basic_by_id(p, id)?.path)
        }),
        ((M::Movie, Content), |s, p, id| {
            Ok(s.movie_detailed_by_id(p, id)?.basic.path)
        }),
        ((M::Movie, Backdrop), |s, p, id| {
            Ok(s.movie_detailed_by_id(p, id)?.basic.backdrop_paths)
        }),
        ((M::Movie, Cover), |s, p, id| {
            Ok(s.movie_detailed_by_id(p, id)?.basic.cover_paths)
        }),
        ((M::TvShow, Banner), |s, p, id| {
            Ok(s.tvshow_detailed_by_id(p, id)?.basic.banner_paths)
        }),
        ((M::TvShow, Backdrop), |s, p, id| {
            Ok(s.tvshow_detailed_by_id(p, id)?.basic.backdrop_paths)
        }),
        ((M::TvShow, Poster), |s, p, id| {
            Ok(s.tvshow_detailed_by_id(p, id)?.basic.poster_paths)
        }),
        ((M::TvSeason, Backdrop), |s, p, id| {
            Ok(s.tvseason_detailed_by_id(p, id)?.basic.backdrop_paths)
        }),
        ((M::TvSeason, Banner), |s, p, id| {
            Ok(s.tvseason_detailed_by_id(p, id)?.basic.banner_paths)
        }),
        ((M::TvSeason, Poster), |s, p, id| {
            Ok(s.tvseason_detailed_by_id(p, id)?.basic.poster_paths)
        }),
        ((M::TvEpisode, Content), |s, p, id| {
            Ok(s.tvepisode_detailed_by_id(p, id)?.basic.path)
        }),
        ((M::TvEpisode, Banner), |s, p, id| {
            Ok(s.tvepisode_detailed_by_id(p, id)?.basic.banner_paths)
        }),
        ((M::Picture, Content), |s, p, id| {
            Ok(s.picture_detailed_by_id(p, id)?.basic.path)
        }),
        ((M::MusicAlbum, Cover), |s, p, id| {
            Ok(s.music_album_basic_by_id(p, id)?.cover_paths)
        }),
        ((M::MusicTrack, Content), |s, p, id| {
            Ok(s.music_track_detailed_by_id(p, id)?.basic.path)
        }),
    ]
}

/// The path at `offset`, if there is one.
pub fn path_at(paths: &[String], offset: usize) -> Option<&str> {
    paths.get(offset).map(String::as_str)
}

impl MediaService {
    /// All paths the entity carries for `role`.
    ///
    /// An unsupported (media type, role) pair yields an empty list. Provider
    /// and entity lookups fail the same way they do for the entity queries.
    pub fn path_list(
        &self,
        provider: ProviderId,
        media_type: WebMediaType,
        role: FileRole,
        id: &str,
    ) -> Result<Vec<String>> {
        match self.path_table().get(media_type, role) {
            Some(rule) => rule(self, provider, id),
            None => {
                tracing::warn!(%media_type, %role, "No path rule for this media type and file role");
                Ok(Vec::new())
            }
        }
    }

    /// Describe one file of an entity. Every failure is reported as
    /// [`FileInfo::not_found`].
    pub fn file_info(
        &self,
        provider: ProviderId,
        media_type: WebMediaType,
        role: FileRole,
        id: &str,
        offset: usize,
    ) -> FileInfo {
        match self.try_file_info(provider, media_type, role, id, offset) {
            Ok(info) => info,
            Err(e) => {
                tracing::info!(
                    %provider,
                    %media_type,
                    %role,
                    id,
                    offset,
                    "Unable to resolve file, reporting it as missing: {}",
                    e
                );
                FileInfo::not_found()
            }
        }
    }

    /// Whether the file exists and is reachable on the local filesystem.
    pub fn is_local_file(
        &self,
        provider: ProviderId,
        media_type: WebMediaType,
        role: FileRole,
        id: &str,
        offset: usize,
    ) -> bool {
        let info = self.file_info(provider, media_type, role, id, offset);
        info.exists && info.is_local_file
    }

    /// Open one file of an entity for reading. `None` when it does not exist
    /// or cannot be opened.
    pub fn retrieve_file(
        &self,
        provider: ProviderId,
        media_type: WebMediaType,
        role: FileRole,
        id: &str,
        offset: usize,
    ) -> Option<FileStream> {
        self.open_described(provider, media_type, role, id, offset)
            .map(|(_, stream)| stream)
    }

    /// Resolve one file of an entity, describe it, and open it. The
    /// descriptor and the stream always refer to the same path.
    pub fn open_described(
        &self,
        provider: ProviderId,
        media_type: WebMediaType,
        role: FileRole,
        id: &str,
        offset: usize,
    ) -> Option<(FileInfo, FileStream)> {
        match self.try_open_described(provider, media_type, role, id, offset) {
            Ok(Some(opened)) => Some(opened),
            Ok(None) => {
                tracing::warn!(
                    %provider,
                    %media_type,
                    %role,
                    id,
                    offset,
                    "Requested to retrieve a file that does not exist"
                );
                None
            }
            Err(e) => {
                tracing::info!(
                    %provider,
                    %media_type,
                    %role,
                    id,
                    offset,
                    "Unable to retrieve file: {}",
                    e
                );
                None
            }
        }
    }

    fn resolve_path(
        &self,
        provider: ProviderId,
        media_type: WebMediaType,
        role: FileRole,
        id: &str,
        offset: usize,
    ) -> Result<String> {
        let paths = self.path_list(provider, media_type, role, id)?;
        path_at(&paths, offset)
            .map(str::to_string)
            .ok_or_else(|| Error::not_found(format!("{role} file of {media_type}"), format!("{id}[{offset}]")))
    }

    fn try_file_info(
        &self,
        provider: ProviderId,
        media_type: WebMediaType,
        role: FileRole,
        id: &str,
        offset: usize,
    ) -> Result<FileInfo> {
        let path = self.resolve_path(provider, media_type, role, id, offset)?;
        let kind = media_type.capability();
        let library = self.registry().resolve(kind, provider)?;
        let mut info = library.file_info(&path).map_err(backend(kind, provider))?;
        info.provider = Some(provider);
        Ok(info)
    }

    fn try_open_described(
        &self,
        provider: ProviderId,
        media_type: WebMediaType,
        role: FileRole,
        id: &str,
        offset: usize,
    ) -> Result<Option<(FileInfo, FileStream)>> {
        let path = self.resolve_path(provider, media_type, role, id, offset)?;
        let kind = media_type.capability();
        let library = self.registry().resolve(kind, provider)?;
        let mut info = library.file_info(&path).map_err(backend(kind, provider))?;
        if !info.exists {
            return Ok(None);
        }
        info.provider = Some(provider);

        let stream = library.open_file(&path).map_err(backend(kind, provider))?;
        Ok(Some((info, stream)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_fifteen_distinct_rules() {
        let table = PathTable::standard().unwrap();
        assert_eq!(table.len(), 15);
    }

    #[test]
    fn standard_table_covers_expected_pairs() {
        let table = PathTable::standard().unwrap();
        assert!(table.contains(WebMediaType::Movie, FileRole::Content));
        assert!(table.contains(WebMediaType::Movie, FileRole::Cover));
        assert!(table.contains(WebMediaType::TvSeason, FileRole::Poster));
        assert!(table.contains(WebMediaType::MusicAlbum, FileRole::Cover));
        assert!(table.contains(WebMediaType::File, FileRole::Content));

        assert!(!table.contains(WebMediaType::Movie, FileRole::Banner));
        assert!(!table.contains(WebMediaType::Folder, FileRole::Content));
        assert!(!table.contains(WebMediaType::MusicArtist, FileRole::Cover));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let rule: PathRule = |_, _, _| Ok(Vec::new());
        let key = (WebMediaType::Movie, FileRole::Content);
        let err = PathTable::new([(key, rule), (key, rule)]).err().unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn path_at_indexes() {
        let paths = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        assert_eq!(path_at(&paths, 0), Some("a.jpg"));
        assert_eq!(path_at(&paths, 1), Some("b.jpg"));
        assert_eq!(path_at(&paths, 2), None);
        assert_eq!(path_at(&[], 0), None);
    }
}
