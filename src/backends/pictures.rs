//! Picture folder backend.
//!
//! Walks the configured root folders for image files on every query. Each
//! folder that directly contains pictures becomes a category; picture and
//! category ids are the URL-safe base64 of their absolute paths.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use mediaaccess_common::paths::is_image_file;
use mediaaccess_common::WebMediaType;
use walkdir::WalkDir;

use super::{decode_path_id, encode_path_id, local, within_roots};
use crate::library::{items, FileStream, Items, MediaLibrary, PictureLibrary};
use crate::media::{Category, FileInfo, PictureBasic, PictureDetailed, SearchResult};

/// Pictures found under a set of root folders.
#[derive(Debug, Clone)]
pub struct PictureFolders {
    roots: Vec<PathBuf>,
}

impl PictureFolders {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Every image file under the roots, in file name order per directory.
    fn scan(&self) -> Vec<PathBuf> {
        let mut found = Vec::new();
        for root in &self.roots {
            for entry in WalkDir::new(root).sort_by_file_name() {
                match entry {
                    Ok(entry) if entry.file_type().is_file() && is_image_file(entry.path()) => {
                        found.push(entry.into_path());
                    }
                    Ok(_) => {}
                    Err(e) => tracing::debug!("Skipping unreadable entry under {:?}: {}", root, e),
                }
            }
        }
        found
    }

    fn category_for(folder: &Path) -> Category {
        let title = folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| folder.display().to_string());
        Category::new(encode_path_id(folder), title)
    }

    fn picture(path: &Path) -> PictureDetailed {
        let meta = std::fs::metadata(path).ok();
        let modified = meta
            .as_ref()
            .and_then(|m| m.modified().ok())
            .map(local::to_utc);
        let created = meta
            .as_ref()
            .and_then(|m| m.created().ok())
            .map(local::to_utc);

        PictureDetailed {
            basic: PictureBasic {
                id: encode_path_id(path),
                title: path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                date_taken: modified,
                categories: path.parent().map(Self::category_for).into_iter().collect(),
                path: vec![path.to_string_lossy().into_owned()],
                date_added: created.or(modified),
                provider: None,
            },
            ..Default::default()
        }
    }

    fn owns(&self, path: &Path) -> bool {
        within_roots(&self.roots, path)
    }
}

impl MediaLibrary for PictureFolders {
    fn search(&self, text: &str) -> Result<Items<'_, SearchResult>> {
        let needle = text.to_lowercase();
        let hits: Vec<_> = self
            .scan()
            .iter()
            .map(|p| Self::picture(p).basic)
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .map(|p| SearchResult::new(WebMediaType::Picture, p.id, p.title))
            .collect();
        Ok(items(hits))
    }

    /// Folders that directly contain at least one picture.
    fn categories(&self) -> Result<Items<'_, Category>> {
        let folders: BTreeMap<PathBuf, Category> = self
            .scan()
            .iter()
            .filter_map(|p| p.parent())
            .map(|folder| (folder.to_path_buf(), Self::category_for(folder)))
            .collect();
        Ok(items(folders.into_values()))
    }

    fn file_info(&self, path: &str) -> Result<FileInfo> {
        if !self.owns(Path::new(path)) {
            return Ok(FileInfo::not_found());
        }
        local::file_info(path)
    }

    fn open_file(&self, path: &str) -> Result<FileStream> {
        if !self.owns(Path::new(path)) {
            anyhow::bail!("{} is outside the picture folders", path);
        }
        local::open_file(path)
    }
}

impl PictureLibrary for PictureFolders {
    fn pictures_basic(&self) -> Result<Items<'_, PictureBasic>> {
        Ok(items(self.scan().into_iter().map(|p| Self::picture(&p).basic)))
    }

    fn pictures_detailed(&self) -> Result<Items<'_, PictureDetailed>> {
        Ok(items(self.scan().into_iter().map(|p| Self::picture(&p))))
    }

    fn picture_basic_by_id(&self, id: &str) -> Result<Option<PictureBasic>> {
        Ok(self.picture_detailed_by_id(id)?.map(|p| p.basic))
    }

    fn picture_detailed_by_id(&self, id: &str) -> Result<Option<PictureDetailed>> {
        Ok(decode_path_id(id)
            .filter(|p| self.owns(p) && p.is_file() && is_image_file(p))
            .map(|p| Self::picture(&p)))
    }

    fn pictures_basic_by_category(&self, category: &str) -> Result<Items<'_, PictureBasic>> {
        Ok(items(
            self.pictures_in(category)
                .into_iter()
                .map(|p| Self::picture(&p).basic),
        ))
    }

    fn pictures_detailed_by_category(&self, category: &str) -> Result<Items<'_, PictureDetailed>> {
        Ok(items(
            self.pictures_in(category)
                .into_iter()
                .map(|p| Self::picture(&p)),
        ))
    }
}

impl PictureFolders {
    /// Pictures directly inside the folder with the given category id.
    fn pictures_in(&self, category: &str) -> Vec<PathBuf> {
        let Some(folder) = decode_path_id(category).filter(|f| self.owns(f)) else {
            return Vec::new();
        };

        let mut pictures: Vec<PathBuf> = match std::fs::read_dir(&folder) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file() && is_image_file(p))
                .collect(),
            Err(e) => {
                tracing::debug!("Unable to list picture folder {:?}: {}", folder, e);
                Vec::new()
            }
        };
        pictures.sort();
        pictures
    }
}
