//! Plain directory browsing over a set of root folders.
//!
//! Roots are exposed as drives. Folder and file ids are the URL-safe base64
//! of the absolute path; an id that decodes to anything outside the roots is
//! treated as unknown.

use std::fs::{DirEntry, Metadata};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mediaaccess_common::WebMediaType;
use walkdir::WalkDir;

use super::{decode_path_id, encode_path_id, local, within_roots};
use crate::library::{items, FileStream, FileSystemLibrary, Items, MediaLibrary};
use crate::media::{DriveBasic, FileBasic, FileInfo, FolderBasic, SearchResult};

#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    roots: Vec<PathBuf>,
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn path_string(path: &Path) -> Vec<String> {
    vec![path.to_string_lossy().into_owned()]
}

fn folder(path: &Path, meta: Option<&Metadata>) -> FolderBasic {
    FolderBasic {
        id: encode_path_id(path),
        title: display_name(path),
        path: path_string(path),
        last_modified: meta.and_then(|m| m.modified().ok()).map(local::to_utc),
        date_added: meta.and_then(|m| m.created().ok()).map(local::to_utc),
        provider: None,
    }
}

fn file(path: &Path, meta: &Metadata) -> FileBasic {
    FileBasic {
        id: encode_path_id(path),
        title: display_name(path),
        path: path_string(path),
        size: meta.len(),
        last_modified: meta.modified().ok().map(local::to_utc),
        date_added: meta.created().ok().map(local::to_utc),
        provider: None,
    }
}

impl LocalFileSystem {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Resolve an id to a directory inside the roots.
    fn directory(&self, id: &str) -> Option<PathBuf> {
        decode_path_id(id).filter(|p| within_roots(&self.roots, p) && p.is_dir())
    }

    /// Entries of a directory, sorted by name. Unknown ids list nothing.
    fn entries(&self, id: &str) -> Result<Vec<(DirEntry, Metadata)>> {
        let Some(dir) = self.directory(id) else {
            tracing::debug!("Unknown folder id: {}", id);
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&dir).with_context(|| format!("Failed to list {:?}", dir))? {
            let entry = entry.with_context(|| format!("Failed to list {:?}", dir))?;
            // Follows symlinks, so a link to a folder lists as a folder.
            match std::fs::metadata(entry.path()) {
                Ok(meta) => entries.push((entry, meta)),
                Err(e) => tracing::debug!("Skipping {:?}: {}", entry.path(), e),
            }
        }
        entries.sort_by_key(|(entry, _)| entry.file_name());
        Ok(entries)
    }
}

impl MediaLibrary for LocalFileSystem {
    /// Case-insensitive match on file and folder names below every root.
    fn search(&self, text: &str) -> Result<Items<'_, SearchResult>> {
        let needle = text.to_lowercase();
        let mut hits = Vec::new();
        for root in &self.roots {
            for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
                let Ok(entry) = entry else { continue };
                let name = entry.file_name().to_string_lossy();
                if !name.to_lowercase().contains(&needle) {
                    continue;
                }
                let media_type = if entry.file_type().is_dir() {
                    WebMediaType::Folder
                } else {
                    WebMediaType::File
                };
                hits.push(SearchResult::new(
                    media_type,
                    encode_path_id(entry.path()),
                    name.into_owned(),
                ));
            }
        }
        Ok(items(hits))
    }

    fn file_info(&self, path: &str) -> Result<FileInfo> {
        if !within_roots(&self.roots, Path::new(path)) {
            return Ok(FileInfo::not_found());
        }
        local::file_info(path)
    }

    fn open_file(&self, path: &str) -> Result<FileStream> {
        if !within_roots(&self.roots, Path::new(path)) {
            anyhow::bail!("{} is outside the configured roots", path);
        }
        local::open_file(path)
    }
}

impl FileSystemLibrary for LocalFileSystem {
    fn drives(&self) -> Result<Items<'_, DriveBasic>> {
        Ok(items(self.roots.iter().map(|root| DriveBasic {
            id: encode_path_id(root),
            title: display_name(root),
            path: path_string(root),
            provider: None,
        })))
    }

    fn folders_listing(&self, id: &str) -> Result<Items<'_, FolderBasic>> {
        let folders: Vec<_> = self
            .entries(id)?
            .into_iter()
            .filter(|(_, meta)| meta.is_dir())
            .map(|(entry, meta)| folder(&entry.path(), Some(&meta)))
            .collect();
        Ok(items(folders))
    }

    fn files_listing(&self, id: &str) -> Result<Items<'_, FileBasic>> {
        let files: Vec<_> = self
            .entries(id)?
            .into_iter()
            .filter(|(_, meta)| meta.is_file())
            .map(|(entry, meta)| file(&entry.path(), &meta))
            .collect();
        Ok(items(files))
    }

    fn file_basic_by_id(&self, id: &str) -> Result<Option<FileBasic>> {
        let Some(path) = decode_path_id(id).filter(|p| within_roots(&self.roots, p)) else {
            return Ok(None);
        };
        Ok(std::fs::metadata(&path)
            .ok()
            .filter(|meta| meta.is_file())
            .map(|meta| file(&path, &meta)))
    }

    fn folder_basic_by_id(&self, id: &str) -> Result<Option<FolderBasic>> {
        Ok(self.directory(id).map(|dir| {
            let meta = std::fs::metadata(&dir).ok();
            folder(&dir, meta.as_ref())
        }))
    }
}
