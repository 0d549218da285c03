use mediaaccess_common::{CapabilityKind, ProviderId, Result};

use super::{backend, found, MediaService};
use crate::media::{DriveBasic, FileBasic, FolderBasic};
use crate::query::{ListQuery, QueryExt};

const KIND: CapabilityKind = CapabilityKind::FileSystem;

impl MediaService {
    pub fn filesystem_drives(&self, provider: ProviderId, query: &ListQuery) -> Result<Vec<DriveBasic>> {
        let lib = self.registry.filesystem(provider)?;
        let drives = lib.drives().map_err(backend(KIND, provider))?;
        Ok(drives.sorted(query.sort, query.order).tagged(provider).collect())
    }

    /// Sub-folders of the drive or folder `id`.
    pub fn filesystem_folders_listing(
        &self,
        provider: ProviderId,
        id: &str,
        query: &ListQuery,
    ) -> Result<Vec<FolderBasic>> {
        let lib = self.registry.filesystem(provider)?;
        let folders = lib.folders_listing(id).map_err(backend(KIND, provider))?;
        Ok(folders.sorted(query.sort, query.order).tagged(provider).collect())
    }

    /// Files directly inside the drive or folder `id`.
    pub fn filesystem_files_listing(
        &self,
        provider: ProviderId,
        id: &str,
        query: &ListQuery,
    ) -> Result<Vec<FileBasic>> {
        let lib = self.registry.filesystem(provider)?;
        let files = lib.files_listing(id).map_err(backend(KIND, provider))?;
        Ok(files.sorted(query.sort, query.order).tagged(provider).collect())
    }

    pub fn filesystem_file_basic_by_id(&self, provider: ProviderId, id: &str) -> Result<FileBasic> {
        let lib = self.registry.filesystem(provider)?;
        let file = lib.file_basic_by_id(id).map_err(backend(KIND, provider))?;
        found("file", id, provider, file)
    }

    pub fn filesystem_folder_basic_by_id(&self, provider: ProviderId, id: &str) -> Result<FolderBasic> {
        let lib = self.registry.filesystem(provider)?;
        let folder = lib.folder_basic_by_id(id).map_err(backend(KIND, provider))?;
        found("folder", id, provider, folder)
    }
}
