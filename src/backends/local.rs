//! Helpers for backends whose files live on the local filesystem.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::library::FileStream;
use crate::media::FileInfo;

/// Describe a local file. A path that does not exist, or that names a
/// directory, comes back as [`FileInfo::not_found`].
pub fn file_info(path: &str) -> Result<FileInfo> {
    let p = Path::new(path);
    let meta = match std::fs::metadata(p) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FileInfo::not_found()),
        Err(e) => return Err(e).with_context(|| format!("Failed to read metadata for {}", path)),
    };

    if !meta.is_file() {
        return Ok(FileInfo::not_found());
    }

    Ok(FileInfo {
        exists: true,
        is_local_file: true,
        is_read_only: meta.permissions().readonly(),
        name: p.file_name().map(|n| n.to_string_lossy().into_owned()),
        path: Some(path.to_string()),
        extension: p.extension().map(|e| e.to_string_lossy().into_owned()),
        size: meta.len(),
        last_modified: meta.modified().ok().map(to_utc),
        last_access: meta.accessed().ok().map(to_utc),
        provider: None,
    })
}

/// Open a local file for buffered reading.
pub fn open_file(path: &str) -> Result<FileStream> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
    Ok(Box::new(BufReader::new(file)))
}

pub(crate) fn to_utc(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn describes_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poster.jpg");
        std::fs::write(&path, b"12345").unwrap();

        let info = file_info(path.to_str().unwrap()).unwrap();
        assert!(info.exists);
        assert!(info.is_local_file);
        assert_eq!(info.size, 5);
        assert_eq!(info.name.as_deref(), Some("poster.jpg"));
        assert_eq!(info.extension.as_deref(), Some("jpg"));
        assert!(info.last_modified.is_some());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.mkv");
        let info = file_info(path.to_str().unwrap()).unwrap();
        assert_eq!(info, FileInfo::not_found());
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let info = file_info(dir.path().to_str().unwrap()).unwrap();
        assert!(!info.exists);
    }

    #[test]
    fn open_reads_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, b"hello").unwrap();

        let mut out = String::new();
        open_file(path.to_str().unwrap())
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "hello");

        assert!(open_file(dir.path().join("missing").to_str().unwrap()).is_err());
    }
}
