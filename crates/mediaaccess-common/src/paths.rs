//! Path utilities for detecting file types by extension.
//!
//! Used by the picture backend to decide what to index, and by the transport
//! layer to pick a content type for streams.

use std::path::Path;

/// List of supported image file extensions.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Check if a path has an image file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use mediaaccess_common::paths::is_image_file;
///
/// assert!(is_image_file(Path::new("poster.jpg")));
/// assert!(is_image_file(Path::new("/path/to/image.PNG")));
/// assert!(!is_image_file(Path::new("video.mkv")));
/// ```
pub fn is_image_file(path: &Path) -> bool {
    has_extension(path, IMAGE_EXTENSIONS)
}

/// Best-effort MIME type for a path, based on its extension.
#[must_use]
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        "ts" => "video/mp2t",
        "mp3" => "audio/mpeg",
        "flac" => "audio/flac",
        "ogg" | "opus" => "audio/ogg",
        "m4a" | "aac" => "audio/mp4",
        "wav" => "audio/wav",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("poster.jpeg")));
        assert!(is_image_file(Path::new("poster.Png")));
        assert!(is_image_file(Path::new("scan.tiff")));
        assert!(!is_image_file(Path::new("subtitle.srt")));
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("a.mkv")), "video/x-matroska");
        assert_eq!(content_type(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(content_type(Path::new("a.flac")), "audio/flac");
        assert_eq!(content_type(Path::new("README")), "application/octet-stream");
    }
}
