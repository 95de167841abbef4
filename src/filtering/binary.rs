// src/filtering/binary.rs

//! Binary and media gates.
//!
//! Two independent checks keep non-text data out of merged content: a fixed
//! extension set, and a content sniff over the first few KiB of the file.
//! Extension-flagged media files may still appear in the display tree; the
//! sniff is terminal for content inclusion.

use crate::constants::{BINARY_EXTENSIONS, MEDIA_EXTENSIONS, SNIFF_LEN};
use content_inspector::ContentType;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Returns the lowercased extension of `path` with a leading dot, or `None`
/// if the file name has no extension (dotfiles like `.env` have none).
pub fn dot_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// Returns `true` if the extension is in the fixed binary set. These files
/// are never merged, regardless of selection rules.
pub fn is_binary_extension(path: &Path) -> bool {
    dot_extension(path)
        .map(|ext| BINARY_EXTENSIONS.contains(ext.as_str()))
        .unwrap_or(false)
}

/// Returns `true` if the extension is in the media set shown (but flagged)
/// in the display tree.
pub fn is_media_extension(path: &Path) -> bool {
    dot_extension(path)
        .map(|ext| MEDIA_EXTENSIONS.contains(ext.as_str()))
        .unwrap_or(false)
}

/// Inspects the first [`SNIFF_LEN`] bytes of the file and reports whether
/// they look binary (embedded null bytes, non-UTF-8 data).
///
/// # Errors
/// Returns an `Err` on I/O error (file not found, permission denied).
pub fn sniff_is_binary(path: &Path) -> std::io::Result<bool> {
    let mut file = File::open(path)?;
    let mut buffer = [0u8; SNIFF_LEN];
    let bytes_read = file.read(&mut buffer)?;
    let head = &buffer[..bytes_read];

    Ok(matches!(content_inspector::inspect(head), ContentType::BINARY))
}
