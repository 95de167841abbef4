//! Defines application-specific error types.
//!
//! This module provides the `AppError` enum, which categorizes the hard
//! failures of the processing pipeline. Soft failures (unreadable manifests,
//! skipped files) are logged and swallowed at their call sites and never
//! surface here.

use thiserror::Error;

/// Application-specific errors used throughout `txtforge`.
///
/// Only the hard, run-aborting conditions are represented: detection never
/// fails, and per-file problems degrade the result instead of raising.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The resolved configuration cannot produce an output location
    /// (unknown save mode combination, or `custom` without a path).
    #[error("Invalid save path configuration: {0}")]
    InvalidSaveConfig(String),

    /// The chunk budget is too small to fit even a single file header.
    #[error("Chunk budget of {0} characters is below the minimum of {1}")]
    ChunkBudgetTooSmall(usize, usize),

    /// The output directory could not be cleared or recreated.
    #[error("Failed to prepare output directory '{path}': {source}")]
    OutputDir {
        /// The directory that could not be prepared.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// No files matched the active templates and selection rules.
    #[error("No matching files found.")]
    NoFilesFound,
}

/// Helper to create an [`AppError::Io`] with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> AppError {
    AppError::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = io_error_with_path(source_error, &path);

        match app_error {
            AppError::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io"),
        }
    }

    #[test]
    fn test_no_files_found_message() {
        assert_eq!(AppError::NoFilesFound.to_string(), "No matching files found.");
    }
}
