// src/output.rs

//! Output-side plumbing: resolving the save location, preparing the `Merged`
//! directory, writing generated files, and the `.gitignore` marker append.

use crate::config::{ProcessConfig, SaveMode};
use crate::constants::{GITIGNORE_MARKER, GLOBAL_VAULT_DIR, MERGED_DIR_NAME, OUTPUT_DIR_NAME};
use crate::errors::{io_error_with_path, AppError};
use crate::merge::ChunkFile;
use directories::BaseDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the tree listing written beside the chunks in standard mode.
pub const TREE_FILE_NAME: &str = "Source-Tree.txt";

/// Resolves the base output directory for the configured save mode.
///
/// # Errors
/// [`AppError::InvalidSaveConfig`] when `custom` mode lacks a path or the
/// home directory cannot be determined for `global` mode.
pub fn resolve_output_base(config: &ProcessConfig) -> Result<PathBuf, AppError> {
    match config.save_mode {
        SaveMode::Root => Ok(config.source_dir.join(OUTPUT_DIR_NAME)),
        SaveMode::Global => {
            let base_dirs = BaseDirs::new().ok_or_else(|| {
                AppError::InvalidSaveConfig("could not resolve the home directory".to_string())
            })?;
            let project = config
                .source_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "project".to_string());
            Ok(base_dirs.home_dir().join(GLOBAL_VAULT_DIR).join(project))
        }
        SaveMode::Custom => config.custom_path.clone().ok_or_else(|| {
            AppError::InvalidSaveConfig("custom save mode requires a path".to_string())
        }),
    }
}

/// Removes and recreates the `Merged` subdirectory of `base`, returning its
/// path. Destructive on purpose so each run starts clean.
pub fn prepare_merged_dir(base: &Path) -> Result<PathBuf, AppError> {
    let merged = base.join(MERGED_DIR_NAME);
    if merged.exists() {
        fs::remove_dir_all(&merged).map_err(|source| AppError::OutputDir {
            path: merged.display().to_string(),
            source,
        })?;
    }
    fs::create_dir_all(&merged).map_err(|source| AppError::OutputDir {
        path: merged.display().to_string(),
        source,
    })?;
    log::debug!("Prepared output directory {}", merged.display());
    Ok(merged)
}

/// Writes every chunk into `merged` and returns the file names in order.
pub fn write_chunks(merged: &Path, chunks: &[ChunkFile]) -> Result<Vec<String>, AppError> {
    let mut names = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let path = merged.join(&chunk.name);
        fs::write(&path, &chunk.content).map_err(|e| io_error_with_path(e, &path))?;
        names.push(chunk.name.clone());
    }
    Ok(names)
}

/// Writes the `Source-Tree.txt` listing.
pub fn write_tree_listing(merged: &Path, tree: &str) -> Result<(), AppError> {
    let path = merged.join(TREE_FILE_NAME);
    fs::write(&path, tree).map_err(|e| io_error_with_path(e, &path))
}

/// Appends the output-folder marker to the source `.gitignore`, creating the
/// file if absent. Returns `true` when the file was modified.
pub fn ensure_gitignore_marker(source_dir: &Path) -> Result<bool, AppError> {
    let path = source_dir.join(".gitignore");
    let existing = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(io_error_with_path(e, &path)),
    };

    if existing.contains(GITIGNORE_MARKER) {
        return Ok(false);
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(OUTPUT_DIR_NAME);
    updated.push_str("/\n");

    fs::write(&path, updated).map_err(|e| io_error_with_path(e, &path))?;
    log::info!("Added '{}' to {}", OUTPUT_DIR_NAME, path.display());
    Ok(true)
}
