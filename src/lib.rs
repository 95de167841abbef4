//! # txtforge
//!
//! Turns a project directory into a small set of LLM-ready text files:
//! detects the technology stack, selects the relevant source files, and
//! packs their contents into character-bounded chunks with per-file headers
//! and index blocks, plus a box-drawing tree listing of the project.
//!
//! The crate exposes two entry points:
//!
//! - [`detect_codebase`] classifies a directory into template identifiers
//!   (never fails; degraded results on I/O problems).
//! - [`process_files`] runs the full pipeline for a [`ProcessConfig`] and
//!   always returns a [`ProcessResult`]; failures are reported through
//!   `success`/`message` instead of being raised, so API layers can forward
//!   the result verbatim.
//!
//! All core work is sequential and synchronous. Concurrent invocations
//! against the same source directory are not synchronized here; callers
//! wanting single-flight behavior must serialize at their boundary.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod detection;
pub mod errors;
pub mod filtering;
pub mod merge;
pub mod output;
pub mod selection;
pub mod templates;
pub mod tree;

pub use config::{ProcessConfig, SaveMode, SelectionAction, SelectionRules};
pub use core_types::{
    DetectionResult, FileEntry, GitStatus, NodeKind, ProcessResult, TreeNode,
};
pub use errors::AppError;

use std::collections::HashSet;
use std::path::Path;

/// Detects the technology stack of `root`. See [`detection::detect`].
pub fn detect_codebase(root: &Path) -> DetectionResult {
    detection::detect(root)
}

/// Runs the full selection/merge pipeline for `config`.
///
/// Never panics and never returns an error: any [`AppError`] raised inside
/// the pipeline is converted into a failure [`ProcessResult`].
pub fn process_files(config: &ProcessConfig) -> ProcessResult {
    match run_processing(config) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Processing failed: {}", e);
            ProcessResult::failure(e.to_string())
        }
    }
}

fn run_processing(config: &ProcessConfig) -> Result<ProcessResult, AppError> {
    log::info!("Processing {}", config.source_dir.display());

    let active = templates::resolve_active(&config.template_ids);
    let selection = selection::resolve(
        &config.source_dir,
        &active,
        &config.selection_rules,
        config.hide_ignored_in_tree,
    );

    // Nothing to merge means no output artifacts at all, not even the
    // output directory.
    if selection.content_files.is_empty() {
        return Err(AppError::NoFilesFound);
    }

    let merger = merge::Merger::new(config.max_chars)?;

    let merged_paths: HashSet<String> = selection
        .content_files
        .iter()
        .map(|entry| entry.relative_path.clone())
        .collect();
    let tree_text = tree::render_source_tree(&selection.display_paths, &merged_paths);

    let base = output::resolve_output_base(config)?;
    let merged_dir = output::prepare_merged_dir(&base)?;

    let mut files = Vec::new();
    if config.full_context {
        let chunk = merger.merge_full_context(&selection.content_files, &tree_text);
        files.extend(output::write_chunks(&merged_dir, &[chunk])?);
    } else {
        output::write_tree_listing(&merged_dir, &tree_text)?;
        files.push(output::TREE_FILE_NAME.to_string());
        let chunks = merger.merge(&selection.content_files);
        files.extend(output::write_chunks(&merged_dir, &chunks)?);
    }

    let gitignore_modified = if config.save_mode == SaveMode::Root {
        output::ensure_gitignore_marker(&config.source_dir)?
    } else {
        false
    };

    let message = format!(
        "Merged {} files into {} output file(s).",
        selection.content_files.len(),
        files.len()
    );
    log::info!("{}", message);

    Ok(ProcessResult {
        success: true,
        message,
        output_path: merged_dir.display().to_string(),
        files,
        gitignore_modified,
    })
}
