//! Resolves the concrete file sets for one run: the files whose content gets
//! merged, and the files shown in the display tree.
//!
//! Two strategies, chosen by the presence of selection rules:
//!
//! - **Template-driven** (no rules): only files whose extension belongs to an
//!   active template are candidates, under the merged ignore patterns.
//! - **Rule-driven**: every non-ignored file is a candidate; its default
//!   inclusion (extension in the active union) can be overridden by the
//!   nearest selection rule. Binary and media files stay out of content no
//!   matter what a rule says.
//!
//! Resolution never fails. Unreadable directories and files degrade the
//! result and are logged.

use crate::config::{SelectionAction, SelectionRules};
use crate::constants::{
    BASE_IGNORE_PATTERNS, CONTENT_SIZE_CAP, GLOBAL_VAULT_DIR, MASSIVE_FOLDERS, OUTPUT_DIR_NAME,
};
use crate::core_types::FileEntry;
use crate::filtering::{
    is_binary_extension, is_media_extension, is_system_hidden, pattern_matches, sniff_is_binary,
};
use crate::templates::Template;
use crate::tree::relative_slash_path;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Output of [`resolve`]: content entries ready for merging plus the relative
/// paths shown in the display tree.
#[derive(Debug, Default)]
pub struct Selection {
    /// Files read as UTF-8 text, in source-tree order.
    pub content_files: Vec<FileEntry>,
    /// Relative paths shown in the tree listing, content paths included.
    pub display_paths: Vec<String>,
}

/// Resolves content and display file sets for `root`.
pub fn resolve(
    root: &Path,
    active: &[&'static Template],
    rules: &SelectionRules,
    hide_ignored_in_tree: bool,
) -> Selection {
    let ignore_patterns = build_ignore_patterns(active);
    let extension_union: HashSet<&'static str> = active
        .iter()
        .flat_map(|tmpl| tmpl.extensions.iter().copied())
        .collect();

    let mut candidates = Vec::new();
    collect_candidates(root, root, &ignore_patterns, &mut candidates);
    log::debug!("{} candidate files after ignore filtering", candidates.len());

    let rule_driven = !rules.is_empty();
    let mut content_files = Vec::new();
    for (abs_path, rel_path) in &candidates {
        let wanted = if rule_driven {
            let default_included = extension_matches(abs_path, &extension_union);
            match rules.nearest(rel_path) {
                Some(SelectionAction::Include) => true,
                Some(SelectionAction::Exclude) => false,
                None => default_included,
            }
        } else {
            extension_matches(abs_path, &extension_union)
        };
        if !wanted {
            continue;
        }

        // Non-text data never enters content, even via an explicit rule.
        if is_binary_extension(abs_path) || is_media_extension(abs_path) {
            log::debug!("Excluding binary/media file '{}'", rel_path);
            continue;
        }

        if let Some(entry) = read_content_entry(abs_path, rel_path) {
            content_files.push(entry);
        }
    }

    let display_paths = if hide_ignored_in_tree {
        content_files
            .iter()
            .map(|entry| entry.relative_path.clone())
            .collect()
    } else {
        let mut paths = Vec::new();
        broad_scan(root, root, &mut paths);
        paths
    };

    log::debug!(
        "Selection resolved: {} content files, {} display entries",
        content_files.len(),
        display_paths.len()
    );
    Selection {
        content_files,
        display_paths,
    }
}

/// Base ignore set plus every active template's patterns. Trailing slashes
/// are stripped so a `dist/` pattern also prunes by bare name.
fn build_ignore_patterns(active: &[&'static Template]) -> Vec<String> {
    let mut patterns: Vec<String> = BASE_IGNORE_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect();
    for tmpl in active {
        for pattern in tmpl.ignores {
            let pattern = pattern.strip_suffix('/').unwrap_or(pattern);
            let pattern = pattern.to_string();
            if !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }
    }
    patterns
}

fn extension_matches(path: &Path, union: &HashSet<&'static str>) -> bool {
    crate::filtering::dot_extension(path)
        .map(|ext| union.contains(ext.as_str()))
        .unwrap_or(false)
}

/// Recursively gathers non-ignored files in source-tree order (folders before
/// files, case-sensitive names). Ignored directories are pruned whole.
fn collect_candidates(
    root: &Path,
    dir: &Path,
    patterns: &[String],
    out: &mut Vec<(PathBuf, String)>,
) {
    let entries = match sorted_entries(dir) {
        Some(entries) => entries,
        None => return,
    };

    for (name, is_dir) in entries {
        let abs_path = dir.join(&name);
        let rel_path = relative_slash_path(root, &abs_path);

        if is_system_hidden(&name)
            || patterns
                .iter()
                .any(|pat| pattern_matches(&rel_path, &name, pat, is_dir))
        {
            log::trace!("Pruning '{}'", rel_path);
            continue;
        }

        if is_dir {
            collect_candidates(root, &abs_path, patterns, out);
        } else {
            out.push((abs_path, rel_path));
        }
    }
}

/// The context-only tree walk: everything is listed, including media, binary,
/// and ignored entries, stopping only at known huge folders and at this
/// tool's own output directories.
fn broad_scan(root: &Path, dir: &Path, out: &mut Vec<String>) {
    let entries = match sorted_entries(dir) {
        Some(entries) => entries,
        None => return,
    };

    for (name, is_dir) in entries {
        let abs_path = dir.join(&name);
        let rel_path = relative_slash_path(root, &abs_path);

        if is_dir {
            if MASSIVE_FOLDERS.contains(name.as_str())
                || name == OUTPUT_DIR_NAME
                || name == GLOBAL_VAULT_DIR
            {
                continue;
            }
            broad_scan(root, &abs_path, out);
        } else {
            // Engine sidecar files add noise without context value.
            if name.ends_with(".import") || name.ends_with(".uid") {
                continue;
            }
            out.push(rel_path);
        }
    }
}

fn sorted_entries(dir: &Path) -> Option<Vec<(String, bool)>> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) => {
            log::debug!("Skipping unreadable directory {}: {}", dir.display(), e);
            return None;
        }
    };
    let mut entries: Vec<(String, bool)> = read
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).ok()?;
            Some((name, is_dir))
        })
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Some(entries)
}

/// Applies the size cap and content sniff, then reads the file as UTF-8.
/// Any failure skips the file with a log line.
fn read_content_entry(abs_path: &Path, rel_path: &str) -> Option<FileEntry> {
    match fs::metadata(abs_path) {
        Ok(md) if md.len() > CONTENT_SIZE_CAP => {
            log::warn!("Skipping '{}': larger than the content size cap", rel_path);
            return None;
        }
        Ok(_) => {}
        Err(e) => {
            log::warn!("Skipping '{}': {}", rel_path, e);
            return None;
        }
    }

    match sniff_is_binary(abs_path) {
        Ok(true) => {
            log::warn!("Skipping '{}': binary content", rel_path);
            return None;
        }
        Ok(false) => {}
        Err(e) => {
            log::warn!("Skipping '{}': {}", rel_path, e);
            return None;
        }
    }

    match fs::read_to_string(abs_path) {
        Ok(content) => Some(FileEntry {
            absolute_path: abs_path.to_path_buf(),
            relative_path: rel_path.to_string(),
            content,
        }),
        Err(e) => {
            log::warn!("Skipping '{}': {}", rel_path, e);
            None
        }
    }
}
