//! Recursive directory scanning for the navigable display tree.
//!
//! The scanner annotates every entry with ignored/media/massive flags and
//! stops short of huge subtrees: folders with a known dependency-directory
//! name, or with more entries than the threshold, are flagged massive and
//! left unexpanded so a UI can lazy-load them on demand. A scan call whose
//! target *is* such a folder passes `is_lazy_load_root = true` to expand that
//! one level.
//!
//! No error escapes a single directory read: an unreadable directory simply
//! yields no children.

use crate::constants::{MASSIVE_ENTRY_THRESHOLD, MASSIVE_FILE_BYTES, MASSIVE_FOLDERS};
use crate::core_types::{NodeKind, TreeNode};
use crate::filtering::{is_media_extension, is_path_ignored};
use std::fs;
use std::path::Path;

mod render;

pub use render::render_source_tree;

/// Scans the immediate children of `scan_dir` (relative to `root`), recursing
/// into non-massive subfolders.
///
/// `depth` is the display depth of the produced nodes; recursion passes
/// `depth + 1`. `patterns` is the caller-supplied ignore set; each directory
/// additionally merges its own `.gitignore` for its direct entries.
/// `is_lazy_load_root` exempts `scan_dir` itself from the massive
/// short-circuit so one huge folder can be expanded on request.
pub fn scan(
    root: &Path,
    scan_dir: &Path,
    depth: usize,
    patterns: &[String],
    is_lazy_load_root: bool,
) -> Vec<TreeNode> {
    scan_inner(root, scan_dir, depth, patterns, is_lazy_load_root).0
}

/// Returns the child nodes plus whether the directory was short-circuited as
/// massive (callers flag the folder node from the boolean).
fn scan_inner(
    root: &Path,
    scan_dir: &Path,
    depth: usize,
    patterns: &[String],
    is_lazy_load_root: bool,
) -> (Vec<TreeNode>, bool) {
    log::trace!("Scanning directory {}", scan_dir.display());

    let read = match fs::read_dir(scan_dir) {
        Ok(read) => read,
        Err(e) => {
            log::debug!("Skipping unreadable directory {}: {}", scan_dir.display(), e);
            return (Vec::new(), false);
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

    if !is_lazy_load_root && depth > 0 {
        let dir_name = scan_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if MASSIVE_FOLDERS.contains(dir_name.as_str())
            || entries.len() > MASSIVE_ENTRY_THRESHOLD
        {
            log::trace!(
                "Short-circuiting massive directory {} ({} entries)",
                scan_dir.display(),
                entries.len()
            );
            return (Vec::new(), true);
        }
    }

    // Local .gitignore applies to this directory's entries; recursion keeps
    // the caller-supplied set and re-merges per directory.
    let mut active_patterns: Vec<String> = patterns.to_vec();
    if let Ok(content) = fs::read_to_string(scan_dir.join(".gitignore")) {
        for line in content.lines() {
            let line = line.trim();
            if !line.is_empty() && !line.starts_with('#') {
                active_patterns.push(line.to_string());
            }
        }
    }

    // Folders before files, then case-sensitive lexicographic.
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut nodes = Vec::with_capacity(entries.len());
    for (name, is_dir) in entries {
        let full_path = scan_dir.join(&name);
        let rel_path = relative_slash_path(root, &full_path);

        let is_ignored = is_path_ignored(&rel_path, is_dir, &active_patterns);

        let mut node = TreeNode {
            name: name.clone(),
            path: rel_path,
            kind: if is_dir { NodeKind::Folder } else { NodeKind::File },
            is_ignored,
            is_media: false,
            is_massive: false,
            depth,
            children: Vec::new(),
        };

        if is_dir {
            if MASSIVE_FOLDERS.contains(name.as_str()) {
                node.is_massive = true;
            } else {
                let (children, truncated) =
                    scan_inner(root, &full_path, depth + 1, patterns, false);
                node.children = children;
                node.is_massive = truncated;
            }
        } else {
            node.is_media = is_media_extension(&full_path);
            node.is_massive = fs::metadata(&full_path)
                .map(|md| md.len() > MASSIVE_FILE_BYTES)
                .unwrap_or(false);
        }

        nodes.push(node);
    }

    (nodes, false)
}

/// Slash-normalized path of `path` relative to `root`.
pub(crate) fn relative_slash_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_folders_sort_before_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp.path().join("zdir")).unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::create_dir(temp.path().join("adir")).unwrap();

        let nodes = scan(temp.path(), temp.path(), 0, &[], false);
        assert_eq!(names(&nodes), vec!["adir", "zdir", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_massive_folder_name_not_recursed() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("node_modules/react")).unwrap();
        fs::write(temp.path().join("node_modules/react/index.js"), "x").unwrap();

        let nodes = scan(temp.path(), temp.path(), 0, &[], false);
        let nm = nodes.iter().find(|n| n.name == "node_modules").unwrap();
        assert!(nm.is_massive);
        assert!(nm.children.is_empty());
        assert!(nm.is_ignored); // also system-hidden
    }

    #[test]
    fn test_lazy_load_root_expands_massive_target() {
        let temp = tempdir().unwrap();
        let nm = temp.path().join("node_modules");
        fs::create_dir_all(nm.join("react")).unwrap();

        let nodes = scan(temp.path(), &nm, 1, &[], true);
        assert_eq!(names(&nodes), vec!["react"]);
        assert_eq!(nodes[0].depth, 1);
    }

    #[test]
    fn test_entry_count_threshold_short_circuits_below_root() {
        let temp = tempdir().unwrap();
        let big = temp.path().join("generated");
        fs::create_dir(&big).unwrap();
        for i in 0..160 {
            fs::write(big.join(format!("f{i}.txt")), "x").unwrap();
        }

        let nodes = scan(temp.path(), temp.path(), 0, &[], false);
        let gen = nodes.iter().find(|n| n.name == "generated").unwrap();
        assert!(gen.is_massive);
        assert!(gen.children.is_empty());
    }

    #[test]
    fn test_local_gitignore_marks_entries_ignored() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(".gitignore"), "*.log\n# comment\n").unwrap();
        fs::write(temp.path().join("debug.log"), "x").unwrap();
        fs::write(temp.path().join("main.rs"), "x").unwrap();

        let nodes = scan(temp.path(), temp.path(), 0, &[], false);
        let log_node = nodes.iter().find(|n| n.name == "debug.log").unwrap();
        let rs_node = nodes.iter().find(|n| n.name == "main.rs").unwrap();
        assert!(log_node.is_ignored);
        assert!(!rs_node.is_ignored);
    }

    #[test]
    fn test_media_flag_on_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("logo.png"), [0x89u8, 0x50]).unwrap();

        let nodes = scan(temp.path(), temp.path(), 0, &[], false);
        assert!(nodes[0].is_media);
        assert_eq!(nodes[0].kind, NodeKind::File);
    }

    #[test]
    fn test_unreadable_directory_yields_empty() {
        let nodes = scan(
            Path::new("/nope"),
            Path::new("/nope/missing"),
            0,
            &[],
            false,
        );
        assert!(nodes.is_empty());
    }
}
