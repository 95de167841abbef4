//! Stack detection: classifies a project directory into template identifiers.
//!
//! Detection is two-tiered. Package manifests are the source of truth: a
//! dependency hit is strong evidence and suppresses the looser fallback for
//! platform identifiers, so one stray `.py` file does not turn a Node project
//! into a Python one. Templates without manifest support are caught by a
//! root-level trigger scan, and a bounded extension scan picks up utility
//! stacks (SQL, shell, HTML/CSS) that coexist with any platform.
//!
//! [`detect`] never fails: every I/O problem degrades the result instead of
//! aborting it.

use crate::constants::{EXTENSION_SCAN_DEPTH, GITIGNORE_MARKER, MASSIVE_FOLDERS};
use crate::core_types::{DetectionResult, GitStatus};
use crate::templates::TEMPLATES;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

mod manifests;

/// Platform identifiers that the fallback trigger scan must not guess once a
/// package manifest has claimed the project.
const MANAGED_PLATFORM_IDS: &[&str] = &[
    "java",
    "kotlin",
    "android",
    "javascript",
    "typescript",
    "react",
    "vuejs",
    "angular",
];

/// Detects the technology stack of `root`.
///
/// Returns a possibly empty [`DetectionResult`]; this function never fails.
pub fn detect(root: &Path) -> DetectionResult {
    log::debug!("Starting detection in {}", root.display());
    let mut result = DetectionResult::default();

    let root_entries = match list_root_entries(root) {
        Some(entries) => entries,
        None => return result,
    };

    result.git_status = git_status(root, &root_entries);

    // Tier 1: package manifests.
    let mut is_managed_project = false;

    if root_entries.contains("pom.xml") {
        is_managed_project = true;
        manifests::analyze_maven(root, &mut result);
    }

    if let Some(gradle_file) = root_entries
        .iter()
        .find(|name| *name == "build.gradle" || *name == "build.gradle.kts")
    {
        is_managed_project = true;
        manifests::analyze_gradle(root, gradle_file, &mut result);
    }

    if root_entries.contains("package.json") {
        is_managed_project = true;
        manifests::analyze_node(root, &mut result);
    }

    if root_entries.contains("composer.json") {
        is_managed_project = true;
        manifests::analyze_composer(root, &mut result);
    }

    // Utility stacks coexist with any platform, so this always runs.
    let found_extensions = scan_extensions(root, EXTENSION_SCAN_DEPTH);

    if root_entries.contains("Dockerfile") || root_entries.contains("docker-compose.yml") {
        result.add("docker", "Docker config found");
    }
    if found_extensions.contains(".sql") {
        result.add("sql", "SQL files found");
    }
    if found_extensions.contains(".sh") {
        result.add("bash-shell", "Shell scripts found");
    }
    if found_extensions.contains(".html") || found_extensions.contains(".css") {
        result.add("html-css", "HTML/CSS files found");
    }

    // Tier 2: fallback file triggers for manifest-less ecosystems.
    for tmpl in TEMPLATES {
        if result.contains(tmpl.id) {
            continue;
        }
        if is_managed_project && MANAGED_PLATFORM_IDS.contains(&tmpl.id) {
            continue;
        }

        let trigger_hit = tmpl.triggers.iter().any(|trigger| {
            if let Some(suffix) = trigger.strip_prefix('*') {
                root_entries.iter().any(|name| name.ends_with(suffix))
            } else {
                root_entries.contains(*trigger)
            }
        });

        if trigger_hit {
            result.add(tmpl.id, "File trigger detected");
        }
    }

    log::debug!(
        "Detection complete: {} identifiers ({:?})",
        result.ids.len(),
        result.ids
    );
    result
}

fn list_root_entries(root: &Path) -> Option<HashSet<String>> {
    match fs::read_dir(root) {
        Ok(entries) => Some(
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect(),
        ),
        Err(e) => {
            log::warn!("Detection failed to list {}: {}", root.display(), e);
            None
        }
    }
}

fn git_status(root: &Path, root_entries: &HashSet<String>) -> GitStatus {
    if !root_entries.contains(".git") {
        return GitStatus::None;
    }
    if root_entries.contains(".gitignore") {
        match fs::read_to_string(root.join(".gitignore")) {
            Ok(content) if content.contains(GITIGNORE_MARKER) => return GitStatus::Ignored,
            Ok(_) => {}
            Err(e) => log::warn!("Could not read .gitignore: {}", e),
        }
    }
    GitStatus::Clean
}

/// Collects all file extensions a few levels deep, skipping dot entries and
/// known huge folders. Errors inside the walk are logged and skipped.
fn scan_extensions(root: &Path, depth: usize) -> HashSet<String> {
    let mut extensions = HashSet::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(depth)
        .into_iter()
        .filter_entry(|entry| {
            // The walk root itself may be dot-named; only prune children.
            if entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !name.starts_with('.') && !(entry.file_type().is_dir() && MASSIVE_FOLDERS.contains(name.as_ref()))
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Extension scan error: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() {
            if let Some(ext) = crate::filtering::dot_extension(entry.path()) {
                extensions.insert(ext);
            }
        }
    }

    extensions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_directory_detects_nothing() {
        let temp = tempdir().unwrap();
        let result = detect(temp.path());
        assert!(result.ids.is_empty());
        assert_eq!(result.git_status, GitStatus::None);
    }

    #[test]
    fn test_missing_directory_returns_empty_result() {
        let result = detect(Path::new("/definitely/not/here"));
        assert!(result.ids.is_empty());
    }

    #[test]
    fn test_node_react_project() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"dependencies": {"react": "18.0.0", "react-dom": "18.0.0"}}"#,
        )
        .unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/App.jsx"), "export default 1;").unwrap();
        fs::write(temp.path().join("src/app.css"), "body {}").unwrap();

        let result = detect(temp.path());
        assert!(result.contains("react"));
        assert!(result.contains("javascript"));
        assert!(result.contains("html-css"));
        assert!(!result.contains("typescript"));
    }

    #[test]
    fn test_managed_project_suppresses_platform_triggers() {
        // A package.json plus a stray tsconfig.json must not re-detect
        // typescript through the trigger fallback.
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"dependencies": {}}"#).unwrap();
        fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();

        let result = detect(temp.path());
        assert!(result.contains("javascript"));
        assert!(!result.contains("typescript"));
    }

    #[test]
    fn test_manifestless_rust_project_via_triggers() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("Cargo.toml"), "[package]").unwrap();
        fs::write(temp.path().join("main.rs"), "fn main() {}").unwrap();

        let result = detect(temp.path());
        assert!(result.contains("rust"));
        assert_eq!(result.reasons["rust"], vec!["File trigger detected"]);
    }

    #[test]
    fn test_suffix_trigger_matches_root_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("deploy.sh"), "#!/bin/sh").unwrap();

        let result = detect(temp.path());
        assert!(result.contains("bash-shell"));
    }

    #[test]
    fn test_extension_scan_skips_huge_folders() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("node_modules/pkg")).unwrap();
        fs::write(temp.path().join("node_modules/pkg/schema.sql"), "SELECT 1;").unwrap();

        let result = detect(temp.path());
        assert!(!result.contains("sql"));
    }

    #[test]
    fn test_git_status_tristate() {
        let temp = tempdir().unwrap();
        assert_eq!(detect(temp.path()).git_status, GitStatus::None);

        fs::create_dir(temp.path().join(".git")).unwrap();
        assert_eq!(detect(temp.path()).git_status, GitStatus::Clean);

        fs::write(temp.path().join(".gitignore"), "TXT-Forge/\n").unwrap();
        assert_eq!(detect(temp.path()).git_status, GitStatus::Ignored);
    }

    #[test]
    fn test_dot_named_project_root_is_still_scanned() {
        let temp = tempdir().unwrap();
        let root = temp.path().join(".myproj");
        fs::create_dir_all(root.join("db")).unwrap();
        fs::write(root.join("db/schema.sql"), "SELECT 1;").unwrap();
        fs::write(root.join("style.css"), "body {}").unwrap();

        let result = detect(&root);
        assert!(result.contains("sql"));
        assert!(result.contains("html-css"));
    }

    #[test]
    fn test_docker_detected_at_root() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("Dockerfile"), "FROM scratch").unwrap();
        let result = detect(temp.path());
        assert!(result.contains("docker"));
    }
}
