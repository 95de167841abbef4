//! Defines core data structures used throughout the application pipeline.
//!
//! These types flow between the detection, scanning, selection, and merging
//! stages and across the (out-of-scope) HTTP boundary, so the API-facing ones
//! derive `Serialize`/`Deserialize`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Whether the scanned project is a git repository, and if so whether its
/// `.gitignore` already excludes this tool's output folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitStatus {
    /// No `.git` entry at the root.
    #[default]
    None,
    /// A git repository without the output-folder marker in `.gitignore`.
    Clean,
    /// A git repository whose `.gitignore` already carries the marker.
    Ignored,
}

/// Result of a stack-detection pass over a project root.
///
/// Computed fresh on every call and never persisted by this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Deduplicated template identifiers, in detection order.
    pub ids: Vec<String>,
    /// Human-readable trigger reasons per detected identifier.
    pub reasons: BTreeMap<String, Vec<String>>,
    /// Git repository status of the scanned directory.
    pub git_status: GitStatus,
}

impl DetectionResult {
    /// Adds `id` with `reason` unless the identifier is already present.
    pub(crate) fn add(&mut self, id: &str, reason: impl Into<String>) {
        if !self.ids.iter().any(|existing| existing == id) {
            self.ids.push(id.to_string());
        }
        let reasons = self.reasons.entry(id.to_string()).or_default();
        let reason = reason.into();
        if !reasons.contains(&reason) {
            reasons.push(reason);
        }
    }

    /// Returns `true` if `id` was detected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }
}

/// One filesystem entry in the navigable display tree.
///
/// Rebuilt on every scan call; never cached between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    /// Base name of the entry.
    pub name: String,
    /// Path relative to the scan root, slash-normalized.
    pub path: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Matched an ignore pattern or a system-hidden name.
    pub is_ignored: bool,
    /// Extension is in the fixed media/binary set (files only).
    pub is_media: bool,
    /// Known huge folder, folder over the entry threshold, or file over the
    /// size threshold. Massive folders carry no children.
    pub is_massive: bool,
    /// Depth below the scan root (root children are depth 0).
    pub depth: usize,
    /// Child nodes, folders sorted before files. Empty for files and for
    /// unexpanded massive folders.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// Kind of a [`TreeNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Regular file.
    File,
    /// Directory.
    Folder,
}

/// A selected file with its content, ready for merging.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Absolute path on disk.
    pub absolute_path: PathBuf,
    /// Path relative to the source root, slash-normalized.
    pub relative_path: String,
    /// Full UTF-8 content.
    pub content: String,
}

/// Outcome of one processing run, as reported to the caller.
///
/// Processing never raises: failures are reported through `success` and
/// `message` so the HTTP layer can forward them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Whether the run produced output.
    pub success: bool,
    /// Completion notice or failure description.
    pub message: String,
    /// Absolute path of the `Merged` output directory (empty on failure).
    pub output_path: String,
    /// Generated file names inside the output directory, tree listing first.
    pub files: Vec<String>,
    /// Whether the source `.gitignore` was modified to exclude the output
    /// folder (root save mode only).
    pub gitignore_modified: bool,
}

impl ProcessResult {
    /// Builds the failure result for `message`, with no output artifacts.
    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            output_path: String::new(),
            files: Vec::new(),
            gitignore_modified: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_result_deduplicates_ids() {
        let mut result = DetectionResult::default();
        result.add("react", "Dependency: react");
        result.add("react", "Dependency: react");
        result.add("react", "File trigger detected");

        assert_eq!(result.ids, vec!["react"]);
        assert_eq!(
            result.reasons["react"],
            vec!["Dependency: react", "File trigger detected"]
        );
    }

    #[test]
    fn test_git_status_serializes_lowercase() {
        let json = serde_json::to_string(&GitStatus::Ignored).unwrap();
        assert_eq!(json, "\"ignored\"");
    }
}
