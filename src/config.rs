// src/config.rs

//! Run configuration handed to the processing pipeline.
//!
//! A [`ProcessConfig`] is assembled by the caller (CLI here, an HTTP layer
//! elsewhere) and threaded explicitly through every stage; the core never
//! consults process-global state for the source directory or options.

use crate::constants::DEFAULT_MAX_CHARS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where the generated output lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SaveMode {
    /// A `TXT-Forge` subfolder beside the source.
    #[default]
    Root,
    /// A per-project folder inside the home-directory vault.
    Global,
    /// A caller-supplied absolute path.
    Custom,
}

/// Per-path override applied on top of the default inclusion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionAction {
    /// Force the path (and, for directories, everything below) into content.
    Include,
    /// Force the path out of content.
    Exclude,
}

/// Explicit include/exclude overrides keyed by slash-normalized relative
/// path. The empty-string key acts as a root-level default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionRules(BTreeMap<String, SelectionAction>);

impl SelectionRules {
    /// Returns `true` when no rules are present, which selects the
    /// template-driven strategy.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records a rule for `path`, replacing any previous action.
    pub fn insert(&mut self, path: impl Into<String>, action: SelectionAction) {
        self.0.insert(path.into(), action);
    }

    /// Resolves the action governing `rel_path`: the rule on the path itself
    /// wins, then the nearest ancestor directory's rule, then the root
    /// sentinel `""` if present.
    pub fn nearest(&self, rel_path: &str) -> Option<SelectionAction> {
        if let Some(action) = self.0.get(rel_path) {
            return Some(*action);
        }
        let mut prefix = rel_path;
        while let Some(idx) = prefix.rfind('/') {
            prefix = &prefix[..idx];
            if let Some(action) = self.0.get(prefix) {
                return Some(*action);
            }
        }
        self.0.get("").copied()
    }
}

/// Full configuration for one processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Absolute path of the project to process.
    pub source_dir: PathBuf,
    /// Active template identifiers. Unknown ids are dropped with a warning.
    pub template_ids: Vec<String>,
    /// Per-path include/exclude overrides.
    #[serde(default)]
    pub selection_rules: SelectionRules,
    /// Force the display tree to equal the content file set.
    #[serde(default)]
    pub hide_ignored_in_tree: bool,
    /// Character budget per generated chunk.
    pub max_chars: usize,
    /// Produce a single uncapped output file instead of split chunks.
    #[serde(default)]
    pub full_context: bool,
    /// Output destination policy.
    #[serde(default)]
    pub save_mode: SaveMode,
    /// Output directory for [`SaveMode::Custom`].
    #[serde(default)]
    pub custom_path: Option<PathBuf>,
}

impl ProcessConfig {
    /// Builds a configuration with default options for `source_dir`.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            template_ids: Vec::new(),
            selection_rules: SelectionRules::default(),
            hide_ignored_in_tree: false,
            max_chars: DEFAULT_MAX_CHARS,
            full_context: false,
            save_mode: SaveMode::Root,
            custom_path: None,
        }
    }
}
