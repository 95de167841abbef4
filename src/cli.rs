// src/cli.rs

use crate::config::{ProcessConfig, SaveMode};
use crate::constants::DEFAULT_MAX_CHARS;
use clap::Parser;
use std::path::PathBuf;

/// Merges a project's source files into LLM-ready text chunks.
///
/// txtforge detects the technology stack of a directory, selects the source
/// files that matter (honoring gitignore-style patterns and binary/media
/// gates), and packs their contents into character-bounded chunk files with
/// per-file headers, an index block, and a project tree listing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the project directory to process.
    #[arg(default_value = ".")]
    pub source_dir: PathBuf,

    /// Print the detection result as JSON and exit without processing.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub detect_only: bool,

    // --- Selection Options ---
    /// Template identifiers to activate (comma-separated). Defaults to the
    /// live detection result.
    #[arg(long, value_name = "IDS", value_delimiter = ',')]
    pub templates: Option<Vec<String>>,

    /// Limit the tree listing to merged files only.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub hide_ignored: bool,

    // --- Output Options ---
    /// Character budget per generated chunk.
    #[arg(long, value_name = "CHARS", default_value_t = DEFAULT_MAX_CHARS)]
    pub max_chars: usize,

    /// Produce a single uncapped output file instead of split chunks.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub full_context: bool,

    /// Where the generated output lands.
    #[arg(long, value_enum, default_value = "root")]
    pub save_mode: SaveMode,

    /// Output directory for `--save-mode custom`.
    #[arg(long, value_name = "PATH")]
    pub custom_path: Option<PathBuf>,
}

impl Cli {
    /// Builds the processing configuration, using `template_ids` as the
    /// active set (already resolved from `--templates` or detection).
    pub fn to_config(&self, template_ids: Vec<String>) -> ProcessConfig {
        let mut config = ProcessConfig::new(self.source_dir.clone());
        config.template_ids = template_ids;
        config.hide_ignored_in_tree = self.hide_ignored;
        config.max_chars = self.max_chars;
        config.full_context = self.full_context;
        config.save_mode = self.save_mode;
        config.custom_path = self.custom_path.clone();
        config
    }
}
