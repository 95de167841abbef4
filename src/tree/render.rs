// src/tree/render.rs

//! Renders the `Source-Tree.txt` listing written next to merged chunks.
//!
//! The listing shows every file the run looked at, under a synthetic
//! `repository/` root. Files that appear in the tree but were not merged
//! (media, oversized, binary-sniffed) are marked with `*` so a reader knows
//! their content is absent from the chunks.

use std::collections::{BTreeMap, HashSet};

const TREE_HEADER: &str = "--- PROJECT STRUCTURE ---";
const TREE_LEGEND: &str = "* = shown for context only, not merged";

#[derive(Default)]
struct DirNode {
    dirs: BTreeMap<String, DirNode>,
    files: Vec<(String, bool)>,
}

/// Builds the project-structure text from the display file list.
///
/// `display_paths` are slash-normalized relative paths; `merged` is the set
/// of paths whose content made it into the chunks. Paths outside `merged`
/// get the context-only marker.
pub fn render_source_tree(display_paths: &[String], merged: &HashSet<String>) -> String {
    let mut root = DirNode::default();

    for path in display_paths {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some((file_name, dirs)) = segments.split_last() else {
            continue;
        };
        let mut node = &mut root;
        for dir in dirs {
            node = node.dirs.entry((*dir).to_string()).or_default();
        }
        node.files
            .push(((*file_name).to_string(), !merged.contains(path)));
    }

    let mut out = String::new();
    out.push_str(TREE_HEADER);
    out.push('\n');
    out.push_str(TREE_LEGEND);
    out.push_str("\n\n");
    out.push_str("repository/\n");
    render_node(&mut out, &mut root, "");
    out
}

fn render_node(out: &mut String, node: &mut DirNode, prefix: &str) {
    node.files.sort_by(|a, b| a.0.cmp(&b.0));

    let total = node.dirs.len() + node.files.len();
    let mut index = 0;

    // BTreeMap keeps directories sorted; they render before files.
    let dir_names: Vec<String> = node.dirs.keys().cloned().collect();
    for name in dir_names {
        index += 1;
        let last = index == total;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(&name);
        out.push_str("/\n");

        let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
        if let Some(child) = node.dirs.get_mut(&name) {
            render_node(out, child, &child_prefix);
        }
    }

    for (name, context_only) in &node.files {
        index += 1;
        let last = index == total;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(name);
        if *context_only {
            out.push_str(" *");
        }
        out.push('\n');
    }
}
