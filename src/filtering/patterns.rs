// src/filtering/patterns.rs

//! Deliberately simplified gitignore-style pattern matching.
//!
//! This is not a full `.gitignore` implementation: negation is disabled,
//! wildcards are suffix-only, and there is no mid-string globbing. The rules
//! are evaluated in a fixed precedence so both the tree scanner and the file
//! selector agree on what "ignored" means. Name comparison is case-sensitive
//! throughout, matching gitignore convention on POSIX systems.

use crate::constants::SYSTEM_HIDDEN;

/// Returns `true` if `name` is a dotfile or one of the fixed system-hidden
/// names (VCS data, dependency folders, lockfiles, this tool's own output).
pub fn is_system_hidden(name: &str) -> bool {
    name.starts_with('.') || SYSTEM_HIDDEN.contains(name)
}

/// Evaluates one pattern against one entry.
///
/// `rel_path` is the slash-normalized path of the entry relative to the scan
/// root, `name` its base name, and `is_dir` whether the entry is a directory.
///
/// Precedence:
/// 1. `!pattern` never matches (negation is disabled).
/// 2. `pattern/` only matches directory entries; the slash is stripped.
/// 3. `*suffix` matches if the base name ends with `suffix`.
/// 4. `/rooted` matches the relative path `rooted` and anything nested under it.
/// 5. A pattern without `/` matches the base name exactly.
/// 6. A pattern with `/` matches the relative path and anything nested under it.
pub fn pattern_matches(rel_path: &str, name: &str, pattern: &str, is_dir: bool) -> bool {
    let trimmed = pattern.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
        return false;
    }

    let normalized = trimmed.replace('\\', "/");
    let mut p = normalized.as_str();

    if p.len() > 1 && p.ends_with('/') {
        if !is_dir {
            return false;
        }
        p = &p[..p.len() - 1];
    }

    if let Some(suffix) = p.strip_prefix('*') {
        return name.ends_with(suffix);
    }

    if let Some(rooted) = p.strip_prefix('/') {
        return rel_path == rooted || rel_path.starts_with(&format!("{rooted}/"));
    }

    if !p.contains('/') {
        return name == p;
    }

    rel_path == p || rel_path.starts_with(&format!("{p}/"))
}

/// Returns `true` if any segment along `rel_path` is system-hidden or matches
/// any of the accumulated `patterns`.
///
/// A pattern hitting an ancestor directory therefore ignores the entire
/// subtree below it.
pub fn is_path_ignored(rel_path: &str, is_dir: bool, patterns: &[String]) -> bool {
    let segments: Vec<&str> = rel_path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return false;
    }

    let mut prefix = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(segment);

        if is_system_hidden(segment) {
            log::trace!("Path '{}' ignored: system-hidden segment '{}'", rel_path, segment);
            return true;
        }

        // Every non-final segment is necessarily a directory.
        let segment_is_dir = i + 1 < segments.len() || is_dir;
        if patterns
            .iter()
            .any(|pat| pattern_matches(&prefix, segment, pat, segment_is_dir))
        {
            log::trace!("Path '{}' ignored: pattern hit on '{}'", rel_path, prefix);
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(rel: &str, pattern: &str, is_dir: bool) -> bool {
        let name = rel.rsplit('/').next().unwrap();
        pattern_matches(rel, name, pattern, is_dir)
    }

    #[test]
    fn test_negation_never_matches() {
        assert!(!matches("keep.log", "!keep.log", false));
        assert!(!matches("keep.log", "!*.log", false));
    }

    #[test]
    fn test_directory_only_pattern() {
        assert!(matches("dist", "dist/", true));
        assert!(!matches("dist", "dist/", false));
    }

    #[test]
    fn test_wildcard_is_suffix_only() {
        assert!(matches("debug.log", "*.log", false));
        assert!(matches("nested/deep/trace.log", "*.log", false));
        // No mid-string globbing.
        assert!(!matches("logfile.txt", "*.log", false));
    }

    #[test]
    fn test_rooted_pattern() {
        assert!(matches("build", "/build", true));
        assert!(matches("build/main.o", "/build", false));
        assert!(!matches("src/build", "/build", true));
    }

    #[test]
    fn test_bare_name_matches_basename_case_sensitively() {
        assert!(matches("src/node_modules", "node_modules", true));
        assert!(!matches("src/Node_Modules", "node_modules", true));
        assert!(!matches("node_modules_backup", "node_modules", true));
    }

    #[test]
    fn test_relative_path_pattern() {
        assert!(matches("src/lib", "src/lib", true));
        assert!(matches("src/lib/util.rs", "src/lib", false));
        assert!(!matches("other/src/lib", "src/lib", true));
    }

    #[test]
    fn test_comment_and_blank_lines_never_match() {
        assert!(!matches("x", "# comment", false));
        assert!(!matches("x", "   ", false));
    }

    #[test]
    fn test_system_hidden_names() {
        assert!(is_system_hidden(".git"));
        assert!(is_system_hidden(".anything"));
        assert!(is_system_hidden("node_modules"));
        assert!(is_system_hidden("yarn.lock"));
        assert!(!is_system_hidden("src"));
    }

    #[test]
    fn test_ignored_via_ancestor_segment() {
        let patterns = vec!["dist".to_string()];
        assert!(is_path_ignored("dist/app.js", false, &patterns));
        assert!(is_path_ignored("src/.hidden/file.txt", false, &[]));
        assert!(!is_path_ignored("src/main.rs", false, &patterns));
    }

    #[test]
    fn test_dir_only_pattern_applies_to_ancestors() {
        // "build/" should still ignore files inside build, because the
        // matched ancestor segment is a directory.
        let patterns = vec!["build/".to_string()];
        assert!(is_path_ignored("build/out.bin", false, &patterns));
        assert!(!is_path_ignored("build", false, &patterns));
        assert!(is_path_ignored("build", true, &patterns));
    }
}
