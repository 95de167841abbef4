// tests/process.rs

mod common;

use common::{project, rust_project, write_file};
use std::fs;
use txtforge::{process_files, ProcessConfig, SaveMode};

fn config_for(temp: &tempfile::TempDir, ids: &[&str]) -> ProcessConfig {
    let mut config = ProcessConfig::new(temp.path());
    config.template_ids = ids.iter().map(|s| s.to_string()).collect();
    config
}

#[test]
fn test_empty_project_fails_without_creating_output() {
    let temp = project();
    let result = process_files(&config_for(&temp, &["rust"]));

    assert!(!result.success);
    assert_eq!(result.message, "No matching files found.");
    assert!(result.output_path.is_empty());
    assert!(!temp.path().join("TXT-Forge").exists());
}

#[test]
fn test_root_save_mode_produces_tree_and_chunk() {
    let temp = rust_project();
    let result = process_files(&config_for(&temp, &["rust"]));

    assert!(result.success, "{}", result.message);
    let merged = temp.path().join("TXT-Forge").join("Merged");
    assert_eq!(result.output_path, merged.display().to_string());
    assert_eq!(result.files[0], "Source-Tree.txt");
    assert!(result.files[1].starts_with("Source-1 ("));

    let tree = fs::read_to_string(merged.join("Source-Tree.txt")).unwrap();
    assert!(tree.starts_with("--- PROJECT STRUCTURE ---"));
    assert!(tree.contains("repository/"));
    assert!(tree.contains("main.rs"));

    let chunk = fs::read_to_string(merged.join(&result.files[1])).unwrap();
    assert!(chunk.starts_with("--- INDEX ---"));
    assert!(chunk.contains("File: src/main.rs"));
    assert!(chunk.contains("println!"));
}

#[test]
fn test_root_save_mode_marks_gitignore_once() {
    let temp = rust_project();

    let first = process_files(&config_for(&temp, &["rust"]));
    assert!(first.success);
    assert!(first.gitignore_modified);
    let gitignore = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert!(gitignore.contains("TXT-Forge/"));

    let second = process_files(&config_for(&temp, &["rust"]));
    assert!(second.success);
    assert!(!second.gitignore_modified);
}

#[test]
fn test_reruns_are_idempotent() {
    let temp = rust_project();
    let config = config_for(&temp, &["rust"]);

    let first = process_files(&config);
    let merged = temp.path().join("TXT-Forge").join("Merged");
    let chunk_name = first.files[1].clone();
    let first_content = fs::read_to_string(merged.join(&chunk_name)).unwrap();

    // A stale artifact must not survive the next run.
    fs::write(merged.join("stale.txt"), "old").unwrap();

    let second = process_files(&config);
    assert_eq!(first.files, second.files);
    assert!(!merged.join("stale.txt").exists());
    assert_eq!(
        fs::read_to_string(merged.join(&chunk_name)).unwrap(),
        first_content
    );
}

#[test]
fn test_custom_save_mode_writes_to_given_path() {
    let temp = rust_project();
    let out = project();

    let mut config = config_for(&temp, &["rust"]);
    config.save_mode = SaveMode::Custom;
    config.custom_path = Some(out.path().to_path_buf());

    let result = process_files(&config);
    assert!(result.success, "{}", result.message);
    assert!(out.path().join("Merged").join("Source-Tree.txt").exists());
    // Custom mode never touches the source .gitignore.
    assert!(!result.gitignore_modified);
    assert!(!temp.path().join(".gitignore").exists());
}

#[test]
fn test_custom_save_mode_without_path_is_a_config_failure() {
    let temp = rust_project();
    let mut config = config_for(&temp, &["rust"]);
    config.save_mode = SaveMode::Custom;

    let result = process_files(&config);
    assert!(!result.success);
    assert!(result.message.contains("Invalid save path configuration"));
}

#[test]
fn test_full_context_mode_produces_single_file() {
    let temp = rust_project();
    let mut config = config_for(&temp, &["rust"]);
    config.full_context = true;

    let result = process_files(&config);
    assert!(result.success);
    assert_eq!(result.files, vec!["Source-1 (Full Context).txt".to_string()]);

    let merged = temp.path().join("TXT-Forge").join("Merged");
    let content = fs::read_to_string(merged.join(&result.files[0])).unwrap();
    assert!(content.starts_with("--- PROJECT STRUCTURE ---"));
    assert!(content.contains("File: src/main.rs"));
    assert!(!merged.join("Source-Tree.txt").exists());
}

#[test]
fn test_tree_marks_context_only_files() {
    let temp = rust_project();
    write_file(temp.path(), "docs/notes.md", "# notes");

    let result = process_files(&config_for(&temp, &["rust"]));
    assert!(result.success);

    let tree = fs::read_to_string(
        temp.path()
            .join("TXT-Forge")
            .join("Merged")
            .join("Source-Tree.txt"),
    )
    .unwrap();
    assert!(tree.contains("notes.md *"));
    assert!(tree.contains("main.rs\n") || tree.contains("main.rs"));
}

#[test]
fn test_chunk_budget_too_small_is_reported() {
    let temp = rust_project();
    let mut config = config_for(&temp, &["rust"]);
    config.max_chars = 100;

    let result = process_files(&config);
    assert!(!result.success);
    assert!(result.message.contains("Chunk budget"));
    assert!(!temp.path().join("TXT-Forge").exists());
}
