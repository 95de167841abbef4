// tests/detection.rs

mod common;

use common::{project, react_project, write_file};
use txtforge::{detect_codebase, GitStatus};

#[test]
fn test_react_project_detects_framework_language_and_styles() {
    let temp = react_project();
    let result = detect_codebase(temp.path());

    assert!(result.contains("react"));
    assert!(result.contains("javascript"));
    assert!(result.contains("html-css"));
    assert!(!result.contains("typescript"));
    assert_eq!(result.reasons["react"], vec!["Dependency: react"]);
}

#[test]
fn test_typescript_dependency_replaces_javascript() {
    let temp = project();
    write_file(
        temp.path(),
        "package.json",
        r#"{"dependencies": {"next": "^14"}, "devDependencies": {"typescript": "^5"}}"#,
    );

    let result = detect_codebase(temp.path());
    assert!(result.contains("nextjs"));
    assert!(result.contains("typescript"));
    assert!(!result.contains("javascript"));
}

#[test]
fn test_composer_project_is_php() {
    let temp = project();
    write_file(
        temp.path(),
        "composer.json",
        r#"{"require": {"laravel/framework": "^11"}}"#,
    );

    let result = detect_codebase(temp.path());
    assert!(result.contains("laravel"));
    assert!(result.contains("php"));
}

#[test]
fn test_gradle_android_kotlin() {
    let temp = project();
    write_file(
        temp.path(),
        "build.gradle.kts",
        "plugins { id(\"com.android.application\"); kotlin(\"android\") }",
    );

    let result = detect_codebase(temp.path());
    assert!(result.contains("android"));
    assert!(result.contains("kotlin"));
}

#[test]
fn test_utility_stacks_found_by_extension_scan() {
    let temp = project();
    write_file(temp.path(), "Cargo.toml", "[package]");
    write_file(temp.path(), "db/schema.sql", "CREATE TABLE t (id INT);");
    write_file(temp.path(), "scripts/run.sh", "#!/bin/sh\n");

    let result = detect_codebase(temp.path());
    assert!(result.contains("rust"));
    assert!(result.contains("sql"));
    assert!(result.contains("bash-shell"));
}

#[test]
fn test_elixir_project_via_mix_trigger() {
    let temp = project();
    write_file(temp.path(), "mix.exs", "defmodule Demo.MixProject do\nend\n");

    let result = detect_codebase(temp.path());
    assert!(result.contains("elixir"));
}

#[test]
fn test_remix_dependency_detected_from_package_json() {
    let temp = project();
    write_file(
        temp.path(),
        "package.json",
        r#"{"dependencies": {"@remix-run/react": "^2", "@remix-run/node": "^2"}}"#,
    );

    let result = detect_codebase(temp.path());
    assert!(result.contains("remix"));
    assert!(result.contains("javascript"));
}

#[test]
fn test_empty_directory_yields_empty_result() {
    let temp = project();
    let result = detect_codebase(temp.path());
    assert!(result.ids.is_empty());
    assert_eq!(result.git_status, GitStatus::None);
}

#[test]
fn test_git_status_reflects_gitignore_marker() {
    let temp = project();
    std::fs::create_dir(temp.path().join(".git")).unwrap();
    assert_eq!(detect_codebase(temp.path()).git_status, GitStatus::Clean);

    write_file(temp.path(), ".gitignore", "TXT-Forge/\n");
    assert_eq!(detect_codebase(temp.path()).git_status, GitStatus::Ignored);
}
