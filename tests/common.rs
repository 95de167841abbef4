// tests/common.rs

//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates an empty temporary project directory.
pub fn project() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Writes `content` to `rel` under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, content).expect("Failed to write fixture file");
}

/// A small Rust project: `Cargo.toml` trigger plus two source files.
pub fn rust_project() -> TempDir {
    let temp = project();
    write_file(temp.path(), "Cargo.toml", "[package]\nname = \"demo\"\n");
    write_file(temp.path(), "src/main.rs", "fn main() {\n    println!(\"hi\");\n}\n");
    write_file(temp.path(), "src/util.rs", "pub fn add(a: u32, b: u32) -> u32 {\n    a + b\n}\n");
    temp
}

/// A Node project with a React dependency, a JSX component, and a stylesheet.
pub fn react_project() -> TempDir {
    let temp = project();
    write_file(
        temp.path(),
        "package.json",
        r#"{"dependencies": {"react": "^18.0.0", "react-dom": "^18.0.0"}}"#,
    );
    write_file(temp.path(), "src/App.jsx", "export default function App() {}\n");
    write_file(temp.path(), "src/app.css", "body { margin: 0; }\n");
    temp
}
