// src/constants.rs

//! Fixed sets and thresholds shared across the detection, scanning, and
//! merging stages.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Marker appended to the source project's `.gitignore` (and searched for
/// during detection) to exclude the tool's own output folder.
pub const GITIGNORE_MARKER: &str = "TXT-Forge";

/// Name of the output folder created beside the source in `root` save mode.
pub const OUTPUT_DIR_NAME: &str = "TXT-Forge";

/// Name of the per-project vault folder under the home directory in `global`
/// save mode.
pub const GLOBAL_VAULT_DIR: &str = ".txt-forge-vault";

/// Subfolder of the chosen output directory that receives generated chunks.
pub const MERGED_DIR_NAME: &str = "Merged";

/// Folders never recursed into by the tree scanner or the broad display scan.
pub static MASSIVE_FOLDERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "node_modules",
        ".git",
        ".godot",
        ".svelte-kit",
        ".next",
        "dist",
        "build",
        "vendor",
        "target",
    ]
    .into_iter()
    .collect()
});

/// Entries hidden from selection regardless of template patterns: VCS data,
/// OS metadata, dependency folders, lockfiles, and this tool's own output.
pub static SYSTEM_HIDDEN: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        ".git",
        ".DS_Store",
        "Thumbs.db",
        "node_modules",
        ".svelte-kit",
        GLOBAL_VAULT_DIR,
        OUTPUT_DIR_NAME,
        "package-lock.json",
        "yarn.lock",
        "pnpm-lock.yaml",
        "bun.lockb",
    ]
    .into_iter()
    .collect()
});

/// Ignore patterns applied on every run before template patterns are merged.
pub const BASE_IGNORE_PATTERNS: &[&str] = &[
    ".git",
    "node_modules",
    ".godot",
    OUTPUT_DIR_NAME,
    GLOBAL_VAULT_DIR,
    "*.import",
    "*.uid",
];

/// Extensions excluded from merged content no matter what the configuration
/// says. Lowercase, with leading dot.
pub static BINARY_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Images
        ".png", ".jpg", ".jpeg", ".gif", ".webp", ".ico", ".svg", ".bmp", ".tiff", ".heic",
        // Fonts
        ".ttf", ".otf", ".woff", ".woff2", ".eot",
        // Audio/Video
        ".mp3", ".wav", ".ogg", ".mp4", ".webm", ".mov", ".avi", ".mkv",
        // 3D models
        ".fbx", ".obj", ".blend", ".glb", ".gltf", ".3ds",
        // Archives/Binaries
        ".pdf", ".zip", ".tar", ".gz", ".7z", ".rar", ".exe", ".dll", ".so", ".dylib", ".bin",
        ".apk", ".aab",
        // Android signing
        ".keystore", ".jks",
    ]
    .into_iter()
    .collect()
});

/// Extensions flagged as media in the display tree. A slightly narrower set
/// than [`BINARY_EXTENSIONS`]: these still appear in the tree for context.
pub static MEDIA_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        ".png", ".jpg", ".jpeg", ".gif", ".webp", ".ico", ".svg", ".bmp", ".tiff", ".mp3",
        ".wav", ".ogg", ".mp4", ".webm", ".mov", ".avi", ".pdf", ".zip", ".tar", ".gz", ".7z",
        ".rar", ".exe", ".dll", ".so", ".dylib", ".bin", ".ttf", ".otf", ".woff", ".woff2",
        ".eot",
    ]
    .into_iter()
    .collect()
});

/// A folder below the scan root with more entries than this is not expanded
/// unless it is the explicit target of a lazy-load scan.
pub const MASSIVE_ENTRY_THRESHOLD: usize = 150;

/// Files larger than this are flagged massive in the display tree.
pub const MASSIVE_FILE_BYTES: u64 = 1024 * 1024;

/// Files larger than this are silently skipped during content collection.
pub const CONTENT_SIZE_CAP: u64 = 5 * 1024 * 1024;

/// Number of leading bytes inspected by the binary content sniff.
pub const SNIFF_LEN: usize = 4096;

/// Characters reserved for per-part headers when estimating multipart totals.
pub const MULTIPART_HEADER_RESERVE: usize = 500;

/// Maximum recursion depth of the detection-stage extension scan.
pub const EXTENSION_SCAN_DEPTH: usize = 3;

/// Default chunk budget when the caller does not supply one.
pub const DEFAULT_MAX_CHARS: usize = 100_000;
