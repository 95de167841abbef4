// src/filtering/mod.rs

//! Standalone filtering primitives shared by the tree scanner, the stack
//! detector, and the file selector.

mod binary;
mod patterns;

pub use binary::{dot_extension, is_binary_extension, is_media_extension, sniff_is_binary};
pub use patterns::{is_path_ignored, is_system_hidden, pattern_matches};
