//! Packs selected file contents into bounded output chunks.
//!
//! Standard mode uses order-preserving next-fit: files are appended to the
//! current chunk until one would overflow, which flushes the chunk and starts
//! the next. Packing density is traded for predictable, human-navigable chunk
//! contents. Files too large for a chunk of their own are deferred to
//! multipart splitting after all standard chunks.
//!
//! Index blocks and per-file headers count against the budget, so every chunk
//! and every multipart part is at most `max_chars` on disk.

use crate::constants::MULTIPART_HEADER_RESERVE;
use crate::core_types::FileEntry;
use crate::errors::AppError;

mod split;

pub use split::{declaration_boundary, split_into_parts, BoundaryScorer};

/// One generated output file, not yet written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFile {
    /// File name inside the `Merged` directory.
    pub name: String,
    /// Full text content.
    pub content: String,
}

/// Chunk builder for one processing run.
pub struct Merger {
    max_chars: usize,
    boundary_scorer: BoundaryScorer,
}

impl Merger {
    /// Creates a merger with the given chunk budget.
    ///
    /// # Errors
    /// Returns [`AppError::ChunkBudgetTooSmall`] when the budget cannot cover
    /// the multipart header reserve.
    pub fn new(max_chars: usize) -> Result<Self, AppError> {
        if max_chars <= MULTIPART_HEADER_RESERVE {
            return Err(AppError::ChunkBudgetTooSmall(
                max_chars,
                MULTIPART_HEADER_RESERVE + 1,
            ));
        }
        Ok(Self {
            max_chars,
            boundary_scorer: declaration_boundary,
        })
    }

    /// Replaces the multipart boundary heuristic.
    pub fn with_boundary_scorer(mut self, scorer: BoundaryScorer) -> Self {
        self.boundary_scorer = scorer;
        self
    }

    /// Standard split mode: next-fit packing plus multipart handling for
    /// oversized files. Chunk numbering is continuous across both.
    pub fn merge(&self, files: &[FileEntry]) -> Vec<ChunkFile> {
        let mut chunks = Vec::new();
        let mut oversized: Vec<&FileEntry> = Vec::new();

        let mut current: Vec<(&str, String)> = Vec::new();
        let mut current_wrapped_len = 0usize;
        let mut chunk_number = 1usize;

        for file in files {
            let wrapped = wrap_entry(&file.relative_path, &file.content);

            if index_block_len(&[file.relative_path.as_str()]) + wrapped.len() > self.max_chars {
                log::debug!(
                    "Routing '{}' to multipart handling ({} chars wrapped)",
                    file.relative_path,
                    wrapped.len()
                );
                oversized.push(file);
                continue;
            }

            let mut paths: Vec<&str> = current.iter().map(|(path, _)| *path).collect();
            paths.push(file.relative_path.as_str());
            let candidate_len = index_block_len(&paths) + current_wrapped_len + wrapped.len();

            if !current.is_empty() && candidate_len > self.max_chars {
                chunks.push(build_chunk(chunk_number, &current));
                chunk_number += 1;
                current.clear();
                current_wrapped_len = 0;
            }

            current_wrapped_len += wrapped.len();
            current.push((file.relative_path.as_str(), wrapped));
        }

        if !current.is_empty() {
            chunks.push(build_chunk(chunk_number, &current));
            chunk_number += 1;
        }

        for file in oversized {
            chunks.extend(self.split_multipart(chunk_number, file));
            chunk_number += 1;
        }

        log::info!("Merged {} files into {} chunks", files.len(), chunks.len());
        chunks
    }

    /// Full-context mode: every file, alphabetical by relative path, in one
    /// uncapped output with the tree listing at the top.
    pub fn merge_full_context(&self, files: &[FileEntry], tree_block: &str) -> ChunkFile {
        let mut sorted: Vec<&FileEntry> = files.iter().collect();
        sorted.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        let mut content = String::from(tree_block);
        content.push('\n');
        for file in sorted {
            content.push_str(&wrap_entry(&file.relative_path, &file.content));
        }

        ChunkFile {
            name: "Source-1 (Full Context).txt".to_string(),
            content,
        }
    }

    fn split_multipart(&self, number: usize, file: &FileEntry) -> Vec<ChunkFile> {
        let budget = self.max_chars - MULTIPART_HEADER_RESERVE;
        let slices = split_into_parts(&file.content, budget, self.boundary_scorer);

        // Display estimate only; the loop above is driven by actual length.
        let total = file.content.len().div_ceil(budget).max(1);

        slices
            .into_iter()
            .enumerate()
            .map(|(i, slice)| {
                let part = i + 1;
                // Each part repeats the file header so a reader of a middle
                // part knows what it belongs to without the index line.
                let label = format!("{} (Part {}/{})", file.relative_path, part, total);
                let index = format!("--- INDEX ---\n{label}\n{}\n\n", "-".repeat(30));
                let rule = "=".repeat(50);
                let file_header = format!("\n{rule}\nFile: {label}\n{rule}\n\n");
                ChunkFile {
                    name: format!("Source-{number}.{part} (Multipart File).txt"),
                    content: format!("{index}{file_header}{slice}"),
                }
            })
            .collect()
    }
}

/// The per-file header wrapper applied before measurement.
fn wrap_entry(relative_path: &str, content: &str) -> String {
    let rule = "=".repeat(50);
    format!("\n{rule}\nFile: {relative_path}\n{rule}\n\n{content}\n\n")
}

fn index_block(paths: &[&str]) -> String {
    format!("--- INDEX ---\n{}\n{}\n\n", paths.join("\n"), "-".repeat(30))
}

fn index_block_len(paths: &[&str]) -> usize {
    index_block(paths).len()
}

fn build_chunk(number: usize, entries: &[(&str, String)]) -> ChunkFile {
    let paths: Vec<&str> = entries.iter().map(|(path, _)| *path).collect();
    let mut content = index_block(&paths);
    for (_, wrapped) in entries {
        content.push_str(wrapped);
    }
    ChunkFile {
        name: format!("Source-{} ({} Files).txt", number, entries.len()),
        content,
    }
}
