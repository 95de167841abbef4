// src/merge/split.rs

//! Splits one oversized file into ordered parts that each fit a budget.
//!
//! Cuts prefer the start of a new top-level declaration, found by a fixed
//! keyword heuristic. This is not a parser; the scorer is a plain function so
//! a different heuristic can be swapped in without touching the packing
//! algorithm. Fallbacks are the last newline in the window, then a hard cut.

use once_cell::sync::Lazy;
use regex::Regex;

/// Scores a window of text and returns the byte offset to cut at, or `None`
/// when the window has no recognizable boundary.
///
/// The returned offset must lie on a `char` boundary and be non-zero.
pub type BoundaryScorer = fn(&str) -> Option<usize>;

static DECLARATION_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\n(?:function|class|export|interface|type|def|func|const|let|var|public|private|protected|struct|impl|fn|package|import)\s",
    )
    .unwrap()
});

/// Default scorer: the last line in the window that starts a declaration.
/// The cut lands after the newline so the next part begins at the keyword.
pub fn declaration_boundary(window: &str) -> Option<usize> {
    DECLARATION_START
        .find_iter(window)
        .last()
        .map(|m| m.start() + 1)
        .filter(|cut| *cut > 1)
}

/// Carves `content` into ordered slices of at most `budget` bytes each.
///
/// Every slice but the last is cut at the scorer's boundary, else at the last
/// newline in the window, else hard at the budget. Slices are never empty, so
/// the loop always terminates.
pub fn split_into_parts(content: &str, budget: usize, scorer: BoundaryScorer) -> Vec<String> {
    let budget = budget.max(1);
    let mut parts = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        if rest.len() <= budget {
            parts.push(rest.to_string());
            break;
        }

        let window = &rest[..floor_char_boundary(rest, budget)];
        let mut cut = scorer(window).unwrap_or(0);
        if cut == 0 || cut >= window.len() {
            cut = match window.rfind('\n') {
                Some(idx) if idx > 0 => idx + 1,
                _ => window.len(),
            };
        }
        let cut = floor_char_boundary(rest, cut).max(1);

        parts.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }

    parts
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
