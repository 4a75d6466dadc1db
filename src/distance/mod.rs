//! Token-aware weighted edit distance engine.
//!
//! The engine computes a modified Damerau–Levenshtein distance (insertions,
//! deletions, substitutions, transpositions) that also accounts for
//! duplicated characters, multi-token strings, token-initial character
//! changes, per-string and per-token edit limits, length-proportional edit
//! limits, token-count differences, and strings that differ only by
//! tokenization.

mod cell;
mod engine;
mod item;
mod row;

pub use engine::TokenAwareEditDistance;

/// Sentinel returned when a comparison is over any edit limit (including
/// early termination). Infinity is used so callers can still do arithmetic
/// with the result.
pub const OVER_LIMIT: f32 = f32::INFINITY;

/// Per-comparison computed values, passed to every cost-evaluation site.
///
/// These are specific to the pair of strings currently being compared: the
/// effective limits for this call and whether the two canonical forms are
/// equal once every token separator is removed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ComparisonInfo {
    /// Raw edit limit for the current pair (0 = no limit)
    pub(crate) curr_edit_limit: f32,
    /// Percentage edit limit for the current pair (0 = no limit)
    pub(crate) curr_edit_norm_limit: f32,
    /// Do the current strings have spaceless equality?
    pub(crate) spaceless_equals: bool,
}

impl ComparisonInfo {
    pub(crate) fn new(
        curr_edit_limit: f32,
        curr_edit_norm_limit: f32,
        spaceless_equals: bool,
    ) -> Self {
        ComparisonInfo {
            curr_edit_limit,
            curr_edit_norm_limit,
            spaceless_equals,
        }
    }
}
