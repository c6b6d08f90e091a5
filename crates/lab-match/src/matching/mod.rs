//! The three match finders
//!
//! Each finder scores every candidate order against the query color under
//! its own metric and reports the top N as self-contained match records.
//! The finders share one contract:
//!
//! - output is sorted best-first by the method's own preference
//! - ranks are 1-based and dense, assigned in sorted order
//! - ties keep the candidates' input order (stable sort)
//! - N is clamped to the candidate count; an empty candidate set yields
//!   an empty list, never an error
//!
//! | Method | Measures | Order |
//! |--------|----------|-------|
//! | [`euclidean_matches`] | CIE76 delta E | ascending |
//! | [`cosine_matches`] | direction alignment of the Lab vectors | descending similarity |
//! | [`normalized_matches`] | Euclidean distance after per-feature standardization | ascending |
//!
//! The methods are deliberately independent: delta E weights lightness and
//! chroma as measured, cosine ignores magnitude entirely, and the
//! normalized method rebalances the three axes by their spread across the
//! current order table. The consensus stage reconciles their disagreements.

mod cosine;
mod euclidean;
mod normalized;

pub use cosine::{cosine_matches, CosineMatch};
pub use euclidean::{euclidean_matches, EuclideanMatch};
pub use normalized::{normalized_matches, NormalizedMatch};

/// Default number of matches each finder reports.
pub const DEFAULT_TOP_N: usize = 3;

/// Candidate indices ordered by score, stable on ties, truncated to `top_n`.
pub(crate) fn rank_indices(scores: &[f64], ascending: bool, top_n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    if ascending {
        indices.sort_by(|&i, &j| scores[i].total_cmp(&scores[j]));
    } else {
        indices.sort_by(|&i, &j| scores[j].total_cmp(&scores[i]));
    }
    indices.truncate(top_n);
    indices
}
