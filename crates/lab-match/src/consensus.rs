//! Cross-method consensus: one aggregated entry per order the finders
//! selected, scored so that breadth of agreement dominates rank.

use std::collections::HashMap;

use serde::Serialize;

use crate::matching::{CosineMatch, EuclideanMatch, NormalizedMatch};
use crate::record::OrderSummary;
use crate::round::round_to;

/// Aggregated view of one order across the three match finders.
///
/// A `None` rank means that finder did not select the order; it
/// serializes as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusEntry {
    #[serde(flatten)]
    pub order: OrderSummary,
    pub euclidean_rank: Option<usize>,
    pub cosine_rank: Option<usize>,
    pub normalized_rank: Option<usize>,
    /// Rounded delta E carried over from the euclidean record.
    pub euclidean_delta_e: Option<f64>,
    /// Rounded angular distance carried over from the cosine record.
    pub cosine_angular: Option<f64>,
    /// Rounded standardized distance carried over from the normalized
    /// record.
    pub normalized_distance: Option<f64>,
    /// How many of the three finders selected this order (1 to 3).
    pub methods_matched: usize,
    /// Mean of the ranks from the finders that selected it, 2 decimals.
    pub avg_rank: f64,
    /// `100 * methodsMatched - avgRank`, 2 decimals.
    pub consensus_score: f64,
}

impl ConsensusEntry {
    fn seed(order: OrderSummary) -> Self {
        ConsensusEntry {
            order,
            euclidean_rank: None,
            cosine_rank: None,
            normalized_rank: None,
            euclidean_delta_e: None,
            cosine_angular: None,
            normalized_distance: None,
            methods_matched: 0,
            avg_rank: 0.0,
            consensus_score: 0.0,
        }
    }
}

/// Look up the arena slot for `order`, seeding a fresh entry on first
/// sight. Entries keep the order they were first seen in.
fn slot<'a>(
    entries: &mut Vec<ConsensusEntry>,
    index: &mut HashMap<&'a str, usize>,
    order: &'a OrderSummary,
) -> usize {
    *index.entry(order.order_id.as_str()).or_insert_with(|| {
        entries.push(ConsensusEntry::seed(order.clone()));
        entries.len() - 1
    })
}

/// Merge the three finders' results into one entry per distinct order.
///
/// The score rewards breadth first: every extra agreeing finder adds
/// 100 while the average rank subtracts at most the list length, so an
/// order two finders agree on always outranks one only a single finder
/// selected. Entries are sorted descending by the rounded score; ties
/// keep first-seen order (the euclidean list is scanned first, then
/// cosine, then normalized).
pub fn analyze_consensus(
    euclidean: &[EuclideanMatch],
    cosine: &[CosineMatch],
    normalized: &[NormalizedMatch],
) -> Vec<ConsensusEntry> {
    let mut entries: Vec<ConsensusEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for m in euclidean {
        let i = slot(&mut entries, &mut index, &m.order);
        entries[i].euclidean_rank = Some(m.rank);
        entries[i].euclidean_delta_e = Some(m.delta_e);
    }
    for m in cosine {
        let i = slot(&mut entries, &mut index, &m.order);
        entries[i].cosine_rank = Some(m.rank);
        entries[i].cosine_angular = Some(m.angular_distance);
    }
    for m in normalized {
        let i = slot(&mut entries, &mut index, &m.order);
        entries[i].normalized_rank = Some(m.rank);
        entries[i].normalized_distance = Some(m.normalized_distance);
    }

    for entry in &mut entries {
        let mut methods = 0usize;
        let mut rank_sum = 0usize;
        for rank in [entry.euclidean_rank, entry.cosine_rank, entry.normalized_rank]
            .into_iter()
            .flatten()
        {
            methods += 1;
            rank_sum += rank;
        }
        // Every entry was seeded by at least one finder, so the average
        // is always defined.
        let avg_rank = rank_sum as f64 / methods as f64;
        entry.methods_matched = methods;
        entry.avg_rank = round_to(avg_rank, 2);
        entry.consensus_score = round_to(methods as f64 * 100.0 - avg_rank, 2);
    }

    // Stable sort on the rounded score keeps first-seen order for ties.
    entries.sort_by(|a, b| b.consensus_score.total_cmp(&a.consensus_score));
    entries
}
