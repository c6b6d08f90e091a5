//! Cosine match finder: orders with the most aligned color direction.
//!
//! Treats each Lab point as a 3-vector from the origin and ranks by the
//! angle between query and candidate, ignoring vector length. A saturated
//! and a washed-out rendition of the same hue rank close together here
//! even when their delta E is large, which is exactly the disagreement
//! the consensus stage is built to surface.

use serde::Serialize;

use super::rank_indices;
use crate::color::{AngularBand, LabColor};
use crate::record::{Order, OrderSummary};
use crate::round::round_to;

/// One order selected by the cosine finder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CosineMatch {
    /// 1-based position in this method's ranking.
    pub rank: usize,
    #[serde(flatten)]
    pub order: OrderSummary,
    /// Cosine similarity of the two Lab vectors, 4 decimals.
    pub similarity: f64,
    /// Angle between the vectors in degrees, 2 decimals.
    pub angular_distance: f64,
    /// Plain CIE76 delta E for the same pair, 2 decimals. Auxiliary
    /// context so a reader can see when direction and distance disagree.
    pub euclidean_distance: f64,
    pub interpretation: AngularBand,
    pub description: &'static str,
}

/// Find the `top_n` orders most aligned with `query` by cosine similarity.
///
/// Sorted descending by similarity; ties keep candidate input order.
/// Classification happens on the unrounded angular distance.
pub fn cosine_matches(query: LabColor, orders: &[Order], top_n: usize) -> Vec<CosineMatch> {
    let similarities: Vec<f64> = orders
        .iter()
        .map(|o| query.cosine_similarity(o.color))
        .collect();

    rank_indices(&similarities, false, top_n)
        .into_iter()
        .enumerate()
        .map(|(i, idx)| {
            let candidate = orders[idx].color;
            let angular = query.angular_distance_deg(candidate);
            let band = AngularBand::classify(angular);
            CosineMatch {
                rank: i + 1,
                order: OrderSummary::from(&orders[idx]),
                similarity: round_to(similarities[idx], 4),
                angular_distance: round_to(angular, 2),
                euclidean_distance: round_to(query.delta_e(candidate), 2),
                interpretation: band,
                description: band.description(),
            }
        })
        .collect()
}
