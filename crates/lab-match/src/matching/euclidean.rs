//! Delta E match finder: nearest orders by CIE76 color difference.

use serde::Serialize;

use super::rank_indices;
use crate::color::{DeltaEBand, LabColor};
use crate::record::{Order, OrderSummary};
use crate::round::round_to;

/// One order selected by the delta E finder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EuclideanMatch {
    /// 1-based position in this method's ranking.
    pub rank: usize,
    #[serde(flatten)]
    pub order: OrderSummary,
    /// CIE76 color difference to the query, 3 decimals.
    pub delta_e: f64,
    /// `100 * exp(-deltaE / 10)`, 1 decimal. 100 at identity, decaying
    /// towards 0 as the colors drift apart.
    pub match_percentage: f64,
    pub interpretation: DeltaEBand,
    pub description: &'static str,
}

/// Find the `top_n` orders closest to `query` by CIE76 delta E.
///
/// Sorted ascending by delta E; ties keep candidate input order. Returns
/// fewer records when fewer candidates exist, empty for an empty table.
/// Classification happens on the unrounded distance.
pub fn euclidean_matches(query: LabColor, orders: &[Order], top_n: usize) -> Vec<EuclideanMatch> {
    let distances: Vec<f64> = orders.iter().map(|o| query.delta_e(o.color)).collect();

    rank_indices(&distances, true, top_n)
        .into_iter()
        .enumerate()
        .map(|(i, idx)| {
            let delta_e = distances[idx];
            let band = DeltaEBand::classify(delta_e);
            EuclideanMatch {
                rank: i + 1,
                order: OrderSummary::from(&orders[idx]),
                delta_e: round_to(delta_e, 3),
                match_percentage: round_to(100.0 * (-delta_e / 10.0).exp(), 1),
                interpretation: band,
                description: band.description(),
            }
        })
        .collect()
}
