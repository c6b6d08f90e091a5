//! Normalized match finder: nearest orders in standardized Lab space.
//!
//! Each Lab axis is centered and scaled by the candidate table's own
//! statistics before measuring distance, so an axis with a wide spread
//! (often L) cannot drown out the narrower ones.

use serde::Serialize;

use super::rank_indices;
use crate::color::LabColor;
use crate::record::{Order, OrderSummary};
use crate::round::round_to;

/// Per-axis standardization statistics, fitted on the candidate orders
/// only. The query is transformed with the same statistics; it never
/// contributes to them.
struct Standardizer {
    mean: [f64; 3],
    scale: [f64; 3],
}

impl Standardizer {
    /// Fit on the candidate table. Spread is the population standard
    /// deviation (divide by n, not n-1). An axis with zero spread keeps
    /// a scale of 1.0 so constant features pass through centered but
    /// otherwise untouched.
    fn fit(orders: &[Order]) -> Self {
        let n = orders.len() as f64;
        let mut mean = [0.0; 3];
        for o in orders {
            mean[0] += o.color.l;
            mean[1] += o.color.a;
            mean[2] += o.color.b;
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut var = [0.0; 3];
        for o in orders {
            let d = [o.color.l - mean[0], o.color.a - mean[1], o.color.b - mean[2]];
            for (v, d) in var.iter_mut().zip(d) {
                *v += d * d;
            }
        }
        let mut scale = [0.0; 3];
        for (s, v) in scale.iter_mut().zip(var) {
            let sd = (v / n).sqrt();
            *s = if sd == 0.0 { 1.0 } else { sd };
        }

        Standardizer { mean, scale }
    }

    fn transform(&self, color: LabColor) -> [f64; 3] {
        [
            (color.l - self.mean[0]) / self.scale[0],
            (color.a - self.mean[1]) / self.scale[1],
            (color.b - self.mean[2]) / self.scale[2],
        ]
    }
}

fn standardized_distance(p: [f64; 3], q: [f64; 3]) -> f64 {
    p.iter()
        .zip(q)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

/// One order selected by the normalized finder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMatch {
    /// 1-based position in this method's ranking.
    pub rank: usize,
    #[serde(flatten)]
    pub order: OrderSummary,
    /// Euclidean distance in standardized space, 4 decimals.
    pub normalized_distance: f64,
    /// Plain CIE76 delta E in unscaled Lab space, 2 decimals. Reported
    /// for comparison against the other finders; ranking ignores it.
    pub raw_distance: f64,
    /// `100 * exp(-normalizedDistance / 2)`, 1 decimal.
    pub match_percentage: f64,
}

/// Find the `top_n` orders closest to `query` in standardized Lab space.
///
/// Sorted ascending by normalized distance; ties keep candidate input
/// order. Returns fewer records when fewer candidates exist, empty for
/// an empty table (there is nothing to fit statistics on).
pub fn normalized_matches(query: LabColor, orders: &[Order], top_n: usize) -> Vec<NormalizedMatch> {
    if orders.is_empty() {
        return Vec::new();
    }

    let scaler = Standardizer::fit(orders);
    let query_scaled = scaler.transform(query);
    let distances: Vec<f64> = orders
        .iter()
        .map(|o| standardized_distance(scaler.transform(o.color), query_scaled))
        .collect();

    rank_indices(&distances, true, top_n)
        .into_iter()
        .enumerate()
        .map(|(i, idx)| {
            let distance = distances[idx];
            NormalizedMatch {
                rank: i + 1,
                order: OrderSummary::from(&orders[idx]),
                normalized_distance: round_to(distance, 4),
                raw_distance: round_to(query.delta_e(orders[idx].color), 2),
                match_percentage: round_to(100.0 * (-distance / 2.0).exp(), 1),
            }
        })
        .collect()
}
