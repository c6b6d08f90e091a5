//! The match engine: runs every finder over the order table and
//! assembles the full result for one pigment.

use serde::Serialize;

use crate::allocation::{plan_allocation, AllocationPlan};
use crate::consensus::{analyze_consensus, ConsensusEntry};
use crate::matching::{
    cosine_matches, euclidean_matches, normalized_matches, CosineMatch, EuclideanMatch,
    NormalizedMatch, DEFAULT_TOP_N,
};
use crate::record::{Order, Pigment};

/// The allocation plan always covers the best three consensus orders,
/// even when the finders are asked for longer lists.
const ALLOCATION_DEPTH: usize = 3;

/// The queried pigment as echoed in a match result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PigmentDetails {
    pub id: String,
    #[serde(rename = "L")]
    pub l: f64,
    pub a: f64,
    pub b: f64,
    /// sRGB rendering of the pigment color.
    pub hex: String,
    pub available_tonnage: f64,
}

impl From<&Pigment> for PigmentDetails {
    fn from(pigment: &Pigment) -> Self {
        PigmentDetails {
            id: pigment.id.clone(),
            l: pigment.color.l,
            a: pigment.color.a,
            b: pigment.color.b,
            hex: pigment.color.to_hex(),
            available_tonnage: pigment.available_tonnage,
        }
    }
}

/// Everything one pigment-to-orders query produces: the three method
/// rankings, the consensus over them, and the allocation plan for the
/// pigment's inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub pigment: PigmentDetails,
    pub euclidean_matches: Vec<EuclideanMatch>,
    pub cosine_matches: Vec<CosineMatch>,
    pub normalized_matches: Vec<NormalizedMatch>,
    pub consensus: Vec<ConsensusEntry>,
    pub allocation_plan: AllocationPlan,
}

/// Stateless pipeline runner. Holds only the per-method list length, so
/// one engine can serve any number of queries concurrently.
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine {
    top_n: usize,
}

impl MatchEngine {
    /// Engine returning the default three matches per method.
    pub fn new() -> Self {
        MatchEngine { top_n: DEFAULT_TOP_N }
    }

    /// Ask every finder for up to `top_n` matches instead.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Run the full pipeline for one pigment against the order table.
    ///
    /// An empty table degrades cleanly: every ranking comes back empty
    /// and the allocation plan covers zero orders.
    pub fn match_orders(&self, pigment: &Pigment, orders: &[Order]) -> MatchResult {
        let euclidean = euclidean_matches(pigment.color, orders, self.top_n);
        let cosine = cosine_matches(pigment.color, orders, self.top_n);
        let normalized = normalized_matches(pigment.color, orders, self.top_n);
        let consensus = analyze_consensus(&euclidean, &cosine, &normalized);

        let depth = consensus.len().min(ALLOCATION_DEPTH);
        let allocation_plan = plan_allocation(&consensus[..depth], pigment.available_tonnage);

        MatchResult {
            pigment: PigmentDetails::from(pigment),
            euclidean_matches: euclidean,
            cosine_matches: cosine,
            normalized_matches: normalized,
            consensus,
            allocation_plan,
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
