//! lab-match: CIELAB color matching and tonnage allocation for pigment
//! production planning.
//!
//! Given one pigment and a table of customer orders (each with a target
//! Lab color and a required tonnage), this library ranks the orders by
//! color closeness under three independent methods, merges the rankings
//! into a consensus, and allocates the pigment's available inventory
//! across the best consensus orders.
//!
//! # Quick Start
//!
//! The [`MatchEngine`] runs the whole pipeline:
//!
//! ```
//! use lab_match::{LabColor, MatchEngine, Order, Pigment, Priority};
//!
//! let pigment = Pigment::new("PIG-0001", LabColor::new(50.0, 20.0, -10.0), 25.0);
//! let orders = vec![
//!     Order::new("ORD-2024-0001", "Acme Corp", LabColor::new(52.0, 21.0, -9.0), 10.0, Priority::High),
//!     Order::new("ORD-2024-0002", "Global Industries", LabColor::new(47.0, 18.0, -12.0), 10.0, Priority::Medium),
//! ];
//!
//! let result = MatchEngine::new().match_orders(&pigment, &orders);
//!
//! assert_eq!(result.euclidean_matches[0].order.order_id, "ORD-2024-0001");
//! assert_eq!(result.consensus.len(), 2);
//! assert!(result.allocation_plan.can_fulfill_all);
//! ```
//!
//! # Three Methods, Three Notions of "Close"
//!
//! No single distance tells the whole story of color closeness, so the
//! engine runs three finders and lets their agreement decide:
//!
//! | Method | Measures | Ranks by |
//! |--------|----------|----------|
//! | Euclidean | CIE76 delta E in Lab space | ascending distance |
//! | Cosine | direction of the Lab vector (hue family, ignoring magnitude) | descending similarity |
//! | Normalized | Euclidean distance after per-axis standardization over the candidate table | ascending distance |
//!
//! **Euclidean** is the perceptual baseline: CIE76 delta E is the plain
//! distance in Lab space, and the bands in [`DeltaEBand`] translate it
//! into how visible the difference is to a human observer.
//!
//! **Cosine** deliberately ignores magnitude. Two colors on the same ray
//! from the Lab origin score a similarity of 1.0 even when they are far
//! apart, which surfaces orders in the right color family whose depth
//! could be corrected in production. [`AngularBand`] grades the angle
//! between the vectors.
//!
//! **Normalized** guards against one axis dominating. Order tables often
//! spread much wider in lightness than in the chromatic axes; measuring
//! in standardized space keeps a small hue offset from being drowned out
//! by a routine lightness spread. The statistics are fitted on the
//! candidate table alone and the query is projected with them.
//!
//! # Pipeline Overview
//!
//! ```text
//! Pigment + Vec<Order>
//!     |
//!     +---> euclidean_matches()  \
//!     +---> cosine_matches()      +--> analyze_consensus()
//!     +---> normalized_matches() /         |
//!     |                                    v
//!     |                    best 3 entries by consensus score
//!     |                                    |
//!     +-- availableTonnage --> plan_allocation()
//!                                          |
//!                                          v
//!                                    MatchResult
//! ```
//!
//! Every finder honors the same contract: dense 1-based ranks, ties kept
//! in candidate input order, at most `top_n` records, and an empty table
//! yields an empty ranking.
//!
//! # Consensus Scoring
//!
//! `consensusScore = 100 * methodsMatched - avgRank`. Each agreeing
//! method is worth 100 while the average rank subtracts at most the
//! list length, so breadth of agreement always dominates: an order two
//! methods place last still outranks an order a single method places
//! first. The allocation plan then walks the best three consensus
//! orders greedily, fulfilling each in full until inventory runs short.

pub mod allocation;
pub mod color;
pub mod consensus;
pub mod engine;
pub mod matching;
pub mod record;
pub mod round;


pub use allocation::{
    plan_allocation, AllocationPlan, FulfillmentEntry, FulfillmentStatus, RecommendationStatus,
};
pub use color::{AngularBand, DeltaEBand, LabColor};
pub use consensus::{analyze_consensus, ConsensusEntry};
pub use engine::{MatchEngine, MatchResult, PigmentDetails};
pub use matching::{
    cosine_matches, euclidean_matches, normalized_matches, CosineMatch, EuclideanMatch,
    NormalizedMatch, DEFAULT_TOP_N,
};
pub use record::{Order, OrderSummary, Pigment, Priority, RecordError};
