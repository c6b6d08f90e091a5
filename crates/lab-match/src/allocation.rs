//! Greedy tonnage allocation across the top consensus orders, plus the
//! production recommendation derived from it.

use serde::Serialize;

use crate::consensus::ConsensusEntry;
use crate::record::Priority;
use crate::round::round_to;

/// How much of one order the available inventory covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FulfillmentStatus {
    Full,
    Partial,
    #[serde(rename = "Cannot Fulfill")]
    CannotFulfill,
}

/// Overall severity of the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    Success,
    Warning,
    Critical,
}

/// Allocation outcome for a single order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentEntry {
    pub order_id: String,
    pub customer_name: String,
    /// Tonnage the order asks for, passed through unrounded.
    pub required: f64,
    /// Tonnage allocated to it, 2 decimals.
    pub can_fulfill: f64,
    pub status: FulfillmentStatus,
    pub priority: Priority,
    /// `canFulfill / required` as a percentage, 1 decimal. Zero when the
    /// order requires nothing.
    pub fulfillment_percentage: f64,
}

/// Inventory recommendation for the top consensus orders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationPlan {
    pub status: RecommendationStatus,
    pub summary: String,
    pub available_tonnage: f64,
    pub total_required: f64,
    pub shortage: f64,
    pub can_fulfill_all: bool,
    pub fulfillment_details: Vec<FulfillmentEntry>,
    pub action_items: Vec<String>,
    /// Suggested production volume: the shortage plus a 10% buffer, or
    /// zero when inventory already covers everything.
    pub production_recommendation: f64,
    /// Combined tonnage of the high-priority orders in the input.
    pub high_priority_required: f64,
}

/// Allocate `available_tonnage` across `top_orders` greedily, in the
/// order given (callers pass consensus entries best-first).
///
/// Each order takes what it needs while inventory lasts; the first order
/// the remainder cannot cover gets a partial allocation and everything
/// after it gets nothing. The plan is `success` when inventory covers
/// the total, `warning` when some inventory exists, and `critical` when
/// there is none at all. An empty input is a success plan over zero
/// orders.
pub fn plan_allocation(top_orders: &[ConsensusEntry], available_tonnage: f64) -> AllocationPlan {
    let total_required: f64 = top_orders.iter().map(|e| e.order.required_tonnage).sum();
    let can_fulfill_all = available_tonnage >= total_required;

    let mut fulfillment_details = Vec::with_capacity(top_orders.len());
    let mut remaining = available_tonnage;

    for entry in top_orders {
        let required = entry.order.required_tonnage;

        let (amount, status) = if remaining >= required {
            remaining -= required;
            (required, FulfillmentStatus::Full)
        } else if remaining > 0.0 {
            let amount = remaining;
            remaining = 0.0;
            (amount, FulfillmentStatus::Partial)
        } else {
            (0.0, FulfillmentStatus::CannotFulfill)
        };

        fulfillment_details.push(FulfillmentEntry {
            order_id: entry.order.order_id.clone(),
            customer_name: entry.order.customer_name.clone(),
            required,
            can_fulfill: round_to(amount, 2),
            status,
            priority: entry.order.priority,
            fulfillment_percentage: if required > 0.0 {
                round_to(amount / required * 100.0, 1)
            } else {
                0.0
            },
        });
    }

    let shortage = (total_required - available_tonnage).max(0.0);
    let high_priority_required: f64 = top_orders
        .iter()
        .filter(|e| e.order.priority == Priority::High)
        .map(|e| e.order.required_tonnage)
        .sum();

    let (status, summary, action_items) = if can_fulfill_all {
        (
            RecommendationStatus::Success,
            format!(
                "Sufficient inventory to fulfill all {} matched orders.",
                top_orders.len()
            ),
            vec![
                format!("Available: {available_tonnage:.2} tonnes"),
                format!("Total Required: {total_required:.2} tonnes"),
                format!(
                    "Remaining after fulfillment: {:.2} tonnes",
                    available_tonnage - total_required
                ),
            ],
        )
    } else if available_tonnage > 0.0 {
        (
            RecommendationStatus::Warning,
            format!("Partial fulfillment possible. Production of {shortage:.2} tonnes recommended."),
            vec![
                format!("Available: {available_tonnage:.2} tonnes"),
                format!("Total Required: {total_required:.2} tonnes"),
                format!("Shortage: {shortage:.2} tonnes"),
                "Consider prioritizing high-priority orders first".to_string(),
            ],
        )
    } else {
        (
            RecommendationStatus::Critical,
            format!("No inventory available. Production of {total_required:.2} tonnes required."),
            vec![
                format!("Total production needed: {total_required:.2} tonnes"),
                "Prioritize based on order priority levels".to_string(),
            ],
        )
    };

    AllocationPlan {
        status,
        summary,
        available_tonnage: round_to(available_tonnage, 2),
        total_required: round_to(total_required, 2),
        shortage: round_to(shortage, 2),
        can_fulfill_all,
        fulfillment_details,
        action_items,
        production_recommendation: if shortage > 0.0 {
            round_to(shortage * 1.1, 2)
        } else {
            0.0
        },
        high_priority_required: round_to(high_priority_required, 2),
    }
}
