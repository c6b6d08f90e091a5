use axum::{extract::State, response::Json, Json as JsonExtractor};
use lab_match::MatchResult;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::AppState;
use crate::services::TableStore;

/// Request body for a pigment-to-orders match
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    /// Id of the pigment to match against the order table
    pub pigment_id: String,
}

/// Match a pigment against the order table
///
/// Runs all three matching methods over the current order table, merges
/// them into a consensus ranking and plans tonnage allocation for the
/// top consensus orders. Matching runs on an immutable table snapshot,
/// so a concurrent upload never affects a response in flight.
#[utoipa::path(
    post,
    path = "/api/match/pigment-to-orders",
    request_body = MatchRequest,
    responses(
        (status = 200, description = "Per-method rankings, consensus and allocation plan"),
        (status = 404, description = "Pigment id unknown, or a table was never loaded"),
    ),
    tag = "Matching"
)]
pub async fn handle_match(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<MatchRequest>,
) -> Result<Json<MatchResult>, ApiError> {
    let pigment = state.catalog.pigment_by_id(&request.pigment_id).await?;
    let orders = state.catalog.orders().await?;

    let result = state.engine.match_orders(&pigment, &orders.records);

    tracing::info!(
        pigment_id = %pigment.id,
        order_count = orders.records.len(),
        consensus_count = result.consensus.len(),
        recommendation = ?result.allocation_plan.status,
        "Match completed"
    );

    Ok(Json(result))
}
