use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Json as JsonExtractor,
};
use chrono::{DateTime, Utc};
use lab_match::{OrderSummary, PigmentDetails};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{orders_from_rows, pigments_from_rows, OrderRow, PigmentRow};
use crate::server::AppState;
use crate::services::TableStore;

/// Request body for replacing the pigment table
#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadPigmentsRequest {
    /// Rows in table column format; `PigmentID` is generated when absent
    pub pigments: Vec<PigmentRow>,
}

/// Request body for replacing the order table
#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadOrdersRequest {
    /// Rows in table column format; `OrderID`, `CustomerName` and
    /// `Priority` are defaulted when absent
    pub orders: Vec<OrderRow>,
}

/// Response from a table upload
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Status code (200 = success)
    pub status: u16,
    /// Number of records now in the table
    pub count: usize,
}

/// Current pigment table
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PigmentTableResponse {
    /// Status code (200 = success)
    pub status: u16,
    /// Number of records in the table
    pub count: usize,
    /// When this table was loaded
    #[schema(value_type = String)]
    pub loaded_at: DateTime<Utc>,
    /// Pigment records with hex previews recomputed from Lab
    #[schema(value_type = Vec<Object>)]
    pub pigments: Vec<PigmentDetails>,
}

/// Current order table
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderTableResponse {
    /// Status code (200 = success)
    pub status: u16,
    /// Number of records in the table
    pub count: usize,
    /// When this table was loaded
    #[schema(value_type = String)]
    pub loaded_at: DateTime<Utc>,
    /// Order records with hex previews recomputed from Lab
    #[schema(value_type = Vec<Object>)]
    pub orders: Vec<OrderSummary>,
}

/// List the pigment table
#[utoipa::path(
    get,
    path = "/api/pigments",
    responses(
        (status = 200, description = "Current pigment table", body = PigmentTableResponse),
        (status = 404, description = "No pigment table loaded"),
    ),
    tag = "Tables"
)]
pub async fn handle_list_pigments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.catalog.pigments().await?;
    let pigments: Vec<PigmentDetails> = snapshot.records.iter().map(PigmentDetails::from).collect();

    Ok(Json(PigmentTableResponse {
        status: 200,
        count: pigments.len(),
        loaded_at: snapshot.loaded_at,
        pigments,
    }))
}

/// List the order table
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "Current order table", body = OrderTableResponse),
        (status = 404, description = "No order table loaded"),
    ),
    tag = "Tables"
)]
pub async fn handle_list_orders(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.catalog.orders().await?;
    let orders: Vec<OrderSummary> = snapshot.records.iter().map(OrderSummary::from).collect();

    Ok(Json(OrderTableResponse {
        status: 200,
        count: orders.len(),
        loaded_at: snapshot.loaded_at,
        orders,
    }))
}

/// Replace the pigment table
///
/// Validates every row up front; the previous table stays in place
/// when any row is rejected.
#[utoipa::path(
    post,
    path = "/api/pigments",
    request_body = UploadPigmentsRequest,
    responses(
        (status = 200, description = "Pigment table replaced", body = UploadResponse),
        (status = 400, description = "A row failed validation"),
    ),
    tag = "Tables"
)]
pub async fn handle_upload_pigments(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<UploadPigmentsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let pigments = pigments_from_rows(request.pigments)?;
    let count = state.catalog.replace_pigments(pigments).await?;

    tracing::info!(count, "Pigment table replaced");

    Ok(Json(UploadResponse { status: 200, count }))
}

/// Replace the order table
///
/// Validates every row up front; the previous table stays in place
/// when any row is rejected.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = UploadOrdersRequest,
    responses(
        (status = 200, description = "Order table replaced", body = UploadResponse),
        (status = 400, description = "A row failed validation"),
    ),
    tag = "Tables"
)]
pub async fn handle_upload_orders(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<UploadOrdersRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let orders = orders_from_rows(request.orders)?;
    let count = state.catalog.replace_orders(orders).await?;

    tracing::info!(count, "Order table replaced");

    Ok(Json(UploadResponse { status: 200, count }))
}
