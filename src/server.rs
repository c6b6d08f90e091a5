//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    routing::{get, post},
    Router,
};
use lab_match::MatchEngine;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::{orders_from_rows, pigments_from_rows, read_rows, AppConfig};
use crate::services::{sample_orders, sample_pigments, InMemoryCatalog, TableStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<InMemoryCatalog>,
    pub engine: MatchEngine,
}

/// Create application state from the configuration.
pub fn create_app_state(config: &AppConfig) -> AppState {
    AppState {
        catalog: Arc::new(InMemoryCatalog::new()),
        engine: MatchEngine::new().with_top_n(config.matching.top_n),
    }
}

/// Load the startup tables into the catalog.
///
/// Each table comes from its configured JSON file when one is readable,
/// and falls back to seeded sample data otherwise, so the server always
/// starts with both tables populated.
pub async fn load_startup_tables(state: &AppState, config: &AppConfig) -> anyhow::Result<()> {
    let pigments = match &config.tables.pigments {
        Some(path) if path.exists() => {
            match read_rows(path).and_then(|rows| Ok(pigments_from_rows(rows)?)) {
                Ok(pigments) => {
                    tracing::info!(
                        path = %path.display(),
                        count = pigments.len(),
                        "Loaded pigment table from file"
                    );
                    pigments
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to load pigment table, generating samples"
                    );
                    sample_pigments(config.sample.pigments, config.sample.pigment_seed)
                }
            }
        }
        _ => {
            tracing::info!(
                count = config.sample.pigments,
                seed = config.sample.pigment_seed,
                "Generating sample pigment table"
            );
            sample_pigments(config.sample.pigments, config.sample.pigment_seed)
        }
    };
    state.catalog.replace_pigments(pigments).await?;

    let orders = match &config.tables.orders {
        Some(path) if path.exists() => {
            match read_rows(path).and_then(|rows| Ok(orders_from_rows(rows)?)) {
                Ok(orders) => {
                    tracing::info!(
                        path = %path.display(),
                        count = orders.len(),
                        "Loaded order table from file"
                    );
                    orders
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to load order table, generating samples"
                    );
                    sample_orders(config.sample.orders, config.sample.order_seed)
                }
            }
        }
        _ => {
            tracing::info!(
                count = config.sample.orders,
                seed = config.sample.order_seed,
                "Generating sample order table"
            );
            sample_orders(config.sample.orders, config.sample.order_seed)
        }
    };
    state.catalog.replace_orders(orders).await?;

    Ok(())
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Table endpoints
        .route(
            "/api/pigments",
            get(api::handle_list_pigments).post(api::handle_upload_pigments),
        )
        .route(
            "/api/orders",
            get(api::handle_list_orders).post(api::handle_upload_orders),
        )
        // Matching
        .route("/api/match/pigment-to-orders", post(api::handle_match))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
