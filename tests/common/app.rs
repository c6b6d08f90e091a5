//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use pigmatch::models::AppConfig;
use pigmatch::server::{build_router, create_app_state, AppState};
use pigmatch::services::InMemoryCatalog;

/// Test application with router and direct access to the catalog
pub struct TestApp {
    router: axum::Router,
    pub catalog: Arc<InMemoryCatalog>,
}

impl TestApp {
    /// Create a new test application with empty (unloaded) tables
    pub fn new() -> Self {
        Self::with_state(create_app_state(&AppConfig::default()))
    }

    /// Create a test application over already-built state
    pub fn with_state(state: AppState) -> Self {
        let catalog = state.catalog.clone();
        let router = build_router(state);

        Self { router, catalog }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Upload both tables through the API, asserting success
    pub async fn load_tables(&self, pigments_body: &str, orders_body: &str) {
        let response = self.post_json("/api/pigments", pigments_body).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "pigment upload failed: {}",
            response.text()
        );

        let response = self.post_json("/api/orders", orders_body).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "order upload failed: {}",
            response.text()
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
