//! Tests for the /api/match/pigment-to-orders endpoint.
//!
//! Exact numeric behavior of the matching pipeline is covered by the
//! lab-match crate's own tests; these focus on the HTTP contract (wire
//! shape, table state handling, error mapping) plus a few known values
//! from the standard fixture scenario.

mod common;

use axum::http::StatusCode;
use common::{fixtures, TestApp};

#[tokio::test]
async fn test_match_requires_pigment_table() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/match/pigment-to-orders", &fixtures::match_body())
        .await;
    common::assert_error(&response, StatusCode::NOT_FOUND);
    let json: serde_json::Value = response.json();
    assert_eq!(json["error"], "Table not loaded: pigments");
}

#[tokio::test]
async fn test_match_requires_order_table() {
    let app = TestApp::new();
    let response = app
        .post_json("/api/pigments", &fixtures::pigments_body(15.0))
        .await;
    common::assert_ok(&response);

    let response = app
        .post_json("/api/match/pigment-to-orders", &fixtures::match_body())
        .await;
    common::assert_error(&response, StatusCode::NOT_FOUND);
    let json: serde_json::Value = response.json();
    assert_eq!(json["error"], "Table not loaded: orders");
}

#[tokio::test]
async fn test_match_unknown_pigment() {
    let app = TestApp::new();
    app.load_tables(&fixtures::pigments_body(15.0), &fixtures::orders_body())
        .await;

    let response = app
        .post_json("/api/match/pigment-to-orders", r#"{"pigmentId": "PIG-9999"}"#)
        .await;
    common::assert_error(&response, StatusCode::NOT_FOUND);
    let json: serde_json::Value = response.json();
    assert_eq!(json["error"], "Pigment not found");
}

#[tokio::test]
async fn test_match_response_structure() {
    let app = TestApp::new();
    app.load_tables(&fixtures::pigments_body(15.0), &fixtures::orders_body())
        .await;

    let response = app
        .post_json("/api/match/pigment-to-orders", &fixtures::match_body())
        .await;
    common::assert_ok(&response);
    let json: serde_json::Value = response.json();

    // Pigment block with recomputed hex
    assert_eq!(json["pigment"]["id"], "PIG-0001");
    assert_eq!(json["pigment"]["L"], 50.0);
    assert_eq!(json["pigment"]["a"], 20.0);
    assert_eq!(json["pigment"]["b"], -10.0);
    assert_eq!(json["pigment"]["hex"], "#916b88");
    assert_eq!(json["pigment"]["availableTonnage"], 15.0);

    // All three methods pick the near cluster over the two outliers
    common::assert_ranked_ids(&json["euclideanMatches"], &fixtures::ids::NEAR);
    common::assert_ranked_ids(&json["cosineMatches"], &fixtures::ids::NEAR);
    common::assert_ranked_ids(&json["normalizedMatches"], &fixtures::ids::NEAR);

    // Method-specific fields on the top entries
    let eu = &json["euclideanMatches"][0];
    assert_eq!(eu["deltaE"], 2.449);
    assert_eq!(eu["matchPercentage"], 78.3);
    assert_eq!(eu["interpretation"], "Noticeable");
    assert_eq!(eu["description"], "Perceptible at a glance");
    assert_eq!(eu["customerName"], "Acme Corp");
    assert_eq!(eu["priority"], "High");

    let cos = &json["cosineMatches"][0];
    assert_eq!(cos["similarity"], 0.9997);
    assert_eq!(cos["angularDistance"], 1.41);
    assert_eq!(cos["euclideanDistance"], 2.45);
    assert_eq!(cos["interpretation"], "Excellent");

    let norm = &json["normalizedMatches"][0];
    assert_eq!(norm["normalizedDistance"], 0.1285);
    assert_eq!(norm["rawDistance"], 2.45);
    assert_eq!(norm["matchPercentage"], 93.8);
}

#[tokio::test]
async fn test_match_consensus_and_allocation() {
    let app = TestApp::new();
    app.load_tables(&fixtures::pigments_body(15.0), &fixtures::orders_body())
        .await;

    let response = app
        .post_json("/api/match/pigment-to-orders", &fixtures::match_body())
        .await;
    common::assert_ok(&response);
    let json: serde_json::Value = response.json();

    let consensus = json["consensus"].as_array().unwrap();
    assert_eq!(consensus.len(), 3);
    assert_eq!(consensus[0]["orderId"], "ORD-2024-0001");
    assert_eq!(consensus[0]["methodsMatched"], 3);
    assert_eq!(consensus[0]["avgRank"], 1.0);
    assert_eq!(consensus[0]["consensusScore"], 299.0);
    assert_eq!(consensus[1]["consensusScore"], 298.0);
    assert_eq!(consensus[2]["consensusScore"], 297.0);

    let plan = &json["allocationPlan"];
    assert_eq!(plan["status"], "warning");
    assert_eq!(
        plan["summary"],
        "Partial fulfillment possible. Production of 15.00 tonnes recommended."
    );
    assert_eq!(plan["availableTonnage"], 15.0);
    assert_eq!(plan["totalRequired"], 30.0);
    assert_eq!(plan["shortage"], 15.0);
    assert_eq!(plan["canFulfillAll"], false);
    assert_eq!(plan["productionRecommendation"], 16.5);
    assert_eq!(plan["highPriorityRequired"], 10.0);

    let details = plan["fulfillmentDetails"].as_array().unwrap();
    assert_eq!(details.len(), 3);
    assert_eq!(details[0]["status"], "Full");
    assert_eq!(details[0]["canFulfill"], 10.0);
    assert_eq!(details[0]["fulfillmentPercentage"], 100.0);
    assert_eq!(details[1]["status"], "Partial");
    assert_eq!(details[1]["canFulfill"], 5.0);
    assert_eq!(details[2]["status"], "Cannot Fulfill");
    assert_eq!(details[2]["canFulfill"], 0.0);
}

#[tokio::test]
async fn test_match_with_empty_order_table() {
    let app = TestApp::new();
    app.load_tables(&fixtures::pigments_body(15.0), r#"{"orders": []}"#)
        .await;

    let response = app
        .post_json("/api/match/pigment-to-orders", &fixtures::match_body())
        .await;
    common::assert_ok(&response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["euclideanMatches"].as_array().unwrap().len(), 0);
    assert_eq!(json["cosineMatches"].as_array().unwrap().len(), 0);
    assert_eq!(json["normalizedMatches"].as_array().unwrap().len(), 0);
    assert_eq!(json["consensus"].as_array().unwrap().len(), 0);

    // Nothing to fulfill counts as success
    let plan = &json["allocationPlan"];
    assert_eq!(plan["status"], "success");
    assert_eq!(
        plan["summary"],
        "Sufficient inventory to fulfill all 0 matched orders."
    );
    assert_eq!(plan["totalRequired"], 0.0);
    assert_eq!(plan["canFulfillAll"], true);
}

#[tokio::test]
async fn test_match_uses_rounded_table_values() {
    let app = TestApp::new();

    // Upload rows keep their values bit-for-bit; the match must run on
    // exactly what was uploaded, not a re-rounded copy
    let pigments = r#"{"pigments": [
        {"PigmentID": "PIG-0001", "L": 50.005, "a": 20.0, "b": -10.0, "AvailableTonnage": 15.0}
    ]}"#;
    let orders = r#"{"orders": [
        {"OrderID": "ORD-A", "L": 50.005, "a": 20.0, "b": -10.0, "RequiredTonnage": 5.0}
    ]}"#;
    app.load_tables(pigments, orders).await;

    let response = app
        .post_json("/api/match/pigment-to-orders", &fixtures::match_body())
        .await;
    common::assert_ok(&response);
    let json: serde_json::Value = response.json();

    // Identical colors: exact match in every method
    assert_eq!(json["euclideanMatches"][0]["deltaE"], 0.0);
    assert_eq!(json["euclideanMatches"][0]["matchPercentage"], 100.0);
    assert_eq!(json["euclideanMatches"][0]["interpretation"], "Imperceptible");
    assert_eq!(json["normalizedMatches"][0]["matchPercentage"], 100.0);
}
