//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error response: HTTP status plus the matching JSON body
pub fn assert_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();

    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected.as_u16(),
        json["status"],
        response.text()
    );
    assert!(
        json["error"].is_string(),
        "Expected an error message. Full response: {}",
        response.text()
    );
}

/// Assert a match list is ranked 1..=n over the expected order ids
pub fn assert_ranked_ids(list: &serde_json::Value, expected: &[&str]) {
    let entries = list.as_array().expect("expected a JSON array of matches");
    let ids: Vec<&str> = entries
        .iter()
        .map(|e| e["orderId"].as_str().expect("expected an orderId"))
        .collect();
    assert_eq!(ids, expected);

    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(
            entry["rank"].as_u64(),
            Some(i as u64 + 1),
            "rank must be position + 1 in {entry}"
        );
    }
}
