//! Test fixtures and constants.
//!
//! The standard scenario is one violet pigment batch matched against a
//! five-order table: three orders cluster near the pigment color, one is
//! a bright green outlier and one a dark yellow outlier. The closest
//! three orders need 30 tonnes in total, so fixture tonnage picks the
//! allocation branch: 30 fulfills everything, 15 covers half, 0 nothing.

/// Record ids used by the standard scenario
pub mod ids {
    pub const PIGMENT: &str = "PIG-0001";

    /// The three near orders, in consensus order
    pub const NEAR: [&str; 3] = ["ORD-2024-0001", "ORD-2024-0002", "ORD-2024-0003"];
}

/// Upload body for the standard pigment with the given inventory
pub fn pigments_body(tonnage: f64) -> String {
    format!(
        r#"{{"pigments": [
            {{"PigmentID": "PIG-0001", "L": 50.0, "a": 20.0, "b": -10.0, "AvailableTonnage": {tonnage}}}
        ]}}"#
    )
}

/// Upload body for the standard five-order table
pub fn orders_body() -> String {
    r#"{"orders": [
        {"OrderID": "ORD-2024-0001", "CustomerName": "Acme Corp", "L": 52.0, "a": 21.0, "b": -9.0, "RequiredTonnage": 10.0, "Priority": "High"},
        {"OrderID": "ORD-2024-0002", "CustomerName": "Global Industries", "L": 47.0, "a": 18.0, "b": -12.0, "RequiredTonnage": 10.0, "Priority": "Medium"},
        {"OrderID": "ORD-2024-0003", "CustomerName": "ColorMax", "L": 55.0, "a": 25.0, "b": -6.0, "RequiredTonnage": 10.0, "Priority": "Low"},
        {"OrderID": "ORD-2024-0004", "CustomerName": "PigmentPro", "L": 80.0, "a": -40.0, "b": 30.0, "RequiredTonnage": 25.0, "Priority": "High"},
        {"OrderID": "ORD-2024-0005", "CustomerName": "Custom Shades", "L": 25.0, "a": 5.0, "b": 45.0, "RequiredTonnage": 18.0, "Priority": "Low"}
    ]}"#
    .to_string()
}

/// Request body matching the standard pigment
pub fn match_body() -> String {
    format!(r#"{{"pigmentId": "{}"}}"#, ids::PIGMENT)
}
