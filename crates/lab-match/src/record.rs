//! Input records and the descriptive snapshot carried through results.
//!
//! [`Pigment`] and [`Order`] are the core's inputs, owned by the caller
//! and validated before a match runs. [`OrderSummary`] is the immutable
//! snapshot of an order embedded in every match and consensus record,
//! with the hex rendering recomputed from the Lab triple at construction
//! so it can never go stale.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::LabColor;

/// Order priority as set by the customer desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Lenient parse for ingestion: case-insensitive, anything
    /// unrecognized falls back to Medium.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    /// The priority's display label.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A pigment batch: identity, measured color, and inventory on hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Pigment {
    pub id: String,
    pub color: LabColor,
    /// Tonnes available for allocation. Never negative.
    pub available_tonnage: f64,
}

impl Pigment {
    pub fn new(id: impl Into<String>, color: LabColor, available_tonnage: f64) -> Self {
        Self {
            id: id.into(),
            color,
            available_tonnage,
        }
    }

    /// Check the record is safe to hand to the match pipeline.
    ///
    /// # Errors
    ///
    /// [`RecordError::NonFinite`] if any color component or the tonnage is
    /// NaN or infinite; [`RecordError::NegativeTonnage`] if the tonnage is
    /// below zero.
    pub fn validate(&self) -> Result<(), RecordError> {
        validate_color(self.color)?;
        validate_tonnage("availableTonnage", self.available_tonnage)
    }
}

/// A customer order: identity, target color, demand, and priority.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub color: LabColor,
    /// Tonnes the customer asked for. Never negative.
    pub required_tonnage: f64,
    pub priority: Priority,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_name: impl Into<String>,
        color: LabColor,
        required_tonnage: f64,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            customer_name: customer_name.into(),
            color,
            required_tonnage,
            priority,
        }
    }

    /// Check the record is safe to hand to the match pipeline.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Pigment::validate`].
    pub fn validate(&self) -> Result<(), RecordError> {
        validate_color(self.color)?;
        validate_tonnage("requiredTonnage", self.required_tonnage)
    }
}

fn validate_color(color: LabColor) -> Result<(), RecordError> {
    for (field, value) in [("L", color.l), ("a", color.a), ("b", color.b)] {
        if !value.is_finite() {
            return Err(RecordError::NonFinite { field });
        }
    }
    Ok(())
}

fn validate_tonnage(field: &'static str, value: f64) -> Result<(), RecordError> {
    if !value.is_finite() {
        return Err(RecordError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(RecordError::NegativeTonnage { field, value });
    }
    Ok(())
}

/// Error type for record validation.
///
/// Returned when a pigment or order carries values the match pipeline
/// must never see. The ingestion layer rejects such records before the
/// core is invoked.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    /// A color component or tonnage is NaN or infinite
    NonFinite {
        /// Name of the offending field
        field: &'static str,
    },
    /// Tonnage below zero
    NegativeTonnage {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::NonFinite { field } => {
                write!(f, "field {} must be a finite number", field)
            }
            RecordError::NegativeTonnage { field, value } => {
                write!(f, "field {} must not be negative (got {})", field, value)
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// Descriptive snapshot of an order, embedded in every match record.
///
/// Carries the order's identity and target color alongside the scores, so
/// a result object is self-contained. `hex_color` is recomputed from the
/// Lab triple at construction and never copied from elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: String,
    pub customer_name: String,
    #[serde(rename = "L")]
    pub l: f64,
    pub a: f64,
    pub b: f64,
    pub hex_color: String,
    pub required_tonnage: f64,
    pub priority: Priority,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id.clone(),
            customer_name: order.customer_name.clone(),
            l: order.color.l,
            a: order.color.a,
            b: order.color.b,
            hex_color: order.color.to_hex(),
            required_tonnage: order.required_tonnage,
            priority: order.priority,
        }
    }
}
