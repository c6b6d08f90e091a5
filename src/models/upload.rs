use lab_match::{LabColor, Order, Pigment, Priority, RecordError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use utoipa::ToSchema;

/// One uploaded pigment row. Field names follow the table column
/// convention the planning spreadsheets use.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PigmentRow {
    /// Generated as `PIG-0001`, `PIG-0002`, ... when absent
    #[serde(rename = "PigmentID", default)]
    pub pigment_id: Option<String>,

    #[serde(rename = "L")]
    pub l: f64,
    pub a: f64,
    pub b: f64,

    #[serde(rename = "AvailableTonnage")]
    pub available_tonnage: f64,
}

impl PigmentRow {
    /// Validate and convert into a domain record. `index` is the row's
    /// 0-based position in the upload, used to generate a missing id.
    pub fn into_pigment(self, index: usize) -> Result<Pigment, RecordError> {
        let id = self
            .pigment_id
            .unwrap_or_else(|| format!("PIG-{:04}", index + 1));
        let pigment = Pigment::new(id, LabColor::new(self.l, self.a, self.b), self.available_tonnage);
        pigment.validate()?;
        Ok(pigment)
    }
}

/// One uploaded order row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderRow {
    /// Generated as `ORD-2024-0001`, `ORD-2024-0002`, ... when absent
    #[serde(rename = "OrderID", default)]
    pub order_id: Option<String>,

    /// Defaults to "Unknown Customer"
    #[serde(rename = "CustomerName", default)]
    pub customer_name: Option<String>,

    #[serde(rename = "L")]
    pub l: f64,
    pub a: f64,
    pub b: f64,

    #[serde(rename = "RequiredTonnage")]
    pub required_tonnage: f64,

    /// "High", "Medium" or "Low" (case-insensitive); anything else
    /// falls back to Medium
    #[serde(rename = "Priority", default)]
    pub priority: Option<String>,
}

impl OrderRow {
    /// Validate and convert into a domain record. `index` is the row's
    /// 0-based position in the upload, used to generate a missing id.
    pub fn into_order(self, index: usize) -> Result<Order, RecordError> {
        let id = self
            .order_id
            .unwrap_or_else(|| format!("ORD-2024-{:04}", index + 1));
        let customer_name = self
            .customer_name
            .unwrap_or_else(|| "Unknown Customer".to_string());
        let priority = self
            .priority
            .as_deref()
            .map(Priority::parse)
            .unwrap_or_default();

        let order = Order::new(
            id,
            customer_name,
            LabColor::new(self.l, self.a, self.b),
            self.required_tonnage,
            priority,
        );
        order.validate()?;
        Ok(order)
    }
}

/// Convert an uploaded pigment table, generating ids for rows without one.
pub fn pigments_from_rows(rows: Vec<PigmentRow>) -> Result<Vec<Pigment>, RecordError> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| row.into_pigment(index))
        .collect()
}

/// Convert an uploaded order table, generating ids for rows without one.
pub fn orders_from_rows(rows: Vec<OrderRow>) -> Result<Vec<Order>, RecordError> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| row.into_order(index))
        .collect()
}

/// Read a JSON array of table rows from a file.
pub fn read_rows<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
