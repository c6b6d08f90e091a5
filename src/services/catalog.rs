use crate::error::ApiError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lab_match::{Order, Pigment};
use std::sync::Arc;
use tokio::sync::RwLock;

/// An immutable view of one table at a point in time.
///
/// Readers clone the inner `Arc`, so a concurrent table replace never
/// mutates records a running match is still reading.
#[derive(Debug)]
pub struct TableSnapshot<T> {
    pub records: Arc<Vec<T>>,
    pub loaded_at: DateTime<Utc>,
}

impl<T> TableSnapshot<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(records),
            loaded_at: Utc::now(),
        }
    }
}

impl<T> Clone for TableSnapshot<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            loaded_at: self.loaded_at,
        }
    }
}

/// Trait for pigment and order table storage
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Atomically replace the pigment table, returning the new count
    async fn replace_pigments(&self, pigments: Vec<Pigment>) -> Result<usize, ApiError>;

    /// Atomically replace the order table, returning the new count
    async fn replace_orders(&self, orders: Vec<Order>) -> Result<usize, ApiError>;

    /// Current pigment table snapshot
    async fn pigments(&self) -> Result<TableSnapshot<Pigment>, ApiError>;

    /// Current order table snapshot
    async fn orders(&self) -> Result<TableSnapshot<Order>, ApiError>;

    /// Look up one pigment by id in the current snapshot
    async fn pigment_by_id(&self, pigment_id: &str) -> Result<Pigment, ApiError>;
}

/// In-memory table storage
pub struct InMemoryCatalog {
    pigments: Arc<RwLock<Option<TableSnapshot<Pigment>>>>,
    orders: Arc<RwLock<Option<TableSnapshot<Order>>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            pigments: Arc::new(RwLock::new(None)),
            orders: Arc::new(RwLock::new(None)),
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableStore for InMemoryCatalog {
    async fn replace_pigments(&self, pigments: Vec<Pigment>) -> Result<usize, ApiError> {
        let snapshot = TableSnapshot::new(pigments);
        let count = snapshot.records.len();
        *self.pigments.write().await = Some(snapshot);
        Ok(count)
    }

    async fn replace_orders(&self, orders: Vec<Order>) -> Result<usize, ApiError> {
        let snapshot = TableSnapshot::new(orders);
        let count = snapshot.records.len();
        *self.orders.write().await = Some(snapshot);
        Ok(count)
    }

    async fn pigments(&self) -> Result<TableSnapshot<Pigment>, ApiError> {
        let table = self.pigments.read().await;
        table.clone().ok_or(ApiError::TableNotLoaded("pigments"))
    }

    async fn orders(&self) -> Result<TableSnapshot<Order>, ApiError> {
        let table = self.orders.read().await;
        table.clone().ok_or(ApiError::TableNotLoaded("orders"))
    }

    async fn pigment_by_id(&self, pigment_id: &str) -> Result<Pigment, ApiError> {
        let snapshot = self.pigments().await?;
        snapshot
            .records
            .iter()
            .find(|pigment| pigment.id == pigment_id)
            .cloned()
            .ok_or(ApiError::PigmentNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_match::{LabColor, Priority};

    fn pigment(id: &str, tonnage: f64) -> Pigment {
        Pigment::new(id, LabColor::new(50.0, 20.0, -10.0), tonnage)
    }

    fn order(id: &str) -> Order {
        Order::new(
            id,
            "Acme Corp",
            LabColor::new(52.0, 21.0, -9.0),
            10.0,
            Priority::Medium,
        )
    }

    #[tokio::test]
    async fn test_tables_start_unloaded() {
        let catalog = InMemoryCatalog::new();

        assert!(matches!(
            catalog.pigments().await,
            Err(ApiError::TableNotLoaded("pigments"))
        ));
        assert!(matches!(
            catalog.orders().await,
            Err(ApiError::TableNotLoaded("orders"))
        ));
    }

    #[tokio::test]
    async fn test_replace_and_read_pigments() {
        let catalog = InMemoryCatalog::new();

        let count = catalog
            .replace_pigments(vec![pigment("PIG-0001", 15.0), pigment("PIG-0002", 30.0)])
            .await
            .unwrap();
        assert_eq!(count, 2);

        let snapshot = catalog.pigments().await.unwrap();
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.records[0].id, "PIG-0001");
        assert_eq!(snapshot.records[1].id, "PIG-0002");
    }

    #[tokio::test]
    async fn test_replace_swaps_whole_table() {
        let catalog = InMemoryCatalog::new();

        catalog
            .replace_orders(vec![order("ORD-2024-0001"), order("ORD-2024-0002")])
            .await
            .unwrap();
        catalog
            .replace_orders(vec![order("ORD-2024-0099")])
            .await
            .unwrap();

        let snapshot = catalog.orders().await.unwrap();
        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.records[0].id, "ORD-2024-0099");
    }

    #[tokio::test]
    async fn test_snapshot_outlives_replace() {
        let catalog = InMemoryCatalog::new();
        catalog
            .replace_pigments(vec![pigment("PIG-0001", 15.0)])
            .await
            .unwrap();

        let before = catalog.pigments().await.unwrap();
        catalog
            .replace_pigments(vec![pigment("PIG-0002", 30.0)])
            .await
            .unwrap();

        // The old snapshot still sees the old records
        assert_eq!(before.records[0].id, "PIG-0001");
        let after = catalog.pigments().await.unwrap();
        assert_eq!(after.records[0].id, "PIG-0002");
    }

    #[tokio::test]
    async fn test_pigment_by_id() {
        let catalog = InMemoryCatalog::new();
        catalog
            .replace_pigments(vec![pigment("PIG-0001", 15.0), pigment("PIG-0002", 30.0)])
            .await
            .unwrap();

        let found = catalog.pigment_by_id("PIG-0002").await.unwrap();
        assert_eq!(found.id, "PIG-0002");
        assert_eq!(found.available_tonnage, 30.0);

        assert!(matches!(
            catalog.pigment_by_id("PIG-9999").await,
            Err(ApiError::PigmentNotFound)
        ));
    }

    #[tokio::test]
    async fn test_pigment_by_id_before_load() {
        let catalog = InMemoryCatalog::new();

        assert!(matches!(
            catalog.pigment_by_id("PIG-0001").await,
            Err(ApiError::TableNotLoaded("pigments"))
        ));
    }
}
