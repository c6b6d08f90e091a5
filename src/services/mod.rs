pub mod catalog;
pub mod sample_data;

pub use catalog::{InMemoryCatalog, TableSnapshot, TableStore};
pub use sample_data::{sample_orders, sample_pigments};
