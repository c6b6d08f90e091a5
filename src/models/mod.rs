pub mod config;
pub mod upload;

pub use config::{AppConfig, MatchingConfig, SampleConfig, TablesConfig};
pub use upload::{orders_from_rows, pigments_from_rows, read_rows, OrderRow, PigmentRow};
