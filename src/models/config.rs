use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Match finder settings
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Sample table generation settings
    #[serde(default)]
    pub sample: SampleConfig,

    /// Table files read at startup
    #[serde(default)]
    pub tables: TablesConfig,
}

/// Settings for the match finders
#[derive(Debug, Deserialize, Clone)]
pub struct MatchingConfig {
    /// How many matches each finder reports
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    3
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

/// Settings for generated sample tables
#[derive(Debug, Deserialize, Clone)]
pub struct SampleConfig {
    /// Number of generated pigments
    #[serde(default = "default_sample_pigments")]
    pub pigments: usize,

    /// Number of generated orders
    #[serde(default = "default_sample_orders")]
    pub orders: usize,

    /// RNG seed for the pigment table
    #[serde(default = "default_pigment_seed")]
    pub pigment_seed: u64,

    /// RNG seed for the order table
    #[serde(default = "default_order_seed")]
    pub order_seed: u64,
}

fn default_sample_pigments() -> usize {
    50
}

fn default_sample_orders() -> usize {
    30
}

fn default_pigment_seed() -> u64 {
    42
}

fn default_order_seed() -> u64 {
    123
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            pigments: default_sample_pigments(),
            orders: default_sample_orders(),
            pigment_seed: default_pigment_seed(),
            order_seed: default_order_seed(),
        }
    }
}

/// Optional JSON table files read at startup. A table without a
/// configured path (or whose file cannot be read) falls back to
/// generated sample data.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TablesConfig {
    #[serde(default)]
    pub pigments: Option<PathBuf>,

    #[serde(default)]
    pub orders: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from an optional YAML file path.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        top_n = config.matching.top_n,
                        pigments_file = config.tables.pigments.is_some(),
                        orders_file = config.tables.orders.is_some(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
