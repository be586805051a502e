use crate::cart_actor::StockPolicy;
use crate::storage::CART_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container. Every section and field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub cart: CartConfig,
}

/// Storefront API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL serving `stock/{id}` and `products/{id}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Local store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file. Defaults to `<data dir>/rocketshoes-cart/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Key the cart is persisted under.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

/// Cart behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Check the requested amount against stock on update (default: false).
    #[serde(default)]
    pub validate_requested_amount: bool,
    /// Capacity of the cart actor's request channel (default: 32).
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl CartConfig {
    pub fn stock_policy(&self) -> StockPolicy {
        StockPolicy {
            validate_requested_amount: self.validate_requested_amount,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            cart_key: default_cart_key(),
        }
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            validate_requested_amount: false,
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_cart_key() -> String {
    CART_STORAGE_KEY.to_string()
}

fn default_channel_capacity() -> usize {
    32
}
