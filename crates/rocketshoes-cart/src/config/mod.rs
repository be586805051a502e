//! Application configuration: where the catalog lives, where the cart is stored,
//! and how strictly amounts are checked.

pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, CartConfig, Config, StorageConfig};
