//! # Local Storage
//!
//! A browser-`localStorage`-like key-value store: string keys, string values.
//! Serialization is the caller's business; the cart persists its lines as a JSON
//! array under [`CART_STORAGE_KEY`] via [`load_cart`] and [`save_cart`].

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::model::Product;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Key the storefront has always used for the cart.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O on '{path}' failed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file '{path}' is not a JSON object: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites whatever was stored under `key`.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads the persisted cart.
///
/// A missing key, an unreadable store, or a value that is not a cart array all
/// yield an empty cart: a broken copy must not keep the storefront from starting.
pub async fn load_cart(storage: &dyn Storage, key: &str) -> Vec<Product> {
    let raw = match storage.get_item(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no stored cart");
            return Vec::new();
        }
        Err(e) => {
            warn!(key, error = %e, "stored cart unreadable, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Product>>(&raw) {
        Ok(lines) => {
            debug!(key, lines = lines.len(), "stored cart loaded");
            lines
        }
        Err(e) => {
            warn!(key, error = %e, "stored cart unparsable, starting empty");
            Vec::new()
        }
    }
}

/// Overwrites the persisted cart with `lines`.
pub async fn save_cart(
    storage: &dyn Storage,
    key: &str,
    lines: &[Product],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(lines).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    storage.set_item(key, &raw).await
}
