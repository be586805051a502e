//! # Catalog API
//!
//! Read-only access to the storefront's remote catalog: stock levels and product
//! metadata. The cart actor only ever sees the [`CatalogApi`] trait, so tests and
//! offline runs can swap the HTTP client for [`InMemoryCatalog`].

pub mod http;
pub mod memory;

pub use http::HttpCatalog;
pub use memory::InMemoryCatalog;

use crate::model::{ProductId, ProductInfo, Stock};
use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by a catalog backend.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("catalog request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("catalog returned {status} for {url}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON.
    #[error("catalog response from {url} could not be decoded: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The in-memory catalog has no record for this product.
    #[error("no catalog record for product {0}")]
    NotFound(ProductId),
}

/// Remote catalog endpoints used by the cart.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET stock/{id}`
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError>;

    /// `GET products/{id}`
    async fn product(&self, id: ProductId) -> Result<ProductInfo, CatalogError>;
}
