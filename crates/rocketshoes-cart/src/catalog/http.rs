//! HTTP catalog client built on `reqwest`.

use super::{CatalogApi, CatalogError};
use crate::model::{ProductId, ProductInfo, Stock};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Talks to the storefront API at `base_url`.
///
/// No retries and no request timeout: a slow catalog holds the cart actor until
/// the server answers or the connection drops.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| CatalogError::Decode { url, source })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    #[instrument(skip(self))]
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        self.get_json(&format!("stock/{id}")).await
    }

    #[instrument(skip(self))]
    async fn product(&self, id: ProductId) -> Result<ProductInfo, CatalogError> {
        self.get_json(&format!("products/{id}")).await
    }
}
