//! Fixture catalog held in memory.

use super::{CatalogApi, CatalogError};
use crate::model::{ProductId, ProductInfo, Stock};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Records {
    products: HashMap<ProductId, ProductInfo>,
    stock: HashMap<ProductId, u32>,
}

/// An in-process catalog.
///
/// Clones share the same records, so a test can keep one handle to adjust stock
/// while the cart actor holds another.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    records: Arc<RwLock<Records>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a product together with its stock level.
    pub fn with_product(self, info: ProductInfo, stock: u32) -> Self {
        self.insert(info, stock);
        self
    }

    pub fn insert(&self, info: ProductInfo, stock: u32) {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.stock.insert(info.id, stock);
        records.products.insert(info.id, info);
    }

    pub fn set_stock(&self, id: ProductId, amount: u32) {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.stock.insert(id, amount);
    }
}

#[async_trait]
impl CatalogApi for InMemoryCatalog {
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        records
            .stock
            .get(&id)
            .map(|&amount| Stock { id, amount })
            .ok_or(CatalogError::NotFound(id))
    }

    async fn product(&self, id: ProductId) -> Result<ProductInfo, CatalogError> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        records
            .products
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sneaker(id: u32) -> ProductInfo {
        ProductInfo {
            id: ProductId(id),
            title: "Tênis de Caminhada Leve Confortável".into(),
            price: 179.9,
            image: "tenis1.jpg".into(),
        }
    }

    #[tokio::test]
    async fn serves_inserted_records() {
        let catalog = InMemoryCatalog::new().with_product(sneaker(1), 3);

        assert_eq!(catalog.stock(ProductId(1)).await.unwrap().amount, 3);
        assert_eq!(catalog.product(ProductId(1)).await.unwrap(), sneaker(1));

        let handle = catalog.clone();
        handle.set_stock(ProductId(1), 0);
        assert_eq!(catalog.stock(ProductId(1)).await.unwrap().amount, 0);
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let catalog = InMemoryCatalog::new();
        assert!(matches!(
            catalog.stock(ProductId(5)).await,
            Err(CatalogError::NotFound(ProductId(5)))
        ));
    }
}
