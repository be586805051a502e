//! Catalog records and cart lines.
//!
//! The JSON shapes here are wire formats: [`ProductInfo`] and [`Stock`] come from
//! the catalog API, and a `Vec<Product>` is exactly what gets persisted under the
//! cart storage key.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for catalog products.
///
/// Serializes as a bare number (`2`, not `{"0":2}`), matching the API payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display metadata served by `GET products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// Remote stock record served by `GET stock/{id}`.
///
/// `amount` is the maximum purchasable quantity of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

/// A cart line: product metadata plus the quantity in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
}

impl Product {
    /// Builds a cart line from catalog metadata.
    pub fn from_info(info: ProductInfo, amount: u32) -> Self {
        Self {
            id: info.id,
            title: info.title,
            price: info.price,
            image: info.image,
            amount,
        }
    }

    /// `price * amount`.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn persisted_line_matches_storefront_shape() {
        let line = Product {
            id: ProductId(2),
            title: "Tênis VR Caminhada Confortável".into(),
            price: 139.9,
            image: "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis2.jpg"
                .into(),
            amount: 3,
        };

        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["id"], json!(2));
        assert_eq!(value["amount"], json!(3));
        assert_eq!(value["price"], json!(139.9));
    }

    #[test]
    fn api_payloads_decode() {
        let stock: Stock = serde_json::from_value(json!({ "id": 2, "amount": 5 })).unwrap();
        assert_eq!(stock, Stock { id: ProductId(2), amount: 5 });

        let info: ProductInfo = serde_json::from_value(json!({
            "id": 2,
            "title": "Tênis VR Caminhada Confortável",
            "price": 139.9,
            "image": "tenis2.jpg"
        }))
        .unwrap();

        let line = Product::from_info(info, 2);
        assert_eq!(line.id, ProductId(2));
        assert!((line.subtotal() - 279.8).abs() < 1e-9);
    }
}
