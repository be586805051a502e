use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Type-safe identifier for carts inside the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// The shopping cart owned by the cart actor.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Cart`](#impl-ActorEntity-for-Cart) for details on:
/// - Creation parameters ([`CartCreate`])
/// - Actions ([`CartAction`](crate::cart_actor::CartAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    /// Key the lines are persisted under.
    pub storage_key: String,
    /// Ordered, unique by product id.
    pub lines: Vec<Product>,
}

/// Payload for opening a cart. Lines are hydrated from storage in `on_create`.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub storage_key: String,
}

impl Cart {
    pub fn new(id: CartId, storage_key: impl Into<String>) -> Self {
        Self {
            id,
            storage_key: storage_key.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(&self, product_id: ProductId) -> Option<&Product> {
        self.lines.iter().find(|line| line.id == product_id)
    }

    /// Sum of every line's `price * amount`.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(Product::subtotal).sum()
    }

    /// `price * amount` of one line, `None` if the product is not in the cart.
    pub fn subtotal(&self, product_id: ProductId) -> Option<f64> {
        self.line(product_id).map(Product::subtotal)
    }

    /// Per-product quantity, as the catalog page shows it on each "add" button.
    pub fn items_amount(&self) -> BTreeMap<ProductId, u32> {
        self.lines.iter().map(|line| (line.id, line.amount)).collect()
    }

    /// Number of distinct products (the header badge).
    pub fn distinct_count(&self) -> usize {
        self.lines.len()
    }
}
