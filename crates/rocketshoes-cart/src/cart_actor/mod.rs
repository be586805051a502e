//! # Cart Actor
//!
//! Owns the shopping cart and applies the storefront's three mutations to it:
//! add one unit, remove a line, set a line's amount.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`Cart`] and the injected [`CartContext`]
//! - [`reducer`] - the pure transitions ([`CartReducer`])
//! - [`actions`] - [`CartAction`]
//! - [`error`] - [`CartError`]
//! - [`notice`] - user-facing [`Notice`]s
//! - [`new()`] - factory returning the actor and its generic client
//!
//! ## Usage
//!
//! ```rust
//! use rocketshoes_cart::cart_actor::{self, CartContext};
//! use rocketshoes_cart::catalog::InMemoryCatalog;
//! use rocketshoes_cart::clients::CartClient;
//! use rocketshoes_cart::model::{ProductId, ProductInfo};
//! use rocketshoes_cart::storage::{MemoryStorage, CART_STORAGE_KEY};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = InMemoryCatalog::new().with_product(
//!         ProductInfo {
//!             id: ProductId(1),
//!             title: "Tênis de Caminhada Leve Confortável".into(),
//!             price: 179.9,
//!             image: "tenis1.jpg".into(),
//!         },
//!         3,
//!     );
//!     let ctx = CartContext::new(Arc::new(catalog), Arc::new(MemoryStorage::new()));
//!
//!     let (actor, generic_client) = cart_actor::new(32);
//!     tokio::spawn(actor.run(ctx));
//!
//!     let client = CartClient::open(generic_client, CART_STORAGE_KEY).await?;
//!     let lines = client.add_product(ProductId(1)).await?;
//!     assert_eq!(lines[0].amount, 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod notice;
pub mod reducer;

pub use actions::*;
pub use entity::{CartContext, NOTICE_CAPACITY};
pub use error::*;
pub use notice::Notice;
pub use reducer::{CartIntent, CartReducer, Rejection, StockPolicy};

use crate::model::Cart;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(buffer_size)
}
