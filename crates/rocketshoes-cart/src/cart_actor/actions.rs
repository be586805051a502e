//! Custom actions for the cart actor.
//!
//! Each variant is one mutation the storefront can ask for. They are handled by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action) on
//! [`Cart`](crate::model::Cart), one at a time.

use crate::model::ProductId;

/// Mutations accepted by the cart actor.
///
/// Every action answers with the cart lines as they stand after it ran.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Adds one unit, or appends the product with `amount = 1`.
    ///
    /// # Errors
    /// `OutOfStock` when one more unit would exceed the remote stock, `AddFailed`
    /// when the catalog or the store could not be reached.
    AddProduct(ProductId),

    /// Drops the product's line. The store is rewritten even if it was absent.
    RemoveProduct(ProductId),

    /// Overwrites a line's amount.
    UpdateProductAmount { product_id: ProductId, amount: u32 },

    /// Empties the cart and deletes its key from the store.
    Clear,
}
