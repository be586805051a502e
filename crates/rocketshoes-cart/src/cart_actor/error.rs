//! Error types for the cart actor.

use super::notice::Notice;
use super::reducer::Rejection;
use crate::catalog::CatalogError;
use crate::model::ProductId;
use crate::storage::StorageError;
use thiserror::Error;

/// Why an add could not reach the catalog or the store.
#[derive(Debug, Error)]
pub enum AddFailure {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// One more unit would exceed what the catalog has in stock.
    #[error("Product {product_id} out of stock: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    #[error("Adding product {product_id} failed: {source}")]
    AddFailed {
        product_id: ProductId,
        #[source]
        source: AddFailure,
    },

    #[error("Removing product {product_id} failed: {source}")]
    RemoveFailed {
        product_id: ProductId,
        #[source]
        source: StorageError,
    },

    /// The line is missing, or the stock check rejected the change.
    #[error("Updating product {product_id} failed: {reason}")]
    UpdateFailed {
        product_id: ProductId,
        reason: String,
    },

    #[error("Clearing the cart failed: {source}")]
    ClearFailed {
        #[source]
        source: StorageError,
    },

    /// The cart itself does not exist in the actor.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    /// The notice a shopper sees for this error, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            CartError::OutOfStock { product_id, .. } => Some(Notice::OutOfStock(*product_id)),
            CartError::AddFailed { product_id, .. } => Some(Notice::AddFailed(*product_id)),
            CartError::RemoveFailed { product_id, .. } => Some(Notice::RemoveFailed(*product_id)),
            CartError::UpdateFailed { product_id, .. } => Some(Notice::UpdateFailed(*product_id)),
            CartError::ClearFailed { .. }
            | CartError::NotFound(_)
            | CartError::ActorCommunicationError(_) => None,
        }
    }
}

impl From<Rejection> for CartError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::OutOfStock {
                product_id,
                requested,
                available,
            } => CartError::OutOfStock {
                product_id,
                requested,
                available,
            },
            Rejection::NotInCart(product_id) => CartError::UpdateFailed {
                product_id,
                reason: "product is not in the cart".to_string(),
            },
            Rejection::AboveStock {
                product_id,
                amount,
                available,
            } => CartError::UpdateFailed {
                product_id,
                reason: format!("amount {amount} exceeds stock {available}"),
            },
            Rejection::ZeroAmount(product_id) => CartError::UpdateFailed {
                product_id,
                reason: "amount must be at least 1".to_string(),
            },
        }
    }
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
