//! User-facing notices.
//!
//! The storefront shows these as error toasts. The cart actor publishes them on a
//! broadcast channel; nobody listening is fine.

use crate::model::ProductId;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    OutOfStock(ProductId),
    AddFailed(ProductId),
    RemoveFailed(ProductId),
    UpdateFailed(ProductId),
}

impl Notice {
    pub fn product_id(&self) -> ProductId {
        match *self {
            Notice::OutOfStock(id)
            | Notice::AddFailed(id)
            | Notice::RemoveFailed(id)
            | Notice::UpdateFailed(id) => id,
        }
    }

    /// The text shown to the shopper.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::OutOfStock(_) => "Quantidade solicitada fora de estoque",
            Notice::AddFailed(_) => "Erro na adição do produto",
            Notice::RemoveFailed(_) => "Erro na remoção do produto",
            Notice::UpdateFailed(_) => "Erro na alteração de quantidade do produto",
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
