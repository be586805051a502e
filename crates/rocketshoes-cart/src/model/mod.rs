//! Pure data structures: catalog records, cart lines, and the [`Cart`] entity.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
