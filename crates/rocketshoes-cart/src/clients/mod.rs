//! Type-safe wrappers around the generic actor clients.

pub mod cart_client;

pub use actor_framework::ActorClient;
pub use cart_client::CartClient;
