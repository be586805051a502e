//! # System Lifecycle
//!
//! Starts, wires, and shuts down the cart actor.
//!
//! ## The CartSystem Pattern
//!
//! ```rust,ignore
//! impl CartSystem {
//!     pub async fn with_parts(catalog, storage, config) -> Result<Self, CartError> {
//!         // 1. Create the actor (no dependencies yet)
//!         let (actor, generic_client) = cart_actor::new(capacity);
//!
//!         // 2. Start it with its dependencies injected
//!         let handle = tokio::spawn(actor.run(CartContext::new(catalog, storage)));
//!
//!         // 3. Open the persisted cart through the client
//!         let cart = CartClient::open(generic_client, cart_key).await?;
//!         ...
//!     }
//! }
//! ```
//!
//! ## Dependency Injection via Context
//!
//! The actor is built without dependencies; the catalog, the store, and the notice
//! channel arrive through `run(context)`. Tests hand in an
//! [`InMemoryCatalog`](crate::catalog::InMemoryCatalog) and a
//! [`MemoryStorage`](crate::storage::MemoryStorage); the binary hands in the HTTP
//! catalog and the file store.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the actor task finishes after the message it was handling
//!
//! Clones of [`CartClient`](crate::clients::CartClient) handed out earlier keep the
//! actor alive; `shutdown` waits for them too.
//!
//! ## Observability
//!
//! The binary calls [`actor_framework::tracing::setup_tracing`] once. Filter with
//! `RUST_LOG`:
//! ```bash
//! RUST_LOG=info rocketshoes-cart show
//! RUST_LOG=debug rocketshoes-cart add 2    # requests, actions, storage writes
//! ```

pub mod cart_system;

pub use cart_system::*;
