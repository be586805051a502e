//! # Actor Framework
//!
//! Building blocks for single-owner state in async Rust: one Tokio task owns a set
//! of entities, and everything else talks to it through a cloneable client.
//!
//! ## Why an actor?
//!
//! A read-modify-write that awaits in the middle (fetch remote stock, then write the
//! new state) is a lost-update hazard when two callers run it at once: both read the
//! old state and the later write wins. Routing every mutation through one task that
//! handles messages sequentially removes the hazard without locks, because the
//! second caller's message is not even looked at until the first one has finished.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the domain state and its hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//!
//! ## Context Injection Pattern
//!
//! Dependencies are passed to `run()`, not `new()`:
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! // Something the entity needs to do its job.
//! struct PriceList { unit: f64 }
//!
//! #[derive(Clone, Debug)] struct Quote { id: u32, total: f64 }
//! #[derive(Debug)] struct QuoteCreate;
//! #[derive(Debug)] enum QuoteAction { AddUnits(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("quote error")] struct QuoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Quote {
//!     type Id = u32;
//!     type Create = QuoteCreate;
//!     type Action = QuoteAction;
//!     type ActionResult = f64;
//!     type Context = Arc<PriceList>;
//!     type Error = QuoteError;
//!
//!     fn from_create_params(id: u32, _: QuoteCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, total: 0.0 })
//!     }
//!
//!     async fn handle_action(&mut self, action: QuoteAction, prices: &Arc<PriceList>) -> Result<f64, Self::Error> {
//!         let QuoteAction::AddUnits(n) = action;
//!         self.total += prices.unit * f64::from(n);
//!         Ok(self.total)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Quote>::new(10);
//!     tokio::spawn(actor.run(Arc::new(PriceList { unit: 2.5 })));
//!
//!     let id = client.create(QuoteCreate).await.unwrap();
//!     let total = client.perform_action(id, QuoteAction::AddUnits(4)).await.unwrap();
//!     assert_eq!(total, 10.0);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor, awaits included
//! - Shutdown is implicit: when the last client is dropped, `run()` returns
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient` and the channel-level helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
