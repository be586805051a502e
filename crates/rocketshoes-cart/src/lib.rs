//! # RocketShoes Cart
//!
//! The storefront's shopping cart as a single-owner actor: lines live in memory,
//! every successful change is written to a local key-value store, and quantities
//! are checked against the remote stock endpoint before they change.
//!
//! ## Core Components
//!
//! - **[model]**: [`Cart`](model::Cart), [`Product`](model::Product) and the catalog payloads.
//! - **[cart_actor]**: the [`ActorEntity`](actor_framework::ActorEntity) implementation and the pure reducer.
//! - **[clients]**: [`CartClient`](clients::CartClient), the handle storefront code holds.
//! - **[catalog]**: `GET stock/{id}` and `GET products/{id}`, over HTTP or in memory.
//! - **[storage]**: the local store and the cart's persisted copy.
//! - **[lifecycle]**: [`CartSystem`](lifecycle::CartSystem) wires it all together.
//! - **[config]**: TOML configuration.
//!
//! ## Testing
//!
//! See [`actor_framework::mock`] for utilities to test clients without spawning the actor.

pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod storage;
