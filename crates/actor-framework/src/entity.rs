//! # ActorEntity Trait
//!
//! The contract a stateful resource implements to be owned by a [`ResourceActor`](crate::ResourceActor).
//! It names the resource's ID, creation payload, actions, injected context and error type,
//! and provides the hooks the actor loop calls while it holds exclusive access to the entity.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] has a default implementation that does nothing (`Ok(())`).
//! Override it when the entity has to hydrate itself from its dependencies, for example
//! reading a persisted copy from a store.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// The hooks are `#[async_trait]` so they can await I/O (HTTP calls, storage writes).
/// The `Context` is handed to `run()` rather than `new()`, so dependencies can be
/// wired after the actor and its client exist.
///
/// # Failure semantics
/// A hook that returns `Err` must leave `self` exactly as it found it. The actor does
/// not roll anything back; it only reports the error to the caller.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum of resource-specific operations (e.g., `AddProduct`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per action. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) with
    /// [`FrameworkError::downcast_entity`](crate::FrameworkError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from the ID and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity already stands for what `params` would create.
    ///
    /// When a stored entity answers `true`, `Create` returns its id instead of
    /// building a second one. The default never matches.
    fn matches_create(&self, _params: &Self::Create) -> bool {
        false
    }

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
