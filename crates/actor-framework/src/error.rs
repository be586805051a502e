//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, plus a boxed slot for the
//! entity's own error type.

use std::error::Error;

/// Errors that can occur within the actor framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's typed error.
    ///
    /// Returns `Err(self)` unchanged when this is a plumbing error or when the boxed
    /// error is of a different type.
    pub fn downcast_entity<E: Error + 'static>(self) -> Result<E, Self> {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
