//! # Observability
//!
//! Structured logging setup shared by every binary built on the framework.
//!
//! The actor loop logs with an `entity_type` field instead of module paths, so the
//! subscriber hides targets and uses the compact format, which shows span nesting
//! inline (e.g. `cart_command:add_product`).
//!
//! ```bash
//! RUST_LOG=info  rocketshoes-cart add 2   # lifecycle + outcomes
//! RUST_LOG=debug rocketshoes-cart add 2   # full request payloads
//! ```

/// Initializes the global `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Call once, from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
