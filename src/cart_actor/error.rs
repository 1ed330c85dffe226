//! Error types for the cart actor.

use thiserror::Error;

/// Failures surfaced by [`CartClient`](crate::clients::CartClient).
///
/// The cart itself has no domain errors: missing ids and out-of-range
/// quantities degrade to no-ops inside the actor. What remains is the
/// transport, which can only fail if the actor task is gone.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart actor's channel is closed; the store is shut down.
    #[error("cart store closed")]
    StoreClosed,

    /// The actor dropped the reply channel before answering.
    #[error("cart store dropped the response channel")]
    StoreDropped,
}
