//! System lifecycle and observability.
//!
//! Individual actors are simple; wiring them together is where the
//! complexity lives. [`StorefrontSystem`] is the conductor: it creates
//! the catalog and cart actors, spawns each in its own task with its
//! dependencies injected at `run` time, and exposes the two clients the
//! rest of the application uses.
//!
//! Shutdown follows the channel-closure pattern: drop the clients, let
//! each actor drain its queue and exit, then await the task handles so
//! nothing is lost.
//!
//! [`setup_tracing`] initializes `RUST_LOG`-controlled structured
//! logging for binaries.

pub mod storefront_system;
pub mod tracing;

pub use storefront_system::*;
pub use tracing::*;
