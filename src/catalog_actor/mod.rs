//! # Catalog Actor
//!
//! The product source consumed by the rest of the system: listing,
//! category enumeration, and single-product lookup, plus the
//! [`ProductFilter`] the browse view applies on top of a listing.
//!
//! The catalog stands in for the remote product API. Callers observe the
//! same failure modes they would against a remote source: lookups of
//! unknown ids fail with [`CatalogError::NotFound`], and a source that
//! cannot be reached surfaces as [`CatalogError::Unavailable`]. How those
//! failures are presented to a user is the caller's concern.
//!
//! ## Structure
//!
//! - [`actor`] - [`CatalogActor`] and its message loop
//! - [`messages`] - [`CatalogRequest`] and the reply alias
//! - [`error`] - [`CatalogError`]
//! - [`filter`] - [`ProductFilter`] for the browse view
//! - [`new()`] - factory that creates the actor and client

pub mod actor;
pub mod error;
pub mod filter;
pub mod messages;

pub use actor::CatalogActor;
pub use error::CatalogError;
pub use filter::ProductFilter;
pub use messages::{CatalogRequest, CatalogResponse};

use crate::clients::CatalogClient;

/// Creates a new catalog actor and its client.
pub fn new() -> (CatalogActor, CatalogClient) {
    CatalogActor::new(32)
}
