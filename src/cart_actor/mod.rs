//! # Cart Actor
//!
//! The shared shopping cart: an ordered sequence of line items owned by a
//! single actor task, with read/write access through
//! [`CartClient`](crate::clients::CartClient) and push-based change
//! notification for every consumer.
//!
//! ## Overview
//!
//! Pages and services that show the cart (header badge, cart view,
//! checkout) all hold clones of the same client. Mutations are processed
//! sequentially by the actor, so every consumer sees the same live state
//! without any locking discipline, and a broadcast [`CartEvent`] tells
//! subscribers when to re-read.
//!
//! ## Structure
//!
//! - [`actor`] - [`CartActor`] and its message loop
//! - [`messages`] - [`CartRequest`] and the reply channels
//! - [`event`] - [`CartEvent`] change notifications
//! - [`error`] - [`CartError`] transport failures
//! - [`new()`] - factory that creates the actor and client
//!
//! ## Semantics
//!
//! - Adding a product that is already in the cart increments its line
//!   instead of inserting a duplicate; the line keeps its position.
//! - `update_quantity` sets an absolute value. A target of zero leaves
//!   the line untouched; deletion goes through `remove_item`.
//! - Requests naming an unknown id are silent no-ops. No cart operation
//!   reports a domain error.
//! - Totals and unit counts are derived from the live sequence on every
//!   query.
//!
//! ## Usage
//!
//! ```rust
//! use storefront::cart_actor;
//! use storefront::model::{Product, ProductId, Rating};
//! use storefront::persist::NoopSnapshotStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = cart_actor::new();
//!     tokio::spawn(actor.run(NoopSnapshotStore));
//!
//!     let product = Product {
//!         id: ProductId(1),
//!         title: "Widget".to_string(),
//!         category: "tools".to_string(),
//!         image: None,
//!         price: 9.99,
//!         rating: Rating { rate: 4.5, count: 7 },
//!         description: String::new(),
//!     };
//!     client.add_item(product).await.unwrap();
//!     assert_eq!(client.item_count().await.unwrap(), 1);
//! }
//! ```

pub mod actor;
pub mod error;
pub mod event;
pub mod messages;

pub use actor::CartActor;
pub use error::CartError;
pub use event::CartEvent;
pub use messages::CartRequest;

use crate::clients::CartClient;

/// Creates a new cart actor and its client.
pub fn new() -> (CartActor, CartClient) {
    CartActor::new(32)
}
