//! Test doubles for the clients.
//!
//! Each helper wires a real client to a raw request receiver instead of
//! an actor, so a test can script the collaborator side: receive the
//! request, assert on its payload, and answer through the carried reply
//! channel. No task is spawned and nothing is nondeterministic.
//!
//! ```rust
//! use storefront::cart_actor::CartRequest;
//! use storefront::clients::mock::mock_cart_client;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = mock_cart_client(10);
//!
//!     let count_task = tokio::spawn(async move { client.item_count().await });
//!
//!     match receiver.recv().await.unwrap() {
//!         CartRequest::ItemCount { respond_to } => respond_to.send(3).unwrap(),
//!         other => panic!("Unexpected request: {other:?}"),
//!     }
//!
//!     assert_eq!(count_task.await.unwrap().unwrap(), 3);
//! }
//! ```

use crate::cart_actor::CartRequest;
use crate::catalog_actor::CatalogRequest;
use crate::clients::{CartClient, CatalogClient};
use tokio::sync::{broadcast, mpsc};

/// A cart client whose requests land in the returned receiver.
pub fn mock_cart_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (events, _) = broadcast::channel(buffer_size);
    (CartClient::new(sender, events), receiver)
}

/// A catalog client whose requests land in the returned receiver.
pub fn mock_catalog_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}
