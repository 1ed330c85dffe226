//! The cart actor: exclusive owner of the line-item sequence.
//!
//! All mutation flows through this task's message loop, one request at a
//! time, so the sequence needs no lock. Consumers hold clones of
//! [`CartClient`](crate::clients::CartClient) and observe changes through
//! the broadcast event channel.

use crate::cart_actor::{CartEvent, CartRequest};
use crate::clients::CartClient;
use crate::model::CartLineItem;
use crate::persist::SnapshotStore;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// Owns the ordered cart line sequence and the event publisher.
///
/// Invariants held by the loop:
/// - at most one line per product id;
/// - `quantity >= 1` for every line (zero targets are rejected, negatives
///   are unrepresentable);
/// - lines keep the insertion order of their first add.
pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    items: Vec<CartLineItem>,
    events: broadcast::Sender<CartEvent>,
}

impl CartActor {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` bounds both the request channel and the event
    /// channel. The actor must be driven via [`run`](CartActor::run).
    pub fn new(buffer_size: usize) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (events, _) = broadcast::channel(buffer_size);
        let actor = Self {
            receiver,
            items: Vec::new(),
            events: events.clone(),
        };
        let client = CartClient::new(sender, events);
        (actor, client)
    }

    /// Runs the message loop until every client is dropped.
    ///
    /// # Snapshot injection
    /// The snapshot store is bound here, not at construction, mirroring
    /// how other actors receive their runtime context. The cart is
    /// rehydrated from the store before the first request is served, and
    /// the full sequence is written back after each effective mutation.
    /// Persistence failures are logged and swallowed; the in-memory state
    /// stays authoritative.
    pub async fn run<S: SnapshotStore>(mut self, snapshots: S) {
        match snapshots.load().await {
            Ok(Some(items)) => {
                info!(lines = items.len(), "Cart rehydrated from snapshot");
                self.items = items;
            }
            Ok(None) => debug!("No cart snapshot, starting empty"),
            Err(e) => warn!(error = %e, "Snapshot load failed, starting empty"),
        }
        info!("Cart store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddItem { product, respond_to } => {
                    let id = product.id.clone();
                    match self.items.iter().position(|item| item.id == id) {
                        Some(pos) => {
                            self.items[pos].quantity += 1;
                            info!(%id, quantity = self.items[pos].quantity, "Quantity incremented");
                        }
                        None => {
                            self.items.push(CartLineItem::from_product(&product));
                            info!(%id, lines = self.items.len(), "Item added");
                        }
                    }
                    self.commit(&snapshots, CartEvent::ItemAdded { id }).await;
                    let _ = respond_to.send(());
                }
                CartRequest::UpdateQuantity {
                    id,
                    quantity,
                    respond_to,
                } => {
                    if quantity == 0 {
                        warn!(%id, "Zero quantity rejected, remove is explicit");
                    } else if let Some(pos) = self.items.iter().position(|item| item.id == id) {
                        self.items[pos].quantity = quantity;
                        info!(%id, quantity, "Quantity updated");
                        self.commit(&snapshots, CartEvent::QuantityUpdated { id, quantity })
                            .await;
                    } else {
                        warn!(%id, "Not found");
                    }
                    let _ = respond_to.send(());
                }
                CartRequest::RemoveItem { id, respond_to } => {
                    if let Some(pos) = self.items.iter().position(|item| item.id == id) {
                        self.items.remove(pos);
                        info!(%id, lines = self.items.len(), "Item removed");
                        self.commit(&snapshots, CartEvent::ItemRemoved { id }).await;
                    } else {
                        warn!(%id, "Not found");
                    }
                    let _ = respond_to.send(());
                }
                CartRequest::Clear { respond_to } => {
                    let removed = self.items.len();
                    self.items.clear();
                    info!(removed, "Cart cleared");
                    self.commit(&snapshots, CartEvent::Cleared).await;
                    let _ = respond_to.send(());
                }
                CartRequest::Items { respond_to } => {
                    debug!(lines = self.items.len(), "Items");
                    let _ = respond_to.send(self.items.clone());
                }
                CartRequest::Total { respond_to } => {
                    let total = self.total();
                    debug!(total, "Total");
                    let _ = respond_to.send(total);
                }
                CartRequest::ItemCount { respond_to } => {
                    let count = self.item_count();
                    debug!(count, "ItemCount");
                    let _ = respond_to.send(count);
                }
            }
        }

        info!(lines = self.items.len(), "Cart store shutdown");
    }

    // Derived values are recomputed per query, never cached.
    fn total(&self) -> f64 {
        self.items.iter().map(|item| item.subtotal()).sum()
    }

    fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Persist the new sequence, then notify. Runs only after an
    /// effective mutation; no-op requests skip it entirely.
    async fn commit<S: SnapshotStore>(&self, snapshots: &S, event: CartEvent) {
        if let Err(e) = snapshots.save(&self.items).await {
            warn!(error = %e, "Snapshot save failed");
        }
        // Send only fails when nobody is subscribed.
        let _ = self.events.send(event);
    }
}
