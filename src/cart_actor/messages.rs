//! Request messages understood by the cart actor.

use crate::model::{CartLineItem, Product, ProductId};
use tokio::sync::oneshot;

/// Requests sent from [`CartClient`](crate::clients::CartClient) to the
/// cart actor.
///
/// Every cart operation is total: a mutation referencing a missing id or
/// a zero quantity degrades to a no-op instead of an error, so the reply
/// channels carry plain values rather than `Result`s. Transport failures
/// (actor gone, reply dropped) surface on the client side as
/// [`CartError`](crate::cart_actor::CartError).
#[derive(Debug)]
pub enum CartRequest {
    /// Insert a new line with quantity 1, or increment the existing line
    /// for the same product id.
    AddItem {
        product: Product,
        respond_to: oneshot::Sender<()>,
    },
    /// Set an existing line to exactly `quantity`. Zero is rejected as a
    /// no-op; removal is a separate request.
    UpdateQuantity {
        id: ProductId,
        quantity: u32,
        respond_to: oneshot::Sender<()>,
    },
    /// Delete the line for `id` if present.
    RemoveItem {
        id: ProductId,
        respond_to: oneshot::Sender<()>,
    },
    /// Empty the whole cart unconditionally.
    Clear { respond_to: oneshot::Sender<()> },
    /// Snapshot of the current line sequence, in insertion order.
    Items {
        respond_to: oneshot::Sender<Vec<CartLineItem>>,
    },
    /// Sum of `price * quantity` over all lines.
    Total { respond_to: oneshot::Sender<f64> },
    /// Sum of quantities over all lines (unit count, not line count).
    ItemCount { respond_to: oneshot::Sender<u32> },
}
