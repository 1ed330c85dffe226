//! Change notifications published by the cart actor.

use crate::model::ProductId;

/// Broadcast after every effective cart mutation.
///
/// Events are advisory: subscribers are expected to re-read the cart
/// through the client on receipt (notify-then-read), so the payload is
/// limited to the id that changed rather than a full item snapshot. A
/// request that leaves the cart untouched (unknown id, zero quantity)
/// publishes nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    ItemAdded { id: ProductId },
    QuantityUpdated { id: ProductId, quantity: u32 },
    ItemRemoved { id: ProductId },
    Cleared,
}
