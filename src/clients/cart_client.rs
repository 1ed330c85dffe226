use crate::cart_actor::{CartError, CartEvent, CartRequest};
use crate::model::{CartLineItem, Product, ProductId};
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for the cart actor.
///
/// Cheap to clone; every clone talks to the same live cart. Mutations go
/// through the write methods, reads return derived snapshots, and
/// [`subscribe`](CartClient::subscribe) hands out a receiver for change
/// notifications so consumers can re-read instead of polling.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
    events: broadcast::Sender<CartEvent>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>, events: broadcast::Sender<CartEvent>) -> Self {
        Self { sender, events }
    }

    /// Add one unit of a product. Repeat adds increment the existing line.
    #[instrument(skip(self, product))]
    pub async fn add_item(&self, product: Product) -> Result<(), CartError> {
        debug!(id = %product.id, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::AddItem { product, respond_to })
            .await
            .map_err(|_| CartError::StoreClosed)?;
        response.await.map_err(|_| CartError::StoreDropped)
    }

    /// Set a line to an absolute quantity. Zero is a no-op; use
    /// [`remove_item`](CartClient::remove_item) to delete.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: ProductId, quantity: u32) -> Result<(), CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::UpdateQuantity {
                id,
                quantity,
                respond_to,
            })
            .await
            .map_err(|_| CartError::StoreClosed)?;
        response.await.map_err(|_| CartError::StoreDropped)
    }

    /// Delete a line; a no-op when the id is not in the cart.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: ProductId) -> Result<(), CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::RemoveItem { id, respond_to })
            .await
            .map_err(|_| CartError::StoreClosed)?;
        response.await.map_err(|_| CartError::StoreDropped)
    }

    /// Empty the cart unconditionally.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::Clear { respond_to })
            .await
            .map_err(|_| CartError::StoreClosed)?;
        response.await.map_err(|_| CartError::StoreDropped)
    }

    /// Snapshot of the line sequence, in insertion order.
    #[instrument(skip(self))]
    pub async fn items(&self) -> Result<Vec<CartLineItem>, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::Items { respond_to })
            .await
            .map_err(|_| CartError::StoreClosed)?;
        response.await.map_err(|_| CartError::StoreDropped)
    }

    /// Sum of `price * quantity` over the whole cart.
    #[instrument(skip(self))]
    pub async fn total(&self) -> Result<f64, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::Total { respond_to })
            .await
            .map_err(|_| CartError::StoreClosed)?;
        response.await.map_err(|_| CartError::StoreDropped)
    }

    /// Total unit count (sum of quantities, not the number of lines).
    #[instrument(skip(self))]
    pub async fn item_count(&self) -> Result<u32, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::ItemCount { respond_to })
            .await
            .map_err(|_| CartError::StoreClosed)?;
        response.await.map_err(|_| CartError::StoreDropped)
    }

    /// New subscription to cart change events. Each receiver sees every
    /// event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::mock_cart_client;
    use crate::model::Rating;

    fn widget() -> Product {
        Product {
            id: ProductId(1),
            title: "Widget".to_string(),
            category: "tools".to_string(),
            image: None,
            price: 9.99,
            rating: Rating {
                rate: 4.5,
                count: 7,
            },
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn add_item_sends_the_product() {
        let (client, mut receiver) = mock_cart_client(10);

        let add_task = tokio::spawn(async move { client.add_item(widget()).await });

        match receiver.recv().await.expect("Expected AddItem request") {
            CartRequest::AddItem { product, respond_to } => {
                assert_eq!(product.id, ProductId(1));
                respond_to.send(()).unwrap();
            }
            other => panic!("Unexpected request: {other:?}"),
        }

        add_task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn update_quantity_is_absolute_not_a_delta() {
        let (client, mut receiver) = mock_cart_client(10);

        let update_task =
            tokio::spawn(async move { client.update_quantity(ProductId(1), 5).await });

        match receiver.recv().await.expect("Expected UpdateQuantity request") {
            CartRequest::UpdateQuantity {
                id,
                quantity,
                respond_to,
            } => {
                assert_eq!(id, ProductId(1));
                assert_eq!(quantity, 5);
                respond_to.send(()).unwrap();
            }
            other => panic!("Unexpected request: {other:?}"),
        }

        update_task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn total_maps_the_reply_through() {
        let (client, mut receiver) = mock_cart_client(10);

        let total_task = tokio::spawn(async move { client.total().await });

        match receiver.recv().await.expect("Expected Total request") {
            CartRequest::Total { respond_to } => {
                respond_to.send(23.5).unwrap();
            }
            other => panic!("Unexpected request: {other:?}"),
        }

        assert_eq!(total_task.await.unwrap().unwrap(), 23.5);
    }

    #[tokio::test]
    async fn closed_store_maps_to_store_closed() {
        let (client, receiver) = mock_cart_client(10);
        drop(receiver);

        let result = client.add_item(widget()).await;
        assert_eq!(result, Err(CartError::StoreClosed));
    }

    #[tokio::test]
    async fn dropped_reply_maps_to_store_dropped() {
        let (client, mut receiver) = mock_cart_client(10);

        let clear_task = tokio::spawn(async move { client.clear().await });

        match receiver.recv().await.expect("Expected Clear request") {
            CartRequest::Clear { respond_to } => drop(respond_to),
            other => panic!("Unexpected request: {other:?}"),
        }

        assert_eq!(clear_task.await.unwrap(), Err(CartError::StoreDropped));
    }
}
