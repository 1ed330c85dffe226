use crate::catalog_actor::{CatalogError, CatalogRequest};
use crate::model::{Product, ProductCreate, ProductId};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    /// Seed a product into the catalog; the assigned id is returned.
    #[instrument(skip(self, params))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<ProductId, CatalogError> {
        debug!(title = %params.title, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::AddProduct { params, respond_to })
            .await
            .map_err(|_| CatalogError::Unavailable("catalog closed".to_string()))?;
        response
            .await
            .map_err(|_| CatalogError::Unavailable("catalog dropped the response".to_string()))?
    }

    /// Full listing, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::ListProducts { respond_to })
            .await
            .map_err(|_| CatalogError::Unavailable("catalog closed".to_string()))?;
        response
            .await
            .map_err(|_| CatalogError::Unavailable("catalog dropped the response".to_string()))?
    }

    /// Distinct category names, in order of first appearance.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::ListCategories { respond_to })
            .await
            .map_err(|_| CatalogError::Unavailable("catalog closed".to_string()))?;
        response
            .await
            .map_err(|_| CatalogError::Unavailable("catalog dropped the response".to_string()))?
    }

    /// Single product lookup.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::GetProduct { id, respond_to })
            .await
            .map_err(|_| CatalogError::Unavailable("catalog closed".to_string()))?;
        response
            .await
            .map_err(|_| CatalogError::Unavailable("catalog dropped the response".to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::mock_catalog_client;

    #[tokio::test]
    async fn get_product_passes_not_found_through() {
        let (client, mut receiver) = mock_catalog_client(10);

        let get_task = tokio::spawn(async move { client.get_product(ProductId(9)).await });

        match receiver.recv().await.expect("Expected GetProduct request") {
            CatalogRequest::GetProduct { id, respond_to } => {
                assert_eq!(id, ProductId(9));
                respond_to
                    .send(Err(CatalogError::NotFound(id)))
                    .unwrap();
            }
            other => panic!("Unexpected request: {other:?}"),
        }

        assert_eq!(
            get_task.await.unwrap(),
            Err(CatalogError::NotFound(ProductId(9)))
        );
    }

    #[tokio::test]
    async fn closed_catalog_maps_to_unavailable() {
        let (client, receiver) = mock_catalog_client(10);
        drop(receiver);

        let result = client.list_products().await;
        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
    }
}
