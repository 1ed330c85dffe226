//! The catalog actor: the process-local product source.

use crate::catalog_actor::{CatalogError, CatalogRequest};
use crate::clients::CatalogClient;
use crate::model::{Product, ProductId};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns the product listing and assigns product ids.
///
/// Products are kept in insertion order so listings and the derived
/// category list are deterministic.
pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    products: Vec<Product>,
    next_id: u32,
}

impl CatalogActor {
    /// Creates the actor and its client.
    pub fn new(buffer_size: usize) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            products: Vec::new(),
            next_id: 1,
        };
        let client = CatalogClient::new(sender);
        (actor, client)
    }

    /// Runs the message loop until every client is dropped.
    pub async fn run(mut self) {
        info!("Catalog started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::AddProduct { params, respond_to } => {
                    let id = ProductId(self.next_id);
                    self.next_id += 1;
                    self.products.push(Product::from_create(id.clone(), params));
                    info!(%id, count = self.products.len(), "Product added");
                    let _ = respond_to.send(Ok(id));
                }
                CatalogRequest::ListProducts { respond_to } => {
                    debug!(count = self.products.len(), "ListProducts");
                    let _ = respond_to.send(Ok(self.products.clone()));
                }
                CatalogRequest::ListCategories { respond_to } => {
                    let mut categories: Vec<String> = Vec::new();
                    for product in &self.products {
                        if !categories.contains(&product.category) {
                            categories.push(product.category.clone());
                        }
                    }
                    debug!(count = categories.len(), "ListCategories");
                    let _ = respond_to.send(Ok(categories));
                }
                CatalogRequest::GetProduct { id, respond_to } => {
                    match self.products.iter().find(|product| product.id == id) {
                        Some(product) => {
                            debug!(%id, "GetProduct");
                            let _ = respond_to.send(Ok(product.clone()));
                        }
                        None => {
                            warn!(%id, "Not found");
                            let _ = respond_to.send(Err(CatalogError::NotFound(id)));
                        }
                    }
                }
            }
        }

        info!(count = self.products.len(), "Catalog shutdown");
    }
}
