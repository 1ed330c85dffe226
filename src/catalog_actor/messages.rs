//! Request messages understood by the catalog actor.

use crate::catalog_actor::CatalogError;
use crate::model::{Product, ProductCreate, ProductId};
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel used by the catalog.
pub type CatalogResponse<T> = oneshot::Sender<Result<T, CatalogError>>;

/// Requests sent from [`CatalogClient`](crate::clients::CatalogClient)
/// to the catalog actor.
#[derive(Debug)]
pub enum CatalogRequest {
    /// Seed a product; the actor assigns the id.
    AddProduct {
        params: ProductCreate,
        respond_to: CatalogResponse<ProductId>,
    },
    /// Full product listing, in insertion order.
    ListProducts {
        respond_to: CatalogResponse<Vec<Product>>,
    },
    /// Distinct category names, in order of first appearance.
    ListCategories {
        respond_to: CatalogResponse<Vec<String>>,
    },
    /// Single product lookup; fails with `NotFound` for unknown ids.
    GetProduct {
        id: ProductId,
        respond_to: CatalogResponse<Product>,
    },
}
