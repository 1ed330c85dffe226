//! Error types for the catalog collaborator.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur when consuming the catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested product does not exist upstream.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The catalog source could not be reached or did not answer.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}
