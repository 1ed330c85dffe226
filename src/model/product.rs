use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// A catalog product as served to consumers.
///
/// The `image` is optional: some upstream entries ship without one and
/// the presentation layer substitutes a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub image: Option<String>,
    pub price: f64,
    pub rating: Rating,
    pub description: String,
}

impl Product {
    /// Builds the full product from an assigned id and the creation payload.
    pub fn from_create(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            title: params.title,
            category: params.category,
            image: params.image,
            price: params.price,
            rating: params.rating,
            description: params.description,
        }
    }
}

/// Payload for seeding a product into the catalog. Ids are assigned by
/// the catalog actor.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub title: String,
    pub category: String,
    pub image: Option<String>,
    pub price: f64,
    pub rating: Rating,
    pub description: String,
}
