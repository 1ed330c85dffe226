//! Product filtering for the browse view.

use crate::model::Product;

/// Conjunction of the browse filters: selected categories, a minimum
/// rating, and a free-text query over title and category.
///
/// `Default` is the unfiltered state; each dimension disables itself
/// when left empty (or at zero for the rating), so a filter can be built
/// incrementally the way the sidebar controls toggle it.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub categories: Vec<String>,
    pub min_rating: f64,
    pub query: String,
}

impl ProductFilter {
    /// Whether any dimension is currently narrowing the listing.
    pub fn is_active(&self) -> bool {
        !self.categories.is_empty() || self.min_rating > 0.0 || !self.query.is_empty()
    }

    /// Whether a single product passes every active dimension.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if self.min_rating > 0.0 && product.rating.rate < self.min_rating {
            return false;
        }
        if !self.query.is_empty() {
            let query = self.query.to_lowercase();
            if !product.title.to_lowercase().contains(&query)
                && !product.category.to_lowercase().contains(&query)
            {
                return false;
            }
        }
        true
    }

    /// Filters a listing, preserving its order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductId, Rating};

    fn product(id: u32, title: &str, category: &str, rate: f64) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            category: category.to_string(),
            image: None,
            price: 10.0,
            rating: Rating { rate, count: 5 },
            description: String::new(),
        }
    }

    fn listing() -> Vec<Product> {
        vec![
            product(1, "Slim Fit T-Shirt", "men's clothing", 2.1),
            product(2, "Gold Petite Micropave", "jewelery", 4.6),
            product(3, "Portable External Drive", "electronics", 4.8),
            product(4, "Rain Jacket", "women's clothing", 3.8),
        ]
    }

    #[test]
    fn default_filter_passes_everything() {
        let filter = ProductFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&listing()).len(), 4);
    }

    #[test]
    fn category_filter_is_membership() {
        let filter = ProductFilter {
            categories: vec!["jewelery".to_string(), "electronics".to_string()],
            ..Default::default()
        };
        let matched = filter.apply(&listing());
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].id, ProductId(2));
        assert_eq!(matched[1].id, ProductId(3));
    }

    #[test]
    fn min_rating_is_inclusive() {
        let filter = ProductFilter {
            min_rating: 4.6,
            ..Default::default()
        };
        let matched = filter.apply(&listing());
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|p| p.rating.rate >= 4.6));
    }

    #[test]
    fn query_matches_title_or_category_case_insensitively() {
        let by_title = ProductFilter {
            query: "DRIVE".to_string(),
            ..Default::default()
        };
        assert_eq!(by_title.apply(&listing())[0].id, ProductId(3));

        let by_category = ProductFilter {
            query: "clothing".to_string(),
            ..Default::default()
        };
        assert_eq!(by_category.apply(&listing()).len(), 2);
    }

    #[test]
    fn dimensions_compose_conjunctively() {
        let filter = ProductFilter {
            categories: vec!["women's clothing".to_string()],
            min_rating: 4.0,
            query: String::new(),
        };
        assert!(filter.is_active());
        // The only women's clothing entry is rated 3.8, below the floor.
        assert!(filter.apply(&listing()).is_empty());
    }
}
