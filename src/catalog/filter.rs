use crate::product::Product;

use super::{PriceBand, RatingBand};

/// Category selector value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// The three active catalog predicates.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFilter {
    pub category: String,
    pub price: PriceBand,
    pub rating: RatingBand,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        CatalogFilter {
            category: ALL_CATEGORIES.to_string(),
            price: PriceBand::Any,
            rating: RatingBand::Any,
        }
    }
}

impl CatalogFilter {
    /// Category match is exact but case-insensitive; `"All"` matches everything.
    pub fn matches_category(&self, product: &Product) -> bool {
        self.category.eq_ignore_ascii_case(ALL_CATEGORIES)
            || product.category.to_lowercase() == self.category.to_lowercase()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.price.contains(product.price)
            && self.rating.contains(product.rating.rate)
    }
}
