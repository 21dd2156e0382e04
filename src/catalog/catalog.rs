use crate::product::{Product, ProductId};

use super::{CatalogFilter, PriceBand, RatingBand, ALL_CATEGORIES};

/// Handle for one catalog fetch.
///
/// Only the most recently issued ticket may load its response; responses that
/// arrive for older tickets are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// The full product list plus the subset matching the active filter.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    all: Vec<Product>,
    /// Indices into `all`, ascending.
    filtered: Vec<usize>,
    filter: CatalogFilter,
    generation: u64,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the product list. Selectors are kept and re-applied.
    pub fn load(&mut self, products: Vec<Product>) {
        tracing::info!(count = products.len(), "catalog loaded");
        self.all = products;
        self.recompute();
    }

    pub fn set_category(&mut self, name: impl Into<String>) {
        self.filter.category = name.into();
        self.recompute();
    }

    pub fn set_price_band(&mut self, band: PriceBand) {
        self.filter.price = band;
        self.recompute();
    }

    pub fn set_rating_band(&mut self, band: RatingBand) {
        self.filter.rating = band;
        self.recompute();
    }

    /// Issue a ticket for a new fetch, superseding every earlier ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// Load `products` if `ticket` is still the latest issued fetch.
    ///
    /// Returns false, leaving the catalog untouched, for a superseded ticket.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, products: Vec<Product>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                generation = ticket.0,
                latest = self.generation,
                "discarding stale catalog response"
            );
            return false;
        }
        self.load(products);
        true
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn all(&self) -> &[Product] {
        &self.all
    }

    /// Products matching the active filter, in catalog order.
    pub fn filtered(&self) -> Vec<&Product> {
        self.filtered.iter().map(|&i| &self.all[i]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.all.iter().find(|product| product.id == id)
    }

    /// Category choices for a selector: `"All"` followed by each distinct
    /// category in first-seen order. Categories differing only in case are
    /// listed once, under the first spelling seen.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = vec![ALL_CATEGORIES];
        for product in &self.all {
            let seen = categories
                .iter()
                .any(|known| known.eq_ignore_ascii_case(&product.category));
            if !seen {
                categories.push(&product.category);
            }
        }
        categories
    }

    fn recompute(&mut self) {
        let filter = &self.filter;
        self.filtered = self
            .all
            .iter()
            .enumerate()
            .filter(|(_, product)| filter.matches(product))
            .map(|(i, _)| i)
            .collect();
        tracing::debug!(
            category = %self.filter.category,
            price = %self.filter.price,
            rating = %self.filter.rating,
            matched = self.filtered.len(),
            total = self.all.len(),
            "catalog filter recomputed"
        );
    }
}
