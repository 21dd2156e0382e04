use crate::persistence::{keys, load_json, save_json, KeyValueStore};
use crate::product::{Product, ProductId};

pub struct CartLedger<S: KeyValueStore> {
    items: Vec<Product>,
    store: S,
}

impl<S: KeyValueStore> CartLedger<S> {
    /// Start an empty ledger. Nothing is written until the first mutation.
    pub fn new(store: S) -> Self {
        CartLedger {
            items: Vec::new(),
            store,
        }
    }

    /// Restore the ledger persisted in `store`, or start empty if there is
    /// none or it cannot be decoded.
    pub fn restore(store: S) -> Self {
        let items: Vec<Product> = load_json(&store, keys::CART).unwrap_or_default();
        tracing::debug!(count = items.len(), "cart restored");
        CartLedger { items, store }
    }

    /// Append one entry for `product`. Returns the new entry count.
    pub fn add(&mut self, product: Product) -> usize {
        self.items.push(product);
        self.persist();
        self.items.len()
    }

    /// Remove every entry with the given id. Returns how many were removed.
    pub fn remove(&mut self, id: ProductId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.persist();
        before - self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Sum of the prices of all entries.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Number of entries for the given id.
    pub fn quantity_of(&self, id: ProductId) -> usize {
        self.items.iter().filter(|item| item.id == id).count()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self) {
        match save_json(&self.store, keys::CART, &self.items) {
            Ok(()) => tracing::debug!(count = self.items.len(), "cart persisted"),
            Err(e) => tracing::warn!(error = %e, "failed to persist cart"),
        }
    }
}
