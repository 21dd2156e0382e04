//! Shared fixtures: a small product catalog and instrumented collaborators.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use storefront::{
    ColorSchemeHost, InMemoryKeyValueStore, KeyValueStore, Product, ProductId, Rating,
    StaticProductGateway, StoreError, Storefront, StorefrontConfig, Theme,
};

pub fn product(id: ProductId, category: &str, price: f64, rate: f64) -> Product {
    Product {
        id,
        title: format!("Product {}", id),
        description: format!("Description of product {}", id),
        price,
        category: category.to_string(),
        image: format!("https://example.com/img/{}.jpg", id),
        rating: Rating { rate, count: 100 },
    }
}

/// Prices and ratings chosen to sit on and around every band boundary.
pub fn products() -> Vec<Product> {
    vec![
        product(1, "men's clothing", 109.95, 3.9),
        product(2, "men's clothing", 22.3, 4.1),
        product(3, "jewelery", 50.0, 2.0),
        product(4, "electronics", 49.99, 1.0),
        product(5, "Electronics", 100.0, 3.0),
        product(6, "women's clothing", 9.85, 0.5),
        product(7, "jewelery", 695.0, 4.6),
        product(8, "electronics", 64.0, 5.0),
    ]
}

pub type TestStorefront<S> = Storefront<S, StaticProductGateway, RecordingHost>;

pub fn storefront_with<S>(store: S, gateway: StaticProductGateway) -> TestStorefront<S>
where
    S: KeyValueStore + Clone,
{
    Storefront::new(
        StorefrontConfig::default(),
        store,
        gateway,
        RecordingHost::default(),
    )
}

pub fn storefront(store: InMemoryKeyValueStore) -> TestStorefront<InMemoryKeyValueStore> {
    storefront_with(store, StaticProductGateway::new(products()))
}

/// Color-scheme host with a switchable system preference that records every
/// theme applied to it.
#[derive(Clone, Default)]
pub struct RecordingHost {
    prefers_dark: Arc<AtomicBool>,
    applied: Arc<Mutex<Vec<Theme>>>,
}

impl RecordingHost {
    pub fn prefers(theme: Theme) -> Self {
        let host = RecordingHost::default();
        host.set_prefers(theme);
        host
    }

    pub fn set_prefers(&self, theme: Theme) {
        self.prefers_dark.store(theme.is_dark(), Ordering::SeqCst);
    }

    pub fn applied(&self) -> Vec<Theme> {
        self.applied.lock().unwrap().clone()
    }
}

impl ColorSchemeHost for RecordingHost {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.load(Ordering::SeqCst)
    }

    fn apply_theme(&self, theme: Theme) {
        self.applied.lock().unwrap().push(theme);
    }
}

/// A store whose writes always fail; reads see nothing.
#[derive(Clone, Default)]
pub struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io("read-only file system".into()))
    }

    fn remove(&self, _key: &str) -> Result<bool, StoreError> {
        Err(StoreError::Io("read-only file system".into()))
    }
}
