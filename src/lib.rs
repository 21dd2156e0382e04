//! Client-side storefront state: a filterable product catalog, a persisted
//! cart ledger and a light/dark theme preference, with pluggable storage and
//! catalog gateways.

mod cart;
mod catalog;
mod config;
mod format;
mod gateway;
mod persistence;
mod product;
mod storefront;
mod theme;

pub mod logging;

pub use cart::CartLedger;
pub use catalog::{
    CatalogFilter, FetchTicket, ParseBandError, PriceBand, ProductCatalog, RatingBand,
    ALL_CATEGORIES,
};
pub use config::{
    ConfigError, StorefrontConfig, DEFAULT_CATALOG_URL, ENV_CATALOG_URL, ENV_DEBUG, ENV_STORAGE_DIR,
};
pub use format::{capitalize, format_price, format_rating, INVALID_PRICE};
#[cfg(feature = "http")]
pub use gateway::HttpProductGateway;
pub use gateway::{GatewayError, ProductGateway, StaticProductGateway};
pub use persistence::{
    keys, load_json, save_json, FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore,
    SessionStore, StoreError,
};
pub use product::{Product, ProductId, Rating};
pub use storefront::{Notice, NoticeLevel, RefreshOutcome, Storefront, NOTICE_EVENT};
pub use theme::{ColorSchemeHost, FixedColorScheme, ParseThemeError, Theme, ThemePreference};
