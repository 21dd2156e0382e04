//! Product catalog - the fetched product list plus a derived filtered view.
//!
//! The filtered view is recomputed eagerly whenever the product list or any
//! filter selector changes, and always preserves the catalog's fetch order.
//!
//! ## Example
//!
//! ```ignore
//! use storefront::{PriceBand, ProductCatalog};
//!
//! let mut catalog = ProductCatalog::new();
//! catalog.load(products);
//! catalog.set_category("electronics");
//! catalog.set_price_band(PriceBand::Under50);
//! for product in catalog.filtered() {
//!     println!("{}", product.title);
//! }
//! ```

mod band;
mod catalog;
mod filter;

pub use band::{ParseBandError, PriceBand, RatingBand};
pub use catalog::{FetchTicket, ProductCatalog};
pub use filter::{CatalogFilter, ALL_CATEGORIES};
