//! Product gateways - read-only access to the remote product catalog.
//!
//! The library stays transport-agnostic: [`ProductGateway`] is the seam, with
//! an in-memory implementation for tests and offline sessions and a reqwest
//! implementation behind the `http` feature.

mod error;
#[cfg(feature = "http")]
mod http;
mod in_memory;

use std::future::Future;

use crate::product::{Product, ProductId};

pub use error::GatewayError;
#[cfg(feature = "http")]
pub use http::HttpProductGateway;
pub use in_memory::StaticProductGateway;

/// Read-only source of catalog data.
pub trait ProductGateway: Send + Sync {
    /// Fetch the full product list, in catalog order.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, GatewayError>> + Send;

    /// Fetch one product. `Ok(None)` means the catalog has no such product.
    fn fetch_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, GatewayError>> + Send;
}
