//! Product records as served by the remote catalog.

use serde::{Deserialize, Serialize};

/// Unique product identifier assigned by the catalog service.
pub type ProductId = u64;

/// Aggregate customer rating of a product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating in `0.0..=5.0`.
    pub rate: f64,
    /// Number of ratings the average is built from.
    pub count: u64,
}

/// An immutable catalog entry.
///
/// Owned by the gateway that fetched it; the catalog and the cart only ever
/// hold clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// The first `words` words of the description, followed by `...` when
    /// anything was cut off.
    ///
    /// Short descriptions come back unchanged, without a trailing `...`;
    /// product tiles that always appended the ellipsis showed it even when
    /// nothing was elided.
    pub fn summary(&self, words: usize) -> String {
        let mut parts = self.description.split_whitespace();
        let head: Vec<&str> = parts.by_ref().take(words).collect();
        if parts.next().is_some() {
            format!("{}...", head.join(" "))
        } else {
            head.join(" ")
        }
    }
}
