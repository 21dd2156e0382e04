//! reqwest-backed gateway for a JSON catalog service.
//!
//! `GET <base>` returns a JSON array of products and `GET <base>/<id>` a
//! single product, or an empty body when the product does not exist.

use crate::product::{Product, ProductId};

use super::{GatewayError, ProductGateway};

#[derive(Debug, Clone)]
pub struct HttpProductGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpProductGateway { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, GatewayError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "catalog request rejected");
            return Err(GatewayError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

impl ProductGateway for HttpProductGateway {
    async fn fetch_products(&self) -> Result<Vec<Product>, GatewayError> {
        let response = self.get(&self.base_url).await?;
        let products: Vec<Product> = response.json().await?;
        tracing::debug!(url = %self.base_url, count = products.len(), "fetched products");
        Ok(products)
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Option<Product>, GatewayError> {
        let url = format!("{}/{}", self.base_url, id);
        let body = self.get(&url).await?.text().await?;
        if body.trim().is_empty() {
            tracing::debug!(url = %url, "product not found");
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }
}
