use crate::product::{Product, ProductId};

use super::{GatewayError, ProductGateway};

/// A gateway that serves a fixed product list, or fails every request.
#[derive(Debug, Clone, Default)]
pub struct StaticProductGateway {
    products: Vec<Product>,
    failure: Option<GatewayError>,
}

impl StaticProductGateway {
    pub fn new(products: Vec<Product>) -> Self {
        StaticProductGateway {
            products,
            failure: None,
        }
    }

    /// A gateway whose every request fails with `error`.
    pub fn failing(error: GatewayError) -> Self {
        StaticProductGateway {
            products: Vec::new(),
            failure: Some(error),
        }
    }

    fn check(&self) -> Result<(), GatewayError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl ProductGateway for StaticProductGateway {
    async fn fetch_products(&self) -> Result<Vec<Product>, GatewayError> {
        self.check()?;
        Ok(self.products.clone())
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Option<Product>, GatewayError> {
        self.check()?;
        Ok(self.products.iter().find(|product| product.id == id).cloned())
    }
}
