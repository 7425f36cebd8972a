//! Caller-facing product operations.
//!
//! The controller is a thin adapter over a [`ProductCatalog`]: it adds no
//! validation and keeps no state between calls.

use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Product, ProductDto};
use crate::service::ProductCatalog;

pub struct ProductController<S: ProductCatalog> {
    service: Arc<S>,
}

impl<S: ProductCatalog> ProductController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub async fn list(&self) -> ProductResult<Vec<Product>> {
        self.service.get_products().await
    }

    pub async fn detail(&self, id: i64) -> ProductResult<Product> {
        self.service.get_product(id).await
    }

    pub async fn create(&self, dto: ProductDto) -> ProductResult<Product> {
        self.service.create_product(dto).await
    }

    pub async fn update(&self, id: i64, dto: ProductDto) -> ProductResult<Product> {
        self.service.update_product(id, dto).await
    }

    /// Resolve `id` first so unknown ids surface as `NotFound`.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> ProductResult<Product> {
        let product = self.service.get_product(id).await?;
        self.service.remove_product(product).await
    }
}

impl<S: ProductCatalog> Clone for ProductController<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
