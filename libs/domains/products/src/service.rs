//! Product Service - Business logic layer

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductDto};
use crate::repository::ProductRepository;

/// Catalog operations offered to the controller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_products(&self) -> ProductResult<Vec<Product>>;

    async fn get_product(&self, id: i64) -> ProductResult<Product>;

    async fn create_product(&self, dto: ProductDto) -> ProductResult<Product>;

    /// Replace all mutable fields of product `id`
    async fn update_product(&self, id: i64, dto: ProductDto) -> ProductResult<Product>;

    /// Delete `product` and hand it back unchanged
    async fn remove_product(&self, product: Product) -> ProductResult<Product>;
}

/// Product service backed by a [`ProductRepository`]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R: ProductRepository> ProductCatalog for ProductService<R> {
    #[instrument(skip(self))]
    async fn get_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, dto), fields(product_name = %dto.name))]
    async fn create_product(&self, dto: ProductDto) -> ProductResult<Product> {
        self.repository.save(Product::from(dto)).await
    }

    #[instrument(skip(self, dto))]
    async fn update_product(&self, id: i64, dto: ProductDto) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.apply(dto);
        self.repository.save(product).await
    }

    #[instrument(skip(self, product), fields(product_id = ?product.id))]
    async fn remove_product(&self, product: Product) -> ProductResult<Product> {
        self.repository.delete(&product).await?;
        Ok(product)
    }
}
