use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Implementations own the stored records and are responsible for assigning
/// ids and for their own concurrency safety.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ascending by id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Insert when `product.id` is `None` (assigning a fresh id), otherwise
    /// overwrite the stored record with that id.
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Remove the stored record with `product.id`
    async fn delete(&self, product: &Product) -> ProductResult<()>;
}
