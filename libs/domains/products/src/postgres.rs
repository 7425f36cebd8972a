use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    repository::ProductRepository,
};

/// PostgreSQL-backed repository. Ids come from the `products.id` sequence.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let existing_id = product.id;
        let active_model: entity::ActiveModel = product.into();

        let model = match existing_id {
            None => active_model.insert(&self.db).await?,
            Some(id) => active_model.update(&self.db).await.map_err(|e| match e {
                DbErr::RecordNotUpdated => ProductError::NotFound(id),
                other => other.into(),
            })?,
        };

        tracing::info!(product_id = model.id, "Saved product");
        Ok(model.into())
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let Some(id) = product.id else {
            return Ok(());
        };

        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(())
    }
}
