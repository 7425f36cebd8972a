//! Process-local product storage.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

#[derive(Debug)]
struct Store {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Map-backed repository. Ids start at 1 and are never reused.
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let id = match product.id {
            Some(id) => {
                // Keep explicit ids from colliding with future assignments
                store.next_id = store.next_id.max(id.saturating_add(1));
                id
            }
            None => {
                let id = store.next_id;
                store.next_id += 1;
                product.id = Some(id);
                id
            }
        };

        store.products.insert(id, product.clone());
        tracing::info!(product_id = id, "Saved product");
        Ok(product)
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let Some(id) = product.id else {
            return Ok(());
        };

        let mut store = self.store.write().await;
        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> Product {
        Product {
            id: None,
            name: name.to_string(),
            maker: "KOREAN SHORT CAT".to_string(),
            price: 20000,
            image_url: "https://example.com/rod.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.save(product("first")).await.unwrap();
        let second = repo.save(product("second")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites() {
        let repo = InMemoryProductRepository::new();
        let mut saved = repo.save(product("before")).await.unwrap();

        saved.name = "after".to_string();
        repo.save(saved.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "after");
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        for name in ["a", "b", "c"] {
            repo.save(product(name)).await.unwrap();
        }

        let ids: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryProductRepository::new();
        let first = repo.save(product("a")).await.unwrap();
        repo.delete(&first).await.unwrap();

        let next = repo.save(product("b")).await.unwrap();
        assert_eq!(next.id, Some(2));
        assert_eq!(repo.find_by_id(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_unknown_or_unsaved_is_noop() {
        let repo = InMemoryProductRepository::new();
        repo.save(product("kept")).await.unwrap();

        repo.delete(&product("never saved")).await.unwrap();
        repo.delete(&Product {
            id: Some(99),
            ..product("ghost")
        })
        .await
        .unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryProductRepository::new();
        let other = repo.clone();

        let saved = repo.save(product("shared")).await.unwrap();
        assert_eq!(other.find_by_id(1).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_concurrent_saves_get_distinct_ids() {
        let repo = InMemoryProductRepository::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.save(product(&format!("p{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 16);
    }
}
