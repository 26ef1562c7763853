use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ProductStore;
use crate::error::AppResult;
use crate::models::{NewProduct, Product};

/// Vec-backed store. Ids start at 1 and rows come back in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    rows: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn save_all(&self, products: Vec<NewProduct>) -> AppResult<Vec<Product>> {
        let mut rows = self.rows.write().await;
        let mut next_id = rows.last().map_or(1, |p| p.id + 1);

        let saved: Vec<Product> = products
            .into_iter()
            .map(|p| {
                let product = p.with_id(next_id);
                next_id += 1;
                product
            })
            .collect();

        rows.extend(saved.iter().cloned());
        Ok(saved)
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.rows.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = InMemoryProductStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_all_assigns_sequential_ids() {
        let store = InMemoryProductStore::new();
        let saved = store
            .save_all(vec![
                NewProduct::new("A1", "Mouse", 1),
                NewProduct::new("B2", "Pad", 2),
            ])
            .await
            .unwrap();

        let ids: Vec<i64> = saved.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn ids_continue_across_batches() {
        let store = InMemoryProductStore::new();
        store.save_all(vec![NewProduct::new("A1", "Mouse", 1)]).await.unwrap();
        let saved = store.save_all(vec![NewProduct::new("B2", "Pad", 2)]).await.unwrap();
        assert_eq!(saved[0].id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn find_all_returns_insertion_order() {
        let store = InMemoryProductStore::new();
        store
            .save_all(vec![
                NewProduct::new("Z9", "Zebra", 1),
                NewProduct::new("A1", "Alpha", 2),
            ])
            .await
            .unwrap();

        let skus: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.sku)
            .collect();
        assert_eq!(skus, vec!["Z9", "A1"]);
    }

    #[tokio::test]
    async fn store_does_not_deduplicate_skus() {
        let store = InMemoryProductStore::new();
        store.save_all(vec![NewProduct::new("A1", "Mouse", 1)]).await.unwrap();
        store.save_all(vec![NewProduct::new("A1", "Mouse", 1)]).await.unwrap();
        assert_eq!(store.len().await, 2, "SKU uniqueness is an import-time concern only");
    }
}
