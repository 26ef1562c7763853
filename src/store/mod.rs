use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{NewProduct, Product};

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[cfg(test)]
pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;

/// Persistence for products. Plain bulk CRUD, no custom queries.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist the whole batch in one call and return the stored rows,
    /// ids included, in the order given.
    async fn save_all(&self, products: Vec<NewProduct>) -> AppResult<Vec<Product>>;

    /// Every stored product in the store's natural order.
    async fn find_all(&self) -> AppResult<Vec<Product>>;
}
