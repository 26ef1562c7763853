use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::ProductStore;
use crate::error::AppResult;
use crate::models::{NewProduct, Product};

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `products` table if it is missing.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id             BIGSERIAL PRIMARY KEY,
                sku            TEXT    NOT NULL,
                name           TEXT    NOT NULL,
                stock_quantity INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn save_all(&self, products: Vec<NewProduct>) -> AppResult<Vec<Product>> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let mut skus: Vec<String> = Vec::with_capacity(products.len());
        let mut names: Vec<String> = Vec::with_capacity(products.len());
        let mut quantities: Vec<i32> = Vec::with_capacity(products.len());

        for p in products {
            skus.push(p.sku);
            names.push(p.name);
            quantities.push(p.stock_quantity);
        }

        // One statement for the whole batch; WITH ORDINALITY keeps input order
        // so ids follow file order.
        let saved = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (sku, name, stock_quantity)
            SELECT sku, name, stock_quantity
            FROM UNNEST($1::text[], $2::text[], $3::int[])
                 WITH ORDINALITY AS batch(sku, name, stock_quantity, ord)
            ORDER BY ord
            RETURNING id, sku, name, stock_quantity
            "#,
        )
        .bind(&skus)
        .bind(&names)
        .bind(&quantities)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = saved.len(), "Inserted product batch");
        Ok(saved)
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, sku, name, stock_quantity FROM products ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
