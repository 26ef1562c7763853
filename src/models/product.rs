use serde::Serialize;

/// Stored product. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub stock_quantity: i32,
}

/// A validated import row that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub stock_quantity: i32,
}

impl NewProduct {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, stock_quantity: i32) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            stock_quantity,
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock_quantity == 0
    }

    /// Attach a store-assigned identity.
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            sku: self.sku,
            name: self.name,
            stock_quantity: self.stock_quantity,
        }
    }
}
