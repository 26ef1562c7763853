use axum::{extract::State, Json};
use tracing::info;

use crate::{error::AppResult, models::Product, AppState};

// ── GET /products ─────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.store.find_all().await?;
    info!(count = products.len(), "Retrieved products from database");
    Ok(Json(products))
}
