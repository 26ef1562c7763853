use std::path::Path;

use tracing::{info, warn};

use crate::error::AppResult;
use crate::importer;
use crate::store::ProductStore;

/// Import the CSV at `path` into `store`. Runs once, before the server
/// accepts connections.
///
/// Store failures are returned as-is so the caller can abort startup.
pub async fn import_products(store: &dyn ProductStore, path: &Path) -> AppResult<usize> {
    info!(path = %path.display(), "Importing products from CSV file");

    let products = importer::import_from_csv(path);

    if products.is_empty() {
        warn!("No valid products found in CSV file.");
        return Ok(0);
    }

    let saved = store.save_all(products).await?;
    info!(count = saved.len(), "Products imported into the database");

    Ok(saved.len())
}
