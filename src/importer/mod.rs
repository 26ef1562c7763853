//! CSV product import.
//!
//! Rows are validated one at a time and bad rows are skipped with a warning.
//! Only an I/O failure stops the import, and then nothing from the file is
//! returned. Undecodable bytes are replaced, not fatal.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::{error, info, warn};

use crate::models::NewProduct;

/// `sku,name,stockQuantity`
pub const EXPECTED_COLUMNS: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read CSV: {0}")]
    Read(#[from] csv::Error),
}

/// Why a single data row was left out of the import.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowRejection {
    #[error("empty line")]
    Blank,

    #[error("invalid CSV format: expected {expected} columns, found {found}", expected = EXPECTED_COLUMNS)]
    ColumnCount { found: usize },

    #[error("invalid number '{0}'")]
    InvalidQuantity(String),

    #[error("duplicate SKU {0}")]
    DuplicateSku(String),
}

/// Read every valid product row from the CSV file at `path`.
///
/// A missing file or a read failure yields an empty list; neither is an
/// error for the caller.
pub fn import_from_csv(path: impl AsRef<Path>) -> Vec<NewProduct> {
    let path = path.as_ref();

    let result = open_csv(path).and_then(|file| match file {
        Some(file) => Ok(Some(parse_records(file)?)),
        None => Ok(None),
    });

    match result {
        Ok(Some(products)) => products,
        Ok(None) => {
            warn!(path = %path.display(), "CSV file not found. Returning empty list.");
            Vec::new()
        }
        Err(err) => {
            error!(
                path = %path.display(),
                error = %err,
                details = ?err,
                "Error reading or parsing the CSV file"
            );
            Vec::new()
        }
    }
}

/// `Ok(None)` only when the file is known not to exist. A failed lookup
/// (permissions, a non-directory parent) is an error.
fn open_csv(path: &Path) -> Result<Option<File>, ImportError> {
    let open_error = |source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    };

    if !path.try_exists().map_err(open_error)? {
        return Ok(None);
    }
    File::open(path).map(Some).map_err(open_error)
}

/// Parse CSV text from `reader`. The first record is treated as a header
/// and dropped without looking at it.
///
/// Bytes that are not valid UTF-8 become U+FFFD; only I/O failures abort.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<NewProduct>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut products = Vec::new();
    let mut seen_skus = HashSet::new();
    let mut skipped = 0_usize;

    for (index, result) in rdr.byte_records().enumerate() {
        let raw = result?;
        if index == 0 {
            continue;
        }

        let line = raw.position().map_or(0, |pos| pos.line());
        let record: StringRecord = raw
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();

        match validate_row(&record, &mut seen_skus) {
            Ok(product) => {
                if product.is_out_of_stock() {
                    info!(line, sku = %product.sku, "Product is out of stock");
                } else if product.stock_quantity < 0 {
                    warn!(
                        line,
                        sku = %product.sku,
                        stock_quantity = product.stock_quantity,
                        "Negative stock quantity accepted"
                    );
                }
                products.push(product);
            }
            Err(reason) => {
                skipped += 1;
                warn!(line, reason = %reason, "Skipping CSV row");
            }
        }
    }

    info!(imported = products.len(), skipped, "Parsed CSV rows");
    Ok(products)
}

/// Validate one data row against the SKUs accepted so far.
///
/// Checks run in a fixed order: blank, column count, quantity, duplicate.
/// A SKU is only recorded in `seen_skus` once its row is accepted.
pub fn validate_row(
    record: &StringRecord,
    seen_skus: &mut HashSet<String>,
) -> Result<NewProduct, RowRejection> {
    if record.iter().all(|field| field.trim().is_empty()) {
        return Err(RowRejection::Blank);
    }

    if record.len() != EXPECTED_COLUMNS {
        return Err(RowRejection::ColumnCount {
            found: record.len(),
        });
    }

    let sku = record[0].trim();
    let name = record[1].trim();
    let raw_quantity = record[2].trim();

    let stock_quantity: i32 = raw_quantity
        .parse()
        .map_err(|_| RowRejection::InvalidQuantity(raw_quantity.to_string()))?;

    if !seen_skus.insert(sku.to_string()) {
        return Err(RowRejection::DuplicateSku(sku.to_string()));
    }

    Ok(NewProduct::new(sku, name, stock_quantity))
}
