//! Loading the static product dataset.
//!
//! The dataset is a JSON array of product objects. Parsing is lenient per
//! record: a row without a usable `id` or `name` is skipped (it can be neither
//! displayed nor correlated), while a bad `price` or `rating` only makes that
//! field absent.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use storefront_catalog::{Catalog, Product};
use storefront_core::{DomainError, ProductId};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset must be a JSON array of product objects")]
    NotAnArray,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Read and parse a dataset file into a catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let products = parse_products(&raw)?;
    let catalog = Catalog::new(products)?;

    tracing::info!(
        path = %path.display(),
        products = catalog.len(),
        categories = catalog.categories().len(),
        "loaded product dataset"
    );
    Ok(catalog)
}

/// Parse a JSON array of product records, skipping unusable rows.
pub fn parse_products(json: &str) -> Result<Vec<Product>, DatasetError> {
    let Value::Array(records) = serde_json::from_str::<Value>(json)? else {
        return Err(DatasetError::NotAnArray);
    };

    let mut products = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match product_from_record(record) {
            Some(product) => products.push(product),
            None => tracing::warn!(index, "skipping product record without usable id or name"),
        }
    }
    Ok(products)
}

fn product_from_record(record: &Value) -> Option<Product> {
    let fields = record.as_object()?;
    let id = fields.get("id").and_then(id_from_value)?;
    let name = fields.get("name")?.as_str()?;

    let mut product = Product::new(id, name)
        .with_description(text_field(fields, "description"))
        .with_category(text_field(fields, "category"))
        .with_image(text_field(fields, "image"));

    if let Some(price) = fields.get("price").and_then(number_from_value) {
        product = product.with_price(price);
    }
    if let Some(rating) = fields.get("rating").and_then(integer_from_value) {
        product = product.with_rating(rating);
    }
    Some(product)
}

fn text_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn id_from_value(value: &Value) -> Option<ProductId> {
    match value {
        Value::Number(n) => n.as_u64().map(ProductId::new),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Numbers and numeric strings; anything else is absent.
fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn integer_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
