//! Shape checks for raw catalog responses.
//!
//! A list response must be a JSON array. Individual elements that cannot be
//! used are dropped without failing the whole list.

use crate::model::{Category, Product, ProductCard};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("Expected a list of {0}")]
    NotASequence(&'static str),

    #[error("Upload response carries no image URL")]
    MissingImageUrl,
}

/// Products with both `productId` and `productName`.
pub fn product_list(value: &Value) -> Result<Vec<Product>, ShapeError> {
    decode_list(value, "products", &["productId", "productName"])
}

pub fn category_list(value: &Value) -> Result<Vec<Category>, ShapeError> {
    decode_list(value, "categories", &["categoryId", "categoryName"])
}

pub fn product_cards(value: &Value) -> Result<Vec<ProductCard>, ShapeError> {
    decode_list(value, "products", &["productId", "productName"])
}

/// The uploaded image's URL: `url`, then `imageUrl`, then `path`.
///
/// Empty strings are skipped.
pub fn image_url(value: &Value) -> Result<String, ShapeError> {
    ["url", "imageUrl", "path"]
        .iter()
        .filter_map(|key| value.get(key).and_then(Value::as_str))
        .find(|url| !url.is_empty())
        .map(str::to_string)
        .ok_or(ShapeError::MissingImageUrl)
}

fn decode_list<T: DeserializeOwned>(
    value: &Value,
    what: &'static str,
    required: &[&str],
) -> Result<Vec<T>, ShapeError> {
    let items = value.as_array().ok_or(ShapeError::NotASequence(what))?;
    let decoded: Vec<T> = items
        .iter()
        .filter(|item| {
            required
                .iter()
                .all(|key| item.get(key).is_some_and(|v| !v.is_null()))
        })
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect();
    if decoded.len() != items.len() {
        debug!(what, dropped = items.len() - decoded.len(), "Dropped malformed elements");
    }
    Ok(decoded)
}
