//! Catalog products, the drafts used to create or replace them, and the
//! summary cards shown on the category browse grid.
//!
//! Wire names are camelCase (`productId`, `productName`, ...). Every field
//! except the identifier and the name has a default, so elements carrying
//! only the required keys still decode.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{null_as_default, CategoryId};

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_expiration: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_id: CategoryId,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tax_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_by: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_stock: i64,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Product {
    /// Creates a product with only the required fields set.
    pub fn new(id: impl Into<ProductId>, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            product_id: id.into(),
            product_name: name.into(),
            product_code: code.into(),
            unit: String::new(),
            default_expiration: 0,
            category_id: CategoryId::default(),
            description: None,
            tax_id: 0,
            created_by: String::new(),
            created_date: String::new(),
            updated_by: String::new(),
            updated_date: String::new(),
            available_stock: 0,
            images: None,
            price: None,
            status: None,
        }
    }

    /// The image list, empty when the server omitted it.
    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or(&[])
    }

    /// The first image, which is displayed as the primary one.
    pub fn primary_image(&self) -> Option<&str> {
        self.images().first().map(String::as_str)
    }
}

/// Default shelf life, in days, of a freshly created draft.
pub const DEFAULT_EXPIRATION_DAYS: i64 = 30;

/// Default tax rate reference of a freshly created draft.
pub const DEFAULT_TAX_ID: i64 = 1;

/// The full, client-editable body of a product.
///
/// Sent as-is for both create (POST) and replace (PUT); there is no partial
/// update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_code: String,
    pub product_name: String,
    pub unit: String,
    pub default_expiration: i64,
    pub category_id: CategoryId,
    pub description: String,
    pub tax_id: i64,
    pub images: Vec<String>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            product_code: String::new(),
            product_name: String::new(),
            unit: String::new(),
            default_expiration: DEFAULT_EXPIRATION_DAYS,
            category_id: CategoryId(0),
            description: String::new(),
            tax_id: DEFAULT_TAX_ID,
            images: Vec::new(),
        }
    }
}

impl ProductDraft {
    /// Pre-fills a draft from an existing product for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_code: product.product_code.clone(),
            product_name: product.product_name.clone(),
            unit: product.unit.clone(),
            default_expiration: product.default_expiration,
            category_id: product.category_id,
            description: product.description.clone().unwrap_or_default(),
            tax_id: product.tax_id,
            images: product.images().to_vec(),
        }
    }

    pub fn push_image(&mut self, url: impl Into<String>) {
        self.images.push(url.into());
    }

    /// Removes the image at `index`, shifting later images down.
    ///
    /// Out-of-range indices leave the list unchanged.
    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }
}

/// Product summary returned by the per-category listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub product_id: ProductId,
    pub product_name: String,
    #[serde(default)]
    pub product_code: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}
