use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::null_as_default;

/// Type-safe identifier for Categories.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl CategoryId {
    /// Exact match against a navigation parameter, by string form.
    ///
    /// `"07"` does not match `CategoryId(7)`.
    pub fn matches_param(&self, param: &str) -> bool {
        self.to_string() == param
    }
}

/// A product classification. Read-only from this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_order: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_date: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, sort_order: i64) -> Self {
        Self {
            category_id: id.into(),
            category_name: name.into(),
            sort_order,
            notes: None,
            is_active: true,
            created_by: String::new(),
            created_date: String::new(),
        }
    }
}

/// Active categories in display order (ascending `sort_order`, stable).
pub fn navigable(categories: &[Category]) -> Vec<&Category> {
    let mut active: Vec<&Category> = categories.iter().filter(|c| c.is_active).collect();
    active.sort_by_key(|c| c.sort_order);
    active
}
