use crate::model::{FormKind, ProductField, ProductId};
use thiserror::Error;

/// Commands the admin screen refuses. Network failures are not errors here;
/// they surface as notices and a `Failed` outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error("A request is already in flight")]
    Busy,
    #[error("The {0:?} dialog is not open")]
    DialogClosed(FormKind),
    #[error("No product is being edited")]
    NoEditTarget,
    #[error("No product is selected for deletion")]
    NoDeleteTarget,
    #[error("Product {0} is not in the loaded list")]
    UnknownProduct(ProductId),
    #[error("Invalid value {value:?} for {field:?}")]
    InvalidField { field: ProductField, value: String },
    #[error("Screen communication error: {0}")]
    Communication(String),
}

impl From<String> for AdminError {
    fn from(s: String) -> Self {
        AdminError::Communication(s)
    }
}
