use crate::api::ApiError;
use crate::validate::ShapeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowseError {
    #[error("Screen communication error: {0}")]
    Communication(String),
    #[error("The screen stopped before generation {0} settled")]
    Closed(u64),
}

impl From<String> for BrowseError {
    fn from(s: String) -> Self {
        BrowseError::Communication(s)
    }
}

/// Why a fetch in a resolution run failed. Surfaces only as a notice.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
