//! # Catalog API
//!
//! The remote catalog resource, behind the [`CatalogApi`] trait so the screens
//! can run against [`HttpCatalogApi`] in production and [`MockCatalogApi`] in
//! tests.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | List products | GET | `/product?page={page}&pageSize={size}` |
//! | List categories | GET | `/product-category` |
//! | Products of category | GET | `/product/category/{id}` |
//! | Create product | POST | `/product` |
//! | Update product | PUT | `/product/{id}` |
//! | Delete product | DELETE | `/product/{id}` |
//! | Upload image | POST | `/upload` (multipart field `file`) |
//!
//! List and upload responses come back as raw JSON; their shape is checked by
//! [`crate::validate`], not here.

pub mod auth;
pub mod error;
pub mod http;
pub mod mock;

pub use auth::Credentials;
pub use error::ApiError;
pub use http::HttpCatalogApi;
pub use mock::{ApiCall, ApiMethod, MockCatalogApi};

use crate::model::{CategoryId, ProductDraft, ProductId, StagedFile};
use async_trait::async_trait;
use serde_json::Value;

/// Data access for the product catalog.
///
/// Every call takes the credential explicitly.
#[async_trait]
pub trait CatalogApi: Send + Sync + 'static {
    async fn list_products(
        &self,
        credentials: &Credentials,
        page: u32,
        page_size: u32,
    ) -> Result<Value, ApiError>;

    async fn list_categories(&self, credentials: &Credentials) -> Result<Value, ApiError>;

    async fn products_by_category(
        &self,
        credentials: &Credentials,
        category_id: CategoryId,
    ) -> Result<Value, ApiError>;

    async fn create_product(
        &self,
        credentials: &Credentials,
        draft: &ProductDraft,
    ) -> Result<Value, ApiError>;

    /// Replaces the product wholesale.
    async fn update_product(
        &self,
        credentials: &Credentials,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Value, ApiError>;

    async fn delete_product(&self, credentials: &Credentials, id: ProductId)
        -> Result<(), ApiError>;

    async fn upload_image(
        &self,
        credentials: &Credentials,
        file: &StagedFile,
    ) -> Result<Value, ApiError>;
}
