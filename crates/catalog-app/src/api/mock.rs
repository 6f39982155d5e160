//! # Scripted Catalog Backend
//!
//! [`MockCatalogApi`] answers [`CatalogApi`] calls from a queue of scripted
//! responses and records every call it receives, so screen tests can assert on
//! exactly which requests were issued.
//!
//! Expectations are matched per method in FIFO order: a `list_categories`
//! call takes the oldest pending `list_categories` expectation regardless of
//! what else is queued. A call with no pending expectation panics.
//!
//! ```ignore
//! let api = MockCatalogApi::new();
//! api.expect_list_products().return_ok(json!([{"productId": 1, "productName": "Sữa"}]));
//! api.expect_list_categories().delayed(Duration::from_millis(50)).return_ok(json!([]));
//!
//! // hand `Arc::new(api.clone())` to the screen under test ...
//!
//! api.verify();
//! assert_eq!(api.calls().len(), 2);
//! ```

use super::{ApiError, CatalogApi, Credentials};
use crate::model::{CategoryId, ProductDraft, ProductId, StagedFile};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Which endpoint a call or expectation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    ListProducts,
    ListCategories,
    ProductsByCategory,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
    UploadImage,
}

/// A recorded call, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListProducts { page: u32, page_size: u32 },
    ListCategories,
    ProductsByCategory(CategoryId),
    CreateProduct(ProductDraft),
    UpdateProduct(ProductId, ProductDraft),
    DeleteProduct(ProductId),
    UploadImage { file_name: String },
}

impl ApiCall {
    pub fn method(&self) -> ApiMethod {
        match self {
            ApiCall::ListProducts { .. } => ApiMethod::ListProducts,
            ApiCall::ListCategories => ApiMethod::ListCategories,
            ApiCall::ProductsByCategory(_) => ApiMethod::ProductsByCategory,
            ApiCall::CreateProduct(_) => ApiMethod::CreateProduct,
            ApiCall::UpdateProduct(..) => ApiMethod::UpdateProduct,
            ApiCall::DeleteProduct(_) => ApiMethod::DeleteProduct,
            ApiCall::UploadImage { .. } => ApiMethod::UploadImage,
        }
    }
}

struct Expectation {
    method: ApiMethod,
    delay: Option<Duration>,
    response: Result<Value, ApiError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<ApiCall>,
    authorized: Vec<bool>,
}

/// A cloneable, scripted [`CatalogApi`]. Clones share one queue.
#[derive(Clone, Default)]
pub struct MockCatalogApi {
    state: Arc<Mutex<MockState>>,
}

impl MockCatalogApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_list_products(&self) -> ExpectationBuilder {
        self.expect(ApiMethod::ListProducts)
    }

    pub fn expect_list_categories(&self) -> ExpectationBuilder {
        self.expect(ApiMethod::ListCategories)
    }

    pub fn expect_products_by_category(&self) -> ExpectationBuilder {
        self.expect(ApiMethod::ProductsByCategory)
    }

    pub fn expect_create_product(&self) -> ExpectationBuilder {
        self.expect(ApiMethod::CreateProduct)
    }

    pub fn expect_update_product(&self) -> ExpectationBuilder {
        self.expect(ApiMethod::UpdateProduct)
    }

    pub fn expect_delete_product(&self) -> ExpectationBuilder {
        self.expect(ApiMethod::DeleteProduct)
    }

    pub fn expect_upload_image(&self) -> ExpectationBuilder {
        self.expect(ApiMethod::UploadImage)
    }

    fn expect(&self, method: ApiMethod) -> ExpectationBuilder {
        ExpectationBuilder {
            state: self.state.clone(),
            method,
            delay: None,
        }
    }

    /// Every call received so far, in arrival order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of calls received for `method`.
    pub fn count(&self, method: ApiMethod) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|call| call.method() == method)
            .count()
    }

    /// Whether each recorded call carried a bearer token, in arrival order.
    pub fn authorized(&self) -> Vec<bool> {
        self.state.lock().unwrap().authorized.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            let pending: Vec<ApiMethod> = state.expectations.iter().map(|e| e.method).collect();
            panic!("Not all expectations were met. Remaining: {pending:?}");
        }
    }

    async fn answer(&self, credentials: &Credentials, call: ApiCall) -> Result<Value, ApiError> {
        let method = call.method();
        let expectation = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(call);
            state.authorized.push(credentials.is_present());
            let position = state
                .expectations
                .iter()
                .position(|e| e.method == method)
                .unwrap_or_else(|| panic!("Unexpected call to {method:?}"));
            state
                .expectations
                .remove(position)
                .unwrap_or_else(|| panic!("Unexpected call to {method:?}"))
        };
        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        expectation.response
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    state: Arc<Mutex<MockState>>,
    method: ApiMethod,
    delay: Option<Duration>,
}

impl ExpectationBuilder {
    /// Holds the response back for `delay` before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn return_ok(self, body: Value) {
        self.push(Ok(body));
    }

    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    /// Shorthand for a non-2xx answer.
    pub fn return_status(self, status: u16) {
        self.push(Err(ApiError::Status {
            status,
            body: String::new(),
        }));
    }

    fn push(self, response: Result<Value, ApiError>) {
        self.state.lock().unwrap().expectations.push_back(Expectation {
            method: self.method,
            delay: self.delay,
            response,
        });
    }
}

#[async_trait]
impl CatalogApi for MockCatalogApi {
    async fn list_products(
        &self,
        credentials: &Credentials,
        page: u32,
        page_size: u32,
    ) -> Result<Value, ApiError> {
        self.answer(credentials, ApiCall::ListProducts { page, page_size })
            .await
    }

    async fn list_categories(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        self.answer(credentials, ApiCall::ListCategories).await
    }

    async fn products_by_category(
        &self,
        credentials: &Credentials,
        category_id: CategoryId,
    ) -> Result<Value, ApiError> {
        self.answer(credentials, ApiCall::ProductsByCategory(category_id))
            .await
    }

    async fn create_product(
        &self,
        credentials: &Credentials,
        draft: &ProductDraft,
    ) -> Result<Value, ApiError> {
        self.answer(credentials, ApiCall::CreateProduct(draft.clone()))
            .await
    }

    async fn update_product(
        &self,
        credentials: &Credentials,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Value, ApiError> {
        self.answer(credentials, ApiCall::UpdateProduct(id, draft.clone()))
            .await
    }

    async fn delete_product(
        &self,
        credentials: &Credentials,
        id: ProductId,
    ) -> Result<(), ApiError> {
        self.answer(credentials, ApiCall::DeleteProduct(id))
            .await
            .map(|_| ())
    }

    async fn upload_image(
        &self,
        credentials: &Credentials,
        file: &StagedFile,
    ) -> Result<Value, ApiError> {
        let call = ApiCall::UploadImage {
            file_name: file.file_name.clone(),
        };
        self.answer(credentials, call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[tokio::test]
    async fn answers_per_method_in_order() {
        let api = MockCatalogApi::new();
        api.expect_list_categories().return_ok(json!(["first"]));
        api.expect_delete_product().return_status(500);
        api.expect_list_categories().return_ok(json!(["second"]));

        let creds = Credentials::bearer("t");
        assert_eq!(api.list_categories(&creds).await.unwrap(), json!(["first"]));
        assert_eq!(api.list_categories(&creds).await.unwrap(), json!(["second"]));
        assert_matches!(
            api.delete_product(&Credentials::anonymous(), ProductId(3)).await,
            Err(ApiError::Status { status: 500, .. })
        );

        api.verify();
        assert_eq!(api.count(ApiMethod::ListCategories), 2);
        assert_eq!(api.calls()[2], ApiCall::DeleteProduct(ProductId(3)));
        assert_eq!(api.authorized(), vec![true, true, false]);
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn verify_reports_leftovers() {
        let api = MockCatalogApi::new();
        api.expect_upload_image().return_ok(json!({"url": "x"}));
        api.verify();
    }
}
