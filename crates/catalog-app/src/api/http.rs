//! REST client for the catalog HTTP endpoints, using [`reqwest`].

use super::{ApiError, CatalogApi, Credentials};
use crate::model::{CategoryId, ProductDraft, ProductId, StagedFile};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, warn};

/// HTTP client for one catalog backend.
pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    /// * `base_url` - e.g. `https://minhlong.mlhr.org/api`, without a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuses an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ---- private helpers ----

    /// Attaches the bearer header when a token is present.
    fn authorize(
        request: reqwest::RequestBuilder,
        credentials: &Credentials,
    ) -> reqwest::RequestBuilder {
        match credentials.token() {
            Ok(token) => request.bearer_auth(token),
            Err(_) => request,
        }
    }

    /// Ensure the response has a success status code, or turn it into
    /// [`ApiError::Status`] carrying the body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            warn!(status = status.as_u16(), "Catalog request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful body as JSON. An empty body reads as `null`.
    async fn parse_response(response: reqwest::Response) -> Result<Value, ApiError> {
        let response = Self::ensure_success(response).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_products(
        &self,
        credentials: &Credentials,
        page: u32,
        page_size: u32,
    ) -> Result<Value, ApiError> {
        let token = credentials.token()?;
        debug!(page, page_size, "GET /product");
        let response = self
            .client
            .get(self.url("/product"))
            .query(&[("page", page), ("pageSize", page_size)])
            .bearer_auth(token)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn list_categories(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        debug!("GET /product-category");
        let request = self.client.get(self.url("/product-category"));
        let response = Self::authorize(request, credentials).send().await?;
        Self::parse_response(response).await
    }

    async fn products_by_category(
        &self,
        credentials: &Credentials,
        category_id: CategoryId,
    ) -> Result<Value, ApiError> {
        debug!(%category_id, "GET /product/category/{{id}}");
        let request = self
            .client
            .get(self.url(&format!("/product/category/{category_id}")));
        let response = Self::authorize(request, credentials).send().await?;
        Self::parse_response(response).await
    }

    async fn create_product(
        &self,
        credentials: &Credentials,
        draft: &ProductDraft,
    ) -> Result<Value, ApiError> {
        let token = credentials.token()?;
        debug!(code = %draft.product_code, "POST /product");
        let response = self
            .client
            .post(self.url("/product"))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update_product(
        &self,
        credentials: &Credentials,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Value, ApiError> {
        let token = credentials.token()?;
        debug!(%id, "PUT /product/{{id}}");
        let response = self
            .client
            .put(self.url(&format!("/product/{id}")))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete_product(
        &self,
        credentials: &Credentials,
        id: ProductId,
    ) -> Result<(), ApiError> {
        let token = credentials.token()?;
        debug!(%id, "DELETE /product/{{id}}");
        let response = self
            .client
            .delete(self.url(&format!("/product/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check_status(response).await
    }

    async fn upload_image(
        &self,
        credentials: &Credentials,
        file: &StagedFile,
    ) -> Result<Value, ApiError> {
        let token = credentials.token()?;
        debug!(file = %file.file_name, bytes = file.bytes.len(), "POST /upload");
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        if let Some(mime) = &file.mime_type {
            part = part.mime_str(mime)?;
        }
        let response = self
            .client
            .post(self.url("/upload"))
            .bearer_auth(token)
            .multipart(Form::new().part("file", part))
            .send()
            .await?;
        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = HttpCatalogApi::new("https://catalog.test/api/");
        assert_eq!(api.base_url(), "https://catalog.test/api");
        assert_eq!(api.url("/product/3"), "https://catalog.test/api/product/3");
    }

    #[tokio::test]
    async fn mutations_without_token_never_reach_the_network() {
        // Unroutable host: reaching the network would yield Request, not MissingCredential.
        let api = HttpCatalogApi::new("http://127.0.0.1:9");
        let creds = Credentials::anonymous();

        assert_matches!(
            api.delete_product(&creds, ProductId(1)).await,
            Err(ApiError::MissingCredential)
        );
        assert_matches!(
            api.list_products(&creds, 1, 20).await,
            Err(ApiError::MissingCredential)
        );
        assert_matches!(
            api.create_product(&creds, &ProductDraft::default()).await,
            Err(ApiError::MissingCredential)
        );
    }
}
