use crate::api::{CatalogApi, Credentials};
use crate::config::{CatalogConfig, DEFAULT_PAGE_SIZE};
use std::sync::Arc;

/// Dependencies injected into each screen's `run`.
#[derive(Clone)]
pub struct CatalogContext {
    pub api: Arc<dyn CatalogApi>,
    pub credentials: Credentials,
    pub page_size: u32,
}

impl CatalogContext {
    pub fn new(api: Arc<dyn CatalogApi>, credentials: Credentials) -> Self {
        Self {
            api,
            credentials,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn from_config(api: Arc<dyn CatalogApi>, config: &CatalogConfig) -> Self {
        Self {
            api,
            credentials: config.credentials.clone(),
            page_size: config.page_size,
        }
    }
}
