//! # Browse Client
//!
//! Wraps a `ScreenClient<BrowseScreen>`. Navigation replies as soon as the
//! resolution has started; [`BrowseClient::wait_until_settled`] waits for it
//! to finish.
use crate::browse_screen::{BrowseCommand, BrowseError, BrowseScreen, BrowseState};
use async_trait::async_trait;
use screen_framework::{FrameworkError, ScreenClient, ScreenHandle};
use tracing::{debug, instrument};

/// Client for interacting with the browse screen.
#[derive(Clone)]
pub struct BrowseClient {
    inner: ScreenClient<BrowseScreen>,
}

impl BrowseClient {
    pub fn new(inner: ScreenClient<BrowseScreen>) -> Self {
        Self { inner }
    }

    /// Starts resolving `category`; returns the new generation.
    #[instrument(skip(self))]
    pub async fn navigate(&self, category: Option<String>) -> Result<u64, BrowseError> {
        debug!("Sending request");
        self.inner
            .send(BrowseCommand::Navigate(category))
            .await
            .map(|reply| reply.generation())
            .map_err(Self::map_error)
    }

    pub async fn reload(&self) -> Result<u64, BrowseError> {
        self.inner
            .send(BrowseCommand::Reload)
            .await
            .map(|reply| reply.generation())
            .map_err(Self::map_error)
    }

    /// Waits until `generation` has finished, or a newer one has started.
    pub async fn wait_until_settled(&self, generation: u64) -> Result<BrowseState, BrowseError> {
        let mut rx = self.subscribe();
        let state = rx
            .wait_for(|s| s.generation > generation || s.is_settled(generation))
            .await
            .map_err(|_| BrowseError::Closed(generation))?;
        Ok(state.clone())
    }

    /// Navigates and waits for the result.
    pub async fn open(&self, category: Option<String>) -> Result<BrowseState, BrowseError> {
        let generation = self.navigate(category).await?;
        self.wait_until_settled(generation).await
    }
}

#[async_trait]
impl ScreenHandle<BrowseScreen> for BrowseClient {
    type Error = BrowseError;

    fn inner(&self) -> &ScreenClient<BrowseScreen> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::ScreenError(inner) => match inner.downcast::<BrowseError>() {
                Ok(browse) => *browse,
                Err(other) => BrowseError::Communication(other.to_string()),
            },
            other => BrowseError::Communication(other.to_string()),
        }
    }
}
