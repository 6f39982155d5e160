//! # ScreenHandle Trait
//!
//! Provides a common interface for screen-specific clients, adding default
//! `snapshot`, `subscribe` and `remount` methods on top of a generic
//! [`ScreenClient`].
use crate::{FrameworkError, Screen, ScreenClient};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for screen-specific clients to inherit the standard operations.
///
/// # Example
///
/// ```rust
/// use screen_framework::{FrameworkError, Screen, ScreenClient, ScreenHandle, Store};
/// use async_trait::async_trait;
///
/// #[derive(Debug)] enum Cmd {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct PageError(String);
/// impl From<String> for PageError { fn from(s: String) -> Self { PageError(s) } }
///
/// struct Page { store: Store<u8> }
///
/// #[async_trait]
/// impl Screen for Page {
///     type Command = Cmd; type Reply = (); type State = u8; type Context = (); type Error = PageError;
///     fn store(&self) -> &Store<u8> { &self.store }
///     async fn handle(&mut self, command: Cmd, _: &()) -> Result<(), PageError> { match command {} }
/// }
///
/// struct PageClient { inner: ScreenClient<Page> }
///
/// #[async_trait]
/// impl ScreenHandle<Page> for PageClient {
///     type Error = PageError;
///     fn inner(&self) -> &ScreenClient<Page> { &self.inner }
///     fn map_error(e: FrameworkError) -> PageError { PageError(e.to_string()) }
/// }
///
/// async fn usage(client: PageClient) {
///     // snapshot(), subscribe() and remount() are provided automatically!
///     let _ = client.snapshot();
///     let _ = client.remount().await;
/// }
/// ```
#[async_trait]
pub trait ScreenHandle<S: Screen>: Send + Sync {
    /// The screen-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ScreenClient.
    fn inner(&self) -> &ScreenClient<S>;

    /// Map framework errors to the screen-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// The latest published state.
    fn snapshot(&self) -> S::State {
        self.inner().snapshot()
    }

    /// A fresh subscription to state changes.
    fn subscribe(&self) -> watch::Receiver<S::State> {
        self.inner().subscribe()
    }

    /// Re-run the screen's mount sequence.
    #[tracing::instrument(skip(self))]
    async fn remount(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().remount().await.map_err(Self::map_error)
    }
}
