//! # Screen Trait
//!
//! The `Screen` trait is the contract every state machine must satisfy to be run
//! by a [`ScreenActor`](crate::ScreenActor). It fixes the command vocabulary,
//! the reply type, the published state type, the injected context and the error
//! type, and provides lifecycle hooks (`on_mount`, `on_unmount`).
//!
//! # Provided Methods (Hooks)
//! - [`Screen::on_mount`] runs once before the first command is handled.
//! - [`Screen::on_unmount`] runs once after the command channel closes.
//!
//! Both default to doing nothing.

use crate::store::Store;
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that a headless screen implements to be driven by `ScreenActor`.
///
/// # Associated Types
/// Commands and replies are typed per screen, so a catalog-admin command can
/// never be delivered to a category-browse screen.
///
/// # State Ownership
/// The screen's observable state lives in a [`Store`]. The actor never mutates
/// it; it only exposes the store's subscription to clients.
#[async_trait]
pub trait Screen: Send + Sync + 'static {
    /// The commands this screen understands.
    type Command: Send + Debug;

    /// The value returned for a successfully handled command.
    type Reply: Send + Debug;

    /// The published state snapshot.
    type State: Clone + Send + Sync + Debug + 'static;

    /// The runtime dependencies injected by `ScreenActor::run`.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error returned when a command is rejected.
    ///
    /// Rejection is for command misuse (e.g. submitting a closed dialog).
    /// Remote failures are part of the screen's state, not errors.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The store holding this screen's observable state.
    fn store(&self) -> &Store<Self::State>;

    /// Called once when the actor starts, before any command is processed.
    async fn on_mount(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a single command.
    async fn handle(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::Reply, Self::Error>;

    /// Called once after the command channel closes.
    async fn on_unmount(&mut self, _ctx: &Self::Context) {}
}
