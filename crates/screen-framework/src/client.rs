//! # Generic Client
//!
//! The typed handle used to talk to a [`ScreenActor`](crate::ScreenActor).

use crate::error::FrameworkError;
use crate::message::ScreenRequest;
use crate::screen::Screen;
use tokio::sync::{mpsc, oneshot, watch};

/// ## ScreenClient
///
/// Sends commands to a screen over an mpsc channel and receives replies on
/// oneshot channels. It also carries a `watch` receiver on the screen's state,
/// so reading the latest snapshot never round-trips through the actor.
///
/// * **Cloneable**: holds only a sender and a receiver, cloning is inexpensive.
/// * **Async API**: command methods resolve to `Result<…, FrameworkError>`.
pub struct ScreenClient<S: Screen> {
    sender: mpsc::Sender<ScreenRequest<S>>,
    state: watch::Receiver<S::State>,
}

impl<S: Screen> Clone for ScreenClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            state: self.state.clone(),
        }
    }
}

impl<S: Screen> ScreenClient<S> {
    pub fn new(sender: mpsc::Sender<ScreenRequest<S>>, state: watch::Receiver<S::State>) -> Self {
        Self { sender, state }
    }

    /// Sends a command and waits for the screen to finish handling it.
    pub async fn send(&self, command: S::Command) -> Result<S::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Command {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Re-runs the screen's `on_mount` hook.
    pub async fn remount(&self) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Remount { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// The latest published state.
    pub fn snapshot(&self) -> S::State {
        self.state.borrow().clone()
    }

    /// A fresh subscription to state changes.
    pub fn subscribe(&self) -> watch::Receiver<S::State> {
        self.state.clone()
    }
}
