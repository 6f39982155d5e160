//! # Screen Actor
//!
//! `ScreenActor` is the runtime half of a screen: it owns the screen value and
//! the receiving end of the command channel, and processes requests one at a
//! time. Each screen runs in its own Tokio task, so its state needs no locks.

use crate::client::ScreenClient;
use crate::error::FrameworkError;
use crate::message::ScreenRequest;
use crate::screen::Screen;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that drives a [`Screen`].
///
/// # Usage Pattern
///
/// 1.  **Create**: `ScreenActor::new(screen, buffer)` returns the actor and its client.
/// 2.  **Wire**: pass the screen's dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// # Lifecycle
///
/// * **Mount**: `on_mount` runs before the first request is read. Requests sent
///   during mount queue up in the channel.
/// * **Command**: `handle` runs to completion (including any network calls it
///   awaits) before the next request is read.
/// * **Remount**: `on_mount` runs again on request.
/// * **Unmount**: when every client is dropped the channel closes, `on_unmount`
///   runs and the task ends.
pub struct ScreenActor<S: Screen> {
    receiver: mpsc::Receiver<ScreenRequest<S>>,
    screen: S,
}

impl<S: Screen> ScreenActor<S> {
    /// Creates a new `ScreenActor` and its associated `ScreenClient`.
    ///
    /// `buffer_size` is the capacity of the command channel; when it is full,
    /// client calls wait for space.
    pub fn new(screen: S, buffer_size: usize) -> (Self, ScreenClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let client = ScreenClient::new(sender, screen.store().subscribe());
        let actor = Self { receiver, screen };
        (actor, client)
    }

    /// Runs the screen's command loop until the channel closes.
    ///
    /// The `context` is passed by reference into every hook and command.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g., "AdminScreen" instead of the full path)
        let screen = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(screen, "Screen mounting");

        if let Err(e) = self.screen.on_mount(&context).await {
            warn!(screen, error = %e, "on_mount failed");
        }
        info!(screen, "Screen mounted");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ScreenRequest::Command {
                    command,
                    respond_to,
                } => {
                    debug!(screen, ?command, "Command");
                    let result = self
                        .screen
                        .handle(command, &context)
                        .await
                        .map_err(|e| FrameworkError::ScreenError(Box::new(e)));
                    match &result {
                        Ok(reply) => debug!(screen, ?reply, "Command ok"),
                        Err(e) => warn!(screen, error = %e, "Command rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ScreenRequest::Remount { respond_to } => {
                    debug!(screen, "Remount");
                    let result = self
                        .screen
                        .on_mount(&context)
                        .await
                        .map_err(|e| FrameworkError::ScreenError(Box::new(e)));
                    if let Err(e) = &result {
                        warn!(screen, error = %e, "Remount failed");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        self.screen.on_unmount(&context).await;
        info!(screen, "Screen unmounted");
    }
}
