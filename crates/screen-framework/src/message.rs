//! # Generic Messages
//!
//! Message types exchanged between a [`ScreenClient`](crate::ScreenClient) and a
//! [`ScreenActor`](crate::ScreenActor).

use crate::error::FrameworkError;
use crate::screen::Screen;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by screens.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request delivered to a screen's command loop.
///
/// - **Command**: a screen-specific command, answered with `S::Reply`.
/// - **Remount**: run the `on_mount` hook again (the manual "reload everything" path).
#[derive(Debug)]
pub enum ScreenRequest<S: Screen> {
    Command {
        command: S::Command,
        respond_to: Response<S::Reply>,
    },
    Remount {
        respond_to: Response<()>,
    },
}
