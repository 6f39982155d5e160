//! # Framework Errors
//!
//! Errors raised by the screen runtime itself. Screen-specific rejections are
//! carried boxed inside [`FrameworkError::ScreenError`] so typed clients can
//! downcast them back to their own error type.

/// Errors that can occur within the screen framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Screen closed")]
    ActorClosed,
    #[error("Screen dropped response channel")]
    ActorDropped,
    #[error("Screen error: {0}")]
    ScreenError(Box<dyn std::error::Error + Send + Sync>),
}
