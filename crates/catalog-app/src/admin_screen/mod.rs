//! # Catalog Admin Screen
//!
//! Product table with search-as-you-type filtering and modal dialogs to view,
//! add, edit and delete products.
//!
//! ## Structure
//!
//! - [`state`] - [`AdminState`] and the dialog state machines
//! - [`commands`] - [`AdminCommand`] and the [`Outcome`] reply
//! - [`error`] - [`AdminError`] for rejected commands
//! - [`screen`] - the [`Screen`](screen_framework::Screen) implementation
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Data flow
//!
//! Every mutation is one round trip followed by a full product reload; nothing
//! is inserted optimistically. Network calls are awaited inside the command
//! loop, so submissions are serialized and `Submitting`/`Deleting` phases are
//! visible to subscribers while the request is in flight.
//!
//! ```rust,ignore
//! let (actor, client) = admin_screen::new(32);
//! let admin = AdminClient::new(client);
//! tokio::spawn(actor.run(context));
//!
//! admin.set_filter("su").await?;
//! admin.open_create().await?;
//! admin.set_field(FormKind::Add, ProductField::Name, "Sữa tươi").await?;
//! admin.submit(FormKind::Add).await?;
//! ```
//!
//! ## Failure handling
//!
//! Transport, status and shape failures never reach the caller as errors:
//! they push a [`Notice`](crate::notify::Notice) and reply
//! [`Outcome::Failed`]. A failed product load clears both the full and the
//! filtered list; a failed category load keeps the last-known categories.

pub mod commands;
pub mod error;
pub mod screen;
pub mod state;

pub use commands::*;
pub use error::*;
pub use screen::*;
pub use state::*;

use screen_framework::{ScreenActor, ScreenClient};

/// Creates a new admin screen actor and its client.
pub fn new(buffer_size: usize) -> (ScreenActor<AdminScreen>, ScreenClient<AdminScreen>) {
    ScreenActor::new(AdminScreen::new(), buffer_size)
}
