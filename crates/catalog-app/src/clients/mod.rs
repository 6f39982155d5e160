//! Typed wrappers over the generic screen clients.

pub mod admin_client;
pub mod browse_client;

pub use admin_client::AdminClient;
pub use browse_client::BrowseClient;
pub use screen_framework::ScreenHandle;
