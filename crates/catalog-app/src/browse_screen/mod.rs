//! # Category Browse Screen
//!
//! Resolves a navigation parameter to a category and lists its products.
//!
//! 1. fetch all categories;
//! 2. no parameter → empty grid, no notice;
//! 3. find the category whose id, as a string, equals the parameter;
//! 4. found → fetch its products (empty → "no products" notice);
//!    not found → "category not found" notice, no product fetch.
//!
//! Each resolution runs in its own task so a newer navigation can start while
//! an older one is still waiting on the network. Writes are guarded by a
//! [`Ticket`](screen_framework::Ticket): results from a superseded run are
//! discarded, never merged.

pub mod commands;
pub mod error;
pub mod screen;
pub mod state;

pub use commands::*;
pub use error::*;
pub use screen::*;
pub use state::*;

use screen_framework::{ScreenActor, ScreenClient};

/// Creates a new browse screen actor and its client.
pub fn new(
    param: Option<String>,
    buffer_size: usize,
) -> (ScreenActor<BrowseScreen>, ScreenClient<BrowseScreen>) {
    ScreenActor::new(BrowseScreen::new(param), buffer_size)
}
