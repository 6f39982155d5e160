//! # Catalog App Library
//!
//! Headless client for a product catalog: an admin screen (searchable product
//! table with create/edit/delete dialogs) and a category browse screen, both
//! running as [`screen_framework`] screens against a REST backend.
//!
//! - **[model]**: wire data structures ([`Product`](model::Product),
//!   [`Category`](model::Category), [`ProductDraft`](model::ProductDraft)).
//! - **[api]**: the [`CatalogApi`](api::CatalogApi) trait, its reqwest
//!   implementation and a scripted mock.
//! - **[admin_screen]** / **[browse_screen]**: the two screens.
//! - **[clients]**: typed wrappers that hide the message passing.
//! - **[lifecycle]**: starts and stops both screens.

pub mod admin_screen;
pub mod api;
pub mod browse_screen;
pub mod clients;
pub mod config;
pub mod context;
pub mod filter;
pub mod format;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod validate;
