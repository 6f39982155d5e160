//! # System Lifecycle & Orchestration
//!
//! Starts both screens against one shared [`CatalogApi`](crate::api::CatalogApi)
//! and shuts them down together.
//!
//! ## Dependency Injection via Context
//!
//! Screens are constructed without dependencies; the API handle, the bearer
//! credential and the page size are handed to `run(context)` as a
//! [`CatalogContext`](crate::context::CatalogContext). Tests swap the HTTP
//! client for a [`MockCatalogApi`](crate::api::MockCatalogApi) this way.
//!
//! ```rust,ignore
//! let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalogApi::new(&config.api_url));
//! let system = CatalogSystem::start(api, &config, Some("7".into()));
//!
//! system.admin.set_filter("su").await?;
//! let browse = system.browse.wait_until_settled(1).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the command channels
//! 2. **Screens detect closure** - `recv()` returns `None`, `on_unmount` runs
//! 3. **Await completion** - wait for both screen tasks to finish
//!
//! Clones of a client held elsewhere keep that screen alive; shutdown waits
//! for them.

pub mod catalog_system;

pub use catalog_system::*;
