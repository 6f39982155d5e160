//! # Screen Framework
//!
//! Building blocks for headless, observable "screens": stateful controllers that
//! sit between a user (or a UI layer) and a remote resource. A screen owns its
//! state, processes commands one at a time, and publishes every state change to
//! any number of subscribers.
//!
//! ## Why Actors for Screens?
//!
//! A screen in a reactive UI is a small state machine that mutates local state,
//! suspends on network calls, and re-renders whenever its state changes. The
//! Actor Model maps onto this directly:
//!
//! - **Isolated state**: the screen's state is owned by one Tokio task. No locks
//!   are needed for command handling.
//! - **Sequential processing**: commands are handled in arrival order, so two
//!   submissions of the same dialog can never overlap.
//! - **Explicit observation**: instead of implicit re-render-on-change, every
//!   mutation goes through a [`Store`], which notifies `watch` subscribers.
//!
//! ## Architecture Overview
//!
//! 1. **Screen Layer** ([`Screen`]) - Your state machine: commands, replies, state, hooks.
//! 2. **Runtime Layer** ([`ScreenActor`]) - The command loop and lifecycle.
//! 3. **Interface Layer** ([`ScreenClient`], [`ScreenHandle`]) - Typed, cloneable handles.
//! 4. **Observation** ([`Store`]) - `watch`-backed state with snapshot + subscribe.
//! 5. **Supersession** ([`Generation`], [`Ticket`]) - Discarding results of stale work.
//!
//! ## Example
//!
//! ```rust
//! use screen_framework::{Screen, ScreenActor, Store};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)] enum CounterCommand { Add(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
//!
//! struct Counter { store: Store<u32> }
//!
//! #[async_trait]
//! impl Screen for Counter {
//!     type Command = CounterCommand;
//!     type Reply = u32;
//!     type State = u32;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn store(&self) -> &Store<u32> { &self.store }
//!
//!     async fn handle(&mut self, command: CounterCommand, _ctx: &()) -> Result<u32, CounterError> {
//!         let CounterCommand::Add(n) = command;
//!         self.store.update(|total| *total += n);
//!         Ok(self.store.get())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ScreenActor::new(Counter { store: Store::new(0) }, 8);
//!     tokio::spawn(actor.run(()));
//!
//!     assert_eq!(client.send(CounterCommand::Add(2)).await.unwrap(), 2);
//!     assert_eq!(client.snapshot(), 2);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies (API clients, credentials) are handed to [`ScreenActor::run`],
//! not to the screen's constructor, and are passed by reference into every hook.
//! Nothing a screen needs is read from process-wide globals.
//!
//! ## Testing
//!
//! See the [`mock`] module for driving code that talks to a screen without
//! spawning the real screen actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod generation;
pub mod message;
pub mod mock;
pub mod screen;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ScreenActor;
pub use client::ScreenClient;
pub use client_trait::ScreenHandle;
pub use error::FrameworkError;
pub use generation::{Generation, Ticket};
pub use message::{Response, ScreenRequest};
pub use screen::Screen;
pub use store::Store;
