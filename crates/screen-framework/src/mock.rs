//! # Mock Screens
//!
//! Utilities for testing code that drives a screen (typed client wrappers,
//! orchestration) without spawning the real screen actor.
//!
//! | Feature | MockScreenClient | Real ScreenActor |
//! |---------|------------------|------------------|
//! | **Speed** | Instant | Fast, but runs the real handlers |
//! | **Determinism** | 100% | Depends on the screen's dependencies |
//! | **State** | Whatever the test publishes | Real state machine |
//! | **Error Injection** | `return_err` | Requires a failing dependency |
//!
//! Two styles are available:
//!
//! - **Channel style**: [`create_mock_client`] hands the test the raw request
//!   receiver; [`expect_command`] pulls the next command so the test can assert
//!   on it and answer it.
//! - **Expectation style**: [`MockScreenClient`] answers requests from a queue
//!   of scripted replies and [`MockScreenClient::verify`] checks that every
//!   expectation was consumed.

use crate::client::ScreenClient;
use crate::error::FrameworkError;
use crate::message::{Response, ScreenRequest};
use crate::screen::Screen;
use crate::store::Store;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request the mock receives.
enum Expectation<S: Screen> {
    Command {
        response: Result<S::Reply, FrameworkError>,
    },
    Remount {
        response: Result<(), FrameworkError>,
    },
}

/// A mock screen client answering from a queue of expectations.
///
/// # Example
/// ```ignore
/// let mut mock = MockScreenClient::<AdminScreen>::new(AdminState::default());
/// mock.expect_command().return_ok(Outcome::Succeeded);
///
/// let client = AdminClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockScreenClient<S: Screen> {
    client: ScreenClient<S>,
    store: Store<S::State>,
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: Screen> MockScreenClient<S> {
    /// Creates a new mock publishing `initial` as its state.
    pub fn new(initial: S::State) -> Self {
        let (sender, mut receiver) = mpsc::channel::<ScreenRequest<S>>(100);
        let store = Store::new(initial);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps);

                match (request, expectation) {
                    (
                        ScreenRequest::Command { respond_to, .. },
                        Some(Expectation::Command { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ScreenRequest::Remount { respond_to }, Some(Expectation::Remount { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ScreenClient::new(sender, store.subscribe()),
            store,
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ScreenClient<S> {
        self.client.clone()
    }

    /// The store behind the mock's published state, for simulating changes.
    pub fn store(&self) -> &Store<S::State> {
        &self.store
    }

    /// Expects a command.
    pub fn expect_command(&mut self) -> CommandExpectationBuilder<S> {
        CommandExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a remount request.
    pub fn expect_remount(&mut self) -> RemountExpectationBuilder<S> {
        RemountExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for command expectations.
pub struct CommandExpectationBuilder<S: Screen> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: Screen> CommandExpectationBuilder<S> {
    /// Answer the command with a reply.
    pub fn return_ok(self, reply: S::Reply) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Command { response: Ok(reply) });
    }

    /// Answer the command with an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Command {
            response: Err(error),
        });
    }
}

/// Builder for remount expectations.
pub struct RemountExpectationBuilder<S: Screen> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: Screen> RemountExpectationBuilder<S> {
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Remount { response: Ok(()) });
    }

    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Remount {
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client wired to a receiver the test controls.
///
/// The returned [`Store`] backs the client's state subscription, so the test
/// can publish whatever state the code under test should observe.
pub fn create_mock_client<S: Screen>(
    buffer_size: usize,
    initial: S::State,
) -> (
    ScreenClient<S>,
    mpsc::Receiver<ScreenRequest<S>>,
    Store<S::State>,
) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let store = Store::new(initial);
    (ScreenClient::new(sender, store.subscribe()), receiver, store)
}

/// Helper to verify that the next message is a Command request.
pub async fn expect_command<S: Screen>(
    receiver: &mut mpsc::Receiver<ScreenRequest<S>>,
) -> Option<(S::Command, Response<S::Reply>)> {
    match receiver.recv().await {
        Some(ScreenRequest::Command {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Remount request.
pub async fn expect_remount<S: Screen>(
    receiver: &mut mpsc::Receiver<ScreenRequest<S>>,
) -> Option<Response<()>> {
    match receiver.recv().await {
        Some(ScreenRequest::Remount { respond_to }) => Some(respond_to),
        _ => None,
    }
}
