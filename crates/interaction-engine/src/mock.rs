//! # Mock Backend & Testing Guide
//!
//! [`MockBackend<Req, T>`] stands in for any backend collaborator. Tests queue
//! expectations up front, each with its own latency and response, then hand the
//! backend to the code under test. Every request is recorded so the test can
//! assert on what was actually sent.
//!
//! ## When to use Mocks vs Canned Services
//!
//! | Feature | MockBackend | Canned service |
//! |---------|-------------|----------------|
//! | **Latency** | Per call, scripted | Fixed |
//! | **Failures** | Easy (`return_err`) | Never fails |
//! | **Request capture** | Yes (`calls`) | No |
//! | **Use Case** | Controller wiring, error paths, races | Demo and end-to-end flows |
//!
//! ## Example
//!
//! ```rust
//! use interaction_engine::mock::MockBackend;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut backend = MockBackend::<String, Vec<u32>>::new();
//!     backend
//!         .expect_call()
//!         .after(Duration::from_millis(10))
//!         .return_ok(vec![1, 2]);
//!     backend.expect_call().return_err("backend unavailable");
//!
//!     assert_eq!(backend.call("first".into()).await, Ok(vec![1, 2]));
//!     assert!(backend.call("second".into()).await.is_err());
//!     assert_eq!(backend.calls(), vec!["first".to_string(), "second".to_string()]);
//!     backend.verify();
//! }
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Errors produced by a [`MockBackend`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockError {
    /// A call arrived with no expectation queued for it.
    #[error("Unexpected call: no expectation queued")]
    Unexpected,
    /// A scripted failure from [`CallExpectationBuilder::return_err`].
    #[error("{0}")]
    Scripted(String),
}

struct Expectation<T> {
    latency: Duration,
    response: Result<T, MockError>,
}

/// A scripted backend with expectation tracking.
///
/// Clones share the same expectation queue and call log.
pub struct MockBackend<Req, T> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    calls: Arc<Mutex<Vec<Req>>>,
}

impl<Req, T> Clone for MockBackend<Req, T> {
    fn clone(&self) -> Self {
        Self {
            expectations: Arc::clone(&self.expectations),
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<Req, T> Default for MockBackend<Req, T> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<Req, T> MockBackend<Req, T> {
    /// Creates a backend with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues the next expected call.
    pub fn expect_call(&mut self) -> CallExpectationBuilder<T> {
        CallExpectationBuilder {
            latency: Duration::ZERO,
            expectations: Arc::clone(&self.expectations),
        }
    }

    /// Records `request`, waits the scripted latency, and returns the scripted response.
    pub async fn call(&self, request: Req) -> Result<T, MockError> {
        lock(&self.calls).push(request);
        // Release the lock before sleeping
        let expectation = lock(&self.expectations).pop_front();
        let Some(expectation) = expectation else {
            return Err(MockError::Unexpected);
        };
        if !expectation.latency.is_zero() {
            tokio::time::sleep(expectation.latency).await;
        }
        expectation.response
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<Req: Clone, T> MockBackend<Req, T> {
    /// Every request received so far, in arrival order.
    pub fn calls(&self) -> Vec<Req> {
        lock(&self.calls).clone()
    }
}

/// Builder for a single expected call.
pub struct CallExpectationBuilder<T> {
    latency: Duration,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T> CallExpectationBuilder<T> {
    /// Delays the response by `latency`.
    pub fn after(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, message: impl Into<String>) {
        self.push(Err(MockError::Scripted(message.into())));
    }

    fn push(self, response: Result<T, MockError>) {
        lock(&self.expectations).push_back(Expectation {
            latency: self.latency,
            response,
        });
    }
}
