//! # Async Resource
//!
//! This module defines [`AsyncResource`], the primitive that drives a single
//! asynchronous operation through the `idle -> pending -> resolved | rejected`
//! lifecycle.
//!
//! ## Generation Guard
//!
//! Every accepted `run` bumps a monotonically increasing generation. The spawned
//! completion only lands if the generation it was started with is still current,
//! so a completion that was superseded by [`AsyncResource::reset`] and a newer
//! `run` is discarded silently instead of overwriting the newer state.
//!
//! ## Observability
//!
//! The current [`Snapshot`] lives in a `tokio::sync::watch` channel. The
//! presentation layer calls [`AsyncResource::subscribe`] and re-renders on every
//! change. All transitions use `send_if_modified`, so the pending check, the
//! generation check and the state write happen as one step.

use crate::error::EngineError;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// The discriminated state of an [`AsyncResource`].
///
/// A value exists only in `Resolved` and an error only in `Rejected`; returning
/// to `Idle` or `Pending` drops both.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    Idle,
    Pending,
    Resolved(T),
    Rejected(EngineError),
}

impl<T> ResourceState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, ResourceState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ResourceState::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ResourceState::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&EngineError> {
        match self {
            ResourceState::Rejected(error) => Some(error),
            _ => None,
        }
    }

    /// Short lowercase name used in log fields.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceState::Idle => "idle",
            ResourceState::Pending => "pending",
            ResourceState::Resolved(_) => "resolved",
            ResourceState::Rejected(_) => "rejected",
        }
    }
}

/// The state of a resource together with the generation that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub generation: u64,
    pub state: ResourceState<T>,
}

/// Wraps one asynchronous operation at a time and publishes its lifecycle.
///
/// # Concurrency Model
/// At most one operation is in flight per resource: `run` while pending is
/// refused with [`EngineError::AlreadyInFlight`] and leaves the running
/// generation untouched. Nothing is retried automatically; a rejected resource
/// accepts a fresh `run`.
///
/// There is no cancellation. [`reset`](Self::reset) abandons the current
/// generation and the in-flight task keeps running, but its result is ignored.
/// Without a timeout a non-completing operation leaves the resource pending
/// forever, so owners that talk to real backends should set one with
/// [`with_timeout`](Self::with_timeout).
///
/// `run` spawns onto the current Tokio runtime and must be called from within one.
pub struct AsyncResource<T> {
    name: &'static str,
    sender: Arc<watch::Sender<Snapshot<T>>>,
    timeout: Option<Duration>,
}

impl<T> AsyncResource<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates an idle resource at generation 0. `name` only appears in logs.
    pub fn new(name: &'static str) -> Self {
        let (sender, _) = watch::channel(Snapshot {
            generation: 0,
            state: ResourceState::Idle,
        });
        Self {
            name,
            sender: Arc::new(sender),
            timeout: None,
        }
    }

    /// Rejects any operation that has not completed within `limit`.
    pub fn with_timeout(mut self, limit: Option<Duration>) -> Self {
        self.timeout = limit;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn snapshot(&self) -> Snapshot<T> {
        self.sender.borrow().clone()
    }

    pub fn state(&self) -> ResourceState<T> {
        self.sender.borrow().state.clone()
    }

    pub fn generation(&self) -> u64 {
        self.sender.borrow().generation
    }

    pub fn is_pending(&self) -> bool {
        self.sender.borrow().state.is_pending()
    }

    /// Returns a receiver that observes every transition from now on.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.sender.subscribe()
    }

    /// Starts `operation` under a new generation and returns that generation.
    ///
    /// The resource is `Pending` when this returns. The operation runs in a
    /// spawned task; its result is applied only if no newer generation exists
    /// by then. Failures are stored as [`EngineError::OperationFailed`].
    pub fn run<F, E>(&self, operation: F) -> Result<u64, EngineError>
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let mut outcome = Err(EngineError::AlreadyInFlight { generation: 0 });
        self.sender.send_if_modified(|snapshot| {
            if snapshot.state.is_pending() {
                outcome = Err(EngineError::AlreadyInFlight {
                    generation: snapshot.generation,
                });
                return false;
            }
            snapshot.generation += 1;
            snapshot.state = ResourceState::Pending;
            outcome = Ok(snapshot.generation);
            true
        });

        let generation = match outcome {
            Ok(generation) => generation,
            Err(e) => {
                warn!(resource = self.name, error = %e, "Run refused");
                return Err(e);
            }
        };
        info!(resource = self.name, generation, "Pending");

        let sender = Arc::clone(&self.sender);
        let name = self.name;
        let timeout = self.timeout;
        tokio::spawn(async move {
            let result = match timeout {
                Some(limit) => match tokio::time::timeout(limit, operation).await {
                    Ok(result) => result.map_err(EngineError::operation_failed),
                    Err(_) => Err(EngineError::TimedOut(limit)),
                },
                None => operation.await.map_err(EngineError::operation_failed),
            };
            complete(&sender, name, generation, result);
        });

        Ok(generation)
    }

    /// Forces the resource back to `Idle` and abandons the current generation.
    ///
    /// Any operation still in flight will find its generation stale and be dropped.
    pub fn reset(&self) {
        self.sender.send_modify(|snapshot| {
            snapshot.generation += 1;
            snapshot.state = ResourceState::Idle;
        });
        debug!(resource = self.name, generation = self.generation(), "Reset");
    }

    /// Waits until the resource is not pending and returns that snapshot.
    ///
    /// Returns immediately when nothing is in flight. Never returns for an
    /// operation that never completes and has no timeout.
    pub async fn settled(&self) -> Snapshot<T> {
        let mut receiver = self.sender.subscribe();
        loop {
            {
                let snapshot = receiver.borrow_and_update();
                if !snapshot.state.is_pending() {
                    return snapshot.clone();
                }
            }
            if receiver.changed().await.is_err() {
                return self.snapshot();
            }
        }
    }
}

fn complete<T>(
    sender: &watch::Sender<Snapshot<T>>,
    name: &'static str,
    generation: u64,
    result: Result<T, EngineError>,
) {
    let failure = result.as_ref().err().cloned();
    let applied = sender.send_if_modified(|snapshot| {
        if snapshot.generation != generation {
            return false;
        }
        snapshot.state = match result {
            Ok(value) => ResourceState::Resolved(value),
            Err(e) => ResourceState::Rejected(e),
        };
        true
    });

    match (applied, failure) {
        (false, _) => debug!(resource = name, generation, "Stale completion discarded"),
        (true, None) => info!(resource = name, generation, "Resolved"),
        (true, Some(e)) => warn!(resource = name, generation, error = %e, "Rejected"),
    }
}
