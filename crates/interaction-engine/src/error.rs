//! # Engine Errors
//!
//! This module defines the error taxonomy shared by every primitive in the engine.
//! Lifecycle misuse (`NotEditing`, `AlreadyEditing`, `AlreadyInFlight`) is reported
//! as a plain error value so the presentation layer can ignore or surface it;
//! a failed operation never poisons the owner, which stays usable for a new `run`.

use std::time::Duration;

/// Errors that can occur within the interaction engine.
///
/// The type is `Clone` because a rejection is stored inside the observable
/// [`ResourceState`](crate::ResourceState) snapshot and handed to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// `run` was called while a previous operation is still pending.
    #[error("Operation already in flight (generation {generation})")]
    AlreadyInFlight { generation: u64 },

    /// A required input field is empty, so the trigger is disabled.
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    /// A value outside the fixed vocabulary of an enumerated field.
    #[error("Invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    /// A draft mutation was attempted outside an edit session.
    #[error("Not editing")]
    NotEditing,

    /// An edit session was started while one is already open.
    #[error("Already editing")]
    AlreadyEditing,

    /// The wrapped asynchronous operation rejected.
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// The wrapped asynchronous operation did not complete in time.
    #[error("Operation timed out after {0:?}")]
    TimedOut(Duration),
}

impl EngineError {
    /// Wraps any displayable failure as [`EngineError::OperationFailed`].
    pub fn operation_failed(cause: impl std::fmt::Display) -> Self {
        EngineError::OperationFailed(cause.to_string())
    }

    /// Shorthand for [`EngineError::InvalidField`].
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        EngineError::InvalidField {
            field,
            value: value.into(),
        }
    }
}
