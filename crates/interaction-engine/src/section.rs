//! # Sections
//!
//! A section is one widget that collects input, validates it, and fetches a
//! result from a backend collaborator. Every section follows the same shape, so
//! the shape is written once as [`SectionController`] and each widget only
//! describes what differs by implementing [`Section`].
//!
//! ## Render Contract
//!
//! [`RenderState`] is what a presentation layer consumes:
//!
//! | Resource state          | Render state            |
//! |-------------------------|-------------------------|
//! | idle                    | `Prompt`                |
//! | pending                 | `Loading`               |
//! | resolved, empty output  | `NoResults`             |
//! | resolved, output        | `Populated(output)`     |
//! | rejected                | `Error(message)`        |

use crate::error::EngineError;
use crate::resource::{AsyncResource, ResourceState, Snapshot};
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

/// Describes one widget: its input record, its output, and how to fetch it.
///
/// # Associated Types
/// - `Input` is edited field by field and cloned at trigger time, so later
///   edits never reach an operation that is already in flight.
/// - `Service` is the backend collaborator, usually a `dyn Trait` so tests can
///   inject fakes.
#[async_trait]
pub trait Section: Send + Sync + 'static {
    /// Name used in logs.
    const NAME: &'static str;

    type Input: Clone + Debug + Default + Send + Sync + 'static;
    type Output: Clone + Debug + Send + Sync + 'static;
    type Service: ?Sized + Send + Sync + 'static;
    type Error: Display + Send + 'static;

    /// Checks that every required field is present. The trigger is enabled
    /// exactly when this returns `Ok`.
    fn validate(input: &Self::Input) -> Result<(), EngineError>;

    /// Calls the backend with an owned copy of the input.
    async fn fetch(
        service: Arc<Self::Service>,
        input: Self::Input,
    ) -> Result<Self::Output, Self::Error>;

    /// Whether a resolved output should render as the "no results" state.
    fn is_empty(_output: &Self::Output) -> bool {
        false
    }
}

/// What the presentation layer should show for a section.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState<T> {
    /// Nothing submitted yet: ask for input.
    Prompt,
    /// Indeterminate loading indicator.
    Loading,
    /// A request completed with nothing to show. Distinct from `Prompt`.
    NoResults,
    Populated(T),
    /// Inline, non-blocking error message.
    Error(String),
}

impl<T> RenderState<T> {
    pub fn from_state(state: ResourceState<T>, is_empty: impl Fn(&T) -> bool) -> Self {
        match state {
            ResourceState::Idle => RenderState::Prompt,
            ResourceState::Pending => RenderState::Loading,
            ResourceState::Resolved(output) if is_empty(&output) => RenderState::NoResults,
            ResourceState::Resolved(output) => RenderState::Populated(output),
            ResourceState::Rejected(e) => RenderState::Error(e.to_string()),
        }
    }
}

/// Generic controller that binds a [`Section`] to an [`AsyncResource`].
///
/// Domain crates add typed field setters in their own `impl` blocks on
/// `SectionController<TheirSection>`.
pub struct SectionController<S: Section> {
    input: S::Input,
    resource: AsyncResource<S::Output>,
    service: Arc<S::Service>,
}

impl<S: Section> SectionController<S> {
    pub fn new(service: Arc<S::Service>) -> Self {
        Self {
            input: S::Input::default(),
            resource: AsyncResource::new(S::NAME),
            service,
        }
    }

    /// Applies a timeout to every fetch this controller starts.
    pub fn with_timeout(mut self, limit: Option<Duration>) -> Self {
        self.resource = self.resource.with_timeout(limit);
        self
    }

    pub fn input(&self) -> &S::Input {
        &self.input
    }

    /// Edits the input record. Has no effect on an operation already in flight.
    pub fn edit_input(&mut self, edit: impl FnOnce(&mut S::Input)) {
        edit(&mut self.input);
    }

    /// Whether the trigger is enabled for the current input.
    pub fn can_submit(&self) -> bool {
        S::validate(&self.input).is_ok()
    }

    /// Validates the input and starts a fetch bound to a copy of it.
    ///
    /// Returns the generation of the started fetch. Incomplete input is refused
    /// without touching the resource.
    pub fn submit(&self) -> Result<u64, EngineError> {
        if let Err(e) = S::validate(&self.input) {
            debug!(section = S::NAME, error = %e, "Trigger disabled");
            return Err(e);
        }
        debug!(section = S::NAME, input = ?self.input, "Submit");
        let service = Arc::clone(&self.service);
        self.resource.run(S::fetch(service, self.input.clone()))
    }

    pub fn state(&self) -> ResourceState<S::Output> {
        self.resource.state()
    }

    pub fn render(&self) -> RenderState<S::Output> {
        RenderState::from_state(self.resource.state(), S::is_empty)
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<S::Output>> {
        self.resource.subscribe()
    }

    /// Abandons the current result (or in-flight fetch) and returns to `Prompt`.
    pub fn reset(&self) {
        self.resource.reset();
    }

    pub async fn settled(&self) -> Snapshot<S::Output> {
        self.resource.settled().await
    }

    pub fn resource(&self) -> &AsyncResource<S::Output> {
        &self.resource
    }
}
