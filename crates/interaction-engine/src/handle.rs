//! # SectionHandle Trait
//!
//! Provides a common interface for widget-specific controllers, adding default
//! render, submit and wait methods built on top of a generic [`SectionController`].
use crate::{EngineError, RenderState, ResourceState, Section, SectionController, Snapshot};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for widget-specific controllers to inherit the shared section API.
///
/// A widget controller owns a `SectionController<S>`, adds typed setters for its
/// own input fields, and implements this trait to expose everything else.
///
/// # Example
///
/// ```rust
/// use interaction_engine::handle::SectionHandle;
/// use interaction_engine::{EngineError, Section, SectionController};
/// use async_trait::async_trait;
/// use std::sync::Arc;
///
/// struct Greeting;
///
/// #[async_trait]
/// impl Section for Greeting {
///     const NAME: &'static str = "greeting";
///     type Input = String;
///     type Output = String;
///     type Service = ();
///     type Error = EngineError;
///
///     fn validate(input: &String) -> Result<(), EngineError> {
///         if input.is_empty() { Err(EngineError::MissingInput("name")) } else { Ok(()) }
///     }
///     async fn fetch(_: Arc<()>, input: String) -> Result<String, EngineError> {
///         Ok(format!("Hello, {input}"))
///     }
/// }
///
/// struct GreetingController {
///     inner: SectionController<Greeting>,
/// }
///
/// impl GreetingController {
///     fn set_name(&mut self, name: &str) {
///         self.inner.edit_input(|input| *input = name.to_string());
///     }
/// }
///
/// impl SectionHandle<Greeting> for GreetingController {
///     fn inner(&self) -> &SectionController<Greeting> {
///         &self.inner
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut greeting = GreetingController { inner: SectionController::new(Arc::new(())) };
///     assert!(!greeting.can_submit());
///     greeting.set_name("Ramesh");
///     greeting.submit().unwrap();
///     // render(), state() and settled() are provided automatically
///     let snapshot = greeting.settled().await;
///     assert_eq!(snapshot.state.value().map(String::as_str), Some("Hello, Ramesh"));
/// }
/// ```
#[async_trait]
pub trait SectionHandle<S: Section>: Send + Sync {
    /// Access the inner generic SectionController.
    fn inner(&self) -> &SectionController<S>;

    fn can_submit(&self) -> bool {
        self.inner().can_submit()
    }

    /// Validate the current input and start a fetch.
    fn submit(&self) -> Result<u64, EngineError> {
        self.inner().submit()
    }

    fn state(&self) -> ResourceState<S::Output> {
        self.inner().state()
    }

    fn render(&self) -> RenderState<S::Output> {
        self.inner().render()
    }

    fn subscribe(&self) -> watch::Receiver<Snapshot<S::Output>> {
        self.inner().subscribe()
    }

    fn reset(&self) {
        self.inner().reset()
    }

    /// Wait until no fetch is in flight.
    async fn settled(&self) -> Snapshot<S::Output> {
        self.inner().settled().await
    }
}
