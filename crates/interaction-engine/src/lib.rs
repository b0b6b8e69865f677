//! # Interaction Engine
//!
//! This crate provides the state-bearing building blocks behind interactive
//! widgets: fetch lifecycles with loading feedback, editable drafts with
//! commit/cancel, and small ordered tag collections. The widgets themselves live
//! in the application crate; this crate only knows about state.
//!
//! ## Architecture Overview
//!
//! 1. **Primitive Layer** ([`AsyncResource`], [`DraftEntity`], [`TagSet`]) - State machines with no domain knowledge
//! 2. **Binding Layer** ([`Section`], [`SectionController`], [`SectionHandle`]) - Input validation plus a render contract over one resource
//! 3. **Testing Layer** ([`mock`]) - Scripted backends with controllable latency
//!
//! ## Core Abstractions
//!
//! ### [`AsyncResource`] - One Operation at a Time
//!
//! ```rust
//! use interaction_engine::{AsyncResource, EngineError, ResourceState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let resource = AsyncResource::new("schemes");
//!
//!     resource.run(async { Ok::<_, EngineError>(vec!["PM-KISAN"]) }).unwrap();
//!     assert!(resource.is_pending());
//!
//!     // A second run while pending is refused.
//!     assert!(resource.run(async { Ok::<_, EngineError>(vec![]) }).is_err());
//!
//!     let snapshot = resource.settled().await;
//!     assert_eq!(snapshot.state, ResourceState::Resolved(vec!["PM-KISAN"]));
//! }
//! ```
//!
//! ### [`DraftEntity`] - Edit, Then Commit or Discard
//!
//! ```rust
//! use interaction_engine::DraftEntity;
//!
//! let mut name = DraftEntity::new(String::from("Ramesh"));
//! name.begin_edit().unwrap();
//! name.update(|draft| format!("{draft} Kumar")).unwrap();
//! name.discard();
//! assert_eq!(name.committed(), "Ramesh");
//! ```
//!
//! ## Concurrency Model
//!
//! - Completions run in spawned Tokio tasks and publish through `watch` channels
//! - Each resource accepts one operation at a time; stale completions are dropped by generation
//! - Drafts and tag sets are plain values mutated through `&mut self`, so they need no locking
//!
//! ## Testing
//!
//! Use [`mock::MockBackend`] to script latency and failures, and run tests with
//! `#[tokio::test(start_paused = true)]` so delays cost no wall-clock time.

pub mod draft;
pub mod error;
pub mod handle;
pub mod mock;
pub mod resource;
pub mod section;
pub mod tag_set;
pub mod tracing;

// Re-export core types for convenience
pub use draft::DraftEntity;
pub use error::EngineError;
pub use handle::SectionHandle;
pub use resource::{AsyncResource, ResourceState, Snapshot};
pub use section::{RenderState, Section, SectionController};
pub use tag_set::TagSet;
