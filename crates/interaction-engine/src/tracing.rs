//! # Observability & Tracing
//!
//! Every primitive logs its transitions with structured fields:
//!
//! - **Resources**: `Pending`, `Resolved`, `Rejected`, `Run refused`, and
//!   `Stale completion discarded` with `resource` and `generation` fields.
//! - **Sections**: `Submit` with the input record at debug level, and
//!   `Trigger disabled` when validation refuses the input.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Transitions only
//! RUST_LOG=info cargo run
//!
//! # Include inputs and stale completions
//! RUST_LOG=debug cargo run
//!
//! # Engine internals only
//! RUST_LOG=interaction_engine=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a crop query looks like:
//!
//! ```text
//! INFO Pending resource="crop_recommendation" generation=1
//! INFO Resolved resource="crop_recommendation" generation=1
//! ```

/// Installs the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
