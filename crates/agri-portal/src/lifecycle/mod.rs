//! # Portal Lifecycle
//!
//! Wires the controllers of one portal page to their collaborators and runs
//! the page-level side effects.
//!
//! ## The PortalSystem Pattern
//!
//! [`PortalSystem`] is the conductor. Controllers are simple and own nothing
//! but their own state; the system decides which backend each one talks to:
//!
//! ```rust,ignore
//! // Reference deployment: canned data with the configured latencies
//! let portal = PortalSystem::new(config);
//!
//! // Tests: any collaborator can be replaced
//! let services = PortalServices { crops: Arc::new(mock), ..PortalServices::canned(&config) };
//! let portal = PortalSystem::with_services(config, services);
//! ```
//!
//! ## Mount and Drain
//!
//! 1. **Mount** - [`PortalSystem::mount`] triggers the schemes fetch. Later
//!    mounts are no-ops, matching a page that loads once.
//! 2. **Drain** - [`PortalSystem::settle`] awaits every section that is still
//!    loading and every scheduled chat reply, then logs a one-line summary.
//!
//! Nothing is cancelled on drain. A fetch without a timeout that never
//! completes keeps `settle` waiting, so deployments with real backends should
//! set `[resource] timeout_ms`.

pub mod portal_system;

pub use portal_system::*;
