//! # Agri Portal
//!
//! The interaction core of an agricultural advisory portal, built on
//! [`interaction_engine`].
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`Crop`](model::Crop), [`Disease`](model::Disease),
//!   [`Profile`](model::Profile), ...).
//! - **[catalog]**: The reference tables and form vocabularies.
//! - **[services]**: Backend collaborator traits, the canned reference backend, and
//!   `MockBackend` adapters for tests.
//! - **[sections]**: The four fetch widgets (crop recommendation, disease detection,
//!   expert finder, government schemes).
//! - **[profile]** and **[chat]**: The draft-editing profile card and the chat widget.
//! - **[lifecycle]**: [`PortalSystem`](lifecycle::PortalSystem), which wires it all together.
//! - **[config]**: TOML configuration for latencies, timeouts and chat text.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod profile;
pub mod sections;
pub mod services;
