//! # Sections
//!
//! The four fetch widgets of the portal. Each one is a [`Section`] impl that
//! describes its input and backend call, and a controller that wraps a generic
//! [`SectionController`] and adds typed setters for its own fields. Everything
//! else (submit, render, subscribe, reset, settled) comes from
//! [`SectionHandle`].
//!
//! [`Section`]: interaction_engine::Section
//! [`SectionController`]: interaction_engine::SectionController
//! [`SectionHandle`]: interaction_engine::SectionHandle

pub mod crop_recommendation;
pub mod disease_detection;
pub mod expert_finder;
pub mod gov_schemes;

pub use crop_recommendation::*;
pub use disease_detection::*;
pub use expert_finder::*;
pub use gov_schemes::*;

use interaction_engine::EngineError;

/// Matches `value` against a form vocabulary, ignoring case. Blank clears the field.
pub(crate) fn pick_option(
    field: &'static str,
    options: &[&'static str],
    value: &str,
) -> Result<String, EngineError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(String::new());
    }
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(value))
        .map(|option| option.to_string())
        .ok_or_else(|| EngineError::invalid_field(field, value))
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), EngineError> {
    if value.trim().is_empty() {
        return Err(EngineError::MissingInput(field));
    }
    Ok(())
}
