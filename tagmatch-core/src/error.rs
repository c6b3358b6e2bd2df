//! Error types for tagmatch.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`TagmatchError`] - Top-level error type
//! - [`MatchError`] - Errors when calling a matcher
//! - [`BuildError`] - Errors when building a handler mapping

use crate::discriminant::Key;
use thiserror::Error;

/// Top-level error type for all tagmatch operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagmatchError {
    /// A matcher could not dispatch a value.
    #[error("match error: {0}")]
    Match(#[from] MatchError),

    /// A handler mapping could not be built.
    #[error("build error: {0}")]
    Build(#[from] BuildError),
}

/// Errors that can occur when a matcher is called.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The resolved discriminant has no case and the mapping has no default.
    ///
    /// `key` is the effective discriminant, which is the default key when the
    /// input had none.
    #[error("no handler for {key} on field `{field}` and no default case")]
    MissingHandler {
        /// The field that was read.
        field: String,
        /// The discriminant that was looked up.
        key: Key,
    },
}

/// Errors that can occur while building a handler mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A case was registered twice for the same key.
    #[error("duplicate case for key: {0}")]
    DuplicateKey(Key),

    /// Some statically known tags have no case and there is no default.
    #[error("non-exhaustive cases on field `{field}`, missing: {}", format_keys(.missing))]
    NonExhaustive {
        /// The discriminant field of the union.
        field: String,
        /// The uncovered tags.
        missing: Vec<Key>,
    },
}

fn format_keys(keys: &[Key]) -> String {
    keys.iter()
        .map(Key::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
