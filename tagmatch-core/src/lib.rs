//! # tagmatch-core
//!
//! Core traits for tagmatch, exhaustive-style dispatch over tagged unions.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! crates that only need to make their types matchable, without pulling in
//! the `tagmatch-std` implementations.
//!
//! # Vocabulary
//!
//! - [`Discriminated`]: a value that exposes a discriminant under a named field.
//! - [`TagSet`]: a tagged union whose tags are known statically.
//! - [`Handler`]: the function invoked for one case.
//! - [`Router`] / [`RouterBuilder`]: the lookup table from discriminant to handler.
//!
//! # Error Types
//!
//! - [`TagmatchError`] - Top-level error type
//! - [`MatchError`] - Missing handler at call time
//! - [`BuildError`] - Invalid handler mapping

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod discriminant;
mod error;
mod handler;
#[cfg(feature = "json")]
mod json;
mod router;

// Re-exports
pub use discriminant::{DEFAULT_KEY, Discriminant, Discriminated, Key, TAG_FIELD, TagSet};
pub use error::{BuildError, MatchError, TagmatchError};
pub use handler::{BoxHandler, Handler};
pub use router::{RouteResult, Router, RouterBuilder};
