//! # tagmatch-std
//!
//! Standard implementations for tagmatch, exhaustive-style dispatch over
//! tagged unions.
//!
//! This crate provides:
//! - **Mappings**: [`Cases`], [`DynCases`]
//! - **Dispatch**: [`Matcher`], [`dispatch`]
//! - **Pipeable entry points**: [`match_tag`], [`match_on`]
//! - **Routing backends**: `HashMapRouter`, `PhfRouter` (feature `phf`)
//! - **Testing utilities**: `RecordingHandler`, `CountingHandler`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use tagmatch_core;

// Modules
pub mod cases;
pub mod matcher;
pub mod pipe;
pub mod routing;
pub mod testing;

pub use cases::{Cases, DynCases};
pub use matcher::{Matcher, dispatch};
pub use pipe::{match_on, match_tag};
