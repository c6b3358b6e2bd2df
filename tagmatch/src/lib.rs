//! # tagmatch - Exhaustive-Style Dispatch over Tagged Unions
//!
//! `tagmatch` selects and invokes the handler registered for a value's
//! discriminant, with an optional default case for anything unrecognised.
//!
//! Rust enums get this from `match`; `tagmatch` covers the cases `match`
//! cannot: values whose shape is only known at run time (JSON objects tagged
//! by a `_tag` or `code` property), and handler tables assembled as data.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tagmatch::{DynCases, match_tag};
//! use serde_json::{Value, json};
//!
//! let option = match_tag(
//!     DynCases::<Value, String>::new()
//!         .on("Some", |v| v["value"].to_string())
//!         .on("None", |_| "Nothing".to_string()),
//! )?;
//!
//! assert_eq!(option.call(json!({ "_tag": "None" }))?, "Nothing");
//! ```
//!
//! ## Wide Matching
//!
//! ```rust,ignore
//! use tagmatch::{DynCases, match_on};
//!
//! let response = match_on("code")(
//!     DynCases::<Value, &str>::new()
//!         .on(404, |_| "Not Found")
//!         .or_else(|_| "Unexpected"),
//! )?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use tagmatch_core::{
    // Discriminants
    DEFAULT_KEY, Discriminant, Discriminated, Key, TAG_FIELD, TagSet,
    // Handlers
    BoxHandler, Handler,
    // Routing
    RouteResult, Router, RouterBuilder,
    // Errors
    BuildError, MatchError, TagmatchError,
};

pub use tagmatch_std::{Cases, DynCases, Matcher, dispatch, match_on, match_tag};

/// Routing backends.
pub mod routing {
    #[cfg(feature = "phf")]
    pub use tagmatch_std::routing::PhfRouter;
    pub use tagmatch_std::routing::{HashMapRouter, HashMapRouterBuilder};
}

/// Testing utilities.
pub mod testing {
    pub use tagmatch_std::testing::{CountingHandler, RecordingHandler};
}

/// Prelude module - common imports for tagmatch.
///
/// # Usage
///
/// ```rust,ignore
/// use tagmatch::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "macros")]
    pub use crate::Tagged;
    pub use crate::{
        Cases, DEFAULT_KEY, Discriminant, Discriminated, DynCases, Handler, MatchError, Matcher,
        TAG_FIELD, TagSet, dispatch, match_on, match_tag,
    };
}

#[cfg(feature = "macros")]
pub use tagmatch_macros::Tagged;

#[cfg(feature = "json")]
pub use serde_json;
