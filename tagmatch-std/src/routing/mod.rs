//! # Routing Implementations
//!
//! This module provides the lookup tables a matcher routes through:
//!
//! - **HashMap routing**: built at run time from a [`Cases`](crate::Cases) mapping.
//! - **PHF routing**: a compile-time perfect hash map (feature `phf`).
//!
//! # Choosing a Router
//!
//! | Router | Use Case | Performance |
//! |--------|----------|-------------|
//! | `HashMapRouter` | Mappings built at run time | One hash lookup |
//! | `PhfRouter` | Fixed `&'static str` keys and `fn` handlers | No build step |
//!
//! Every router resolves an integer discriminant by its decimal text, so a
//! case keyed `404` and one keyed `"404"` are the same case on any backend.

pub mod hashmap;
#[cfg(feature = "phf")]
pub mod phf;

pub use self::hashmap::{HashMapRouter, HashMapRouterBuilder};
#[cfg(feature = "phf")]
pub use self::phf::PhfRouter;
