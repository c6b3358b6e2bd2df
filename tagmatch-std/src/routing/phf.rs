//! PHF-based router implementation.
//!
//! Provides compile-time perfect hash map routing.
//! This router is immutable and must be constructed with a static map reference.

use tagmatch_core::{Discriminant, RouteResult, Router};

/// A router based on `phf::Map`.
///
/// Keys are property names, so integer discriminants are looked up by their
/// decimal text: `404` routes to the `"404"` entry.
pub struct PhfRouter<V: 'static> {
    map: &'static phf::Map<&'static str, V>,
}

impl<V: Send + Sync + 'static> PhfRouter<V> {
    /// Create a new router from a static PHF map.
    pub const fn new(map: &'static phf::Map<&'static str, V>) -> Self {
        Self { map }
    }
}

impl<V: Send + Sync + 'static> Router<V> for PhfRouter<V> {
    fn route(&self, key: Discriminant<'_>) -> RouteResult<'_, V> {
        let found = match key {
            Discriminant::Str(s) => self.map.get(s),
            Discriminant::Int(i) => self.map.get(i.to_string().as_str()),
        };
        match found {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}

// Note: RouterBuilder is not implemented for PhfRouter because PHF maps
// are constructed at compile time, not runtime.
