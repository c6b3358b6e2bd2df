//! HashMap-based router implementation.
//!
//! This is the default router that requires no external dependencies.

use std::collections::HashMap;

use tagmatch_core::{BuildError, Discriminant, Key, RouteResult, Router, RouterBuilder};

/// A router backed by `HashMap`.
///
/// Keys are property names: an integer discriminant is stored and looked up
/// by its decimal text, so `200` and `"200"` name the same case. This is the
/// same rule `PhfRouter` follows.
pub struct HashMapRouter<V> {
    routes: HashMap<String, V>,
}

impl<V> HashMapRouter<V> {
    /// Create a new empty router.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the router is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<V> Default for HashMapRouter<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Send + Sync> Router<V> for HashMapRouter<V> {
    fn route(&self, key: Discriminant<'_>) -> RouteResult<'_, V> {
        let found = match key {
            Discriminant::Str(s) => self.routes.get(s),
            Discriminant::Int(i) => self.routes.get(i.to_string().as_str()),
        };
        match found {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}

/// Builder for `HashMapRouter`.
pub struct HashMapRouterBuilder<V> {
    router: HashMapRouter<V>,
    allow_duplicates: bool,
}

impl<V> HashMapRouterBuilder<V> {
    /// Allow duplicate keys (later insertions override earlier ones).
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }
}

impl<V> Default for HashMapRouterBuilder<V> {
    fn default() -> Self {
        Self {
            router: HashMapRouter::new(),
            allow_duplicates: false,
        }
    }
}

impl<V: Send + Sync> RouterBuilder<V> for HashMapRouterBuilder<V> {
    type Router = HashMapRouter<V>;

    fn insert(&mut self, key: Key, value: V) -> Result<(), BuildError> {
        if !self.allow_duplicates && self.router.contains(key.as_discriminant()) {
            return Err(BuildError::DuplicateKey(key));
        }
        let name = match key {
            Key::Str(s) => s,
            Key::Int(i) => i.to_string(),
        };
        self.router.routes.insert(name, value);
        Ok(())
    }

    fn build(self) -> Result<Self::Router, BuildError> {
        Ok(self.router)
    }
}
