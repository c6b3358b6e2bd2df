//! # Routing Layer
//!
//! A router maps a [`Discriminant`] to the handler registered for it. It is the
//! lookup half of a match; invoking the handler and falling back to the default
//! case is the matcher's job.
//!
//! This trait lets different backends (HashMap, phf) be swapped without
//! changing the matcher.

use crate::{
    discriminant::{Discriminant, Key},
    error::BuildError,
};

/// Result of a routing lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// Route matched, contains the value.
    Matched(&'a V),
    /// No matching route found.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if the route was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(v) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

/// A lookup table from discriminants to handlers.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot route to values of type `{V}`",
    label = "missing `Router` implementation",
    note = "Implement `Router<{V}>` to look handlers up by discriminant."
)]
pub trait Router<V>: Send + Sync {
    /// Look up a value by discriminant.
    fn route(&self, key: Discriminant<'_>) -> RouteResult<'_, V>;

    /// Check if a discriminant has a route.
    fn contains(&self, key: Discriminant<'_>) -> bool {
        self.route(key).is_matched()
    }
}

/// Builder for constructing routers.
pub trait RouterBuilder<V>: Default + Send {
    /// The router type this builder produces.
    type Router: Router<V>;

    /// Insert a route.
    ///
    /// Returns an error if the key already exists, unless the builder was
    /// configured to let later insertions win.
    fn insert(&mut self, key: Key, value: V) -> Result<(), BuildError>;

    /// Build the router, consuming the builder.
    fn build(self) -> Result<Self::Router, BuildError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Single(i32);

    impl Router<i32> for Single {
        fn route(&self, key: Discriminant<'_>) -> RouteResult<'_, i32> {
            match key {
                Discriminant::Str("one") => RouteResult::Matched(&self.0),
                _ => RouteResult::NotFound,
            }
        }
    }

    #[test]
    fn test_route_result_helpers() {
        let val = 42;
        let matched = RouteResult::Matched(&val);
        let not_found: RouteResult<i32> = RouteResult::NotFound;

        assert!(matched.is_matched());
        assert!(!not_found.is_matched());

        assert_eq!(matched.matched(), Some(&42));
        assert_eq!(not_found.matched(), None);
    }

    #[test]
    fn test_contains_default_method() {
        let router = Single(1);
        assert!(router.contains(Discriminant::Str("one")));
        assert!(!router.contains(Discriminant::Str("two")));
        assert!(!router.contains(Discriminant::Int(1)));
    }
}
