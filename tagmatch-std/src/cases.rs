//! # Cases
//!
//! [`Cases`] is a handler mapping under construction: one handler per
//! discriminant, plus an optional default case registered under the reserved
//! key [`DEFAULT_KEY`] (or through [`Cases::otherwise`]).
//!
//! # Example
//!
//! ```rust,ignore
//! let matcher = DynCases::<Value, String>::new()
//!     .on("Some", |v| format!("Something: {}", v["value"]))
//!     .on("None", |_| "Nothing".to_string())
//!     .build()?;
//! ```

use std::borrow::Cow;

use tagmatch_core::{
    BoxHandler, BuildError, DEFAULT_KEY, Discriminant, Key, Router, RouterBuilder, TAG_FIELD,
    TagSet,
};

use crate::{matcher::Matcher, routing::HashMapRouterBuilder};

/// A handler mapping, consumed into a [`Matcher`] by `build`.
///
/// Chained calls ([`case`](Cases::case), [`otherwise`](Cases::otherwise))
/// remember the first error and report it from `build`.
pub struct Cases<H, B = HashMapRouterBuilder<H>> {
    routes: B,
    fallback: Option<H>,
    allow_duplicates: bool,
    error: Option<BuildError>,
}

/// A mapping of boxed closures, so each case can be a different closure.
pub type DynCases<V, R> = Cases<BoxHandler<V, R>>;

impl<H> Cases<H> {
    /// Create an empty mapping backed by a `HashMapRouter`.
    pub fn new() -> Self {
        Self::with_builder(HashMapRouterBuilder::default())
    }

    /// Allow duplicate keys (later insertions override earlier ones).
    pub fn allow_duplicates(mut self) -> Self {
        self.routes = self.routes.allow_duplicates();
        self.allow_duplicates = true;
        self
    }
}

impl<H> Default for Cases<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, B> Cases<H, B> {
    /// Create an empty mapping on a specific routing backend.
    pub fn with_builder(routes: B) -> Self {
        Self {
            routes,
            fallback: None,
            allow_duplicates: false,
            error: None,
        }
    }
}

impl<H, B: RouterBuilder<H>> Cases<H, B> {
    /// Register `handler` for `key`.
    ///
    /// The reserved [`DEFAULT_KEY`] registers the default case.
    pub fn insert(&mut self, key: impl Into<Key>, handler: H) -> Result<(), BuildError> {
        let key = key.into();
        if !key.is_default() {
            return self.routes.insert(key, handler);
        }
        if self.fallback.is_some() && !self.allow_duplicates {
            return Err(BuildError::DuplicateKey(key));
        }
        self.fallback = Some(handler);
        Ok(())
    }

    /// Register `handler` for `key`, chaining.
    pub fn case(mut self, key: impl Into<Key>, handler: H) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.insert(key, handler) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Register the default case, chaining.
    pub fn otherwise(self, handler: H) -> Self {
        self.case(DEFAULT_KEY, handler)
    }

    /// Build a matcher reading the conventional `_tag` field.
    pub fn build(self) -> Result<Matcher<H, B::Router>, BuildError> {
        self.build_on(TAG_FIELD)
    }

    /// Build a matcher reading `field`.
    pub fn build_on(
        self,
        field: impl Into<Cow<'static, str>>,
    ) -> Result<Matcher<H, B::Router>, BuildError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let table = self.routes.build()?;
        Ok(Matcher::from_parts(field, table, self.fallback))
    }

    /// Build a matcher for the union `U`, checking every tag of `U` is covered.
    ///
    /// A default case covers everything, so with one present this only reads
    /// `U`'s field.
    pub fn build_exhaustive<U: TagSet>(self) -> Result<Matcher<H, B::Router>, BuildError> {
        let matcher = self.build_on(U::FIELD)?;
        if matcher.has_default() {
            return Ok(matcher);
        }

        let missing: Vec<Key> = U::TAGS
            .iter()
            .filter(|tag| !matcher.table().contains(**tag))
            .map(Discriminant::to_key)
            .collect();
        if !missing.is_empty() {
            return Err(BuildError::NonExhaustive {
                field: U::FIELD.to_owned(),
                missing,
            });
        }
        Ok(matcher)
    }
}

impl<V, R, B> Cases<BoxHandler<V, R>, B>
where
    B: RouterBuilder<BoxHandler<V, R>>,
{
    /// Register a closure for `key`, boxing it.
    pub fn on<F>(self, key: impl Into<Key>, f: F) -> Self
    where
        F: Fn(V) -> R + Send + Sync + 'static,
    {
        self.case(key, Box::new(f))
    }

    /// Register a closure as the default case, boxing it.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: Fn(V) -> R + Send + Sync + 'static,
    {
        self.otherwise(Box::new(f))
    }
}

impl<H, B, K> Extend<(K, H)> for Cases<H, B>
where
    B: RouterBuilder<H>,
    K: Into<Key>,
{
    fn extend<I: IntoIterator<Item = (K, H)>>(&mut self, iter: I) {
        for (key, handler) in iter {
            if self.error.is_some() {
                return;
            }
            if let Err(err) = self.insert(key, handler) {
                self.error = Some(err);
            }
        }
    }
}

impl<H: Send + Sync, K: Into<Key>> FromIterator<(K, H)> for Cases<H> {
    fn from_iter<I: IntoIterator<Item = (K, H)>>(iter: I) -> Self {
        let mut cases = Cases::new();
        cases.extend(iter);
        cases
    }
}
