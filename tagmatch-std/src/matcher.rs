//! # Matcher
//!
//! A [`Matcher`] is a built, immutable dispatcher: a discriminant field name,
//! a routing table of cases, and an optional default case.
//!
//! Calling it resolves the input's discriminant and invokes one handler:
//!
//! 1. Read the discriminant under the matcher's field. A missing input or
//!    field counts as the default key.
//! 2. Look it up in the routing table.
//! 3. On a hit, invoke that handler with the input.
//! 4. Otherwise invoke the default handler, or fail with
//!    [`MatchError::MissingHandler`] if there is none.

use std::{borrow::Cow, fmt};

use tagmatch_core::{Discriminant, Discriminated, Handler, Key, MatchError, Router};

use crate::routing::HashMapRouter;

/// A built dispatcher over a tagged union.
///
/// Holds no mutable state; calls are independent of each other. With
/// `Send + Sync` handlers, a matcher can be shared across threads.
pub struct Matcher<H, T = HashMapRouter<H>> {
    field: Cow<'static, str>,
    table: T,
    fallback: Option<H>,
}

impl<H, T> Matcher<H, T> {
    /// Assemble a matcher from a routing table and an optional default case.
    pub fn from_parts(field: impl Into<Cow<'static, str>>, table: T, fallback: Option<H>) -> Self {
        Self {
            field: field.into(),
            table,
            fallback,
        }
    }

    /// The field the discriminant is read from.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The routing table of explicit cases.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Whether a default case is present.
    pub fn has_default(&self) -> bool {
        self.fallback.is_some()
    }

    /// Read the discriminant from a different field, keeping the same cases.
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = field.into();
        self
    }
}

impl<H, T: Router<H>> Matcher<H, T> {
    /// Find the handler `value` would be dispatched to, without invoking it.
    pub fn resolve<V: Discriminated + ?Sized>(&self, value: &V) -> Result<&H, MatchError> {
        self.resolve_on(&self.field, value)
    }

    fn resolve_on<V: Discriminated + ?Sized>(
        &self,
        field: &str,
        value: &V,
    ) -> Result<&H, MatchError> {
        let key = value.discriminant(field);

        if let Some(handler) = key.and_then(|k| self.table.route(k).matched()) {
            return Ok(handler);
        }

        match &self.fallback {
            Some(handler) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    field,
                    key = %key.unwrap_or(Discriminant::Str(tagmatch_core::DEFAULT_KEY)),
                    "no case matched, using default"
                );
                Ok(handler)
            }
            None => {
                let key = key.as_ref().map_or_else(Key::default_key, Discriminant::to_key);
                #[cfg(feature = "tracing")]
                tracing::debug!(field, %key, "no case matched and no default case");
                Err(MatchError::MissingHandler {
                    field: field.to_owned(),
                    key,
                })
            }
        }
    }

    /// Dispatch `value` to its handler and return the handler's result.
    pub fn call<V>(&self, value: V) -> Result<H::Output, MatchError>
    where
        V: Discriminated,
        H: Handler<V>,
    {
        dispatch(&self.field, self, value)
    }

    /// Borrow the matcher as a plain function.
    pub fn as_fn<V>(&self) -> impl Fn(V) -> Result<H::Output, MatchError> + '_
    where
        V: Discriminated,
        H: Handler<V>,
    {
        move |value| self.call(value)
    }

    /// Turn the matcher into a plain function, for point-free composition.
    pub fn into_fn<V>(self) -> impl Fn(V) -> Result<H::Output, MatchError>
    where
        V: Discriminated,
        H: Handler<V>,
    {
        move |value| self.call(value)
    }
}

/// Dispatch `value` through `matcher`, reading the discriminant from `field`.
///
/// This is the direct form of [`Matcher::call`]; the field given here
/// overrides the one the matcher was built with.
pub fn dispatch<V, H, T>(
    field: &str,
    matcher: &Matcher<H, T>,
    value: V,
) -> Result<H::Output, MatchError>
where
    V: Discriminated,
    H: Handler<V>,
    T: Router<H>,
{
    let handler = matcher.resolve_on(field, &value)?;
    Ok(handler.call(value))
}

impl<H, T> fmt::Debug for Matcher<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("field", &self.field)
            .field("has_default", &self.has_default())
            .finish_non_exhaustive()
    }
}
