//! Pipeable entry points.
//!
//! - [`match_tag`]: build a matcher on the conventional `_tag` field.
//! - [`match_on`]: fix the discriminant field first, then take the cases.
//!   The returned builder can be reused for several mappings.
//!
//! Both produce a [`Matcher`], which [`Matcher::into_fn`] turns into a plain
//! `Fn(V) -> Result<_, MatchError>` for composition.

use std::borrow::Cow;

use tagmatch_core::{BuildError, RouterBuilder};

use crate::{cases::Cases, matcher::Matcher};

/// Build a matcher that reads the `_tag` field.
pub fn match_tag<H, B>(cases: Cases<H, B>) -> Result<Matcher<H, B::Router>, BuildError>
where
    B: RouterBuilder<H>,
{
    cases.build()
}

/// Fix the discriminant field, returning a function from cases to a matcher.
///
/// ```rust,ignore
/// let on_code = match_on("code");
/// let matcher = on_code(
///     DynCases::<Value, String>::new()
///         .on(404, |_| "Not Found".to_string())
///         .or_else(|_| "Unexpected".to_string()),
/// )?;
/// ```
pub fn match_on<H, B>(
    field: impl Into<Cow<'static, str>>,
) -> impl Fn(Cases<H, B>) -> Result<Matcher<H, B::Router>, BuildError>
where
    B: RouterBuilder<H>,
{
    let field = field.into();
    move |cases| cases.build_on(field.clone())
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::cases::DynCases;
    use serde_json::{Value, json};
    use tagmatch_core::MatchError;

    #[test]
    fn test_match_tag_reads_tag_field() {
        let matcher = match_tag(
            DynCases::<Value, String>::new()
                .on("Some", |v| v["value"].as_str().unwrap_or_default().to_string())
                .on("None", |_| "Nothing".to_string()),
        )
        .unwrap();

        assert_eq!(matcher.field(), "_tag");
        assert_eq!(
            matcher.call(json!({ "_tag": "Some", "value": "data" })),
            Ok("data".to_string())
        );
    }

    #[test]
    fn test_match_on_is_reusable() {
        let on_code = match_on("code");

        let short = on_code(DynCases::<Value, &'static str>::new().on(200, |_| "ok")).unwrap();
        let long = on_code(
            DynCases::<Value, &'static str>::new()
                .on(200, |_| "OK")
                .or_else(|_| "Unexpected"),
        )
        .unwrap();

        let input = json!({ "code": 500 });
        assert!(matches!(
            short.call(input.clone()),
            Err(MatchError::MissingHandler { .. })
        ));
        assert_eq!(long.call(input), Ok("Unexpected"));
        assert_eq!(short.call(json!({ "code": 200 })), Ok("ok"));
    }
}
