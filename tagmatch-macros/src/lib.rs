use proc_macro::TokenStream;

mod tagged;

/// Derive macro implementing `Discriminated` and `TagSet` for an enum.
///
/// - Variant tags default to the variant name; override with `#[tag("name")]`
///   or `#[tag(404)]`.
/// - The discriminant field defaults to `_tag`; override with
///   `#[tag(field = "code")]` on the enum.
#[proc_macro_derive(Tagged, attributes(tag))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    tagged::derive_tagged_impl(input)
}
