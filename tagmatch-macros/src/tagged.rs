//! `#[derive(Tagged)]`.
//!
//! Implements `Discriminated` and `TagSet` for an enum. Each variant's tag is
//! its name unless overridden:
//!
//! ```rust,ignore
//! #[derive(Tagged)]
//! #[tag(field = "code")]
//! enum Response {
//!     #[tag(200)]
//!     Success { body: String },
//!     #[tag(404)]
//!     NotFound,
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{
    Attribute, Data, DeriveInput, Fields, Ident, LitInt, LitStr, Token, Variant,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

const TAG_FIELD: &str = "_tag";
const DEFAULT_KEY: &str = "_";

/// Implementation of the `Tagged` derive macro.
pub fn derive_tagged_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

/// A variant's tag, as written or defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TagValue {
    Str(String),
    Int(i64),
}

impl TagValue {
    /// The property name a router files this tag under.
    fn name(&self) -> String {
        match self {
            TagValue::Str(s) => s.clone(),
            TagValue::Int(i) => i.to_string(),
        }
    }
}

impl ToTokens for TagValue {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let expanded = match self {
            TagValue::Str(s) => quote! { ::tagmatch::Discriminant::Str(#s) },
            TagValue::Int(i) => quote! { ::tagmatch::Discriminant::Int(#i) },
        };
        tokens.extend(expanded);
    }
}

impl Parse for TagValue {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            return Ok(TagValue::Str(lit.value()));
        }
        let negative = input.peek(Token![-]);
        if negative {
            input.parse::<Token![-]>()?;
        }
        let lit: LitInt = input.parse()?;
        let value: i64 = lit.base10_parse()?;
        Ok(TagValue::Int(if negative { -value } else { value }))
    }
}

/// Arguments of the enum-level `#[tag(...)]` attribute.
struct EnumArgs {
    field: Option<String>,
}

impl Parse for EnumArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut field = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "field" => {
                    let lit: LitStr = input.parse()?;
                    field = Some(lit.value());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(EnumArgs { field })
    }
}

fn tag_attr(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident("tag"))
}

fn variant_tag(variant: &Variant) -> syn::Result<TagValue> {
    let tag = match tag_attr(&variant.attrs) {
        Some(attr) => attr.parse_args::<TagValue>()?,
        None => TagValue::Str(variant.ident.to_string()),
    };
    if tag == TagValue::Str(DEFAULT_KEY.to_string()) {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "`_` is reserved for the default case",
        ));
    }
    Ok(tag)
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`Tagged` can only be derived for enums",
        ));
    };

    let field = match tag_attr(&input.attrs) {
        Some(attr) => attr.parse_args::<EnumArgs>()?.field,
        None => None,
    }
    .unwrap_or_else(|| TAG_FIELD.to_string());

    let mut tags: Vec<TagValue> = Vec::with_capacity(data.variants.len());
    let mut arms = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        let tag = variant_tag(variant)?;
        if tags.iter().any(|t| t.name() == tag.name()) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("duplicate tag {:?}", tag),
            ));
        }

        let ident = &variant.ident;
        let rest = match &variant.fields {
            Fields::Unit => quote! {},
            Fields::Named(_) => quote! { { .. } },
            Fields::Unnamed(_) => quote! { (..) },
        };
        arms.push(quote! { Self::#ident #rest => #tag });
        tags.push(tag);
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tagmatch::Discriminated for #name #ty_generics #where_clause {
            fn discriminant(
                &self,
                field: &str,
            ) -> ::core::option::Option<::tagmatch::Discriminant<'_>> {
                if field != #field {
                    return ::core::option::Option::None;
                }
                ::core::option::Option::Some(match self {
                    #(#arms,)*
                })
            }
        }

        impl #impl_generics ::tagmatch::TagSet for #name #ty_generics #where_clause {
            const FIELD: &'static str = #field;
            const TAGS: &'static [::tagmatch::Discriminant<'static>] = &[#(#tags),*];
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_expands_names_and_overrides() {
        let input: DeriveInput = parse_quote! {
            #[tag(field = "code")]
            enum Response {
                #[tag(200)]
                Success { body: String },
                #[tag(-1)]
                Unknown(u8),
                Timeout,
            }
        };

        let expanded = expand(&input).unwrap().to_string();
        assert!(expanded.contains("\"code\""));
        assert!(expanded.contains("Int (200i64)"));
        assert!(expanded.contains("Int (- 1i64)") || expanded.contains("Int (-1i64)"));
        assert!(expanded.contains("Str (\"Timeout\")"));
    }

    #[test]
    fn test_rejects_structs() {
        let input: DeriveInput = parse_quote! {
            struct NotAnEnum { _tag: String }
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "`Tagged` can only be derived for enums");
    }

    #[test]
    fn test_rejects_duplicate_tags() {
        let input: DeriveInput = parse_quote! {
            enum Twice {
                A,
                #[tag("A")]
                B,
            }
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "duplicate tag Str(\"A\")");
    }

    #[test]
    fn test_rejects_int_and_text_spelling_of_one_tag() {
        let input: DeriveInput = parse_quote! {
            enum Status {
                #[tag(404)]
                NotFound,
                #[tag("404")]
                Missing,
            }
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "duplicate tag Str(\"404\")");
    }

    #[test]
    fn test_rejects_reserved_default_tag() {
        let input: DeriveInput = parse_quote! {
            enum Reserved {
                #[tag("_")]
                Wild,
            }
        };
        assert!(expand(&input).is_err());
    }

    #[test]
    fn test_unknown_enum_argument() {
        let input: DeriveInput = parse_quote! {
            #[tag(name = "x")]
            enum E { A }
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "unknown attribute: name");
    }
}
