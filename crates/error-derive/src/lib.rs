//! Derives [std::fmt::Display] and [std::error::Error] for error enums.
//!
//! Every variant carries its message in a `#[msg = "..."]` attribute. Variants
//! may either be units or wrap exactly one underlying error, which then becomes
//! the [source](std::error::Error::source) of the error and gets a [From] impl.
//!
//! ```ignore
//! #[derive(Debug, Error)]
//! pub enum LoadError {
//!     #[msg = "input is empty"]
//!     Empty,
//!
//!     #[msg = "failed to parse input"]
//!     Parse(ParseError),
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;

#[proc_macro_derive(Error, attributes(msg))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    let item = syn::parse_macro_input!(input as syn::DeriveInput);

    expand(&item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn message(variant: &syn::Variant) -> syn::Result<&syn::Expr> {
    variant
        .attrs
        .iter()
        .find_map(|attr| match &attr.meta {
            syn::Meta::NameValue(name_value) if name_value.path.is_ident("msg") => {
                Some(&name_value.value)
            },
            _ => None,
        })
        .ok_or_else(|| {
            syn::Error::new(
                variant.ident.span(),
                "missing #[msg = \"...\"] attribute on error variant",
            )
        })
}

fn expand(item: &syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let syn::Data::Enum(data) = &item.data else {
        return Err(syn::Error::new(
            item.ident.span(),
            "Error can only be derived for enums",
        ));
    };

    let name = &item.ident;
    let (impl_generics, type_generics, where_clause) = item.generics.split_for_impl();

    let mut variant_displays = vec![];
    let mut variant_sources = vec![];
    let mut from_impls = vec![];

    for variant in &data.variants {
        let ident = &variant.ident;
        let display_value = message(variant)?;

        match &variant.fields {
            syn::Fields::Unit => {
                variant_displays
                    .push(quote!(Self::#ident => ::std::fmt::Display::fmt(&#display_value, f)));
            },
            syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                let ty = &fields.unnamed[0].ty;

                from_impls.push(quote!(
                    #[automatically_derived]
                    impl #impl_generics ::std::convert::From<#ty> for #name #type_generics #where_clause {
                        fn from(value: #ty) -> Self {
                            Self::#ident(value)
                        }
                    }
                ));
                variant_displays
                    .push(quote!(Self::#ident(_) => ::std::fmt::Display::fmt(&#display_value, f)));
                variant_sources.push(quote!(Self::#ident(value) => ::std::option::Option::Some(value)));
            },
            syn::Fields::Unnamed(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "error variants may wrap exactly one value",
                ));
            },
            syn::Fields::Named(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "named fields are not allowed on error variants",
                ));
            },
        }
    }

    Ok(quote!(
        #[automatically_derived]
        impl #impl_generics ::std::fmt::Display for #name #type_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(
                        #variant_displays,
                    )*
                }
            }
        }

        #(
            #from_impls
        )*

        #[automatically_derived]
        impl #impl_generics ::std::error::Error for #name #type_generics #where_clause {
            #[allow(unreachable_patterns)]
            fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    #(
                        #variant_sources,
                    )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    ))
}
