extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Adds JSON helpers to a serde type. The expanding crate must depend on
/// `serde_json` and `anyhow`.
///
/// Besides single values, the `many_*` helpers parse a JSON array of the type,
/// which is how records arrive from the page.
#[proc_macro_derive(Json)]
pub fn json_macro(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = input.ident;
    let type_name = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            pub fn to_json(&self) -> ::anyhow::Result<String>
            where
                Self: ::serde::Serialize,
            {
                use ::anyhow::Context as _;
                ::serde_json::to_string(self)
                    .with_context(|| format!("Cannot serialize {}", #type_name))
            }

            pub fn from_json(json: &str) -> ::anyhow::Result<Self>
            where
                for<'de> Self: ::serde::Deserialize<'de>,
            {
                use ::anyhow::Context as _;
                ::serde_json::from_str(json)
                    .with_context(|| format!("Cannot parse {} from JSON", #type_name))
            }

            pub fn from_value(value: ::serde_json::Value) -> ::anyhow::Result<Self>
            where
                for<'de> Self: ::serde::Deserialize<'de>,
            {
                use ::anyhow::Context as _;
                ::serde_json::from_value(value)
                    .with_context(|| format!("Cannot convert JSON value to {}", #type_name))
            }

            pub fn many_from_json(json: &str) -> ::anyhow::Result<Vec<Self>>
            where
                for<'de> Self: ::serde::Deserialize<'de>,
            {
                use ::anyhow::Context as _;
                ::serde_json::from_str(json)
                    .with_context(|| format!("Cannot parse a list of {} from JSON", #type_name))
            }

            pub fn many_from_value(value: ::serde_json::Value) -> ::anyhow::Result<Vec<Self>>
            where
                for<'de> Self: ::serde::Deserialize<'de>,
            {
                use ::anyhow::Context as _;
                ::serde_json::from_value(value).with_context(|| {
                    format!("Cannot convert JSON value to a list of {}", #type_name)
                })
            }
        }
    };

    TokenStream::from(expanded)
}
