//! Implementation of the `#[derive(PatternMatchable)]` macro.
//!
//! Generates the constructor table and the tag lookup used by
//! `PatternMatchable::match_with`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, parse_macro_input};

/// Main implementation of the PatternMatchable derive macro.
pub fn derive_pattern_matchable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(
            &input.ident,
            "PatternMatchable can only be derived for enums.",
        )
        .to_compile_error();
    };

    let variant_names: Vec<_> = data_enum.variants.iter().map(|variant| &variant.ident).collect();
    let labels: Vec<String> = variant_names.iter().map(ToString::to_string).collect();

    quote! {
        impl #impl_generics ::lawful::typeclass::PatternMatchable for #name #type_generics #where_clause {
            const CONSTRUCTORS: &'static [&'static str] = &[#(#labels),*];

            fn constructor(&self) -> &'static str {
                match *self {
                    #(Self::#variant_names { .. } => #labels,)*
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_table_lists_variants_in_order() {
        let input: DeriveInput = syn::parse_quote! {
            enum Shape { Circle(f64), Square { side: f64 }, Dot }
        };
        let expanded = expand(&input).to_string();
        let positions: Vec<_> = ["\"Circle\"", "\"Square\"", "\"Dot\""]
            .iter()
            .map(|label| expanded.find(label))
            .collect();
        assert!(positions.iter().all(Option::is_some), "{expanded}");
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{expanded}");
    }

    #[test]
    fn structs_are_rejected() {
        let input: DeriveInput = syn::parse_quote! { struct Point { x: i32 } };
        assert!(expand(&input).to_string().contains("compile_error"));
    }
}
