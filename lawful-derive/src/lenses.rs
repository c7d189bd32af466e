//! Implementation of the `#[derive(Lenses)]` macro.
//!
//! Generates one lens optic constructor per named field.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_lenses(name, generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs, not enums. Use #[derive(Prisms)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Lenses cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates lens constructors for a struct's fields.
fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let lens_methods: Vec<TokenStream2> = named_fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)))
                .map(|(field_name, field_type)| {
                    let method_name = format_ident!("{}_lens", field_name);
                    let doc = format!("Lens optic focusing on the `{field_name}` field.");

                    quote! {
                        #[doc = #doc]
                        #[must_use]
                        pub fn #method_name() -> ::lawful::optics::LensOptic<Self, Self, #field_type, #field_type>
                        where
                            Self: 'static,
                        {
                            ::lawful::optics::lens(
                                |source: Self| source.#field_name,
                                |value: #field_type, mut source: Self| {
                                    source.#field_name = value;
                                    source
                                },
                            )
                        }
                    }
                })
                .collect();

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#lens_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Lenses cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}
