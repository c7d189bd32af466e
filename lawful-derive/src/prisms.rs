//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! Generates one prism optic constructor per enum variant. The focus of a
//! variant is its payload: `()` for unit variants, the field for a single
//! field, and a tuple of the fields in declaration order otherwise.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            generate_enum_prisms(name, generics, &data_enum.variants.iter().collect::<Vec<_>>())
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates prism constructors for an enum's variants.
fn generate_enum_prisms(name: &Ident, generics: &Generics, variants: &[&Variant]) -> TokenStream2 {
    let prism_methods: Vec<TokenStream2> = variants
        .iter()
        .map(|variant| generate_variant_prism(variant))
        .collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// The pieces a variant contributes to its prism.
struct Payload {
    focus_type: TokenStream2,
    parameter: TokenStream2,
    pattern: TokenStream2,
    extracted: TokenStream2,
    rebuilt: TokenStream2,
}

fn payload(variant: &Variant) -> Payload {
    let variant_name = &variant.ident;

    match &variant.fields {
        Fields::Unit => Payload {
            focus_type: quote! { () },
            parameter: quote! { () },
            pattern: quote! { Self::#variant_name },
            extracted: quote! { () },
            rebuilt: quote! { Self::#variant_name },
        },
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            Payload {
                focus_type: quote! { #field_type },
                parameter: quote! { value },
                pattern: quote! { Self::#variant_name(value) },
                extracted: quote! { value },
                rebuilt: quote! { Self::#variant_name(value) },
            }
        }
        Fields::Unnamed(fields) => {
            let field_types: Vec<_> = fields.unnamed.iter().map(|field| &field.ty).collect();
            let bindings: Vec<_> = (0..field_types.len())
                .map(|index| format_ident!("v{}", index))
                .collect();
            Payload {
                focus_type: quote! { (#(#field_types),*) },
                parameter: quote! { value },
                pattern: quote! { Self::#variant_name(#(#bindings),*) },
                extracted: quote! { (#(#bindings),*) },
                rebuilt: quote! {{
                    let (#(#bindings),*) = value;
                    Self::#variant_name(#(#bindings),*)
                }},
            }
        }
        Fields::Named(fields) => {
            let field_names: Vec<_> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let field_types: Vec<_> = fields.named.iter().map(|field| &field.ty).collect();
            Payload {
                focus_type: quote! { (#(#field_types,)*) },
                parameter: quote! { value },
                pattern: quote! { Self::#variant_name { #(#field_names),* } },
                extracted: quote! { (#(#field_names,)*) },
                rebuilt: quote! {{
                    let (#(#field_names,)*) = value;
                    Self::#variant_name { #(#field_names),* }
                }},
            }
        }
    }
}

/// Generates a prism constructor for a single enum variant.
fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let doc = format!("Prism optic focusing on the `{variant_name}` variant.");
    let Payload {
        focus_type,
        parameter,
        pattern,
        extracted,
        rebuilt,
    } = payload(variant);

    quote! {
        #[doc = #doc]
        #[must_use]
        pub fn #method_name() -> ::lawful::optics::PrismOptic<Self, Self, #focus_type, #focus_type>
        where
            Self: 'static,
        {
            ::lawful::optics::prism(
                |source: Self| match source {
                    #pattern => ::lawful::control::Either::Right(#extracted),
                    #[allow(unreachable_patterns)]
                    other => ::lawful::control::Either::Left(other),
                },
                |#parameter: #focus_type| #rebuilt,
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase() || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.push(character.to_lowercase().next().unwrap_or(character));
        } else {
            result.push(character);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_of_single_words() {
        assert_eq!(to_snake_case("Circle"), "circle");
        assert_eq!(to_snake_case("A"), "a");
    }

    #[test]
    fn snake_case_splits_words() {
        assert_eq!(to_snake_case("KeyPress"), "key_press");
        assert_eq!(to_snake_case("MouseClick"), "mouse_click");
    }

    #[test]
    fn snake_case_keeps_acronyms_together() {
        assert_eq!(to_snake_case("HTTPRequest"), "http_request");
        assert_eq!(to_snake_case("XMLParser"), "xml_parser");
    }

    #[test]
    fn payload_of_a_named_variant_is_a_tuple() {
        let variant: Variant = syn::parse_quote! { Click { x: i32, y: i32 } };
        let Payload { focus_type, .. } = payload(&variant);
        assert_eq!(focus_type.to_string(), quote! { (i32, i32,) }.to_string());
    }
}
