//! Derive macro for `FilterEntity`
//!
//! Generates the static property table (`PropertyDef::of::<FieldType>`) and a
//! `property_value` accessor that reads each field through `ColumnType`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, DeriveInput};

use super::{named_fields, property_name};
use crate::{attributes, utils};

pub fn derive_filter_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "FilterEntity cannot be derived for generic structs",
        ));
    }

    let fields = named_fields(input, "FilterEntity")?;
    let table_name = attributes::extract_table_name(&input.attrs)?
        .unwrap_or_else(|| utils::snake_case(&struct_name.unraw().to_string()));

    let mut property_defs: Vec<TokenStream2> = Vec::new();
    let mut value_arms: Vec<TokenStream2> = Vec::new();

    for field in fields {
        if attributes::has_attribute(field, "filter_ignore") {
            continue;
        }
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;
        let property = property_name(field, field_name)?;
        let column = attributes::extract_column_name(field)?
            .unwrap_or_else(|| utils::snake_case(&field_name.unraw().to_string()));

        property_defs.push(quote! {
            ::filterkit::PropertyDef::of::<#field_type>(#property, #column)
        });
        value_arms.push(quote! {
            #property => ::filterkit::ColumnType::to_scalar(&self.#field_name)
        });
    }

    Ok(quote! {
        impl ::filterkit::FilterEntity for #struct_name {
            fn table_name() -> &'static str {
                #table_name
            }

            fn properties() -> &'static [::filterkit::PropertyDef] {
                const PROPERTIES: &[::filterkit::PropertyDef] = &[
                    #(#property_defs),*
                ];
                PROPERTIES
            }

            fn property_value(&self, name: &str) -> ::std::option::Option<::filterkit::Scalar> {
                match name {
                    #(#value_arms,)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    })
}
