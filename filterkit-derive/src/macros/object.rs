//! Derive macro for `FilterObject`

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use super::{named_fields, property_name};
use crate::attributes;

pub fn derive_filter_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let fields = named_fields(input, "FilterObject")?;

    let mut properties: Vec<TokenStream2> = Vec::new();
    for field in fields {
        if attributes::has_attribute(field, "filter_ignore") {
            continue;
        }
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let property = property_name(field, field_name)?;
        properties.push(quote! {
            ::filterkit::FilterProperty::new(
                #property,
                ::filterkit::IntoFilterArg::filter_arg(&self.#field_name),
            )
        });
    }

    Ok(quote! {
        impl #impl_generics ::filterkit::FilterObject for #struct_name #ty_generics #where_clause {
            fn filter_properties(&self) -> ::std::vec::Vec<::filterkit::FilterProperty<'_>> {
                ::std::vec![#(#properties),*]
            }
        }
    })
}
