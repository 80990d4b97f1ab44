//! Derive macro implementations

mod entity;
mod object;

pub use entity::derive_filter_entity;
pub use object::derive_filter_object;

use crate::{attributes, utils};
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Data, DeriveInput, Field, Fields};

/// Named fields of a struct, or an error naming the derive that needs them.
fn named_fields<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<&'a Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(syn::DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => Ok(&fields.named),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{derive} can only be derived for structs with named fields"),
        )),
    }
}

/// Filter-facing name of a field: `#[property_name]` or the PascalCase field name.
fn property_name(field: &Field, ident: &syn::Ident) -> syn::Result<String> {
    Ok(attributes::extract_property_name(field)?
        .unwrap_or_else(|| utils::pascal_case(&ident.unraw().to_string())))
}
