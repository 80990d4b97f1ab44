//! Attribute parsing utilities

use syn::{Attribute, ExprLit, Field, Lit, LitStr};

/// String value of a `#[name = "..."]` attribute.
///
/// Errors when the attribute is present but not a string name-value pair, or
/// when the string is empty.
fn string_attribute(attrs: &[Attribute], name: &str) -> syn::Result<Option<String>> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident(name)) else {
        return Ok(None);
    };
    let meta = attr.meta.require_name_value()?;
    let syn::Expr::Lit(ExprLit {
        lit: Lit::Str(value), ..
    }) = &meta.value
    else {
        return Err(syn::Error::new_spanned(
            &meta.value,
            format!("`{name}` expects a string literal, e.g. #[{name} = \"...\"]"),
        ));
    };
    non_empty(value, name).map(Some)
}

fn non_empty(value: &LitStr, name: &str) -> syn::Result<String> {
    let value_str = value.value();
    if value_str.trim().is_empty() {
        return Err(syn::Error::new_spanned(value, format!("`{name}` cannot be empty")));
    }
    Ok(value_str)
}

/// Extract table name from struct attributes
pub fn extract_table_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    string_attribute(attrs, "table_name")
}

/// Extract column name from field attributes
pub fn extract_column_name(field: &Field) -> syn::Result<Option<String>> {
    string_attribute(&field.attrs, "column_name")
}

/// Extract the filter-facing property name from field attributes
pub fn extract_property_name(field: &Field) -> syn::Result<Option<String>> {
    string_attribute(&field.attrs, "property_name")
}

/// Check if field has a specific attribute
pub fn has_attribute(field: &Field, attr_name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(attr_name))
}
