//! Procedural macros for filterkit
//!
//! This crate provides derive macros for `FilterEntity` and `FilterObject`.
//! Both match fields by a property name that defaults to the PascalCase field
//! name (`first_name` → `FirstName`) and can be overridden with
//! `#[property_name = "..."]`.

mod attributes;
mod macros;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for `FilterEntity` - describes a struct's filterable properties
///
/// Struct attributes:
/// - `#[table_name = "..."]` - defaults to the snake_case struct name
///
/// Field attributes:
/// - `#[column_name = "..."]` - defaults to the snake_case field name
/// - `#[property_name = "..."]` - name filter objects refer to the field by
/// - `#[filter_ignore]` - field is not filterable
///
/// Field types must implement `ColumnType`; `Option<T>` marks a nullable column.
#[proc_macro_derive(FilterEntity, attributes(table_name, column_name, property_name, filter_ignore))]
pub fn derive_filter_entity(input: TokenStream) -> TokenStream {
    macros::derive_filter_entity(input)
}

/// Derive macro for `FilterObject` - exposes a struct's fields as filter properties
///
/// Field attributes:
/// - `#[property_name = "..."]` - entity property the field constrains
/// - `#[filter_ignore]` - field is not a filter property
///
/// Field types must implement `IntoFilterArg`.
#[proc_macro_derive(FilterObject, attributes(property_name, filter_ignore))]
pub fn derive_filter_object(input: TokenStream) -> TokenStream {
    macros::derive_filter_object(input)
}
