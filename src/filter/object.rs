//! The filter side: objects whose properties declare constraints.
//!
//! Clause semantics come from the *declared* type of each property, resolved
//! statically through [`IntoFilterArg`]:
//!
//! - scalars (`i32`, `String`, `Decimal`, ...) → [`FilterArg::Value`]
//! - `Vec<T>`, arrays, slices, `VecDeque`, `HashSet`, `BTreeSet` → [`FilterArg::Collection`]
//! - [`Range<V>`] → [`FilterArg::Range`]
//! - `Option<T>` → [`FilterArg::Null`] or whatever `T` produces
//!
//! `serde_json::Value` is the loosely typed exception: its shape decides.

use super::range::{Range, RangeArg, RangeBound};
use crate::value::{ColumnType, Scalar};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet, VecDeque};
use uuid::Uuid;

/// A filter property value, classified by its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterArg {
    /// No constraint
    Null,
    /// Equality candidate
    Value(Scalar),
    /// Membership candidate
    Collection(Collection),
    /// Range candidate
    Range(RangeArg),
    /// A loosely typed value with no clause semantics
    Unsupported(String),
}

/// The items of a collection filter value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection {
    /// Items in iteration order, `None` for null items
    pub items: Vec<Option<Scalar>>,
    /// Whether the declared element type admits null
    pub nullable_items: bool,
}

impl Collection {
    pub fn of<'a, T, I>(items: I) -> Self
    where
        T: ColumnType + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self {
            items: items.into_iter().map(ColumnType::to_scalar).collect(),
            nullable_items: T::NULLABLE,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Static clause-kind classification of a filter property's declared type.
pub trait IntoFilterArg {
    fn filter_arg(&self) -> FilterArg;
}

macro_rules! impl_scalar_filter_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoFilterArg for $ty {
                fn filter_arg(&self) -> FilterArg {
                    match ColumnType::to_scalar(self) {
                        Some(scalar) => FilterArg::Value(scalar),
                        None => FilterArg::Null,
                    }
                }
            }
        )*
    };
}

impl_scalar_filter_arg! {
    bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64,
    Decimal, char, String, NaiveDateTime, DateTime<FixedOffset>, DateTime<Utc>, Uuid,
}

impl IntoFilterArg for str {
    fn filter_arg(&self) -> FilterArg {
        FilterArg::Value(Scalar::String(self.to_string()))
    }
}

impl<T: IntoFilterArg> IntoFilterArg for Option<T> {
    fn filter_arg(&self) -> FilterArg {
        match self {
            Some(value) => value.filter_arg(),
            None => FilterArg::Null,
        }
    }
}

impl<T: IntoFilterArg + ?Sized> IntoFilterArg for &T {
    fn filter_arg(&self) -> FilterArg {
        (**self).filter_arg()
    }
}

impl<T: IntoFilterArg + ?Sized> IntoFilterArg for Box<T> {
    fn filter_arg(&self) -> FilterArg {
        (**self).filter_arg()
    }
}

impl<T: ColumnType> IntoFilterArg for [T] {
    fn filter_arg(&self) -> FilterArg {
        FilterArg::Collection(Collection::of(self))
    }
}

impl<T: ColumnType, const N: usize> IntoFilterArg for [T; N] {
    fn filter_arg(&self) -> FilterArg {
        FilterArg::Collection(Collection::of(self))
    }
}

impl<T: ColumnType> IntoFilterArg for Vec<T> {
    fn filter_arg(&self) -> FilterArg {
        FilterArg::Collection(Collection::of(self))
    }
}

impl<T: ColumnType> IntoFilterArg for VecDeque<T> {
    fn filter_arg(&self) -> FilterArg {
        FilterArg::Collection(Collection::of(self))
    }
}

impl<T: ColumnType, S> IntoFilterArg for HashSet<T, S> {
    fn filter_arg(&self) -> FilterArg {
        FilterArg::Collection(Collection::of(self))
    }
}

impl<T: ColumnType> IntoFilterArg for BTreeSet<T> {
    fn filter_arg(&self) -> FilterArg {
        FilterArg::Collection(Collection::of(self))
    }
}

impl<V: RangeBound> IntoFilterArg for Range<V> {
    fn filter_arg(&self) -> FilterArg {
        FilterArg::Range(RangeArg::from(self))
    }
}

impl IntoFilterArg for FilterArg {
    fn filter_arg(&self) -> FilterArg {
        self.clone()
    }
}

impl IntoFilterArg for serde_json::Value {
    fn filter_arg(&self) -> FilterArg {
        use serde_json::Value as Json;

        match self {
            Json::Null => FilterArg::Null,
            Json::Array(items) => {
                let mut collection = Collection::default();
                for item in items {
                    match json_scalar(item) {
                        Ok(scalar) => {
                            collection.nullable_items |= scalar.is_none();
                            collection.items.push(scalar);
                        }
                        Err(shape) => {
                            return FilterArg::Unsupported(format!("array containing {shape}"));
                        }
                    }
                }
                FilterArg::Collection(collection)
            }
            other => match json_scalar(other) {
                Ok(Some(scalar)) => FilterArg::Value(scalar),
                Ok(None) => FilterArg::Null,
                Err(shape) => FilterArg::Unsupported(shape.to_string()),
            },
        }
    }
}

fn json_scalar(value: &serde_json::Value) -> Result<Option<Scalar>, &'static str> {
    use serde_json::Value as Json;

    match value {
        Json::Null => Ok(None),
        Json::Bool(b) => Ok(Some(Scalar::Bool(*b))),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Some(Scalar::I64(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Some(Scalar::U64(u)))
            } else {
                n.as_f64().map(|f| Some(Scalar::F64(f))).ok_or("number")
            }
        }
        Json::String(s) => Ok(Some(Scalar::String(s.clone()))),
        Json::Array(_) => Err("array"),
        Json::Object(_) => Err("object"),
    }
}

/// One property of a filter object.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterProperty<'a> {
    pub name: Cow<'a, str>,
    pub arg: FilterArg,
}

impl<'a> FilterProperty<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>, arg: FilterArg) -> Self {
        Self {
            name: name.into(),
            arg,
        }
    }
}

/// A value whose properties denote desired constraints.
///
/// Usually derived:
///
/// ```
/// use filterkit::{FilterObject, Range};
///
/// #[derive(FilterObject)]
/// struct PersonFilter {
///     first_name: Option<Vec<String>>,
///     rating: Option<Range<rust_decimal::Decimal>>,
/// }
/// ```
pub trait FilterObject {
    /// Properties in declaration order
    fn filter_properties(&self) -> Vec<FilterProperty<'_>>;
}

impl<T: FilterObject + ?Sized> FilterObject for &T {
    fn filter_properties(&self) -> Vec<FilterProperty<'_>> {
        (**self).filter_properties()
    }
}

impl<T: FilterObject + ?Sized> FilterObject for Box<T> {
    fn filter_properties(&self) -> Vec<FilterProperty<'_>> {
        (**self).filter_properties()
    }
}

impl FilterObject for serde_json::Map<String, serde_json::Value> {
    fn filter_properties(&self) -> Vec<FilterProperty<'_>> {
        self.iter()
            .map(|(name, value)| FilterProperty::new(name.as_str(), value.filter_arg()))
            .collect()
    }
}

/// Only JSON objects carry properties; any other JSON value is an empty filter.
impl FilterObject for serde_json::Value {
    fn filter_properties(&self) -> Vec<FilterProperty<'_>> {
        match self {
            serde_json::Value::Object(map) => map.filter_properties(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_none_is_null() {
        assert_eq!(None::<i32>.filter_arg(), FilterArg::Null);
        assert_eq!(Some(3i32).filter_arg(), FilterArg::Value(Scalar::I32(3)));
    }

    #[test]
    fn test_strings_are_scalars_not_collections() {
        assert_eq!(
            "Tim".filter_arg(),
            FilterArg::Value(Scalar::String("Tim".to_string()))
        );
        assert_eq!(
            String::from("Tim").filter_arg(),
            FilterArg::Value(Scalar::String("Tim".to_string()))
        );
    }

    #[test]
    fn test_collections() {
        let arg = vec![1i32, 2, 3].filter_arg();
        let FilterArg::Collection(collection) = arg else {
            panic!("expected a collection");
        };
        assert_eq!(collection.len(), 3);
        assert!(!collection.nullable_items);

        let arg = [Some(1i32), None].filter_arg();
        let FilterArg::Collection(collection) = arg else {
            panic!("expected a collection");
        };
        assert_eq!(collection.items, vec![Some(Scalar::I32(1)), None]);
        assert!(collection.nullable_items);
    }

    #[test]
    fn test_btree_set_iterates_in_order() {
        let set: BTreeSet<u8> = [3, 1, 2].into_iter().collect();
        let FilterArg::Collection(collection) = set.filter_arg() else {
            panic!("expected a collection");
        };
        assert_eq!(
            collection.items,
            vec![Some(Scalar::U8(1)), Some(Scalar::U8(2)), Some(Scalar::U8(3))]
        );
    }

    #[test]
    fn test_range_arg() {
        let arg = Range::closed(1i64, 2).filter_arg();
        assert!(matches!(arg, FilterArg::Range(RangeArg { min: Some(Scalar::I64(1)), .. })));
    }

    #[test]
    fn test_json_shapes() {
        assert_eq!(json!(null).filter_arg(), FilterArg::Null);
        assert_eq!(json!(4).filter_arg(), FilterArg::Value(Scalar::I64(4)));
        assert_eq!(json!(4.5).filter_arg(), FilterArg::Value(Scalar::F64(4.5)));
        assert!(matches!(json!(["a", null]).filter_arg(), FilterArg::Collection(c) if c.nullable_items));
        assert!(matches!(json!({"min": 1}).filter_arg(), FilterArg::Unsupported(_)));
        assert!(matches!(json!([[1]]).filter_arg(), FilterArg::Unsupported(_)));
    }

    #[test]
    fn test_json_object_properties() {
        let filter = json!({ "FirstName": "Tim", "rating": null });
        let properties = filter.filter_properties();
        assert_eq!(properties.len(), 2);
        assert!(properties.iter().any(|p| p.name == "FirstName"));

        assert!(json!([1, 2]).filter_properties().is_empty());
    }

    #[test]
    fn test_json_object_keeps_key_order() {
        let filter = json!({ "Score": 3, "FirstName": "Tim", "Id": 7 });
        let properties = filter.filter_properties();
        let names: Vec<&str> = properties.iter().map(|p| p.name.as_ref()).collect();
        assert_eq!(names, ["Score", "FirstName", "Id"]);
    }
}
