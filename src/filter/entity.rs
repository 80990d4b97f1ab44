//! The entity side: the addressable property surface of a queried record type.

use crate::value::{ColumnType, Scalar, ScalarKind};
use std::collections::HashMap;

/// Static description of one entity property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyDef {
    /// Property name, matched case-insensitively against filter properties
    pub name: &'static str,
    /// Column name used in generated SQL
    pub column: &'static str,
    /// Underlying (non-nullable) value kind
    pub kind: ScalarKind,
    pub nullable: bool,
}

impl PropertyDef {
    pub const fn new(name: &'static str, column: &'static str, kind: ScalarKind, nullable: bool) -> Self {
        Self {
            name,
            column,
            kind,
            nullable,
        }
    }

    /// Describe a property from its Rust type.
    pub const fn of<T: ColumnType>(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, T::KIND, T::NULLABLE)
    }
}

/// Trait for record types that can be filtered.
///
/// Usually derived:
///
/// ```
/// use filterkit::FilterEntity;
///
/// #[derive(FilterEntity)]
/// #[table_name = "people"]
/// struct Person {
///     id: i32,
///     #[property_name = "FirstName"]
///     first_name: String,
///     rating: Option<rust_decimal::Decimal>,
/// }
///
/// assert_eq!(Person::table_name(), "people");
/// assert_eq!(Person::properties()[1].column, "first_name");
/// ```
pub trait FilterEntity {
    fn table_name() -> &'static str;

    /// Every filterable property. Names must be unique case-insensitively;
    /// on collision the last one wins.
    fn properties() -> &'static [PropertyDef];

    /// Current value of the named property, `None` when null or unknown.
    fn property_value(&self, name: &str) -> Option<Scalar>;
}

/// Case-insensitive lookup over an entity's properties.
#[derive(Debug)]
pub(crate) struct PropertyIndex {
    by_name: HashMap<String, &'static PropertyDef>,
}

impl PropertyIndex {
    pub(crate) fn of<E: FilterEntity + ?Sized>() -> Self {
        let by_name = E::properties()
            .iter()
            .map(|property| (property.name.to_lowercase(), property))
            .collect();
        Self { by_name }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&'static PropertyDef> {
        self.by_name.get(&name.to_lowercase()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person;

    impl FilterEntity for Person {
        fn table_name() -> &'static str {
            "people"
        }

        fn properties() -> &'static [PropertyDef] {
            const PROPERTIES: &[PropertyDef] = &[
                PropertyDef::of::<String>("FirstName", "first_name"),
                PropertyDef::of::<Option<i32>>("Rating", "rating"),
                PropertyDef::of::<i64>("RATING", "rating_v2"),
            ];
            PROPERTIES
        }

        fn property_value(&self, _name: &str) -> Option<Scalar> {
            None
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        let index = PropertyIndex::of::<Person>();
        for name in ["firstname", "FIRSTNAME", "FirstName", "fIrStNaMe"] {
            assert_eq!(index.get(name).map(|p| p.column), Some("first_name"));
        }
        assert!(index.get("first_name").is_none());
    }

    #[test]
    fn test_last_duplicate_wins() {
        let index = PropertyIndex::of::<Person>();
        let property = index.get("rating").unwrap();
        assert_eq!(property.column, "rating_v2");
        assert_eq!(property.kind, ScalarKind::I64);
    }

    #[test]
    fn test_property_def_of_nullable() {
        let def = PropertyDef::of::<Option<i32>>("Rating", "rating");
        assert!(def.nullable);
        assert_eq!(def.kind, ScalarKind::I32);
    }
}
