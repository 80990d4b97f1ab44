//! Clause classification, construction and lowering.
//!
//! A matched `(entity property, filter value)` pair goes through three steps:
//!
//! 1. [`classify`] picks the clause kind from the filter value's declared shape.
//! 2. [`build`] coerces constants to the column's kind and produces a [`Clause`].
//! 3. The clause lowers to a `sea_query` expression ([`Clause::to_expr`]) or
//!    evaluates against an entity in memory ([`Clause::matches`]).

use super::entity::{FilterEntity, PropertyDef};
use super::object::{Collection, FilterArg};
use super::range::RangeArg;
use super::registry::ScalarRegistry;
use crate::error::FilterError;
use crate::value::{coerce, Scalar};
use sea_query::{Expr, ExprTrait, Iden, Value};
use std::cmp::Ordering;

/// Which comparison a filter value asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseKind {
    Equality(Scalar),
    Membership(Collection),
    Range(RangeArg),
}

/// Decide the clause kind for a filter value.
///
/// Returns `Ok(None)` for null values. With `collapse_single_element`, a
/// collection holding exactly one non-null item becomes an equality.
///
/// # Errors
///
/// `UnsupportedValue` for values with no clause semantics.
pub fn classify(
    property: &str,
    arg: FilterArg,
    collapse_single_element: bool,
) -> Result<Option<ClauseKind>, FilterError> {
    match arg {
        FilterArg::Null => Ok(None),
        FilterArg::Collection(collection) => {
            if collapse_single_element {
                if let [Some(single)] = collection.items.as_slice() {
                    return Ok(Some(ClauseKind::Equality(single.clone())));
                }
            }
            Ok(Some(ClauseKind::Membership(collection)))
        }
        FilterArg::Range(range) => Ok(Some(ClauseKind::Range(range))),
        FilterArg::Value(value) => Ok(Some(ClauseKind::Equality(value))),
        FilterArg::Unsupported(reason) => Err(FilterError::UnsupportedValue {
            property: property.to_string(),
            reason,
        }),
    }
}

/// One endpoint of a range clause, already coerced to the column kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    pub value: Scalar,
    pub inclusive: bool,
}

/// A single predicate on one entity property.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// `column = value`
    Equals {
        property: &'static PropertyDef,
        value: Scalar,
    },
    /// `column IN (values)`, optionally guarded by `column IS NOT NULL`
    In {
        property: &'static PropertyDef,
        values: Vec<Option<Scalar>>,
        not_null_guard: bool,
    },
    /// `column >= lower AND column < upper`, inclusivity per bound
    Range {
        property: &'static PropertyDef,
        lower: Option<Bound>,
        upper: Option<Bound>,
    },
}

/// Build the clause for a classified filter value.
///
/// Returns `Ok(None)` when the value constrains nothing: an empty
/// collection, or a range with no bounds.
///
/// # Errors
///
/// - `Coercion` when a constant cannot be converted to the column kind
/// - `UnsupportedRangeKind` when the range bound kind is not registered
pub fn build(
    property: &'static PropertyDef,
    kind: ClauseKind,
    registry: &ScalarRegistry,
) -> Result<Option<Clause>, FilterError> {
    match kind {
        ClauseKind::Equality(value) => {
            let value = coerce(value, property.kind)?;
            Ok(Some(Clause::Equals { property, value }))
        }
        ClauseKind::Membership(collection) => {
            if collection.is_empty() {
                return Ok(None);
            }
            let values = collection
                .items
                .into_iter()
                .map(|item| item.map(|v| coerce(v, property.kind)).transpose())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(Clause::In {
                property,
                values,
                not_null_guard: property.nullable && !collection.nullable_items,
            }))
        }
        ClauseKind::Range(range) => {
            // Unregistered kinds are rejected even when both bounds are absent.
            if registry.get(range.kind).is_none() {
                return Err(FilterError::UnsupportedRangeKind(range.kind));
            }
            let bound = |value: Option<Scalar>, inclusive: bool| {
                value
                    .map(|v| registry.build_bound(range.kind, v, property.kind))
                    .transpose()
                    .map(|value| value.map(|value| Bound { value, inclusive }))
            };
            let lower = bound(range.min, range.min_inclusive)?;
            let upper = bound(range.max, range.max_inclusive)?;
            if lower.is_none() && upper.is_none() {
                return Ok(None);
            }
            Ok(Some(Clause::Range {
                property,
                lower,
                upper,
            }))
        }
    }
}

/// Column identifier for generated SQL.
struct ColumnName(&'static str);

impl Iden for ColumnName {
    fn unquoted(&self) -> &str {
        self.0
    }
}

impl Clause {
    pub fn property(&self) -> &'static PropertyDef {
        match self {
            Clause::Equals { property, .. }
            | Clause::In { property, .. }
            | Clause::Range { property, .. } => *property,
        }
    }

    /// Lower the clause to a `sea_query` boolean expression.
    pub fn to_expr(&self) -> Expr {
        let property = self.property();
        let column = || Expr::col(ColumnName(property.column));

        match self {
            Clause::Equals { value, .. } => column().eq(Value::from(value.clone())),
            Clause::In {
                values,
                not_null_guard,
                ..
            } => {
                let values: Vec<Value> = values
                    .iter()
                    .map(|v| match v {
                        Some(v) => Value::from(v.clone()),
                        None => property.kind.null_value(),
                    })
                    .collect();
                let membership = column().is_in(values);
                if *not_null_guard {
                    column().is_not_null().and(membership)
                } else {
                    membership
                }
            }
            Clause::Range { lower, upper, .. } => {
                let lower = lower.as_ref().map(|b| {
                    let v = Value::from(b.value.clone());
                    if b.inclusive {
                        column().gte(v)
                    } else {
                        column().gt(v)
                    }
                });
                let upper = upper.as_ref().map(|b| {
                    let v = Value::from(b.value.clone());
                    if b.inclusive {
                        column().lte(v)
                    } else {
                        column().lt(v)
                    }
                });
                match (lower, upper) {
                    (Some(lower), Some(upper)) => lower.and(upper),
                    (Some(only), None) | (None, Some(only)) => only,
                    // `build` never produces an unbounded range clause
                    (None, None) => Expr::val(true),
                }
            }
        }
    }

    /// Evaluate the clause against an entity.
    ///
    /// Follows SQL semantics: a null property value never matches, and null
    /// items in a membership list match nothing.
    pub fn matches<E: FilterEntity + ?Sized>(&self, entity: &E) -> bool {
        let Some(actual) = entity.property_value(self.property().name) else {
            return false;
        };

        match self {
            Clause::Equals { value, .. } => actual.compare(value) == Some(Ordering::Equal),
            Clause::In { values, .. } => values
                .iter()
                .flatten()
                .any(|v| actual.compare(v) == Some(Ordering::Equal)),
            Clause::Range { lower, upper, .. } => {
                let above = lower.as_ref().map_or(true, |b| {
                    matches!(
                        (actual.compare(&b.value), b.inclusive),
                        (Some(Ordering::Greater), _) | (Some(Ordering::Equal), true)
                    )
                });
                let below = upper.as_ref().map_or(true, |b| {
                    matches!(
                        (actual.compare(&b.value), b.inclusive),
                        (Some(Ordering::Less), _) | (Some(Ordering::Equal), true)
                    )
                });
                above && below
            }
        }
    }
}
