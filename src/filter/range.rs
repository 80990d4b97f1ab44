//! Bounded-range filter values.
//!
//! A [`Range`] is the value a range parser hands the engine: two optional
//! bounds, each independently inclusive or exclusive. Parsing textual range
//! notation is left to the caller.

use crate::value::{Scalar, ScalarKind};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use rust_decimal::Decimal;

/// Scalar types that can bound a [`Range`].
///
/// `KIND` selects the bound builder in the
/// [`ScalarRegistry`](crate::ScalarRegistry). Implement this for your own
/// types with a `ScalarKind::Custom` tag and register a builder for it.
pub trait RangeBound {
    const KIND: ScalarKind;

    fn to_scalar(&self) -> Scalar;
}

macro_rules! impl_range_bound {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl RangeBound for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                fn to_scalar(&self) -> Scalar {
                    Scalar::$variant(*self)
                }
            }
        )*
    };
}

impl_range_bound! {
    u8 => U8,
    char => Char,
    NaiveDateTime => DateTime,
    DateTime<FixedOffset> => DateTimeOffset,
    Decimal => Decimal,
    f64 => F64,
    f32 => F32,
    i32 => I32,
    i64 => I64,
    i8 => I8,
    i16 => I16,
    u32 => U32,
    u64 => U64,
    u16 => U16,
}

impl RangeBound for DateTime<Utc> {
    const KIND: ScalarKind = ScalarKind::DateTimeOffset;

    fn to_scalar(&self) -> Scalar {
        Scalar::DateTimeOffset(DateTime::<FixedOffset>::from(*self))
    }
}

/// An interval with independently optional, independently inclusive endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<V> {
    pub min_value: Option<V>,
    pub max_value: Option<V>,
    pub is_min_inclusive: bool,
    pub is_max_inclusive: bool,
}

impl<V> Range<V> {
    pub fn new(
        min_value: Option<V>,
        max_value: Option<V>,
        is_min_inclusive: bool,
        is_max_inclusive: bool,
    ) -> Self {
        Self {
            min_value,
            max_value,
            is_min_inclusive,
            is_max_inclusive,
        }
    }

    /// `[min, max]`
    pub fn closed(min: V, max: V) -> Self {
        Self::new(Some(min), Some(max), true, true)
    }

    /// `(min, max)`
    pub fn open(min: V, max: V) -> Self {
        Self::new(Some(min), Some(max), false, false)
    }

    /// `[min, max)`
    pub fn half_open(min: V, max: V) -> Self {
        Self::new(Some(min), Some(max), true, false)
    }

    /// `[min, ∞)`
    pub fn at_least(min: V) -> Self {
        Self::new(Some(min), None, true, false)
    }

    /// `(min, ∞)`
    pub fn greater_than(min: V) -> Self {
        Self::new(Some(min), None, false, false)
    }

    /// `(-∞, max]`
    pub fn at_most(max: V) -> Self {
        Self::new(None, Some(max), false, true)
    }

    /// `(-∞, max)`
    pub fn less_than(max: V) -> Self {
        Self::new(None, Some(max), false, false)
    }

    /// Neither bound present.
    pub fn unbounded() -> Self {
        Self::new(None, None, false, false)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min_value.is_none() && self.max_value.is_none()
    }
}

impl<V: PartialOrd> Range<V> {
    pub fn contains(&self, value: &V) -> bool {
        let above_min = match &self.min_value {
            Some(min) if self.is_min_inclusive => value >= min,
            Some(min) => value > min,
            None => true,
        };
        let below_max = match &self.max_value {
            Some(max) if self.is_max_inclusive => value <= max,
            Some(max) => value < max,
            None => true,
        };
        above_min && below_max
    }
}

/// A range with its bound type erased to scalars, tagged with the bound kind.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeArg {
    pub kind: ScalarKind,
    pub min: Option<Scalar>,
    pub max: Option<Scalar>,
    pub min_inclusive: bool,
    pub max_inclusive: bool,
}

impl<V: RangeBound> From<&Range<V>> for RangeArg {
    fn from(range: &Range<V>) -> Self {
        Self {
            kind: V::KIND,
            min: range.min_value.as_ref().map(RangeBound::to_scalar),
            max: range.max_value.as_ref().map(RangeBound::to_scalar),
            min_inclusive: range.is_min_inclusive,
            max_inclusive: range.is_max_inclusive,
        }
    }
}
