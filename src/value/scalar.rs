//! Scalar values and their kind tags.
//!
//! [`Scalar`] is the engine's own non-null value model. It is narrower
//! than `sea_query::Value`: every variant can be compared in memory
//! and converted into a query parameter with `Value::from`.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use rust_decimal::Decimal;
use sea_query::Value;
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// Tag naming the value type of a column or range bound.
///
/// `Custom` kinds never appear on built-in types; they let callers define
/// their own range bound types and register a bound builder for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    Char,
    String,
    /// Date and time without an offset
    DateTime,
    /// Date and time with a fixed UTC offset
    DateTimeOffset,
    Uuid,
    Custom(&'static str),
}

impl ScalarKind {
    /// Kinds accepted as range bounds out of the box.
    pub const BOUNDABLE: [ScalarKind; 14] = [
        ScalarKind::U8,
        ScalarKind::Char,
        ScalarKind::DateTime,
        ScalarKind::DateTimeOffset,
        ScalarKind::Decimal,
        ScalarKind::F64,
        ScalarKind::F32,
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::I8,
        ScalarKind::I16,
        ScalarKind::U32,
        ScalarKind::U64,
        ScalarKind::U16,
    ];

    /// Typed SQL `NULL` for this kind.
    pub fn null_value(self) -> Value {
        match self {
            ScalarKind::Bool => Value::Bool(None),
            ScalarKind::I8 => Value::TinyInt(None),
            ScalarKind::I16 => Value::SmallInt(None),
            ScalarKind::I32 => Value::Int(None),
            ScalarKind::I64 => Value::BigInt(None),
            ScalarKind::U8 => Value::TinyUnsigned(None),
            ScalarKind::U16 => Value::SmallUnsigned(None),
            ScalarKind::U32 => Value::Unsigned(None),
            ScalarKind::U64 => Value::BigUnsigned(None),
            ScalarKind::F32 => Value::Float(None),
            ScalarKind::F64 => Value::Double(None),
            ScalarKind::Decimal => Value::Decimal(None),
            ScalarKind::Char => Value::Char(None),
            ScalarKind::String | ScalarKind::Custom(_) => Value::String(None),
            ScalarKind::DateTime => Value::ChronoDateTime(None),
            ScalarKind::DateTimeOffset => Value::ChronoDateTimeWithTimeZone(None),
            ScalarKind::Uuid => Value::Uuid(None),
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Char => "char",
            ScalarKind::String => "string",
            ScalarKind::DateTime => "datetime",
            ScalarKind::DateTimeOffset => "datetime_offset",
            ScalarKind::Uuid => "uuid",
            ScalarKind::Custom(name) => *name,
        };
        f.write_str(name)
    }
}

/// A non-null filter or column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Char(char),
    String(String),
    DateTime(NaiveDateTime),
    DateTimeOffset(DateTime<FixedOffset>),
    Uuid(Uuid),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::I8(_) => ScalarKind::I8,
            Scalar::I16(_) => ScalarKind::I16,
            Scalar::I32(_) => ScalarKind::I32,
            Scalar::I64(_) => ScalarKind::I64,
            Scalar::U8(_) => ScalarKind::U8,
            Scalar::U16(_) => ScalarKind::U16,
            Scalar::U32(_) => ScalarKind::U32,
            Scalar::U64(_) => ScalarKind::U64,
            Scalar::F32(_) => ScalarKind::F32,
            Scalar::F64(_) => ScalarKind::F64,
            Scalar::Decimal(_) => ScalarKind::Decimal,
            Scalar::Char(_) => ScalarKind::Char,
            Scalar::String(_) => ScalarKind::String,
            Scalar::DateTime(_) => ScalarKind::DateTime,
            Scalar::DateTimeOffset(_) => ScalarKind::DateTimeOffset,
            Scalar::Uuid(_) => ScalarKind::Uuid,
        }
    }

    /// Order two values of the same kind.
    ///
    /// Returns `None` for mismatched kinds and for NaN floats; callers
    /// coerce both sides to the column kind first.
    pub fn compare(&self, other: &Scalar) -> Option<Ordering> {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a.partial_cmp(b),
            (Scalar::I8(a), Scalar::I8(b)) => a.partial_cmp(b),
            (Scalar::I16(a), Scalar::I16(b)) => a.partial_cmp(b),
            (Scalar::I32(a), Scalar::I32(b)) => a.partial_cmp(b),
            (Scalar::I64(a), Scalar::I64(b)) => a.partial_cmp(b),
            (Scalar::U8(a), Scalar::U8(b)) => a.partial_cmp(b),
            (Scalar::U16(a), Scalar::U16(b)) => a.partial_cmp(b),
            (Scalar::U32(a), Scalar::U32(b)) => a.partial_cmp(b),
            (Scalar::U64(a), Scalar::U64(b)) => a.partial_cmp(b),
            (Scalar::F32(a), Scalar::F32(b)) => a.partial_cmp(b),
            (Scalar::F64(a), Scalar::F64(b)) => a.partial_cmp(b),
            (Scalar::Decimal(a), Scalar::Decimal(b)) => a.partial_cmp(b),
            (Scalar::Char(a), Scalar::Char(b)) => a.partial_cmp(b),
            (Scalar::String(a), Scalar::String(b)) => a.partial_cmp(b),
            (Scalar::DateTime(a), Scalar::DateTime(b)) => a.partial_cmp(b),
            (Scalar::DateTimeOffset(a), Scalar::DateTimeOffset(b)) => a.partial_cmp(b),
            (Scalar::Uuid(a), Scalar::Uuid(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool(v) => Value::from(v),
            Scalar::I8(v) => Value::from(v),
            Scalar::I16(v) => Value::from(v),
            Scalar::I32(v) => Value::from(v),
            Scalar::I64(v) => Value::from(v),
            Scalar::U8(v) => Value::from(v),
            Scalar::U16(v) => Value::from(v),
            Scalar::U32(v) => Value::from(v),
            Scalar::U64(v) => Value::from(v),
            Scalar::F32(v) => Value::from(v),
            Scalar::F64(v) => Value::from(v),
            Scalar::Decimal(v) => Value::from(v),
            Scalar::Char(v) => Value::from(v),
            Scalar::String(v) => Value::from(v),
            Scalar::DateTime(v) => Value::from(v),
            Scalar::DateTimeOffset(v) => Value::from(v),
            Scalar::Uuid(v) => Value::from(v),
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Scalar::$variant(v)
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    char => Char,
    String => String,
    NaiveDateTime => DateTime,
    DateTime<FixedOffset> => DateTimeOffset,
    Uuid => Uuid,
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_string())
    }
}
