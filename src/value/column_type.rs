//! `ColumnType` maps Rust property types onto scalar kinds.
//!
//! The derive macros rely on this trait to describe entity properties at
//! compile time (`KIND`, `NULLABLE`) and to read them back at runtime for
//! in-memory evaluation. `Option<T>` marks a nullable column.

use super::scalar::{Scalar, ScalarKind};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Trait for Rust types that can back an entity column or a collection element.
pub trait ColumnType {
    /// Underlying (non-nullable) value kind
    const KIND: ScalarKind;
    /// Whether the type admits null
    const NULLABLE: bool = false;

    /// Current value, `None` when null
    fn to_scalar(&self) -> Option<Scalar>;
}

macro_rules! impl_column_type {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ColumnType for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                fn to_scalar(&self) -> Option<Scalar> {
                    Some(Scalar::$variant(self.clone()))
                }
            }
        )*
    };
}

impl_column_type! {
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

impl ColumnType for &str {
    const KIND: ScalarKind = ScalarKind::String;

    fn to_scalar(&self) -> Option<Scalar> {
        Some(Scalar::String((*self).to_string()))
    }
}

// UTC timestamps are stored with a zero offset.
impl ColumnType for DateTime<Utc> {
    const KIND: ScalarKind = ScalarKind::DateTimeOffset;

    fn to_scalar(&self) -> Option<Scalar> {
        Some(Scalar::DateTimeOffset(DateTime::<FixedOffset>::from(*self)))
    }
}

impl<T: ColumnType> ColumnType for Option<T> {
    const KIND: ScalarKind = T::KIND;
    const NULLABLE: bool = true;

    fn to_scalar(&self) -> Option<Scalar> {
        self.as_ref().and_then(ColumnType::to_scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_option_marks_nullable() {
        assert!(!<i32 as ColumnType>::NULLABLE);
        assert!(<Option<i32> as ColumnType>::NULLABLE);
        assert_eq!(<Option<Decimal> as ColumnType>::KIND, ScalarKind::Decimal);
    }

    #[test]
    fn test_option_to_scalar() {
        assert_eq!(Some(5i64).to_scalar(), Some(Scalar::I64(5)));
        assert_eq!(None::<i64>.to_scalar(), None);
    }

    #[test]
    fn test_utc_maps_to_offset_kind() {
        let utc = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
        let scalar = utc.to_scalar().unwrap();
        assert_eq!(scalar.kind(), ScalarKind::DateTimeOffset);
        assert_eq!(<DateTime<Utc> as ColumnType>::KIND, ScalarKind::DateTimeOffset);
    }

    #[test]
    fn test_str_column() {
        assert_eq!("Tim".to_scalar(), Some(Scalar::String("Tim".to_string())));
    }
}
