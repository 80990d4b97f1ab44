//! Conversion of filter values to a column's value kind.
//!
//! Numeric conversions are exact: widening always succeeds, narrowing only
//! when the value survives the trip (no truncation, no overflow). Strings
//! are parsed into the target kind. Offset-less date-times are read as UTC.

use super::scalar::{Scalar, ScalarKind};
use crate::error::FilterError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

/// Convert `value` into a scalar of kind `target`.
///
/// # Errors
///
/// Returns `FilterError::Coercion` when no lossless conversion exists.
pub fn coerce(value: Scalar, target: ScalarKind) -> Result<Scalar, FilterError> {
    if value.kind() == target {
        return Ok(value);
    }

    let converted = match &value {
        Scalar::String(s) => parse_as(s, target),
        Scalar::Char(c) => match target {
            ScalarKind::String => Some(Scalar::String(c.to_string())),
            _ => None,
        },
        Scalar::DateTime(dt) => match target {
            ScalarKind::DateTimeOffset => Some(Scalar::DateTimeOffset(naive_as_utc(dt))),
            _ => None,
        },
        Scalar::DateTimeOffset(dt) => match target {
            ScalarKind::DateTime => Some(Scalar::DateTime(dt.naive_utc())),
            _ => None,
        },
        Scalar::Bool(_) | Scalar::Uuid(_) => None,
        _ => Number::of(&value).and_then(|n| n.to_kind(target)),
    };

    converted.ok_or_else(|| FilterError::coercion(&value, target))
}

fn naive_as_utc(dt: &NaiveDateTime) -> DateTime<FixedOffset> {
    DateTime::<FixedOffset>::from(Utc.from_utc_datetime(dt))
}

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i128),
    F32(f32),
    F64(f64),
    Dec(Decimal),
}

impl Number {
    fn of(value: &Scalar) -> Option<Self> {
        let n = match *value {
            Scalar::I8(v) => Number::Int(v.into()),
            Scalar::I16(v) => Number::Int(v.into()),
            Scalar::I32(v) => Number::Int(v.into()),
            Scalar::I64(v) => Number::Int(v.into()),
            Scalar::U8(v) => Number::Int(v.into()),
            Scalar::U16(v) => Number::Int(v.into()),
            Scalar::U32(v) => Number::Int(v.into()),
            Scalar::U64(v) => Number::Int(v.into()),
            Scalar::F32(v) => Number::F32(v),
            Scalar::F64(v) => Number::F64(v),
            Scalar::Decimal(v) => Number::Dec(v),
            _ => return None,
        };
        Some(n)
    }

    fn integer(self) -> Option<i128> {
        match self {
            Number::Int(v) => Some(v),
            Number::F32(v) => float_integer(f64::from(v)),
            Number::F64(v) => float_integer(v),
            Number::Dec(d) => {
                if !d.fract().is_zero() {
                    return None;
                }
                d.to_i64()
                    .map(i128::from)
                    .or_else(|| d.to_u64().map(i128::from))
            }
        }
    }

    fn float(self) -> Option<f64> {
        match self {
            Number::Int(v) => Some(v as f64),
            Number::F32(v) => Some(f64::from(v)),
            Number::F64(v) => Some(v),
            Number::Dec(d) => d.to_f64(),
        }
    }

    fn decimal(self) -> Option<Decimal> {
        match self {
            Number::Int(v) => i64::try_from(v)
                .ok()
                .map(Decimal::from)
                .or_else(|| u64::try_from(v).ok().map(Decimal::from)),
            Number::F32(v) => Decimal::from_f32(v),
            Number::F64(v) => Decimal::from_f64(v),
            Number::Dec(d) => Some(d),
        }
    }

    fn to_kind(self, target: ScalarKind) -> Option<Scalar> {
        match target {
            ScalarKind::I8 => self.integer().and_then(|v| v.try_into().ok()).map(Scalar::I8),
            ScalarKind::I16 => self.integer().and_then(|v| v.try_into().ok()).map(Scalar::I16),
            ScalarKind::I32 => self.integer().and_then(|v| v.try_into().ok()).map(Scalar::I32),
            ScalarKind::I64 => self.integer().and_then(|v| v.try_into().ok()).map(Scalar::I64),
            ScalarKind::U8 => self.integer().and_then(|v| v.try_into().ok()).map(Scalar::U8),
            ScalarKind::U16 => self.integer().and_then(|v| v.try_into().ok()).map(Scalar::U16),
            ScalarKind::U32 => self.integer().and_then(|v| v.try_into().ok()).map(Scalar::U32),
            ScalarKind::U64 => self.integer().and_then(|v| v.try_into().ok()).map(Scalar::U64),
            ScalarKind::F32 => self
                .float()
                .filter(|v| v.is_nan() || v.abs() <= f64::from(f32::MAX))
                .map(|v| Scalar::F32(v as f32)),
            ScalarKind::F64 => self.float().map(Scalar::F64),
            ScalarKind::Decimal => self.decimal().map(Scalar::Decimal),
            ScalarKind::String => Some(Scalar::String(self.render())),
            _ => None,
        }
    }

    fn render(self) -> String {
        match self {
            Number::Int(v) => v.to_string(),
            Number::F32(v) => v.to_string(),
            Number::F64(v) => v.to_string(),
            Number::Dec(d) => d.to_string(),
        }
    }
}

fn float_integer(v: f64) -> Option<i128> {
    // Anything the widest integer column (u64/i64) can hold fits in i128.
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 2f64.powi(64) {
        Some(v as i128)
    } else {
        None
    }
}

fn parse_as(s: &str, target: ScalarKind) -> Option<Scalar> {
    let s = s.trim();
    match target {
        ScalarKind::Bool => s.parse().ok().map(Scalar::Bool),
        ScalarKind::I8 => s.parse().ok().map(Scalar::I8),
        ScalarKind::I16 => s.parse().ok().map(Scalar::I16),
        ScalarKind::I32 => s.parse().ok().map(Scalar::I32),
        ScalarKind::I64 => s.parse().ok().map(Scalar::I64),
        ScalarKind::U8 => s.parse().ok().map(Scalar::U8),
        ScalarKind::U16 => s.parse().ok().map(Scalar::U16),
        ScalarKind::U32 => s.parse().ok().map(Scalar::U32),
        ScalarKind::U64 => s.parse().ok().map(Scalar::U64),
        ScalarKind::F32 => s.parse().ok().map(Scalar::F32),
        ScalarKind::F64 => s.parse().ok().map(Scalar::F64),
        ScalarKind::Decimal => Decimal::from_str(s).ok().map(Scalar::Decimal),
        ScalarKind::Char => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Scalar::Char(c)),
                _ => None,
            }
        }
        ScalarKind::DateTime => parse_naive(s).map(Scalar::DateTime),
        ScalarKind::DateTimeOffset => DateTime::parse_from_rfc3339(s)
            .ok()
            .or_else(|| parse_naive(s).map(|dt| naive_as_utc(&dt)))
            .map(Scalar::DateTimeOffset),
        ScalarKind::Uuid => Uuid::parse_str(s).ok().map(Scalar::Uuid),
        ScalarKind::String | ScalarKind::Custom(_) => None,
    }
}

/// Accepts `2010-01-01T10:00:00`, `2010-01-01 10:00:00` and bare dates.
fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
