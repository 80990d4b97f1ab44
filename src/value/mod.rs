//! Value type system for filterkit
//!
//! This module provides the value model the filter engine works in, and the
//! conversions between Rust types, scalars and `sea_query::Value`.
//!
//! ## Items
//!
//! - **`Scalar`** / **`ScalarKind`** - Non-null values and their kind tags
//! - **`ColumnType`** - Maps Rust property types to a kind and nullability
//! - **`coerce`** - Lossless conversion of a scalar to a column's kind

pub mod coerce;
pub mod column_type;
pub mod scalar;

pub use coerce::coerce;
pub use column_type::ColumnType;
pub use scalar::{Scalar, ScalarKind};
