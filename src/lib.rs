//! # Filterkit
//!
//! Turns loosely typed filter objects into typed query predicates.
//!
//! Every property of a filter object whose name matches a property of the
//! queried entity (case-insensitively) contributes one clause: equality for
//! scalars, `IN` for collections, bounded comparisons for [`Range`]s. Clauses
//! are AND-ed onto a `sea_query` SELECT ([`SelectQuery`]) or evaluated in
//! memory ([`MemoryQuery`]).
//!
//! ```
//! use filterkit::{filter, FilterEntity, FilterObject, Range, SelectQuery};
//! use rust_decimal::Decimal;
//!
//! #[derive(FilterEntity)]
//! #[table_name = "people"]
//! struct Person {
//!     first_name: String,
//!     rating: Option<Decimal>,
//! }
//!
//! #[derive(FilterObject)]
//! struct PersonFilter {
//!     first_name: Option<Vec<String>>,
//!     rating: Option<Range<i32>>,
//! }
//!
//! let by = PersonFilter {
//!     first_name: Some(vec!["John".into(), "Tim".into()]),
//!     rating: Some(Range::half_open(4, 5)),
//! };
//! let (sql, _) = filter(SelectQuery::<Person>::new(), Some(&by)).build();
//! assert!(sql.contains(r#""first_name" IN ($1, $2)"#));
//! assert!(sql.contains(r#""rating" >= $3"#));
//! assert!(sql.contains(r#""rating" < $4"#));
//! ```

extern crate self as filterkit;

pub mod config;
pub mod error;
pub mod filter;
pub mod query;
pub mod value;

pub use config::FilterConfig;
pub use error::FilterError;
pub use filter::{
    filter, Bound, BoundBuilder, Clause, ClauseKind, Collection, FilterArg, FilterEntity, FilterExt,
    FilterObject, FilterProperty, Filterer, IntoFilterArg, PropertyDef, Range, RangeArg, RangeBound,
    ScalarRegistry,
};
pub use query::{FilterTarget, MemoryQuery, SelectQuery};
pub use value::{coerce, ColumnType, Scalar, ScalarKind};

pub use filterkit_derive::{FilterEntity, FilterObject};
