//! Query targets that filter clauses are accumulated onto.
//!
//! - **Select**: a `sea_query` SELECT builder over an entity's table (`SelectQuery`)
//! - **Memory**: an in-memory view over a slice of entities (`MemoryQuery`)
//!
//! # Examples
//!
//! ```
//! use filterkit::{FilterEntity, FilterExt, SelectQuery};
//! use serde_json::json;
//!
//! #[derive(FilterEntity)]
//! struct Person {
//!     first_name: String,
//!     rating: Option<i32>,
//! }
//!
//! let query = SelectQuery::<Person>::new().filter_by(&json!({ "FirstName": ["Tim"] }));
//! assert_eq!(query.to_sql(), r#"SELECT * FROM "person" WHERE "first_name" = 'Tim'"#);
//! ```

use crate::filter::{Clause, FilterEntity};

// SELECT query builder
pub mod select;
#[doc(inline)]
pub use select::SelectQuery;

// In-memory evaluation
pub mod memory;
#[doc(inline)]
pub use memory::MemoryQuery;

/// Anything a [`Clause`] can be AND-ed onto.
///
/// Targets are consumed and returned so clauses chain by value, the same way
/// [`SelectQuery::filter`] does.
pub trait FilterTarget: Sized {
    /// The entity whose properties filter names are matched against
    type Entity: FilterEntity;

    /// Return the target with `clause` conjoined to its existing predicate.
    fn and_clause(self, clause: Clause) -> Self;
}
