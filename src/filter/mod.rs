//! Filter objects, entities, and the engine that turns one into predicates on
//! the other.
//!
//! A filter object exposes named values ([`FilterObject`]); an entity exposes
//! named, typed properties ([`FilterEntity`]). Each filter value whose name
//! matches an entity property (ignoring case) becomes one [`Clause`]:
//!
//! | filter value                  | clause                                      |
//! |-------------------------------|---------------------------------------------|
//! | scalar                        | `column = value`                            |
//! | collection of one item        | `column = item`                             |
//! | collection                    | `column IN (items)`                         |
//! | [`Range`]                     | `column >(=) min AND column <(=) max`       |
//! | `None` / JSON `null`          | nothing                                     |
//!
//! Clauses are AND-ed onto a [`FilterTarget`](crate::query::FilterTarget).

pub mod clause;
pub mod engine;
pub mod entity;
pub mod object;
pub mod range;
pub mod registry;

#[doc(inline)]
pub use clause::{Bound, Clause, ClauseKind};
#[doc(inline)]
pub use engine::{filter, FilterExt, Filterer};
#[doc(inline)]
pub use entity::{FilterEntity, PropertyDef};
#[doc(inline)]
pub use object::{Collection, FilterArg, FilterObject, FilterProperty, IntoFilterArg};
#[doc(inline)]
pub use range::{Range, RangeArg, RangeBound};
#[doc(inline)]
pub use registry::{BoundBuilder, ScalarRegistry};
