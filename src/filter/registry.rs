//! Registry of range bound builders, keyed by bound kind.
//!
//! A bound builder turns a range endpoint into a constant of the target
//! column's kind. Range filters whose bound kind has no builder produce no
//! clause.

use crate::error::FilterError;
use crate::value::{coerce, Scalar, ScalarKind};
use std::collections::HashMap;

/// Builds a comparison constant for a range endpoint.
///
/// Receives the endpoint and the column kind it is compared against.
pub type BoundBuilder = fn(Scalar, ScalarKind) -> Result<Scalar, FilterError>;

/// Map from range bound kind to [`BoundBuilder`].
#[derive(Debug, Clone)]
pub struct ScalarRegistry {
    builders: HashMap<ScalarKind, BoundBuilder>,
}

impl ScalarRegistry {
    /// A registry with no builders; every range is unsupported.
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Register (or replace) the builder for `kind`.
    pub fn register(&mut self, kind: ScalarKind, builder: BoundBuilder) -> &mut Self {
        self.builders.insert(kind, builder);
        self
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, kind: ScalarKind, builder: BoundBuilder) -> Self {
        self.register(kind, builder);
        self
    }

    pub fn unregister(&mut self, kind: ScalarKind) -> Option<BoundBuilder> {
        self.builders.remove(&kind)
    }

    pub fn get(&self, kind: ScalarKind) -> Option<BoundBuilder> {
        self.builders.get(&kind).copied()
    }

    pub fn contains(&self, kind: ScalarKind) -> bool {
        self.builders.contains_key(&kind)
    }

    /// Build the constant for one endpoint.
    ///
    /// # Errors
    ///
    /// `UnsupportedRangeKind` when `kind` is not registered, or whatever the
    /// builder returns.
    pub fn build_bound(
        &self,
        kind: ScalarKind,
        value: Scalar,
        column_kind: ScalarKind,
    ) -> Result<Scalar, FilterError> {
        let builder = self
            .get(kind)
            .ok_or(FilterError::UnsupportedRangeKind(kind))?;
        builder(value, column_kind)
    }
}

/// Registers [`coerce`] for every kind in [`ScalarKind::BOUNDABLE`].
impl Default for ScalarRegistry {
    fn default() -> Self {
        ScalarKind::BOUNDABLE
            .iter()
            .fold(Self::empty(), |registry, kind| registry.with(*kind, coerce))
    }
}
