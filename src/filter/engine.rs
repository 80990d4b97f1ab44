//! The query accumulator: folds filter clauses onto a query.

use super::clause::{build, classify, Clause, ClauseKind};
use super::entity::{FilterEntity, PropertyDef, PropertyIndex};
use super::object::{FilterArg, FilterObject};
use super::registry::ScalarRegistry;
use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::query::FilterTarget;
use once_cell::sync::Lazy;
use std::convert::Infallible;

static DEFAULT_FILTERER: Lazy<Filterer> = Lazy::new(Filterer::default);

/// Applies filter objects to queries.
///
/// Holds the bound-builder registry and configuration; a `Filterer` is
/// immutable once built and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Filterer {
    registry: ScalarRegistry,
    config: FilterConfig,
}

impl Filterer {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            registry: ScalarRegistry::default(),
            config,
        }
    }

    /// A filterer configured from `config/filterkit.toml` and the environment.
    pub fn from_env() -> Result<Self, FilterError> {
        Ok(Self::new(FilterConfig::load()?))
    }

    /// The process-wide default filterer used by [`filter`].
    pub fn global() -> &'static Filterer {
        &DEFAULT_FILTERER
    }

    pub fn with_registry(mut self, registry: ScalarRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &ScalarRegistry {
        &self.registry
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Apply `filter` to `query`, skipping properties that cannot be turned
    /// into clauses.
    ///
    /// `None` returns the query unchanged. Skipped properties are logged.
    pub fn apply<Q, F>(&self, query: Q, filter: Option<&F>) -> Q
    where
        Q: FilterTarget,
        F: FilterObject + ?Sized,
    {
        let result = self.fold(query, filter, |name, err| {
            match err {
                FilterError::UnsupportedRangeKind(kind) => {
                    log::warn!("filter property `{name}` skipped: no bound builder registered for {kind}");
                }
                err if self.config.warn_on_skip => {
                    log::warn!("filter property `{name}` skipped: {err}");
                }
                err => {
                    log::debug!("filter property `{name}` skipped: {err}");
                }
            }
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(query) => query,
            Err(never) => match never {},
        }
    }

    /// Apply `filter` to `query`, failing on the first property that cannot
    /// be turned into a clause.
    ///
    /// Unmatched and null-valued properties are still ignored.
    ///
    /// # Errors
    ///
    /// Returns the first coercion, unsupported-value or unsupported-range
    /// error, and `EmptyRange` when `reject_empty_ranges` is set.
    pub fn try_apply<Q, F>(&self, query: Q, filter: Option<&F>) -> Result<Q, FilterError>
    where
        Q: FilterTarget,
        F: FilterObject + ?Sized,
    {
        self.fold(query, filter, |_, err| Err(err))
    }

    /// Clauses `filter` produces against entity `E`, in property order.
    pub fn clauses<E, F>(&self, filter: &F) -> Result<Vec<Clause>, FilterError>
    where
        E: FilterEntity,
        F: FilterObject + ?Sized,
    {
        let index = PropertyIndex::of::<E>();
        let mut clauses = Vec::new();
        for candidate in filter.filter_properties() {
            if let Some(property) = index.get(&candidate.name) {
                if let Some(clause) = self.clause_for(property, candidate.arg)? {
                    clauses.push(clause);
                }
            }
        }
        Ok(clauses)
    }

    fn fold<Q, F, E>(
        &self,
        query: Q,
        filter: Option<&F>,
        mut on_skip: impl FnMut(&str, FilterError) -> Result<(), E>,
    ) -> Result<Q, E>
    where
        Q: FilterTarget,
        F: FilterObject + ?Sized,
    {
        let Some(filter) = filter else {
            return Ok(query);
        };

        let index = PropertyIndex::of::<Q::Entity>();
        let mut query = query;
        for candidate in filter.filter_properties() {
            let Some(property) = index.get(&candidate.name) else {
                log::trace!("filter property `{}` has no matching entity property", candidate.name);
                continue;
            };
            match self.clause_for(property, candidate.arg) {
                Ok(Some(clause)) => query = query.and_clause(clause),
                Ok(None) => {}
                Err(err) => on_skip(&candidate.name[..], err)?,
            }
        }
        Ok(query)
    }

    fn clause_for(
        &self,
        property: &'static PropertyDef,
        arg: FilterArg,
    ) -> Result<Option<Clause>, FilterError> {
        let Some(kind) = classify(property.name, arg, self.config.collapse_single_element)? else {
            return Ok(None);
        };
        let unbounded = matches!(&kind, ClauseKind::Range(r) if r.min.is_none() && r.max.is_none());
        let clause = build(property, kind, &self.registry)?;
        if unbounded {
            if self.config.reject_empty_ranges {
                return Err(FilterError::EmptyRange {
                    property: property.name,
                });
            }
            log::debug!("range on `{}` has no bounds, treated as no constraint", property.name);
        }
        Ok(clause)
    }
}

/// Apply `filter` to `query` with the default [`Filterer`].
///
/// `None` returns `query` unchanged. Properties that match no entity
/// property, hold null, or cannot be turned into a clause are skipped.
///
/// ```
/// use filterkit::{filter, FilterEntity, FilterObject, SelectQuery};
///
/// #[derive(FilterEntity)]
/// #[table_name = "people"]
/// struct Person {
///     first_name: String,
/// }
///
/// #[derive(FilterObject)]
/// struct ByName {
///     first_name: Vec<&'static str>,
/// }
///
/// let query = filter(SelectQuery::<Person>::new(), Some(&ByName { first_name: vec!["Tim"] }));
/// assert!(query.to_sql().contains(r#""first_name" = 'Tim'"#));
/// ```
pub fn filter<Q, F>(query: Q, filter: Option<&F>) -> Q
where
    Q: FilterTarget,
    F: FilterObject + ?Sized,
{
    Filterer::global().apply(query, filter)
}

/// Method-call form of [`filter`] for every query target.
pub trait FilterExt: FilterTarget {
    fn filter_by<F: FilterObject + ?Sized>(self, filter: &F) -> Self {
        Filterer::global().apply(self, Some(filter))
    }
}

impl<Q: FilterTarget> FilterExt for Q {}
