//! In-memory query target.
//!
//! `MemoryQuery` collects clauses and evaluates them against a borrowed slice
//! of entities with [`Clause::matches`], so filters can be checked without a
//! database.

use super::FilterTarget;
use crate::filter::{Clause, FilterEntity};

/// A lazily-evaluated filter over `rows`.
#[derive(Debug)]
pub struct MemoryQuery<'a, E> {
    rows: &'a [E],
    clauses: Vec<Clause>,
}

impl<'a, E: FilterEntity> MemoryQuery<'a, E> {
    pub fn new(rows: &'a [E]) -> Self {
        Self {
            rows,
            clauses: Vec::new(),
        }
    }

    /// Clauses accumulated so far, in application order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Rows satisfying every clause, in their original order.
    pub fn iter(&self) -> impl Iterator<Item = &'a E> + '_ {
        self.rows
            .iter()
            .filter(move |row| self.clauses.iter().all(|clause| clause.matches(*row)))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn to_vec(&self) -> Vec<&'a E> {
        self.iter().collect()
    }
}

impl<E> Clone for MemoryQuery<'_, E> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            clauses: self.clauses.clone(),
        }
    }
}

impl<E: FilterEntity> FilterTarget for MemoryQuery<'_, E> {
    type Entity = E;

    fn and_clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::PropertyDef;
    use crate::value::Scalar;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: i32,
        tag: Option<String>,
    }

    impl FilterEntity for Item {
        fn table_name() -> &'static str {
            "items"
        }

        fn properties() -> &'static [PropertyDef] {
            const PROPERTIES: &[PropertyDef] = &[
                PropertyDef::of::<i32>("Id", "id"),
                PropertyDef::of::<Option<String>>("Tag", "tag"),
            ];
            PROPERTIES
        }

        fn property_value(&self, name: &str) -> Option<Scalar> {
            match name {
                "Id" => Some(Scalar::I32(self.id)),
                "Tag" => self.tag.clone().map(Scalar::String),
                _ => None,
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 1, tag: Some("a".into()) },
            Item { id: 2, tag: None },
            Item { id: 3, tag: Some("b".into()) },
        ]
    }

    #[test]
    fn test_no_clauses_returns_all_rows() {
        let rows = items();
        let query = MemoryQuery::new(&rows);
        assert_eq!(query.count(), 3);
        assert!(query.clauses().is_empty());
    }

    #[test]
    fn test_clauses_are_conjoined() {
        let rows = items();
        let [id, tag] = Item::properties() else {
            panic!("expected two properties");
        };
        let query = MemoryQuery::new(&rows)
            .and_clause(Clause::In {
                property: id,
                values: vec![Some(Scalar::I32(1)), Some(Scalar::I32(2))],
                not_null_guard: false,
            })
            .and_clause(Clause::Equals {
                property: tag,
                value: Scalar::String("a".into()),
            });

        assert_eq!(query.to_vec(), vec![&rows[0]]);
    }
}
