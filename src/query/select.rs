//! Select query builder for filterable entities.
//!
//! `SelectQuery` wraps a `sea_query::SelectStatement` over the entity's table.
//! Filter clauses land in its WHERE condition; ordering and pagination are
//! available for callers that build on the filtered query.

use super::FilterTarget;
use crate::filter::{Clause, FilterEntity};
use sea_query::{Iden, IntoColumnRef, Order, PostgresQueryBuilder, SelectStatement, Values};
use std::fmt;
use std::marker::PhantomData;

struct TableName(&'static str);

impl Iden for TableName {
    fn unquoted(&self) -> &str {
        self.0
    }
}

/// Query builder for selecting entity rows
///
/// # Example
///
/// ```
/// use filterkit::{FilterEntity, SelectQuery};
/// use sea_query::{Expr, ExprTrait, Order};
///
/// #[derive(FilterEntity)]
/// #[table_name = "users"]
/// struct User {
///     id: i32,
/// }
///
/// let query = SelectQuery::<User>::new()
///     .filter(Expr::col("id").gt(10))
///     .order_by("id", Order::Asc)
///     .limit(10);
/// let (sql, _values) = query.build();
/// assert!(sql.starts_with(r#"SELECT * FROM "users" WHERE "id" > $1"#));
/// ```
pub struct SelectQuery<E>
where
    E: FilterEntity,
{
    pub(crate) query: SelectStatement,
    _phantom: PhantomData<E>,
}

impl<E> SelectQuery<E>
where
    E: FilterEntity,
{
    /// `SELECT * FROM <E::table_name()>` with no conditions.
    pub fn new() -> Self {
        let mut query = SelectStatement::default();
        query.column(sea_query::Asterisk).from(TableName(E::table_name()));
        Self {
            query,
            _phantom: PhantomData,
        }
    }

    /// Add a condition, AND-ed with the existing ones.
    ///
    /// Accepts anything implementing `IntoCondition`: an `Expr`, or a
    /// `Condition` built with `Condition::all()` / `Condition::any()`.
    pub fn filter<F>(mut self, condition: F) -> Self
    where
        F: sea_query::IntoCondition,
    {
        self.query.cond_where(condition.into_condition());
        self
    }

    /// Add an ORDER BY clause
    pub fn order_by<C: IntoColumnRef>(mut self, column: C, order: Order) -> Self {
        self.query.order_by(column, order);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.query.limit(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.query.offset(offset);
        self
    }

    /// The underlying statement, for callers that render or execute it themselves.
    pub fn statement(&self) -> &SelectStatement {
        &self.query
    }

    pub fn into_statement(self) -> SelectStatement {
        self.query
    }

    /// Render as PostgreSQL with `$n` placeholders and the bound values.
    pub fn build(&self) -> (String, Values) {
        self.query.build(PostgresQueryBuilder)
    }

    /// Render as PostgreSQL with values inlined. Meant for logs and tests.
    pub fn to_sql(&self) -> String {
        self.query.to_string(PostgresQueryBuilder)
    }
}

impl<E: FilterEntity> FilterTarget for SelectQuery<E> {
    type Entity = E;

    fn and_clause(self, clause: Clause) -> Self {
        self.filter(clause.to_expr())
    }
}

impl<E: FilterEntity> Default for SelectQuery<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: FilterEntity> Clone for SelectQuery<E> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<E: FilterEntity> fmt::Debug for SelectQuery<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectQuery")
            .field("table", &E::table_name())
            .field("sql", &self.to_sql())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::PropertyDef;
    use crate::value::Scalar;
    use sea_query::{Expr, ExprTrait};

    struct TestEntity;

    impl FilterEntity for TestEntity {
        fn table_name() -> &'static str {
            "test_table"
        }

        fn properties() -> &'static [PropertyDef] {
            const PROPERTIES: &[PropertyDef] = &[
                PropertyDef::of::<i32>("Id", "id"),
                PropertyDef::of::<String>("Name", "name"),
            ];
            PROPERTIES
        }

        fn property_value(&self, _name: &str) -> Option<Scalar> {
            None
        }
    }

    #[test]
    fn test_new_selects_whole_table() {
        let query = SelectQuery::<TestEntity>::new();
        assert_eq!(query.to_sql(), r#"SELECT * FROM "test_table""#);
    }

    #[test]
    fn test_sql_generation_with_parameters() {
        let query = SelectQuery::<TestEntity>::new()
            .filter(Expr::col("id").eq(1))
            .filter(Expr::col("name").eq("test"));

        let (sql, values) = query.build();

        let placeholder_count = sql.matches('$').count();
        assert_eq!(placeholder_count, 2);
        assert_eq!(values.iter().count(), placeholder_count);
    }

    #[test]
    fn test_and_clause_extends_where() {
        let property = &TestEntity::properties()[0];
        let clause = Clause::Equals {
            property,
            value: Scalar::I32(7),
        };
        let query = SelectQuery::<TestEntity>::new().and_clause(clause);
        assert_eq!(query.to_sql(), r#"SELECT * FROM "test_table" WHERE "id" = 7"#);
    }

    #[test]
    fn test_clone_is_independent() {
        let base = SelectQuery::<TestEntity>::new();
        let filtered = base.clone().filter(Expr::col("id").eq(1));
        assert_eq!(base.to_sql(), r#"SELECT * FROM "test_table""#);
        assert_ne!(base.to_sql(), filtered.to_sql());
    }

    #[test]
    fn test_pagination() {
        let (sql, _) = SelectQuery::<TestEntity>::new()
            .order_by("id", Order::Desc)
            .limit(10)
            .offset(20)
            .build();
        assert!(sql.contains(r#"ORDER BY "id" DESC"#));
        assert!(sql.contains("LIMIT"));
        assert!(sql.contains("OFFSET"));
    }
}
