//! Query expressions: `SELECT` bodies and the set operators that combine
//! them.

pub mod clause;
pub mod table_reference;

pub use clause::{
    ExpressionWithSortOrder, FromClause, GroupByClause, GroupByOption, HavingClause, IntoClause,
    OptimizerHint, OptionClause, OrderByClause, SelectElement, SortOrder, TopRowFilter,
    WhereClause,
};
pub use table_reference::{QualifiedJoinType, TableHint, TableReference, UnqualifiedJoinType};

/// `UNION`, `EXCEPT`, or `INTERSECT` combining two query expressions.
#[doc(hidden)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[doc(hidden)]
pub enum BinaryQueryExpressionType {
    Union,
    Except,
    Intersect,
}

/// A `SELECT` with its clauses. By invariant, `order_by` is always `None`
/// when this specification sits directly inside a
/// [`QueryExpression::BinaryQueryExpression`]; the
/// top-level `ORDER BY`, if any, is attached to the outermost binary
/// expression instead.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct QuerySpecification {
    pub all: bool,
    pub distinct: bool,
    pub top: Option<TopRowFilter>,
    pub select_elements: Vec<SelectElement>,
    pub into_clause: Option<IntoClause>,
    pub from_clause: Option<FromClause>,
    pub where_clause: Option<WhereClause>,
    pub group_by_clause: Option<GroupByClause>,
    pub having_clause: Option<HavingClause>,
    pub order_by_clause: Option<OrderByClause>,
}

/// `left <op> [ALL] right`, e.g. `SELECT ... UNION ALL SELECT ...`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct BinaryQueryExpression {
    pub binary_query_expression_type: BinaryQueryExpressionType,
    pub all: bool,
    pub first_query_expression: Box<QueryExpression>,
    pub second_query_expression: Box<QueryExpression>,
    pub order_by_clause: Option<OrderByClause>,
}

/// A parenthesized query expression, e.g. `(SELECT ... UNION SELECT ...)`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct QueryParenthesisExpression {
    pub query_expression: Box<QueryExpression>,
}

/// The sum type for anything that can appear where a `SELECT` body is
/// expected.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum QueryExpression {
    QuerySpecification(QuerySpecification),
    BinaryQueryExpression(BinaryQueryExpression),
    QueryParenthesisExpression(QueryParenthesisExpression),
}
