use crate::expression::{BooleanExpression, FunctionCall, ScalarExpression};
use crate::types::SchemaObjectName;

use super::QueryExpression;

/// A `WITH (hint [, hint ...])` table-hint block trailing a named table
/// reference, e.g. `WITH (NOLOCK)`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct TableHint {
    pub name: String,
}

/// A table-valued source appearing after `FROM`, or composed into a join.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum TableReference {
    /// A schema-qualified table/view name, with optional hints and alias.
    Named {
        name: SchemaObjectName,
        alias: Option<String>,
        hints: Vec<TableHint>,
    },
    /// `@table_variable [AS alias]`.
    Variable {
        name: String,
        alias: Option<String>,
    },
    /// A table-valued function call, e.g. `OPENQUERY(...)`, `dbo.f(x)`.
    FunctionCall {
        call: FunctionCall,
        alias: Option<String>,
    },
    /// `OPENROWSET(provider, connection, query)`.
    OpenRowset {
        provider: String,
        arguments: Vec<ScalarExpression>,
        alias: Option<String>,
    },
    /// A parenthesized derived table: `(SELECT ...) AS alias`.
    Derived {
        query: Box<QueryExpression>,
        alias: Option<String>,
    },
    /// A parenthesized join, used to group join precedence explicitly.
    Parenthesis(Box<TableReference>),
    /// `CROSS JOIN`, requiring no `ON` condition.
    UnqualifiedJoin {
        left: Box<TableReference>,
        right: Box<TableReference>,
        join_type: UnqualifiedJoinType,
    },
    /// `[INNER|LEFT [OUTER]|RIGHT [OUTER]|FULL [OUTER]] JOIN ... ON ...`,
    /// the join kinds that require a search condition.
    QualifiedJoin {
        left: Box<TableReference>,
        right: Box<TableReference>,
        join_type: QualifiedJoinType,
        search_condition: BooleanExpression,
    },
}

/// The only unqualified join kind in T-SQL.
#[doc(hidden)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[doc(hidden)]
pub enum UnqualifiedJoinType {
    CrossJoin,
}

/// Join kinds that require a trailing `ON` predicate.
#[doc(hidden)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[doc(hidden)]
pub enum QualifiedJoinType {
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
}
