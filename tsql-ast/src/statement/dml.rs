use crate::expression::{BooleanExpression, ScalarExpression};
use crate::query::{FromClause, OptionClause, QueryExpression, TableReference, WhereClause};
use crate::types::SchemaObjectName;

/// `SELECT ...` as a top-level statement.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct SelectStatement {
    pub query_expression: QueryExpression,
    pub option_clause: Option<OptionClause>,
}

/// One `column = expression` assignment of an `UPDATE` `SET` list.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct SetClause {
    pub column: SchemaObjectName,
    pub new_value: ScalarExpression,
}

/// `UPDATE target SET col = expr [, ...] [FROM ...] [WHERE ...]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct UpdateStatement {
    pub target: TableReference,
    pub set_clauses: Vec<SetClause>,
    pub from_clause: Option<FromClause>,
    pub where_clause: Option<WhereClause>,
}

/// `DELETE [FROM] target [FROM ...] [WHERE ...]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DeleteStatement {
    pub target: TableReference,
    pub from_clause: Option<FromClause>,
    pub where_clause: Option<WhereClause>,
}

/// The row source of an `INSERT`: an explicit `VALUES` list or a `SELECT`.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum InsertSource {
    Values(Vec<Vec<ScalarExpression>>),
    Query(Box<QueryExpression>),
    DefaultValues,
}

/// `INSERT INTO target [(columns...)] source`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct InsertStatement {
    pub target: SchemaObjectName,
    pub columns: Vec<String>,
    pub source: InsertSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Identifier, QuoteType};

    #[test]
    fn insert_values_holds_one_row_per_values_group() {
        let stmt = InsertStatement {
            target: SchemaObjectName::unqualified(Identifier::new("t", QuoteType::NotQuoted)),
            columns: vec!["a".into()],
            source: InsertSource::Values(vec![vec![ScalarExpression::Literal(
                crate::types::Literal::Integer("1".into()),
            )]]),
        };
        match stmt.source {
            InsertSource::Values(rows) => assert_eq!(rows.len(), 1),
            _ => panic!("expected Values"),
        }
    }
}
