//! `QueryExpression` projection: `SELECT` bodies, set operators, table
//! references, and their clauses.

use serde_json::Value;
use tsql_ast::query::{
    BinaryQueryExpressionType, ExpressionWithSortOrder, FromClause, GroupByClause, GroupByOption, HavingClause,
    IntoClause, OptimizerHint, OptionClause, OrderByClause, QualifiedJoinType, QueryExpression, SelectElement,
    SortOrder, TableHint, TableReference, TopRowFilter, UnqualifiedJoinType, WhereClause,
};
use tsql_ast::statement::SelectStatement;

use crate::builder::ObjectBuilder;
use crate::expression::{boolean_expression, function_call, scalar_expression};
use crate::ident::schema_object_name;

pub(crate) fn select_statement(statement: &SelectStatement) -> Value {
    ObjectBuilder::new("SelectStatement")
        .field("QueryExpression", query_expression(&statement.query_expression))
        .opt("OptionClause", statement.option_clause.as_ref().map(option_clause))
        .build()
}

pub(crate) fn query_expression(query: &QueryExpression) -> Value {
    match query {
        QueryExpression::QuerySpecification(spec) => ObjectBuilder::new("QuerySpecification")
            .field("UniqueRowFilter", Value::String(unique_row_filter_str(spec.distinct, spec.all).to_string()))
            .opt("TopRowFilter", spec.top.as_ref().map(top_row_filter))
            .arr("SelectElements", spec.select_elements.iter().map(select_element).collect())
            .opt("IntoClause", spec.into_clause.as_ref().map(into_clause))
            .opt("FromClause", spec.from_clause.as_ref().map(from_clause))
            .opt("WhereClause", spec.where_clause.as_ref().map(where_clause))
            .opt("GroupByClause", spec.group_by_clause.as_ref().map(group_by_clause))
            .opt("HavingClause", spec.having_clause.as_ref().map(having_clause))
            .opt("OrderByClause", spec.order_by_clause.as_ref().map(order_by_clause))
            .build(),
        QueryExpression::BinaryQueryExpression(binary) => ObjectBuilder::new("BinaryQueryExpression")
            .field(
                "BinaryQueryExpressionType",
                Value::String(binary_query_expression_type_str(binary.binary_query_expression_type).to_string()),
            )
            .field("All", Value::Bool(binary.all))
            .field("FirstQueryExpression", query_expression(&binary.first_query_expression))
            .field("SecondQueryExpression", query_expression(&binary.second_query_expression))
            .opt("OrderByClause", binary.order_by_clause.as_ref().map(order_by_clause))
            .build(),
        QueryExpression::QueryParenthesisExpression(paren) => ObjectBuilder::new("QueryParenthesisExpression")
            .field("QueryExpression", query_expression(&paren.query_expression))
            .build(),
    }
}

fn unique_row_filter_str(distinct: bool, all: bool) -> &'static str {
    if distinct {
        "Distinct"
    } else if all {
        "All"
    } else {
        "NotSpecified"
    }
}

fn binary_query_expression_type_str(kind: BinaryQueryExpressionType) -> &'static str {
    match kind {
        BinaryQueryExpressionType::Union => "Union",
        BinaryQueryExpressionType::Except => "Except",
        BinaryQueryExpressionType::Intersect => "Intersect",
    }
}

fn top_row_filter(top: &TopRowFilter) -> Value {
    ObjectBuilder::new("TopRowFilter")
        .field("Expression", scalar_expression(&top.expression))
        .field("Percent", Value::Bool(top.percent))
        .field("WithTies", Value::Bool(top.with_ties))
        .build()
}

pub(crate) fn select_element(element: &SelectElement) -> Value {
    match element {
        SelectElement::Star { qualifier } => ObjectBuilder::new("SelectStarExpression")
            .opt("Qualifier", qualifier.as_ref().map(schema_object_name))
            .build(),
        SelectElement::Scalar { expression, alias } => ObjectBuilder::new("SelectScalarExpression")
            .field("Expression", scalar_expression(expression))
            .opt("ColumnName", alias.clone().map(Value::String))
            .build(),
    }
}

fn into_clause(clause: &IntoClause) -> Value {
    ObjectBuilder::new("SelectIntoClause").field("Table", schema_object_name(&clause.table)).build()
}

pub(crate) fn from_clause(clause: &FromClause) -> Value {
    ObjectBuilder::new("FromClause")
        .arr("TableReferences", clause.table_references.iter().map(table_reference).collect())
        .build()
}

fn where_clause(clause: &WhereClause) -> Value {
    ObjectBuilder::new("WhereClause").field("SearchCondition", boolean_expression(&clause.search_condition)).build()
}

fn having_clause(clause: &HavingClause) -> Value {
    ObjectBuilder::new("HavingClause").field("SearchCondition", boolean_expression(&clause.search_condition)).build()
}

fn group_by_clause(clause: &GroupByClause) -> Value {
    ObjectBuilder::new("GroupByClause")
        .field("All", Value::Bool(clause.all))
        .arr("GroupingSpecifications", clause.grouping_specifications.iter().map(scalar_expression).collect())
        .field("GroupByOption", Value::String(group_by_option_str(clause.group_by_option).to_string()))
        .build()
}

fn group_by_option_str(option: GroupByOption) -> &'static str {
    match option {
        GroupByOption::None => "None",
        GroupByOption::Rollup => "Rollup",
        GroupByOption::Cube => "Cube",
    }
}

fn order_by_clause(clause: &OrderByClause) -> Value {
    ObjectBuilder::new("OrderByClause")
        .arr("OrderByElements", clause.order_by_elements.iter().map(expression_with_sort_order).collect())
        .build()
}

fn expression_with_sort_order(element: &ExpressionWithSortOrder) -> Value {
    ObjectBuilder::new("ExpressionWithSortOrder")
        .field("Expression", scalar_expression(&element.expression))
        .opt("SortOrder", element.sort_order.map(|order| Value::String(sort_order_str(order).to_string())))
        .build()
}

fn sort_order_str(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Ascending => "Ascending",
        SortOrder::Descending => "Descending",
    }
}

pub(crate) fn option_clause(clause: &OptionClause) -> Value {
    ObjectBuilder::new("OptionClause").arr("Hints", clause.hints.iter().map(optimizer_hint).collect()).build()
}

fn optimizer_hint(hint: &OptimizerHint) -> Value {
    ObjectBuilder::new("OptimizerHint")
        .field("HintKind", Value::String(hint.name.clone()))
        .opt("Value", hint.value.as_ref().map(scalar_expression))
        .build()
}

pub(crate) fn table_reference(table: &TableReference) -> Value {
    match table {
        TableReference::Named { name, alias, hints } => ObjectBuilder::new("NamedTableReference")
            .field("SchemaObject", schema_object_name(name))
            .opt("Alias", alias.clone().map(Value::String))
            .arr("TableHints", hints.iter().map(table_hint).collect())
            .build(),
        TableReference::Variable { name, alias } => ObjectBuilder::new("VariableTableReference")
            .field("Variable", Value::String(name.clone()))
            .opt("Alias", alias.clone().map(Value::String))
            .build(),
        TableReference::FunctionCall { call, alias } => ObjectBuilder::new("SchemaObjectFunctionTableReference")
            .field("FunctionCall", function_call(call))
            .opt("Alias", alias.clone().map(Value::String))
            .build(),
        TableReference::OpenRowset { provider, arguments, alias } => ObjectBuilder::new("OpenRowsetTableReference")
            .field("Provider", Value::String(provider.clone()))
            .arr("Arguments", arguments.iter().map(scalar_expression).collect())
            .opt("Alias", alias.clone().map(Value::String))
            .build(),
        TableReference::Derived { query, alias } => ObjectBuilder::new("QueryDerivedTable")
            .field("QueryExpression", query_expression(query))
            .opt("Alias", alias.clone().map(Value::String))
            .build(),
        TableReference::Parenthesis(inner) => {
            ObjectBuilder::new("ParenthesisTableReference").field("Table", table_reference(inner)).build()
        }
        TableReference::UnqualifiedJoin { left, right, join_type } => ObjectBuilder::new("UnqualifiedJoin")
            .field("FirstTableReference", table_reference(left))
            .field("SecondTableReference", table_reference(right))
            .field("UnqualifiedJoinType", Value::String(unqualified_join_type_str(*join_type).to_string()))
            .build(),
        TableReference::QualifiedJoin { left, right, join_type, search_condition } => {
            ObjectBuilder::new("QualifiedJoin")
                .field("FirstTableReference", table_reference(left))
                .field("SecondTableReference", table_reference(right))
                .field("QualifiedJoinType", Value::String(qualified_join_type_str(*join_type).to_string()))
                .field("SearchCondition", boolean_expression(search_condition))
                .build()
        }
    }
}

fn table_hint(hint: &TableHint) -> Value {
    ObjectBuilder::new("TableHint").field("HintKind", Value::String(hint.name.clone())).build()
}

fn unqualified_join_type_str(join_type: UnqualifiedJoinType) -> &'static str {
    match join_type {
        UnqualifiedJoinType::CrossJoin => "CrossJoin",
    }
}

fn qualified_join_type_str(join_type: QualifiedJoinType) -> &'static str {
    match join_type {
        QualifiedJoinType::Inner => "Inner",
        QualifiedJoinType::LeftOuter => "LeftOuter",
        QualifiedJoinType::RightOuter => "RightOuter",
        QualifiedJoinType::FullOuter => "FullOuter",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsql_ast::query::QuerySpecification;

    #[test]
    fn distinct_and_plain_unique_row_filter_differ() {
        assert_eq!(unique_row_filter_str(true, false), "Distinct");
        assert_eq!(unique_row_filter_str(false, false), "NotSpecified");
    }

    #[test]
    fn query_specification_omits_absent_clauses() {
        let spec = QuerySpecification {
            all: false,
            distinct: false,
            top: None,
            select_elements: vec![],
            into_clause: None,
            from_clause: None,
            where_clause: None,
            group_by_clause: None,
            having_clause: None,
            order_by_clause: None,
        };
        let value = query_expression(&QueryExpression::QuerySpecification(spec));
        assert!(value.get("FromClause").is_none());
        assert!(value.get("SelectElements").is_none());
        assert_eq!(value["UniqueRowFilter"], "NotSpecified");
    }
}
