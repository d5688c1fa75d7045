//! `ScalarExpression` / `BooleanExpression` projection.

use serde_json::Value;
use tsql_ast::expression::{
    BinaryOperator, BooleanBinaryOperator, BooleanExpression, ComparisonOperator, FunctionCall, ScalarExpression,
    SearchedCaseExpression, SearchedWhenClause, SimpleCaseExpression, SimpleWhenClause, UnaryOperator,
};

use crate::builder::ObjectBuilder;
use crate::ident::multi_part_identifier;
use crate::query::query_expression;
use crate::types::{data_type, literal};

pub(crate) fn scalar_expression(expression: &ScalarExpression) -> Value {
    match expression {
        ScalarExpression::Literal(value) => literal(value),
        ScalarExpression::ColumnReference(name) => ObjectBuilder::new("ColumnReferenceExpression")
            .field("MultiPartIdentifier", multi_part_identifier(name))
            .build(),
        ScalarExpression::Variable(name) => {
            ObjectBuilder::new("VariableReference").field("Name", Value::String(name.clone())).build()
        }
        ScalarExpression::GlobalVariable(name) => {
            ObjectBuilder::new("GlobalVariableExpression").field("Name", Value::String(name.clone())).build()
        }
        ScalarExpression::Unary { operator, operand } => ObjectBuilder::new("UnaryExpression")
            .field("UnaryExpressionType", Value::String(unary_operator_str(*operator).to_string()))
            .field("Expression", scalar_expression(operand))
            .build(),
        ScalarExpression::Binary { operator, left, right } => ObjectBuilder::new("BinaryExpression")
            .field("BinaryExpressionType", Value::String(binary_operator_str(*operator).to_string()))
            .field("FirstExpression", scalar_expression(left))
            .field("SecondExpression", scalar_expression(right))
            .build(),
        ScalarExpression::Parenthesis(inner) => {
            ObjectBuilder::new("ParenthesisExpression").field("Expression", scalar_expression(inner)).build()
        }
        ScalarExpression::ScalarSubquery(query) => {
            ObjectBuilder::new("ScalarSubquery").field("QueryExpression", query_expression(query)).build()
        }
        ScalarExpression::FunctionCall(call) => function_call(call),
        ScalarExpression::SearchedCase(case) => searched_case_expression(case),
        ScalarExpression::SimpleCase(case) => simple_case_expression(case),
        ScalarExpression::Cast { target_type, expression } => ObjectBuilder::new("CastCall")
            .field("DataType", data_type(target_type))
            .field("Parameter", scalar_expression(expression))
            .build(),
    }
}

pub(crate) fn function_call(call: &FunctionCall) -> Value {
    ObjectBuilder::new("FunctionCall")
        .field("FunctionName", multi_part_identifier(&call.name))
        .field("IsStar", Value::Bool(call.is_star))
        .arr("Parameters", call.parameters.iter().map(scalar_expression).collect())
        .build()
}

fn searched_case_expression(case: &SearchedCaseExpression) -> Value {
    let when_clauses = case.when_clauses.iter().map(searched_when_clause).collect();
    ObjectBuilder::new("SearchedCaseExpression")
        .arr("WhenClauses", when_clauses)
        .opt("ElseExpression", case.else_expression.as_deref().map(scalar_expression))
        .build()
}

fn searched_when_clause(clause: &SearchedWhenClause) -> Value {
    ObjectBuilder::new("SearchedWhenClause")
        .field("WhenExpression", boolean_expression(&clause.when_expression))
        .field("ThenExpression", scalar_expression(&clause.then_expression))
        .build()
}

fn simple_case_expression(case: &SimpleCaseExpression) -> Value {
    let when_clauses = case.when_clauses.iter().map(simple_when_clause).collect();
    ObjectBuilder::new("SimpleCaseExpression")
        .field("InputExpression", scalar_expression(&case.input_expression))
        .arr("WhenClauses", when_clauses)
        .opt("ElseExpression", case.else_expression.as_deref().map(scalar_expression))
        .build()
}

fn simple_when_clause(clause: &SimpleWhenClause) -> Value {
    ObjectBuilder::new("SimpleWhenClause")
        .field("WhenExpression", scalar_expression(&clause.when_expression))
        .field("ThenExpression", scalar_expression(&clause.then_expression))
        .build()
}

fn unary_operator_str(operator: UnaryOperator) -> &'static str {
    match operator {
        UnaryOperator::Positive => "Positive",
        UnaryOperator::Negative => "Negative",
    }
}

fn binary_operator_str(operator: BinaryOperator) -> &'static str {
    match operator {
        BinaryOperator::Add => "Add",
        BinaryOperator::Subtract => "Subtract",
        BinaryOperator::Multiply => "Multiply",
        BinaryOperator::Divide => "Divide",
        BinaryOperator::Modulo => "Modulo",
        BinaryOperator::LeftShift => "LeftShift",
        BinaryOperator::RightShift => "RightShift",
    }
}

pub(crate) fn boolean_expression(expression: &BooleanExpression) -> Value {
    match expression {
        BooleanExpression::Binary { operator, left, right } => ObjectBuilder::new("BooleanBinaryExpression")
            .field("BinaryExpressionType", Value::String(boolean_operator_str(*operator).to_string()))
            .field("FirstExpression", boolean_expression(left))
            .field("SecondExpression", boolean_expression(right))
            .build(),
        BooleanExpression::Not(inner) => {
            ObjectBuilder::new("BooleanNotExpression").field("Expression", boolean_expression(inner)).build()
        }
        BooleanExpression::Parenthesis(inner) => {
            ObjectBuilder::new("BooleanParenthesisExpression").field("Expression", boolean_expression(inner)).build()
        }
        BooleanExpression::Comparison { operator, left, right } => ObjectBuilder::new("BooleanComparisonExpression")
            .field("ComparisonType", Value::String(comparison_operator_str(*operator).to_string()))
            .field("FirstExpression", scalar_expression(left))
            .field("SecondExpression", scalar_expression(right))
            .build(),
        BooleanExpression::IsNull { expression, is_not } => ObjectBuilder::new("BooleanIsNullExpression")
            .field("Expression", scalar_expression(expression))
            .field("IsNot", Value::Bool(*is_not))
            .build(),
        BooleanExpression::InList { expression, values, is_not } => ObjectBuilder::new("InPredicate")
            .field("Expression", scalar_expression(expression))
            .arr("Values", values.iter().map(scalar_expression).collect())
            .field("IsNot", Value::Bool(*is_not))
            .build(),
        BooleanExpression::InSubquery { expression, subquery, is_not } => ObjectBuilder::new("InPredicate")
            .field("Expression", scalar_expression(expression))
            .field("Subquery", query_expression(subquery))
            .field("IsNot", Value::Bool(*is_not))
            .build(),
        BooleanExpression::Like { expression, pattern, escape, is_not } => ObjectBuilder::new("LikePredicate")
            .field("FirstExpression", scalar_expression(expression))
            .field("SecondExpression", scalar_expression(pattern))
            .opt("EscapeExpression", escape.as_ref().map(scalar_expression))
            .field("IsNot", Value::Bool(*is_not))
            .build(),
        BooleanExpression::Between { expression, low, high, is_not } => ObjectBuilder::new("BooleanTernaryExpression")
            .field("FirstExpression", scalar_expression(expression))
            .field("SecondExpression", scalar_expression(low))
            .field("ThirdExpression", scalar_expression(high))
            .field("IsNot", Value::Bool(*is_not))
            .build(),
        BooleanExpression::Exists(query) => {
            ObjectBuilder::new("ExistsPredicate").field("Subquery", query_expression(query)).build()
        }
    }
}

fn boolean_operator_str(operator: BooleanBinaryOperator) -> &'static str {
    match operator {
        BooleanBinaryOperator::And => "And",
        BooleanBinaryOperator::Or => "Or",
    }
}

fn comparison_operator_str(operator: ComparisonOperator) -> &'static str {
    match operator {
        ComparisonOperator::Equals => "Equals",
        ComparisonOperator::NotEqual => "NotEqual",
        ComparisonOperator::LessThan => "LessThan",
        ComparisonOperator::GreaterThan => "GreaterThan",
        ComparisonOperator::LessOrEqual => "LessOrEqual",
        ComparisonOperator::GreaterOrEqual => "GreaterOrEqual",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsql_ast::types::Literal;

    #[test]
    fn is_null_keeps_is_not_even_when_false() {
        let expr = BooleanExpression::IsNull { expression: ScalarExpression::Literal(Literal::Null), is_not: false };
        let value = boolean_expression(&expr);
        assert_eq!(value["IsNot"], false);
        assert_eq!(value["$type"], "BooleanIsNullExpression");
    }

    #[test]
    fn star_function_call_omits_empty_parameters() {
        let call = FunctionCall {
            name: tsql_ast::types::MultiPartIdentifier::new(vec![std::rc::Rc::new(tsql_ast::types::Identifier::new(
                "COUNT",
                tsql_ast::types::QuoteType::NotQuoted,
            ))]),
            parameters: vec![],
            is_star: true,
        };
        let value = function_call(&call);
        assert!(value.get("Parameters").is_none());
        assert_eq!(value["IsStar"], true);
    }
}
