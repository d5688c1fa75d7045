//! Expression nodes: scalar-valued and boolean-valued expressions.

pub mod boolean;
pub mod scalar;

pub use boolean::{BooleanBinaryOperator, BooleanExpression, ComparisonOperator};
pub use scalar::{
    BinaryOperator, FunctionCall, ScalarExpression, SearchedCaseExpression, SearchedWhenClause,
    SimpleCaseExpression, SimpleWhenClause, UnaryOperator,
};
