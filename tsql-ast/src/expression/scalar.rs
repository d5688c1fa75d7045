use crate::query::QueryExpression;
use crate::types::{DataType, Literal, MultiPartIdentifier};

/// A value-producing expression: the "Primary" production and everything
/// built on top of it.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum ScalarExpression {
    /// A literal value; `literal_type` duplicates the variant tag as a
    /// string for JSON parity.
    Literal(Literal),
    /// A dotted column reference, e.g. `a`, `t.a`, `db.dbo.t.a`.
    ColumnReference(MultiPartIdentifier),
    /// A `@name` local variable reference.
    Variable(String),
    /// A `@@name` system function/global variable reference (`@@ROWCOUNT`,
    /// `@@IDENTITY`, ...).
    GlobalVariable(String),
    /// A unary `+`/`-` applied recursively onto a primary expression.
    Unary {
        operator: UnaryOperator,
        operand: Box<ScalarExpression>,
    },
    /// A binary arithmetic/shift expression.
    Binary {
        operator: BinaryOperator,
        left: Box<ScalarExpression>,
        right: Box<ScalarExpression>,
    },
    /// A parenthesized scalar expression, kept distinct from its inner
    /// expression so the JSON projector can emit `ParenthesisExpression`.
    Parenthesis(Box<ScalarExpression>),
    /// A parenthesized `SELECT` used in expression position.
    ScalarSubquery(Box<QueryExpression>),
    /// A function call, e.g. `COUNT(*)`, `CONVERT(INT, x)`, `dbo.f(a, b)`.
    FunctionCall(FunctionCall),
    /// `CASE WHEN ... THEN ... [ELSE ...] END`.
    SearchedCase(SearchedCaseExpression),
    /// `CASE input WHEN ... THEN ... [ELSE ...] END`.
    SimpleCase(SimpleCaseExpression),
    /// `CAST`/`CONVERT` target-type expression, kept distinct from an
    /// ordinary function call since it carries a `DataType` rather than a
    /// plain argument list.
    Cast {
        target_type: DataType,
        expression: Box<ScalarExpression>,
    },
}

/// `+x` / `-x`.
#[doc(hidden)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[doc(hidden)]
pub enum UnaryOperator {
    Positive,
    Negative,
}

/// The arithmetic and shift operators available at scalar-expression
/// precedence.
#[doc(hidden)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[doc(hidden)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    LeftShift,
    RightShift,
}

/// A scalar function invocation.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct FunctionCall {
    pub name: MultiPartIdentifier,
    pub parameters: Vec<ScalarExpression>,
    /// `true` for `COUNT(*)`/`FOO(*)`-shaped calls; `parameters` is empty
    /// in that case.
    pub is_star: bool,
}

/// One `WHEN condition THEN result` arm of a searched `CASE`.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct SearchedWhenClause {
    pub when_expression: super::boolean::BooleanExpression,
    pub then_expression: ScalarExpression,
}

/// `CASE WHEN b1 THEN e1 [WHEN b2 THEN e2 ...] [ELSE ee] END`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct SearchedCaseExpression {
    pub when_clauses: Vec<SearchedWhenClause>,
    pub else_expression: Option<Box<ScalarExpression>>,
}

/// One `WHEN match THEN result` arm of a simple `CASE`.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct SimpleWhenClause {
    pub when_expression: ScalarExpression,
    pub then_expression: ScalarExpression,
}

/// `CASE input WHEN m1 THEN e1 ... [ELSE ee] END`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct SimpleCaseExpression {
    pub input_expression: Box<ScalarExpression>,
    pub when_clauses: Vec<SimpleWhenClause>,
    pub else_expression: Option<Box<ScalarExpression>>,
}
