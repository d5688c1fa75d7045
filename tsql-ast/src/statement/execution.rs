use crate::expression::ScalarExpression;
use crate::types::SchemaObjectName;

/// One argument of an `EXEC`/`EXECUTE` call, optionally named (`@p = expr`)
/// and optionally marked `OUTPUT`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct ExecuteParameter {
    pub variable_name: Option<String>,
    pub value: ScalarExpression,
    pub is_output: bool,
}

/// Where the return value of `EXEC @status = proc ...` is captured.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct ExecutableEntity {
    pub procedure: SchemaObjectName,
    pub parameters: Vec<ExecuteParameter>,
}

/// `[EXEC|EXECUTE] [@return_status =] procedure [parameters...]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct ExecuteStatement {
    pub return_status_variable: Option<String>,
    pub entity: ExecutableEntity,
}

/// The principal an `EXECUTE AS` switches to.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum ExecuteAsPrincipal {
    Caller,
    Self_,
    Owner,
    Login(String),
    User(String),
}

/// `EXECUTE AS { CALLER | SELF | OWNER | LOGIN = 'x' | USER = 'x' }`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct ExecuteAsStatement {
    pub principal: ExecuteAsPrincipal,
}

/// `REVERT`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct RevertStatement;
