use crate::expression::ScalarExpression;
use crate::types::{DataType, SchemaObjectName};

/// One `name = value` pair inside a `WITH (...)` option block, with `name`
/// already canonicalized per the data-type/option table (e.g.
/// `FILLFACTOR` -> `FillFactor`).
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct WithOption {
    pub name: String,
    pub value: Option<ScalarExpression>,
}

/// Whether a column allows `NULL`, kept as a plain boolean on the column
/// definition.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct NullableConstraintDefinition {
    pub nullable: bool,
}

/// `IDENTITY [(seed, increment)]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct IdentityOptions {
    pub seed: Option<ScalarExpression>,
    pub increment: Option<ScalarExpression>,
}

/// A single column of a `CREATE TABLE`/`ALTER TABLE ... ADD`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct ColumnDefinition {
    pub column_name: String,
    pub data_type: DataType,
    pub nullable: Option<NullableConstraintDefinition>,
    pub identity: Option<IdentityOptions>,
    pub constraints: Vec<ConstraintDefinition>,
}

/// A table- or column-level constraint.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum ConstraintDefinition {
    PrimaryKey {
        name: Option<String>,
        columns: Vec<String>,
        clustered: Option<bool>,
    },
    Unique {
        name: Option<String>,
        columns: Vec<String>,
        clustered: Option<bool>,
    },
    ForeignKey {
        name: Option<String>,
        columns: Vec<String>,
        referenced_table: SchemaObjectName,
        referenced_columns: Vec<String>,
    },
    Check {
        name: Option<String>,
        expression: crate::expression::BooleanExpression,
    },
    Default {
        name: Option<String>,
        expression: ScalarExpression,
        column: Option<String>,
    },
}

/// `CREATE TABLE name (column_or_constraint, ...) [WITH (...)]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateTableStatement {
    pub schema_object_name: SchemaObjectName,
    pub columns: Vec<ColumnDefinition>,
    pub constraints: Vec<ConstraintDefinition>,
    pub options: Vec<WithOption>,
}

/// One `ALTER TABLE` action.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum AlterTableAction {
    AddColumns(Vec<ColumnDefinition>),
    AddConstraint(ConstraintDefinition),
    DropColumn(String),
    DropConstraint(String),
    AlterColumn(ColumnDefinition),
}

/// `ALTER TABLE name action`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct AlterTableStatement {
    pub schema_object_name: SchemaObjectName,
    pub action: AlterTableAction,
}

/// `DROP TABLE [IF EXISTS] name [, name ...]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropTableStatement {
    pub objects: Vec<SchemaObjectName>,
    pub is_if_exists: bool,
}

/// `CREATE VIEW name [(columns)] [WITH (...)] AS select [WITH CHECK OPTION]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateViewStatement {
    pub schema_object_name: SchemaObjectName,
    pub columns: Vec<String>,
    pub select_statement: Box<crate::statement::dml::SelectStatement>,
    pub with_check_option: bool,
}

/// `ALTER VIEW ...`, same shape as [`CreateViewStatement`].
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct AlterViewStatement {
    pub schema_object_name: SchemaObjectName,
    pub columns: Vec<String>,
    pub select_statement: Box<crate::statement::dml::SelectStatement>,
    pub with_check_option: bool,
}

/// `DROP VIEW [IF EXISTS] name [, name ...]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropViewStatement {
    pub objects: Vec<SchemaObjectName>,
    pub is_if_exists: bool,
}

/// `CREATE SCHEMA name [AUTHORIZATION owner]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateSchemaStatement {
    pub name: String,
    pub authorization: Option<String>,
}

/// `DROP SCHEMA [IF EXISTS] name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropSchemaStatement {
    pub name: String,
    pub is_if_exists: bool,
}

/// One parameter of a procedure or function.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct ProcedureParameter {
    pub variable_name: String,
    pub data_type: DataType,
    pub default_value: Option<ScalarExpression>,
    pub is_output: bool,
    pub is_readonly: bool,
}

/// `CREATE/ALTER PROC[EDURE] name [params] [WITH options] AS body_statements`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct ProcedureStatementBody {
    pub schema_object_name: SchemaObjectName,
    pub parameters: Vec<ProcedureParameter>,
    pub options: Vec<WithOption>,
    pub statements: Vec<crate::statement::Statement>,
}

#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum CreateProcedureStatement {
    Create(ProcedureStatementBody),
    Alter(ProcedureStatementBody),
}

/// What a scalar/table-valued function returns.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum FunctionReturnType {
    Scalar(DataType),
    Table,
    InlineTable,
}

/// `CREATE/ALTER FUNCTION name (params) RETURNS return_type AS body`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateFunctionStatement {
    pub schema_object_name: SchemaObjectName,
    pub parameters: Vec<ProcedureParameter>,
    pub returns: FunctionReturnType,
    pub statements: Vec<crate::statement::Statement>,
    pub is_alter: bool,
}

/// The event(s) a `DML` trigger fires on.
#[doc(hidden)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[doc(hidden)]
pub enum TriggerAction {
    Insert,
    Update,
    Delete,
}

/// `CREATE/ALTER TRIGGER name ON table FOR actions AS body`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateTriggerStatement {
    pub schema_object_name: SchemaObjectName,
    pub table_name: SchemaObjectName,
    pub actions: Vec<TriggerAction>,
    pub is_instead_of: bool,
    pub statements: Vec<crate::statement::Statement>,
    pub is_alter: bool,
}

/// `CREATE [UNIQUE] [CLUSTERED|NONCLUSTERED] INDEX name ON table (cols) [WITH (...)]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateIndexStatement {
    pub name: String,
    pub table: SchemaObjectName,
    pub columns: Vec<String>,
    pub unique: bool,
    pub clustered: Option<bool>,
    pub options: Vec<WithOption>,
}

/// `DROP INDEX [IF EXISTS] name ON table`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropIndexStatement {
    pub name: String,
    pub table: SchemaObjectName,
    pub is_if_exists: bool,
}

/// `CREATE ROLE name [AUTHORIZATION owner]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateRoleStatement {
    pub name: String,
    pub authorization: Option<String>,
}

/// `DROP ROLE [IF EXISTS] name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropRoleStatement {
    pub name: String,
    pub is_if_exists: bool,
}

/// `CREATE SEQUENCE name [AS data_type] [START WITH n] [INCREMENT BY n]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateSequenceStatement {
    pub schema_object_name: SchemaObjectName,
    pub data_type: Option<DataType>,
    pub start_with: Option<ScalarExpression>,
    pub increment_by: Option<ScalarExpression>,
}

/// `DROP SEQUENCE [IF EXISTS] name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropSequenceStatement {
    pub schema_object_name: SchemaObjectName,
    pub is_if_exists: bool,
}

/// `CREATE SYNONYM name FOR base_object_name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateSynonymStatement {
    pub schema_object_name: SchemaObjectName,
    pub for_name: SchemaObjectName,
}

/// `DROP SYNONYM [IF EXISTS] name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropSynonymStatement {
    pub schema_object_name: SchemaObjectName,
    pub is_if_exists: bool,
}

/// `CREATE USER name [FOR LOGIN login] [WITH DEFAULT_SCHEMA = schema]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateUserStatement {
    pub name: String,
    pub login: Option<String>,
    pub default_schema: Option<String>,
}

/// `DROP USER [IF EXISTS] name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropUserStatement {
    pub name: String,
    pub is_if_exists: bool,
}

/// `CREATE DEFAULT name AS expression`, a bound default object (legacy
/// T-SQL, distinct from an inline column `DEFAULT` constraint).
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateDefaultStatement {
    pub schema_object_name: SchemaObjectName,
    pub expression: ScalarExpression,
}

/// `CREATE RULE name AS boolean_expression`, a bound rule object.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateRuleStatement {
    pub schema_object_name: SchemaObjectName,
    pub expression: crate::expression::BooleanExpression,
}

/// `DROP` over a bound `DEFAULT` or `RULE` object, or any of the generic
/// long-tail kinds.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropBoundObjectStatement {
    pub object_kind: String,
    pub schema_object_name: SchemaObjectName,
    pub is_if_exists: bool,
}

/// A fallback shape for `CREATE` over an object kind this parser doesn't
/// model with a dedicated node: credentials, master keys, search property
/// lists, XML schema collections, contracts, partition schemes, queues,
/// aggregates, columnstore indexes, remote service bindings, server roles,
/// availability groups, federations, external languages/libraries
/// node. `object_kind` carries the compound keyword
/// sequence that introduced the statement (e.g. `"XML SCHEMA COLLECTION"`,
/// `"DATABASE SCOPED CREDENTIAL"`), canonicalized to upper-case
/// space-separated words; `options` holds any trailing `WITH (...)` block.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CreateObjectStatement {
    pub object_kind: String,
    pub schema_object_name: Option<SchemaObjectName>,
    pub options: Vec<WithOption>,
}

/// The `ALTER` counterpart of [`CreateObjectStatement`].
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct AlterObjectStatement {
    pub object_kind: String,
    pub schema_object_name: Option<SchemaObjectName>,
    pub options: Vec<WithOption>,
}

/// The `DROP` counterpart of [`CreateObjectStatement`].
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropObjectStatement {
    pub object_kind: String,
    pub schema_object_name: Option<SchemaObjectName>,
    pub is_if_exists: bool,
}

/// `ALTER SCHEMA name TRANSFER object_name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct AlterSchemaStatement {
    pub name: String,
    pub transfer: SchemaObjectName,
}

/// One `ALTER ROLE` action.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum AlterRoleAction {
    AddMember(String),
    DropMember(String),
    Rename(String),
}

/// `ALTER ROLE name action`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct AlterRoleStatement {
    pub name: String,
    pub action: AlterRoleAction,
}

/// `ALTER SEQUENCE name [RESTART [WITH n]] [INCREMENT BY n]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct AlterSequenceStatement {
    pub schema_object_name: SchemaObjectName,
    pub restart_with: Option<ScalarExpression>,
    pub increment_by: Option<ScalarExpression>,
}

/// `ALTER SYNONYM name FOR base_object_name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct AlterSynonymStatement {
    pub schema_object_name: SchemaObjectName,
    pub for_name: SchemaObjectName,
}

/// `ALTER USER name WITH option = value [, ...]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct AlterUserStatement {
    pub name: String,
    pub options: Vec<WithOption>,
}

/// `ALTER DEFAULT name AS expression`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct AlterDefaultStatement {
    pub schema_object_name: SchemaObjectName,
    pub expression: ScalarExpression,
}

/// `ALTER RULE name AS boolean_expression`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct AlterRuleStatement {
    pub schema_object_name: SchemaObjectName,
    pub expression: crate::expression::BooleanExpression,
}

/// One `ALTER INDEX` action.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[doc(hidden)]
pub enum AlterIndexAction {
    Rebuild,
    Disable,
    Reorganize,
}

/// `ALTER INDEX name ON table action`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct AlterIndexStatement {
    pub name: String,
    pub table: SchemaObjectName,
    pub action: AlterIndexAction,
}

/// `DROP PROC[EDURE] [IF EXISTS] name [, name ...]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropProcedureStatement {
    pub objects: Vec<SchemaObjectName>,
    pub is_if_exists: bool,
}

/// `DROP FUNCTION [IF EXISTS] name [, name ...]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropFunctionStatement {
    pub objects: Vec<SchemaObjectName>,
    pub is_if_exists: bool,
}

/// `DROP TRIGGER [IF EXISTS] name [, name ...]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DropTriggerStatement {
    pub objects: Vec<SchemaObjectName>,
    pub is_if_exists: bool,
}
