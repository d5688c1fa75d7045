//! `CREATE`/`ALTER`/`DROP` over every object kind: tables, views, schemas,
//! procedures, functions, triggers, indexes, roles, sequences, synonyms,
//! users, and the bound `DEFAULT`/`RULE` objects. Object kinds with no
//! dedicated AST node fall back to the generic `CreateObjectStatement`/
//! `AlterObjectStatement`/`DropObjectStatement` shapes.

use tsql_ast::statement::{
    AlterDefaultStatement, AlterIndexAction, AlterIndexStatement, AlterObjectStatement, AlterRoleAction,
    AlterRoleStatement, AlterRuleStatement, AlterSchemaStatement, AlterSequenceStatement, AlterSynonymStatement,
    AlterTableAction, AlterTableStatement, AlterUserStatement, AlterViewStatement, ColumnDefinition,
    ConstraintDefinition, CreateDefaultStatement, CreateFunctionStatement, CreateIndexStatement,
    CreateObjectStatement, CreateProcedureStatement, CreateRoleStatement, CreateRuleStatement, CreateSchemaStatement,
    CreateSequenceStatement, CreateSynonymStatement, CreateTableStatement, CreateTriggerStatement,
    CreateUserStatement, CreateViewStatement, DropBoundObjectStatement, DropFunctionStatement, DropIndexStatement,
    DropObjectStatement, DropProcedureStatement, DropRoleStatement, DropSchemaStatement, DropSequenceStatement,
    DropSynonymStatement, DropTableStatement, DropTriggerStatement, DropUserStatement, DropViewStatement,
    FunctionReturnType, IdentityOptions, NullableConstraintDefinition, ProcedureParameter, ProcedureStatementBody,
    Statement, TriggerAction,
};
use tsql_lexer::{Keyword, Token};

use crate::error::ParserError;

use super::super::Parser;

impl<'a> Parser<'a> {
    pub(super) fn parse_create_statement(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::CREATE)?;
        match &self.current {
            Token::Keyword(Keyword::TABLE) => Ok(Statement::CreateTable(self.parse_create_table_statement()?)),
            Token::Keyword(Keyword::UNIQUE | Keyword::CLUSTERED | Keyword::NONCLUSTERED | Keyword::INDEX) => {
                Ok(Statement::CreateIndex(self.parse_create_index_statement()?))
            }
            Token::Keyword(Keyword::VIEW) => Ok(Statement::CreateView(self.parse_create_view_statement()?)),
            Token::Keyword(Keyword::SCHEMA) => Ok(Statement::CreateSchema(self.parse_create_schema_statement()?)),
            Token::Keyword(Keyword::PROC | Keyword::PROCEDURE) => {
                Ok(Statement::CreateProcedure(CreateProcedureStatement::Create(self.parse_procedure_body()?)))
            }
            Token::Keyword(Keyword::FUNCTION) => {
                Ok(Statement::CreateFunction(self.parse_create_function_statement(false)?))
            }
            Token::Keyword(Keyword::TRIGGER) => {
                Ok(Statement::CreateTrigger(self.parse_create_trigger_statement(false)?))
            }
            Token::Keyword(Keyword::ROLE) => Ok(Statement::CreateRole(self.parse_create_role_statement()?)),
            Token::Keyword(Keyword::SEQUENCE) => {
                Ok(Statement::CreateSequence(self.parse_create_sequence_statement()?))
            }
            Token::Keyword(Keyword::SYNONYM) => Ok(Statement::CreateSynonym(self.parse_create_synonym_statement()?)),
            Token::Keyword(Keyword::USER) => Ok(Statement::CreateUser(self.parse_create_user_statement()?)),
            Token::Keyword(Keyword::DEFAULT) => Ok(Statement::CreateDefault(self.parse_create_default_statement()?)),
            Token::Keyword(Keyword::RULE) => Ok(Statement::CreateRule(self.parse_create_rule_statement()?)),
            _ => Ok(Statement::CreateObject(self.parse_generic_create_object()?)),
        }
    }

    pub(super) fn parse_alter_statement(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::ALTER)?;
        match &self.current {
            Token::Keyword(Keyword::TABLE) => Ok(Statement::AlterTable(self.parse_alter_table_statement()?)),
            Token::Keyword(Keyword::VIEW) => Ok(Statement::AlterView(self.parse_alter_view_statement()?)),
            Token::Keyword(Keyword::PROC | Keyword::PROCEDURE) => {
                Ok(Statement::CreateProcedure(CreateProcedureStatement::Alter(self.parse_procedure_body()?)))
            }
            Token::Keyword(Keyword::FUNCTION) => {
                Ok(Statement::CreateFunction(self.parse_create_function_statement(true)?))
            }
            Token::Keyword(Keyword::TRIGGER) => {
                Ok(Statement::CreateTrigger(self.parse_create_trigger_statement(true)?))
            }
            Token::Keyword(Keyword::SCHEMA) => Ok(Statement::AlterSchema(self.parse_alter_schema_statement()?)),
            Token::Keyword(Keyword::ROLE) => Ok(Statement::AlterRole(self.parse_alter_role_statement()?)),
            Token::Keyword(Keyword::SEQUENCE) => {
                Ok(Statement::AlterSequence(self.parse_alter_sequence_statement()?))
            }
            Token::Keyword(Keyword::SYNONYM) => Ok(Statement::AlterSynonym(self.parse_alter_synonym_statement()?)),
            Token::Keyword(Keyword::USER) => Ok(Statement::AlterUser(self.parse_alter_user_statement()?)),
            Token::Keyword(Keyword::DEFAULT) => Ok(Statement::AlterDefault(self.parse_alter_default_statement()?)),
            Token::Keyword(Keyword::RULE) => Ok(Statement::AlterRule(self.parse_alter_rule_statement()?)),
            Token::Keyword(Keyword::INDEX) => Ok(Statement::AlterIndex(self.parse_alter_index_statement()?)),
            _ => Ok(Statement::AlterObject(self.parse_generic_alter_object()?)),
        }
    }

    pub(super) fn parse_drop_statement(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::DROP)?;
        match &self.current {
            Token::Keyword(Keyword::TABLE) => Ok(Statement::DropTable(self.parse_drop_table_statement()?)),
            Token::Keyword(Keyword::VIEW) => Ok(Statement::DropView(self.parse_drop_view_statement()?)),
            Token::Keyword(Keyword::SCHEMA) => Ok(Statement::DropSchema(self.parse_drop_schema_statement()?)),
            Token::Keyword(Keyword::INDEX) => Ok(Statement::DropIndex(self.parse_drop_index_statement()?)),
            Token::Keyword(Keyword::ROLE) => Ok(Statement::DropRole(self.parse_drop_role_statement()?)),
            Token::Keyword(Keyword::SEQUENCE) => Ok(Statement::DropSequence(self.parse_drop_sequence_statement()?)),
            Token::Keyword(Keyword::SYNONYM) => Ok(Statement::DropSynonym(self.parse_drop_synonym_statement()?)),
            Token::Keyword(Keyword::USER) => Ok(Statement::DropUser(self.parse_drop_user_statement()?)),
            Token::Keyword(Keyword::PROC | Keyword::PROCEDURE) => {
                Ok(Statement::DropProcedure(self.parse_drop_procedure_statement()?))
            }
            Token::Keyword(Keyword::FUNCTION) => Ok(Statement::DropFunction(self.parse_drop_function_statement()?)),
            Token::Keyword(Keyword::TRIGGER) => Ok(Statement::DropTrigger(self.parse_drop_trigger_statement()?)),
            Token::Keyword(Keyword::DEFAULT) => {
                self.advance()?;
                Ok(Statement::DropBoundObject(self.parse_drop_bound_object("DEFAULT")?))
            }
            Token::Keyword(Keyword::RULE) => {
                self.advance()?;
                Ok(Statement::DropBoundObject(self.parse_drop_bound_object("RULE")?))
            }
            _ => Ok(Statement::DropObject(self.parse_generic_drop_object()?)),
        }
    }

    // ---- TABLE ----------------------------------------------------------

    fn parse_create_table_statement(&mut self) -> Result<CreateTableStatement, ParserError> {
        self.expect_keyword(Keyword::TABLE)?;
        let schema_object_name = self.parse_schema_object_name()?;
        self.expect_token(Token::LParen)?;
        let mut columns = Vec::new();
        let mut constraints = Vec::new();
        loop {
            if self.is_table_constraint_start() {
                constraints.push(self.parse_table_constraint()?);
            } else {
                columns.push(self.parse_column_definition()?);
            }
            if !self.eat_token(&Token::Comma)? {
                break;
            }
        }
        self.expect_token(Token::RParen)?;
        let options = self.parse_optional_parenthesized_with_options()?;
        Ok(CreateTableStatement { schema_object_name, columns, constraints, options })
    }

    fn parse_alter_table_statement(&mut self) -> Result<AlterTableStatement, ParserError> {
        self.expect_keyword(Keyword::TABLE)?;
        let schema_object_name = self.parse_schema_object_name()?;
        let action = if self.eat_keyword(Keyword::ADD)? {
            if self.is_table_constraint_start() {
                AlterTableAction::AddConstraint(self.parse_table_constraint()?)
            } else {
                AlterTableAction::AddColumns(self.parse_comma_separated(Self::parse_column_definition)?)
            }
        } else if self.eat_keyword(Keyword::DROP)? {
            if self.eat_keyword(Keyword::COLUMN)? {
                AlterTableAction::DropColumn(self.parse_identifier()?.value)
            } else {
                self.eat_keyword(Keyword::CONSTRAINT)?;
                AlterTableAction::DropConstraint(self.parse_identifier()?.value)
            }
        } else if self.eat_keyword(Keyword::ALTER)? {
            self.eat_keyword(Keyword::COLUMN)?;
            AlterTableAction::AlterColumn(self.parse_column_definition()?)
        } else {
            return Err(self.unexpected("ADD, DROP or ALTER"));
        };
        Ok(AlterTableStatement { schema_object_name, action })
    }

    fn parse_drop_table_statement(&mut self) -> Result<DropTableStatement, ParserError> {
        self.expect_keyword(Keyword::TABLE)?;
        let is_if_exists = self.eat_if_exists()?;
        let objects = self.parse_comma_separated(Self::parse_schema_object_name)?;
        Ok(DropTableStatement { objects, is_if_exists })
    }

    fn is_table_constraint_start(&self) -> bool {
        self.current_is_keyword(Keyword::CONSTRAINT)
            || self.current_is_keyword(Keyword::PRIMARY)
            || self.current_is_keyword(Keyword::UNIQUE)
            || self.current_is_keyword(Keyword::FOREIGN)
            || self.current_is_keyword(Keyword::CHECK)
    }

    fn parse_table_constraint(&mut self) -> Result<ConstraintDefinition, ParserError> {
        let name = if self.eat_keyword(Keyword::CONSTRAINT)? { Some(self.parse_identifier()?.value) } else { None };
        if self.eat_keyword(Keyword::PRIMARY)? {
            self.expect_keyword(Keyword::KEY)?;
            let clustered = self.try_parse_clustered()?;
            let columns = self.parse_column_name_list()?;
            Ok(ConstraintDefinition::PrimaryKey { name, columns, clustered })
        } else if self.eat_keyword(Keyword::UNIQUE)? {
            let clustered = self.try_parse_clustered()?;
            let columns = self.parse_column_name_list()?;
            Ok(ConstraintDefinition::Unique { name, columns, clustered })
        } else if self.eat_keyword(Keyword::FOREIGN)? {
            self.expect_keyword(Keyword::KEY)?;
            let columns = self.parse_column_name_list()?;
            self.expect_keyword(Keyword::REFERENCES)?;
            let referenced_table = self.parse_schema_object_name()?;
            let referenced_columns = self.parse_column_name_list()?;
            Ok(ConstraintDefinition::ForeignKey { name, columns, referenced_table, referenced_columns })
        } else if self.eat_keyword(Keyword::CHECK)? {
            self.expect_token(Token::LParen)?;
            let expression = self.parse_boolean_expression()?;
            self.expect_token(Token::RParen)?;
            Ok(ConstraintDefinition::Check { name, expression })
        } else {
            Err(self.unexpected("PRIMARY KEY, UNIQUE, FOREIGN KEY or CHECK"))
        }
    }

    fn try_parse_clustered(&mut self) -> Result<Option<bool>, ParserError> {
        if self.eat_keyword(Keyword::CLUSTERED)? {
            Ok(Some(true))
        } else if self.eat_keyword(Keyword::NONCLUSTERED)? {
            Ok(Some(false))
        } else {
            Ok(None)
        }
    }

    fn parse_column_definition(&mut self) -> Result<ColumnDefinition, ParserError> {
        let column_name = self.parse_identifier()?.value;
        let data_type = self.parse_data_type()?;

        let identity = if self.eat_keyword(Keyword::IDENTITY)? {
            let (seed, increment) = if self.eat_token(&Token::LParen)? {
                let seed = self.parse_scalar_expression()?;
                self.expect_token(Token::Comma)?;
                let increment = self.parse_scalar_expression()?;
                self.expect_token(Token::RParen)?;
                (Some(seed), Some(increment))
            } else {
                (None, None)
            };
            Some(IdentityOptions { seed, increment })
        } else {
            None
        };

        let nullable = if self.eat_keyword(Keyword::NOT)? {
            self.expect_keyword(Keyword::NULL)?;
            Some(NullableConstraintDefinition { nullable: false })
        } else if self.eat_keyword(Keyword::NULL)? {
            Some(NullableConstraintDefinition { nullable: true })
        } else {
            None
        };

        let mut constraints = Vec::new();
        while self.is_column_constraint_start() {
            constraints.push(self.parse_column_constraint(&column_name)?);
        }

        Ok(ColumnDefinition { column_name, data_type, nullable, identity, constraints })
    }

    fn is_column_constraint_start(&self) -> bool {
        self.current_is_keyword(Keyword::CONSTRAINT)
            || self.current_is_keyword(Keyword::PRIMARY)
            || self.current_is_keyword(Keyword::UNIQUE)
            || self.current_is_keyword(Keyword::CHECK)
            || self.current_is_keyword(Keyword::DEFAULT)
            || self.current_is_keyword(Keyword::REFERENCES)
    }

    fn parse_column_constraint(&mut self, column_name: &str) -> Result<ConstraintDefinition, ParserError> {
        let name = if self.eat_keyword(Keyword::CONSTRAINT)? { Some(self.parse_identifier()?.value) } else { None };
        if self.eat_keyword(Keyword::PRIMARY)? {
            self.expect_keyword(Keyword::KEY)?;
            let clustered = self.try_parse_clustered()?;
            Ok(ConstraintDefinition::PrimaryKey { name, columns: vec![column_name.to_string()], clustered })
        } else if self.eat_keyword(Keyword::UNIQUE)? {
            let clustered = self.try_parse_clustered()?;
            Ok(ConstraintDefinition::Unique { name, columns: vec![column_name.to_string()], clustered })
        } else if self.eat_keyword(Keyword::CHECK)? {
            self.expect_token(Token::LParen)?;
            let expression = self.parse_boolean_expression()?;
            self.expect_token(Token::RParen)?;
            Ok(ConstraintDefinition::Check { name, expression })
        } else if self.eat_keyword(Keyword::DEFAULT)? {
            let expression = self.parse_scalar_expression()?;
            Ok(ConstraintDefinition::Default { name, expression, column: Some(column_name.to_string()) })
        } else if self.eat_keyword(Keyword::REFERENCES)? {
            let referenced_table = self.parse_schema_object_name()?;
            let referenced_columns =
                if self.current_is(&Token::LParen) { self.parse_column_name_list()? } else { Vec::new() };
            Ok(ConstraintDefinition::ForeignKey {
                name,
                columns: vec![column_name.to_string()],
                referenced_table,
                referenced_columns,
            })
        } else {
            Err(self.unexpected("a column constraint"))
        }
    }

    // ---- INDEX ------------------------------------------------------------

    fn parse_create_index_statement(&mut self) -> Result<CreateIndexStatement, ParserError> {
        let unique = self.eat_keyword(Keyword::UNIQUE)?;
        let clustered = self.try_parse_clustered()?;
        self.expect_keyword(Keyword::INDEX)?;
        let name = self.parse_identifier()?.value;
        self.expect_keyword(Keyword::ON)?;
        let table = self.parse_schema_object_name()?;
        let columns = self.parse_column_name_list()?;
        let options = self.parse_optional_parenthesized_with_options()?;
        Ok(CreateIndexStatement { name, table, columns, unique, clustered, options })
    }

    fn parse_drop_index_statement(&mut self) -> Result<DropIndexStatement, ParserError> {
        self.expect_keyword(Keyword::INDEX)?;
        let is_if_exists = self.eat_if_exists()?;
        let name = self.parse_identifier()?.value;
        self.expect_keyword(Keyword::ON)?;
        let table = self.parse_schema_object_name()?;
        Ok(DropIndexStatement { name, table, is_if_exists })
    }

    // ---- VIEW ---------------------------------------------------------

    fn parse_create_view_statement(&mut self) -> Result<CreateViewStatement, ParserError> {
        self.expect_keyword(Keyword::VIEW)?;
        let schema_object_name = self.parse_schema_object_name()?;
        let columns = if self.current_is(&Token::LParen) { self.parse_column_name_list()? } else { Vec::new() };
        self.skip_optional_bare_with_clause()?;
        self.expect_keyword(Keyword::AS)?;
        let select_statement = Box::new(self.parse_select_statement()?);
        let with_check_option = self.parse_optional_view_check_option()?;
        Ok(CreateViewStatement { schema_object_name, columns, select_statement, with_check_option })
    }

    fn parse_alter_view_statement(&mut self) -> Result<AlterViewStatement, ParserError> {
        self.expect_keyword(Keyword::VIEW)?;
        let schema_object_name = self.parse_schema_object_name()?;
        let columns = if self.current_is(&Token::LParen) { self.parse_column_name_list()? } else { Vec::new() };
        self.skip_optional_bare_with_clause()?;
        self.expect_keyword(Keyword::AS)?;
        let select_statement = Box::new(self.parse_select_statement()?);
        let with_check_option = self.parse_optional_view_check_option()?;
        Ok(AlterViewStatement { schema_object_name, columns, select_statement, with_check_option })
    }

    fn parse_optional_view_check_option(&mut self) -> Result<bool, ParserError> {
        if self.eat_keyword(Keyword::WITH)? {
            self.expect_keyword(Keyword::CHECK)?;
            self.expect_keyword(Keyword::OPTION)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn parse_drop_view_statement(&mut self) -> Result<DropViewStatement, ParserError> {
        self.expect_keyword(Keyword::VIEW)?;
        let is_if_exists = self.eat_if_exists()?;
        let objects = self.parse_comma_separated(Self::parse_schema_object_name)?;
        Ok(DropViewStatement { objects, is_if_exists })
    }

    // ---- SCHEMA -------------------------------------------------------

    fn parse_create_schema_statement(&mut self) -> Result<CreateSchemaStatement, ParserError> {
        self.expect_keyword(Keyword::SCHEMA)?;
        let name = self.parse_identifier()?.value;
        let authorization =
            if self.eat_keyword(Keyword::AUTHORIZATION)? { Some(self.parse_identifier()?.value) } else { None };
        Ok(CreateSchemaStatement { name, authorization })
    }

    fn parse_drop_schema_statement(&mut self) -> Result<DropSchemaStatement, ParserError> {
        self.expect_keyword(Keyword::SCHEMA)?;
        let is_if_exists = self.eat_if_exists()?;
        let name = self.parse_identifier()?.value;
        Ok(DropSchemaStatement { name, is_if_exists })
    }

    fn parse_alter_schema_statement(&mut self) -> Result<AlterSchemaStatement, ParserError> {
        self.expect_keyword(Keyword::SCHEMA)?;
        let name = self.parse_identifier()?.value;
        if !self.eat_ident_eq("TRANSFER")? {
            return Err(self.unexpected("TRANSFER"));
        }
        let transfer = self.parse_schema_object_name()?;
        Ok(AlterSchemaStatement { name, transfer })
    }

    // ---- PROCEDURE ------------------------------------------------------

    fn parse_procedure_body(&mut self) -> Result<ProcedureStatementBody, ParserError> {
        self.eat_keyword(Keyword::PROC)?;
        self.eat_keyword(Keyword::PROCEDURE)?;
        let schema_object_name = self.parse_schema_object_name()?;
        let parameters = self.parse_procedure_parameters()?;
        let options = self.parse_optional_procedure_with_options()?;
        self.expect_keyword(Keyword::AS)?;
        let statements = self.parse_statement_list_until_batch_end()?;
        Ok(ProcedureStatementBody { schema_object_name, parameters, options, statements })
    }

    fn parse_procedure_parameters(&mut self) -> Result<Vec<ProcedureParameter>, ParserError> {
        if self.eat_token(&Token::LParen)? {
            let parameters = if self.current_is(&Token::RParen) {
                Vec::new()
            } else {
                self.parse_comma_separated(Self::parse_procedure_parameter)?
            };
            self.expect_token(Token::RParen)?;
            Ok(parameters)
        } else if self.current_is_variable() {
            self.parse_comma_separated(Self::parse_procedure_parameter)
        } else {
            Ok(Vec::new())
        }
    }

    fn current_is_variable(&self) -> bool {
        matches!(&self.current, Token::Ident(ident) if ident.value.starts_with('@'))
    }

    fn parse_procedure_parameter(&mut self) -> Result<ProcedureParameter, ParserError> {
        let variable_name = self.parse_variable_name()?;
        self.eat_keyword(Keyword::AS)?;
        let data_type = self.parse_data_type()?;
        let default_value = if self.eat_token(&Token::Equals)? { Some(self.parse_scalar_expression()?) } else { None };
        let is_output = self.eat_keyword(Keyword::OUTPUT)? || self.eat_ident_eq("OUT")?;
        let is_readonly = self.eat_keyword(Keyword::READONLY)?;
        Ok(ProcedureParameter { variable_name, data_type, default_value, is_output, is_readonly })
    }

    // ---- FUNCTION -------------------------------------------------------

    /// `RETURNS TABLE ... AS RETURN (...)` (inline table-valued function)
    /// differs from the multi-statement table-valued form only in what
    /// immediately follows `AS`, so the distinction is made without
    /// backtracking: assume `Table`, then upgrade to `InlineTable` once the
    /// body turns out to start with a bare `RETURN`.
    fn parse_create_function_statement(&mut self, is_alter: bool) -> Result<CreateFunctionStatement, ParserError> {
        self.expect_keyword(Keyword::FUNCTION)?;
        let schema_object_name = self.parse_schema_object_name()?;
        self.expect_token(Token::LParen)?;
        let parameters =
            if self.current_is(&Token::RParen) { Vec::new() } else { self.parse_comma_separated(Self::parse_procedure_parameter)? };
        self.expect_token(Token::RParen)?;
        self.expect_keyword(Keyword::RETURNS)?;
        let mut returns = if self.eat_keyword(Keyword::TABLE)? {
            FunctionReturnType::Table
        } else {
            FunctionReturnType::Scalar(self.parse_data_type()?)
        };
        self.skip_optional_bare_with_clause()?;
        self.expect_keyword(Keyword::AS)?;
        if matches!(returns, FunctionReturnType::Table) && self.current_is_keyword(Keyword::RETURN) {
            returns = FunctionReturnType::InlineTable;
        }
        let statements = self.parse_statement_list_until_batch_end()?;
        Ok(CreateFunctionStatement { schema_object_name, parameters, returns, statements, is_alter })
    }

    // ---- TRIGGER --------------------------------------------------------

    fn parse_create_trigger_statement(&mut self, is_alter: bool) -> Result<CreateTriggerStatement, ParserError> {
        self.expect_keyword(Keyword::TRIGGER)?;
        let schema_object_name = self.parse_schema_object_name()?;
        self.expect_keyword(Keyword::ON)?;
        let table_name = self.parse_schema_object_name()?;
        self.skip_optional_bare_with_clause()?;
        let is_instead_of = if self.eat_keyword(Keyword::INSTEAD)? {
            self.expect_keyword(Keyword::OF)?;
            true
        } else {
            if !self.eat_keyword(Keyword::FOR)? {
                self.eat_ident_eq("AFTER")?;
            }
            false
        };
        let actions = self.parse_comma_separated(Self::parse_trigger_action)?;
        self.expect_keyword(Keyword::AS)?;
        let statements = self.parse_statement_list_until_batch_end()?;
        Ok(CreateTriggerStatement { schema_object_name, table_name, actions, is_instead_of, statements, is_alter })
    }

    fn parse_trigger_action(&mut self) -> Result<TriggerAction, ParserError> {
        if self.eat_keyword(Keyword::INSERT)? {
            Ok(TriggerAction::Insert)
        } else if self.eat_keyword(Keyword::UPDATE)? {
            Ok(TriggerAction::Update)
        } else if self.eat_keyword(Keyword::DELETE)? {
            Ok(TriggerAction::Delete)
        } else {
            Err(self.unexpected("INSERT, UPDATE or DELETE"))
        }
    }

    // ---- ROLE -----------------------------------------------------------

    fn parse_create_role_statement(&mut self) -> Result<CreateRoleStatement, ParserError> {
        self.expect_keyword(Keyword::ROLE)?;
        let name = self.parse_identifier()?.value;
        let authorization =
            if self.eat_keyword(Keyword::AUTHORIZATION)? { Some(self.parse_identifier()?.value) } else { None };
        Ok(CreateRoleStatement { name, authorization })
    }

    fn parse_drop_role_statement(&mut self) -> Result<DropRoleStatement, ParserError> {
        self.expect_keyword(Keyword::ROLE)?;
        let is_if_exists = self.eat_if_exists()?;
        let name = self.parse_identifier()?.value;
        Ok(DropRoleStatement { name, is_if_exists })
    }

    fn parse_alter_role_statement(&mut self) -> Result<AlterRoleStatement, ParserError> {
        self.expect_keyword(Keyword::ROLE)?;
        let name = self.parse_identifier()?.value;
        let action = if self.eat_keyword(Keyword::ADD)? {
            self.eat_ident_eq("MEMBER")?;
            AlterRoleAction::AddMember(self.parse_identifier()?.value)
        } else if self.eat_keyword(Keyword::DROP)? {
            self.eat_ident_eq("MEMBER")?;
            AlterRoleAction::DropMember(self.parse_identifier()?.value)
        } else if self.eat_keyword(Keyword::WITH)? {
            self.eat_ident_eq("NAME")?;
            self.expect_token(Token::Equals)?;
            AlterRoleAction::Rename(self.parse_identifier()?.value)
        } else {
            return Err(self.unexpected("ADD MEMBER, DROP MEMBER or WITH NAME"));
        };
        Ok(AlterRoleStatement { name, action })
    }

    // ---- SEQUENCE -------------------------------------------------------

    fn parse_create_sequence_statement(&mut self) -> Result<CreateSequenceStatement, ParserError> {
        self.expect_keyword(Keyword::SEQUENCE)?;
        let schema_object_name = self.parse_schema_object_name()?;
        let data_type = if self.eat_keyword(Keyword::AS)? { Some(self.parse_data_type()?) } else { None };
        let start_with = if self.eat_keyword(Keyword::START)? {
            self.expect_keyword(Keyword::WITH)?;
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        let increment_by = if self.eat_keyword(Keyword::INCREMENT)? {
            self.expect_keyword(Keyword::BY)?;
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        Ok(CreateSequenceStatement { schema_object_name, data_type, start_with, increment_by })
    }

    fn parse_drop_sequence_statement(&mut self) -> Result<DropSequenceStatement, ParserError> {
        self.expect_keyword(Keyword::SEQUENCE)?;
        let is_if_exists = self.eat_if_exists()?;
        let schema_object_name = self.parse_schema_object_name()?;
        Ok(DropSequenceStatement { schema_object_name, is_if_exists })
    }

    fn parse_alter_sequence_statement(&mut self) -> Result<AlterSequenceStatement, ParserError> {
        self.expect_keyword(Keyword::SEQUENCE)?;
        let schema_object_name = self.parse_schema_object_name()?;
        let restart_with = if self.eat_ident_eq("RESTART")? {
            if self.eat_keyword(Keyword::WITH)? { Some(self.parse_scalar_expression()?) } else { None }
        } else {
            None
        };
        let increment_by = if self.eat_keyword(Keyword::INCREMENT)? {
            self.expect_keyword(Keyword::BY)?;
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        Ok(AlterSequenceStatement { schema_object_name, restart_with, increment_by })
    }

    // ---- SYNONYM --------------------------------------------------------

    fn parse_create_synonym_statement(&mut self) -> Result<CreateSynonymStatement, ParserError> {
        self.expect_keyword(Keyword::SYNONYM)?;
        let schema_object_name = self.parse_schema_object_name()?;
        self.expect_keyword(Keyword::FOR)?;
        let for_name = self.parse_schema_object_name()?;
        Ok(CreateSynonymStatement { schema_object_name, for_name })
    }

    fn parse_drop_synonym_statement(&mut self) -> Result<DropSynonymStatement, ParserError> {
        self.expect_keyword(Keyword::SYNONYM)?;
        let is_if_exists = self.eat_if_exists()?;
        let schema_object_name = self.parse_schema_object_name()?;
        Ok(DropSynonymStatement { schema_object_name, is_if_exists })
    }

    fn parse_alter_synonym_statement(&mut self) -> Result<AlterSynonymStatement, ParserError> {
        self.expect_keyword(Keyword::SYNONYM)?;
        let schema_object_name = self.parse_schema_object_name()?;
        self.expect_keyword(Keyword::FOR)?;
        let for_name = self.parse_schema_object_name()?;
        Ok(AlterSynonymStatement { schema_object_name, for_name })
    }

    // ---- USER -----------------------------------------------------------

    fn parse_create_user_statement(&mut self) -> Result<CreateUserStatement, ParserError> {
        self.expect_keyword(Keyword::USER)?;
        let name = self.parse_identifier()?.value;
        let login = if self.eat_keyword(Keyword::FOR)? {
            self.expect_keyword(Keyword::LOGIN)?;
            Some(self.parse_identifier()?.value)
        } else {
            None
        };
        let default_schema = if self.eat_keyword(Keyword::WITH)? {
            self.eat_ident_eq("DEFAULT_SCHEMA")?;
            self.expect_token(Token::Equals)?;
            Some(self.parse_identifier()?.value)
        } else {
            None
        };
        Ok(CreateUserStatement { name, login, default_schema })
    }

    fn parse_drop_user_statement(&mut self) -> Result<DropUserStatement, ParserError> {
        self.expect_keyword(Keyword::USER)?;
        let is_if_exists = self.eat_if_exists()?;
        let name = self.parse_identifier()?.value;
        Ok(DropUserStatement { name, is_if_exists })
    }

    fn parse_alter_user_statement(&mut self) -> Result<AlterUserStatement, ParserError> {
        self.expect_keyword(Keyword::USER)?;
        let name = self.parse_identifier()?.value;
        let options =
            if self.eat_keyword(Keyword::WITH)? { self.parse_comma_separated(Self::parse_with_option)? } else { Vec::new() };
        Ok(AlterUserStatement { name, options })
    }

    // ---- DEFAULT / RULE (bound objects) ---------------------------------

    fn parse_create_default_statement(&mut self) -> Result<CreateDefaultStatement, ParserError> {
        self.expect_keyword(Keyword::DEFAULT)?;
        let schema_object_name = self.parse_schema_object_name()?;
        self.expect_keyword(Keyword::AS)?;
        let expression = self.parse_scalar_expression()?;
        Ok(CreateDefaultStatement { schema_object_name, expression })
    }

    fn parse_create_rule_statement(&mut self) -> Result<CreateRuleStatement, ParserError> {
        self.expect_keyword(Keyword::RULE)?;
        let schema_object_name = self.parse_schema_object_name()?;
        self.expect_keyword(Keyword::AS)?;
        let expression = self.parse_boolean_expression()?;
        Ok(CreateRuleStatement { schema_object_name, expression })
    }

    fn parse_drop_bound_object(&mut self, object_kind: &str) -> Result<DropBoundObjectStatement, ParserError> {
        let is_if_exists = self.eat_if_exists()?;
        let schema_object_name = self.parse_schema_object_name()?;
        Ok(DropBoundObjectStatement { object_kind: object_kind.to_string(), schema_object_name, is_if_exists })
    }

    fn parse_alter_default_statement(&mut self) -> Result<AlterDefaultStatement, ParserError> {
        self.expect_keyword(Keyword::DEFAULT)?;
        let schema_object_name = self.parse_schema_object_name()?;
        self.expect_keyword(Keyword::AS)?;
        let expression = self.parse_scalar_expression()?;
        Ok(AlterDefaultStatement { schema_object_name, expression })
    }

    fn parse_alter_rule_statement(&mut self) -> Result<AlterRuleStatement, ParserError> {
        self.expect_keyword(Keyword::RULE)?;
        let schema_object_name = self.parse_schema_object_name()?;
        self.expect_keyword(Keyword::AS)?;
        let expression = self.parse_boolean_expression()?;
        Ok(AlterRuleStatement { schema_object_name, expression })
    }

    // ---- INDEX (ALTER) ----------------------------------------------------

    fn parse_alter_index_statement(&mut self) -> Result<AlterIndexStatement, ParserError> {
        self.expect_keyword(Keyword::INDEX)?;
        let name = self.parse_identifier()?.value;
        self.expect_keyword(Keyword::ON)?;
        let table = self.parse_schema_object_name()?;
        let action = if self.eat_ident_eq("REBUILD")? {
            AlterIndexAction::Rebuild
        } else if self.eat_ident_eq("DISABLE")? {
            AlterIndexAction::Disable
        } else if self.eat_ident_eq("REORGANIZE")? {
            AlterIndexAction::Reorganize
        } else {
            return Err(self.unexpected("REBUILD, DISABLE or REORGANIZE"));
        };
        Ok(AlterIndexStatement { name, table, action })
    }

    // ---- PROCEDURE / FUNCTION / TRIGGER (DROP) -----------------------------

    fn parse_drop_procedure_statement(&mut self) -> Result<DropProcedureStatement, ParserError> {
        if !self.eat_keyword(Keyword::PROC)? {
            self.expect_keyword(Keyword::PROCEDURE)?;
        }
        let is_if_exists = self.eat_if_exists()?;
        let objects = self.parse_comma_separated(Self::parse_schema_object_name)?;
        Ok(DropProcedureStatement { objects, is_if_exists })
    }

    fn parse_drop_function_statement(&mut self) -> Result<DropFunctionStatement, ParserError> {
        self.expect_keyword(Keyword::FUNCTION)?;
        let is_if_exists = self.eat_if_exists()?;
        let objects = self.parse_comma_separated(Self::parse_schema_object_name)?;
        Ok(DropFunctionStatement { objects, is_if_exists })
    }

    fn parse_drop_trigger_statement(&mut self) -> Result<DropTriggerStatement, ParserError> {
        self.expect_keyword(Keyword::TRIGGER)?;
        let is_if_exists = self.eat_if_exists()?;
        let objects = self.parse_comma_separated(Self::parse_schema_object_name)?;
        Ok(DropTriggerStatement { objects, is_if_exists })
    }

    // ---- generic long-tail fallback -------------------------------------

    /// Accumulates the run of keyword tokens introducing an object kind
    /// this parser has no dedicated node for (`XML SCHEMA COLLECTION`,
    /// `DATABASE SCOPED CREDENTIAL`, `PARTITION SCHEME`, `AVAILABILITY
    /// GROUP`, ...), then an optional name and an optional `WITH (...)`
    /// options block.
    fn parse_generic_create_object(&mut self) -> Result<CreateObjectStatement, ParserError> {
        let object_kind = self.consume_object_kind_words()?;
        let schema_object_name =
            if matches!(self.current, Token::Ident(_)) { Some(self.parse_schema_object_name()?) } else { None };
        let options = self.parse_optional_parenthesized_with_options()?;
        Ok(CreateObjectStatement { object_kind, schema_object_name, options })
    }

    fn parse_generic_alter_object(&mut self) -> Result<AlterObjectStatement, ParserError> {
        let object_kind = self.consume_object_kind_words()?;
        let schema_object_name =
            if matches!(self.current, Token::Ident(_)) { Some(self.parse_schema_object_name()?) } else { None };
        let options = self.parse_optional_parenthesized_with_options()?;
        Ok(AlterObjectStatement { object_kind, schema_object_name, options })
    }

    fn parse_generic_drop_object(&mut self) -> Result<DropObjectStatement, ParserError> {
        let object_kind = self.consume_object_kind_words()?;
        let is_if_exists = self.eat_if_exists()?;
        let schema_object_name =
            if matches!(self.current, Token::Ident(_)) { Some(self.parse_schema_object_name()?) } else { None };
        Ok(DropObjectStatement { object_kind, schema_object_name, is_if_exists })
    }

    fn consume_object_kind_words(&mut self) -> Result<String, ParserError> {
        let mut words = Vec::new();
        while let Token::Keyword(keyword) = &self.current {
            if matches!(keyword, Keyword::WITH | Keyword::AS | Keyword::ON | Keyword::FOR | Keyword::IF) {
                break;
            }
            words.push(keyword.as_str().to_string());
            self.advance()?;
        }
        if words.is_empty() {
            return Err(self.unexpected("an object kind"));
        }
        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn create_table_with_inline_constraints() {
        let mut p = Parser::new(
            "TABLE t (id INT IDENTITY(1,1) PRIMARY KEY, name VARCHAR(50) NOT NULL, CONSTRAINT uq UNIQUE (name))",
        )
        .unwrap();
        let stmt = p.parse_create_table_statement().unwrap();
        assert_eq!(stmt.columns.len(), 2);
        assert_eq!(stmt.constraints.len(), 1);
        assert!(stmt.columns[0].identity.is_some());
        assert_eq!(stmt.columns[0].constraints.len(), 1);
    }

    #[test]
    fn alter_table_add_column() {
        let mut p = Parser::new("TABLE t ADD age INT NULL").unwrap();
        let stmt = p.parse_alter_table_statement().unwrap();
        match stmt.action {
            AlterTableAction::AddColumns(cols) => assert_eq!(cols.len(), 1),
            other => panic!("expected AddColumns, got {:?}", other),
        }
    }

    #[test]
    fn create_view_with_check_option() {
        let mut p = Parser::new("VIEW v AS SELECT a FROM t WITH CHECK OPTION").unwrap();
        let stmt = p.parse_create_view_statement().unwrap();
        assert!(stmt.with_check_option);
    }

    #[test]
    fn create_procedure_with_params_and_execute_as() {
        let mut p = Parser::new("CREATE PROCEDURE p @a INT, @b INT OUTPUT WITH EXECUTE AS OWNER AS SELECT 1")
            .unwrap();
        let stmt = p.parse_create_statement().unwrap();
        match stmt {
            Statement::CreateProcedure(CreateProcedureStatement::Create(body)) => {
                assert_eq!(body.parameters.len(), 2);
                assert!(body.parameters[1].is_output);
                assert_eq!(body.options.len(), 1);
            }
            other => panic!("expected CreateProcedure, got {:?}", other),
        }
    }

    #[test]
    fn create_scalar_function() {
        let mut p = Parser::new("FUNCTION f (@a INT) RETURNS INT AS BEGIN RETURN @a END").unwrap();
        let stmt = p.parse_create_function_statement(false).unwrap();
        assert!(matches!(stmt.returns, FunctionReturnType::Scalar(_)));
    }

    #[test]
    fn create_inline_table_valued_function() {
        let mut p = Parser::new("FUNCTION f (@a INT) RETURNS TABLE AS RETURN (SELECT @a AS x)").unwrap();
        let stmt = p.parse_create_function_statement(false).unwrap();
        assert!(matches!(stmt.returns, FunctionReturnType::InlineTable));
    }

    #[test]
    fn create_trigger_instead_of() {
        let mut p = Parser::new("TRIGGER trg ON t INSTEAD OF INSERT, UPDATE AS PRINT 'x'").unwrap();
        let stmt = p.parse_create_trigger_statement(false).unwrap();
        assert!(stmt.is_instead_of);
        assert_eq!(stmt.actions.len(), 2);
    }

    #[test]
    fn drop_table_if_exists_multiple() {
        let mut p = Parser::new("TABLE IF EXISTS t1, t2").unwrap();
        let stmt = p.parse_drop_table_statement().unwrap();
        assert!(stmt.is_if_exists);
        assert_eq!(stmt.objects.len(), 2);
    }

    #[test]
    fn generic_create_object_fallback() {
        let mut p = Parser::new("CREATE XML SCHEMA COLLECTION my_coll AS 'x'").unwrap();
        let stmt = p.parse_create_statement().unwrap();
        match stmt {
            Statement::CreateObject(o) => assert_eq!(o.object_kind, "XML SCHEMA COLLECTION"),
            other => panic!("expected CreateObject, got {:?}", other),
        }
    }

    #[test]
    fn alter_schema_transfer() {
        let mut p = Parser::new("ALTER SCHEMA dbo TRANSFER old.t").unwrap();
        let stmt = p.parse_alter_statement().unwrap();
        match stmt {
            Statement::AlterSchema(s) => assert_eq!(s.name, "dbo"),
            other => panic!("expected AlterSchema, got {:?}", other),
        }
    }

    #[test]
    fn alter_role_add_member() {
        let mut p = Parser::new("ALTER ROLE r ADD MEMBER u").unwrap();
        let stmt = p.parse_alter_statement().unwrap();
        match stmt {
            Statement::AlterRole(s) => assert!(matches!(s.action, AlterRoleAction::AddMember(ref m) if m == "u")),
            other => panic!("expected AlterRole, got {:?}", other),
        }
    }

    #[test]
    fn alter_sequence_restart_and_increment() {
        let mut p = Parser::new("ALTER SEQUENCE s RESTART WITH 10 INCREMENT BY 2").unwrap();
        let stmt = p.parse_alter_statement().unwrap();
        match stmt {
            Statement::AlterSequence(s) => {
                assert!(s.restart_with.is_some());
                assert!(s.increment_by.is_some());
            }
            other => panic!("expected AlterSequence, got {:?}", other),
        }
    }

    #[test]
    fn alter_user_with_options() {
        let mut p = Parser::new("ALTER USER u WITH DEFAULT_SCHEMA = dbo").unwrap();
        let stmt = p.parse_alter_statement().unwrap();
        match stmt {
            Statement::AlterUser(s) => assert_eq!(s.options.len(), 1),
            other => panic!("expected AlterUser, got {:?}", other),
        }
    }

    #[test]
    fn alter_index_rebuild() {
        let mut p = Parser::new("ALTER INDEX ix ON t REBUILD").unwrap();
        let stmt = p.parse_alter_statement().unwrap();
        match stmt {
            Statement::AlterIndex(s) => assert_eq!(s.action, AlterIndexAction::Rebuild),
            other => panic!("expected AlterIndex, got {:?}", other),
        }
    }

    #[test]
    fn drop_procedure_if_exists() {
        let mut p = Parser::new("DROP PROCEDURE IF EXISTS p").unwrap();
        let stmt = p.parse_drop_statement().unwrap();
        match stmt {
            Statement::DropProcedure(s) => {
                assert!(s.is_if_exists);
                assert_eq!(s.objects.len(), 1);
            }
            other => panic!("expected DropProcedure, got {:?}", other),
        }
    }

    #[test]
    fn drop_function_and_trigger() {
        let mut p = Parser::new("DROP FUNCTION f").unwrap();
        assert!(matches!(p.parse_drop_statement().unwrap(), Statement::DropFunction(_)));
        let mut p = Parser::new("DROP TRIGGER trg").unwrap();
        assert!(matches!(p.parse_drop_statement().unwrap(), Statement::DropTrigger(_)));
    }
}
