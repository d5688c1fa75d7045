//! The long tail of standalone statements: `PRINT`, `THROW`, `RAISERROR`,
//! `WAITFOR`, Service Broker (`MOVE CONVERSATION`, `GET CONVERSATION GROUP`,
//! `SEND`, `RECEIVE`), `TRUNCATE TABLE`, `USE`, `KILL`, `CHECKPOINT`,
//! `RECONFIGURE`, `SHUTDOWN`, `SETUSER`, the deprecated `READTEXT`/
//! `WRITETEXT`/`UPDATETEXT` BLOB statements, `GRANT`, `RESTORE`.

use std::rc::Rc;

use tsql_ast::statement::{
    CheckpointStatement, GetConversationGroupStatement, GrantStatement, KillStatement, MoveConversationStatement,
    Permission, PrintStatement, ReadTextStatement, ReceiveStatement, ReconfigureStatement, RestoreOption,
    RestoreStatement, SendStatement, SetUserStatement, ShutdownStatement, Statement, ThrowStatement,
    TruncateTableStatement, UpdateTextSource, UpdateTextStatement, UseStatement, WaitForKind, WaitForStatement,
    WriteTextStatement,
};
use tsql_ast::types::MultiPartIdentifier;
use tsql_lexer::{IdentToken, Keyword, Token};

use crate::error::ParserError;

use super::super::Parser;

impl<'a> Parser<'a> {
    pub(super) fn parse_print_statement(&mut self) -> Result<PrintStatement, ParserError> {
        self.expect_keyword(Keyword::PRINT)?;
        Ok(PrintStatement { expression: self.parse_scalar_expression()? })
    }

    /// `THROW [error_number, message, state]`. Bare `THROW` re-raises the
    /// caught error inside a `CATCH` block.
    pub(super) fn parse_throw_statement(&mut self) -> Result<ThrowStatement, ParserError> {
        self.expect_keyword(Keyword::THROW)?;
        if self.is_statement_end() {
            return Ok(ThrowStatement { error_number: None, message: None, state: None });
        }
        let error_number = Some(self.parse_scalar_expression()?);
        self.expect_token(Token::Comma)?;
        let message = Some(self.parse_scalar_expression()?);
        self.expect_token(Token::Comma)?;
        let state = Some(self.parse_scalar_expression()?);
        Ok(ThrowStatement { error_number, message, state })
    }

    fn is_statement_end(&self) -> bool {
        matches!(self.current, Token::Semicolon | Token::Eof) || self.current_ident_eq("GO")
    }

    /// `RAISERROR (message, severity, state [, argument ...]) [WITH option [, ...]]`.
    pub(super) fn parse_raiserror_statement(&mut self) -> Result<tsql_ast::statement::RaiseErrorStatement, ParserError> {
        self.expect_keyword(Keyword::RAISERROR)?;
        self.expect_token(Token::LParen)?;
        let message = self.parse_scalar_expression()?;
        self.expect_token(Token::Comma)?;
        let severity = self.parse_scalar_expression()?;
        self.expect_token(Token::Comma)?;
        let state = self.parse_scalar_expression()?;
        let mut arguments = Vec::new();
        while self.eat_token(&Token::Comma)? {
            arguments.push(self.parse_scalar_expression()?);
        }
        self.expect_token(Token::RParen)?;
        let mut options = Vec::new();
        if self.eat_keyword(Keyword::WITH)? {
            options.push(self.parse_identifier()?.value);
            while self.eat_token(&Token::Comma)? {
                options.push(self.parse_identifier()?.value);
            }
        }
        Ok(tsql_ast::statement::RaiseErrorStatement { message, severity, state, arguments, options })
    }

    /// `WAITFOR { DELAY time | TIME time | (RECEIVE ...) } [, TIMEOUT n]`.
    pub(super) fn parse_waitfor_statement(&mut self) -> Result<WaitForStatement, ParserError> {
        self.expect_keyword(Keyword::WAITFOR)?;
        let kind = if self.eat_keyword(Keyword::DELAY)? {
            WaitForKind::Delay(self.parse_scalar_expression()?)
        } else if self.eat_keyword(Keyword::TIME)? {
            WaitForKind::Time(self.parse_scalar_expression()?)
        } else {
            self.expect_token(Token::LParen)?;
            let statement = Box::new(self.parse_statement_body()?);
            self.expect_token(Token::RParen)?;
            let timeout =
                if self.eat_token(&Token::Comma)? {
                    self.expect_keyword(Keyword::TIMEOUT)?;
                    Some(self.parse_scalar_expression()?)
                } else {
                    None
                };
            WaitForKind::Receive { statement, timeout }
        };
        Ok(WaitForStatement { kind })
    }

    pub(super) fn parse_move_conversation_statement(&mut self) -> Result<MoveConversationStatement, ParserError> {
        self.expect_keyword(Keyword::MOVE)?;
        self.expect_keyword(Keyword::CONVERSATION)?;
        let conversation_handle = self.parse_scalar_expression()?;
        self.expect_keyword(Keyword::TO)?;
        let to_conversation_group = self.parse_scalar_expression()?;
        Ok(MoveConversationStatement { conversation_handle, to_conversation_group })
    }

    pub(super) fn parse_get_conversation_group_statement(
        &mut self,
    ) -> Result<GetConversationGroupStatement, ParserError> {
        self.expect_keyword(Keyword::GET)?;
        self.expect_keyword(Keyword::CONVERSATION)?;
        self.expect_keyword(Keyword::GROUP)?;
        let group_id_variable = self.parse_variable_name()?;
        self.expect_keyword(Keyword::FROM)?;
        let queue = self.parse_schema_object_name()?;
        Ok(GetConversationGroupStatement { group_id_variable, queue })
    }

    /// `SEND ON CONVERSATION handle [, handle ...] MESSAGE TYPE name [(body)]`.
    pub(super) fn parse_send_statement(&mut self) -> Result<SendStatement, ParserError> {
        self.expect_keyword(Keyword::SEND)?;
        self.expect_keyword(Keyword::ON)?;
        self.expect_keyword(Keyword::CONVERSATION)?;
        let conversation_handles = self.parse_comma_separated(Self::parse_scalar_expression)?;
        let mut message_type_name = None;
        if self.eat_keyword(Keyword::MESSAGE)? {
            self.expect_keyword(Keyword::TYPE)?;
            message_type_name = Some(self.parse_identifier()?.value);
        }
        let message_body = if self.eat_token(&Token::LParen)? {
            let body = self.parse_scalar_expression()?;
            self.expect_token(Token::RParen)?;
            Some(body)
        } else {
            None
        };
        Ok(SendStatement { conversation_handles, message_type_name, message_body })
    }

    /// `RECEIVE [TOP (n)] select_list FROM queue [INTO table] [WHERE ...]`.
    pub(super) fn parse_receive_statement(&mut self) -> Result<ReceiveStatement, ParserError> {
        self.expect_keyword(Keyword::RECEIVE)?;
        let top = if self.current_is_keyword(Keyword::TOP) {
            Some(self.parse_top_row_filter()?.expression)
        } else {
            None
        };
        let select_elements = self.parse_comma_separated(Self::parse_select_element)?;
        self.expect_keyword(Keyword::FROM)?;
        let queue = self.parse_schema_object_name()?;
        let into_table =
            if self.eat_keyword(Keyword::INTO)? { Some(self.parse_schema_object_name()?) } else { None };
        let where_clause =
            if self.eat_keyword(Keyword::WHERE)? { Some(self.parse_boolean_expression()?) } else { None };
        Ok(ReceiveStatement { top, select_elements, queue, into_table, where_clause })
    }

    pub(super) fn parse_truncate_table_statement(&mut self) -> Result<TruncateTableStatement, ParserError> {
        self.expect_keyword(Keyword::TRUNCATE)?;
        self.expect_keyword(Keyword::TABLE)?;
        let schema_object_name = self.parse_schema_object_name()?;
        Ok(TruncateTableStatement { schema_object_name })
    }

    pub(super) fn parse_use_statement(&mut self) -> Result<UseStatement, ParserError> {
        self.expect_keyword(Keyword::USE)?;
        let database_name = self.parse_identifier()?.value;
        Ok(UseStatement { database_name })
    }

    pub(super) fn parse_kill_statement(&mut self) -> Result<KillStatement, ParserError> {
        self.expect_keyword(Keyword::KILL)?;
        let target = self.parse_scalar_expression()?;
        Ok(KillStatement { target })
    }

    pub(super) fn parse_checkpoint_statement(&mut self) -> Result<CheckpointStatement, ParserError> {
        self.expect_keyword(Keyword::CHECKPOINT)?;
        let duration = if self.is_statement_end() { None } else { Some(self.parse_scalar_expression()?) };
        Ok(CheckpointStatement { duration })
    }

    pub(super) fn parse_reconfigure_statement(&mut self) -> Result<ReconfigureStatement, ParserError> {
        self.expect_keyword(Keyword::RECONFIGURE)?;
        let with_override = if self.eat_keyword(Keyword::WITH)? {
            self.expect_keyword(Keyword::OVERRIDE)?;
            true
        } else {
            false
        };
        Ok(ReconfigureStatement { with_override })
    }

    pub(super) fn parse_shutdown_statement(&mut self) -> Result<ShutdownStatement, ParserError> {
        self.expect_keyword(Keyword::SHUTDOWN)?;
        let with_nowait = if self.eat_keyword(Keyword::WITH)? {
            self.expect_keyword(Keyword::NOWAIT)?;
            true
        } else {
            false
        };
        Ok(ShutdownStatement { with_nowait })
    }

    pub(super) fn parse_setuser_statement(&mut self) -> Result<SetUserStatement, ParserError> {
        self.expect_keyword(Keyword::SETUSER)?;
        let login = if matches!(self.current, Token::String(_)) { Some(self.parse_string_literal()?) } else { None };
        Ok(SetUserStatement { login })
    }

    fn parse_multi_part_identifier(&mut self) -> Result<MultiPartIdentifier, ParserError> {
        let parts = self.parse_dotted_identifier_chain()?;
        Ok(MultiPartIdentifier::new(parts.into_iter().map(Rc::new).collect()))
    }

    pub(super) fn parse_readtext_statement(&mut self) -> Result<ReadTextStatement, ParserError> {
        self.expect_keyword(Keyword::READTEXT)?;
        let column = self.parse_multi_part_identifier()?;
        let text_pointer = self.parse_scalar_expression()?;
        let offset = self.parse_scalar_expression()?;
        let size = self.parse_scalar_expression()?;
        let holdlock = self.eat_keyword(Keyword::HOLDLOCK)?;
        Ok(ReadTextStatement { column, text_pointer, offset, size, holdlock })
    }

    pub(super) fn parse_writetext_statement(&mut self) -> Result<WriteTextStatement, ParserError> {
        self.expect_keyword(Keyword::WRITETEXT)?;
        let column = self.parse_multi_part_identifier()?;
        let text_pointer = self.parse_scalar_expression()?;
        let with_log = self.eat_with_log()?;
        let data = self.parse_scalar_expression()?;
        Ok(WriteTextStatement { column, text_pointer, with_log, data })
    }

    fn eat_with_log(&mut self) -> Result<bool, ParserError> {
        if self.eat_keyword(Keyword::WITH)? {
            self.expect_keyword(Keyword::LOG)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The trailing argument after `insert_offset delete_length [WITH LOG]`
    /// is either the literal data to insert, or a `source_table.column
    /// text_pointer` pair copied in from elsewhere: an identifier
    /// immediately followed by `.` signals the column form, a `@variable`
    /// the bound-parameter form, anything else a plain inserted-data
    /// expression.
    pub(super) fn parse_updatetext_statement(&mut self) -> Result<UpdateTextStatement, ParserError> {
        self.expect_keyword(Keyword::UPDATETEXT)?;
        let column = self.parse_multi_part_identifier()?;
        let text_pointer = self.parse_scalar_expression()?;
        let insert_offset = if self.current_is_keyword(Keyword::NULL) {
            self.advance()?;
            None
        } else {
            Some(self.parse_scalar_expression()?)
        };
        let delete_length = if self.current_is_keyword(Keyword::NULL) {
            self.advance()?;
            None
        } else {
            Some(self.parse_scalar_expression()?)
        };
        let with_log = self.eat_with_log()?;

        let mut inserted_data = None;
        let mut source = None;
        if !self.is_statement_end() {
            if matches!(&self.current, Token::Ident(IdentToken { value, .. }) if value.starts_with('@')) {
                source = Some(UpdateTextSource::Variable(self.parse_variable_name()?));
            } else if matches!(&self.current, Token::Ident(_)) && self.peek == Token::Dot {
                let source_column = self.parse_multi_part_identifier()?;
                self.parse_scalar_expression()?; // source text pointer, discarded
                source = Some(UpdateTextSource::Column(source_column));
            } else {
                inserted_data = Some(self.parse_scalar_expression()?);
            }
        }
        Ok(UpdateTextStatement { column, text_pointer, insert_offset, delete_length, with_log, inserted_data, source })
    }

    /// `GRANT perm [(cols)] [, ...] [ON securable] TO principal [, ...] [WITH GRANT OPTION]`.
    pub(super) fn parse_grant_statement(&mut self) -> Result<GrantStatement, ParserError> {
        self.expect_keyword(Keyword::GRANT)?;
        let permissions = self.parse_comma_separated(Self::parse_permission)?;
        let securable = if self.eat_keyword(Keyword::ON)? { Some(self.parse_schema_object_name()?) } else { None };
        self.expect_keyword(Keyword::TO)?;
        let principals = self.parse_comma_separated(|p| Ok(p.parse_identifier()?.value))?;
        let with_grant_option = if self.eat_keyword(Keyword::WITH)? {
            self.expect_keyword(Keyword::GRANT)?;
            self.expect_keyword(Keyword::OPTION)?;
            true
        } else {
            false
        };
        Ok(GrantStatement { permissions, securable, principals, with_grant_option })
    }

    fn parse_permission(&mut self) -> Result<Permission, ParserError> {
        let name = self.parse_identifier()?.value;
        let columns = if self.current_is(&Token::LParen) { self.parse_column_name_list()? } else { Vec::new() };
        Ok(Permission { name, columns })
    }

    /// `RESTORE {DATABASE|LOG} name FROM source [, ...] [WITH option [, ...]]`.
    pub(super) fn parse_restore_statement(&mut self) -> Result<RestoreStatement, ParserError> {
        self.expect_keyword(Keyword::RESTORE)?;
        let is_log = if self.eat_keyword(Keyword::DATABASE)? {
            false
        } else {
            self.expect_keyword(Keyword::LOG)?;
            true
        };
        let database_name = self.parse_identifier()?.value;
        self.expect_keyword(Keyword::FROM)?;
        let from = self.parse_comma_separated(Self::parse_restore_source)?;
        let options = if self.eat_keyword(Keyword::WITH)? {
            self.parse_comma_separated(Self::parse_restore_option)?
        } else {
            Vec::new()
        };
        Ok(RestoreStatement { is_log, database_name, from, options })
    }

    /// One backup device: either a bare logical device name/variable, or
    /// `{DISK|TAPE|URL} = physical_name`, whose `DISK =` prefix carries no
    /// information the AST keeps, so only the right-hand expression survives.
    fn parse_restore_source(&mut self) -> Result<tsql_ast::expression::ScalarExpression, ParserError> {
        if matches!(&self.current, Token::Ident(_)) && self.peek == Token::Equals {
            self.advance()?;
            self.expect_token(Token::Equals)?;
        }
        self.parse_scalar_expression()
    }

    fn parse_restore_option(&mut self) -> Result<RestoreOption, ParserError> {
        let ident = self.parse_identifier()?;
        let name = crate::options::canonicalize_option_name(&ident.value);
        let value = if self.eat_token(&Token::Equals)? { Some(self.parse_scalar_expression()?) } else { None };
        Ok(RestoreOption { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn print_literal() {
        let mut p = Parser::new("PRINT 'hello'").unwrap();
        p.parse_print_statement().unwrap();
    }

    #[test]
    fn bare_throw_rethrows() {
        let mut p = Parser::new("THROW").unwrap();
        let stmt = p.parse_throw_statement().unwrap();
        assert!(stmt.error_number.is_none());
    }

    #[test]
    fn throw_with_arguments() {
        let mut p = Parser::new("THROW 51000, 'custom error', 1").unwrap();
        let stmt = p.parse_throw_statement().unwrap();
        assert!(stmt.error_number.is_some());
    }

    #[test]
    fn raiserror_with_options() {
        let mut p = Parser::new("RAISERROR ('msg %d', 16, 1, 5) WITH LOG").unwrap();
        let stmt = p.parse_raiserror_statement().unwrap();
        assert_eq!(stmt.arguments.len(), 1);
        assert_eq!(stmt.options, vec!["LOG".to_string()]);
    }

    #[test]
    fn waitfor_delay() {
        let mut p = Parser::new("WAITFOR DELAY '00:00:05'").unwrap();
        let stmt = p.parse_waitfor_statement().unwrap();
        assert!(matches!(stmt.kind, WaitForKind::Delay(_)));
    }

    #[test]
    fn send_on_conversation_with_body() {
        let mut p = Parser::new("SEND ON CONVERSATION @handle MESSAGE TYPE MyMessage ('payload')").unwrap();
        let stmt = p.parse_send_statement().unwrap();
        assert_eq!(stmt.message_type_name.as_deref(), Some("MyMessage"));
        assert!(stmt.message_body.is_some());
    }

    #[test]
    fn receive_top_with_where() {
        let mut p = Parser::new("RECEIVE TOP (1) * FROM my_queue WHERE a = 1").unwrap();
        let stmt = p.parse_receive_statement().unwrap();
        assert!(stmt.top.is_some());
        assert!(stmt.where_clause.is_some());
    }

    #[test]
    fn truncate_table() {
        let mut p = Parser::new("TRUNCATE TABLE t").unwrap();
        p.parse_truncate_table_statement().unwrap();
    }

    #[test]
    fn grant_select_with_columns_and_option() {
        let mut p = Parser::new("GRANT SELECT (a, b) ON t TO bob WITH GRANT OPTION").unwrap();
        let stmt = p.parse_grant_statement().unwrap();
        assert_eq!(stmt.permissions[0].columns, vec!["a".to_string(), "b".to_string()]);
        assert!(stmt.with_grant_option);
    }

    #[test]
    fn restore_database_with_options() {
        let mut p = Parser::new("RESTORE DATABASE mydb FROM DISK = 'backup.bak' WITH REPLACE").unwrap();
        let stmt = p.parse_restore_statement().unwrap();
        assert_eq!(stmt.database_name, "mydb");
        assert_eq!(stmt.from.len(), 1);
    }

    #[test]
    fn updatetext_with_variable_source() {
        let mut p = Parser::new("UPDATETEXT t.col @ptr 0 NULL @newtext").unwrap();
        let stmt = p.parse_updatetext_statement().unwrap();
        assert_eq!(stmt.source, Some(UpdateTextSource::Variable("@newtext".into())));
    }
}
