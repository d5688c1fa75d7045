//! `IF`/`WHILE`/`RETURN`/`GOTO` and the `BEGIN` family (plain block, `TRY
//! ... CATCH`, `BEGIN [DISTRIBUTED] TRAN[SACTION]`).

use tsql_ast::statement::{
    BeginEndBlockStatement, BeginTransactionStatement, GotoStatement, IfStatement, ReturnStatement, Statement,
    TransactionName, TryCatchStatement, WhileStatement,
};
use tsql_lexer::{IdentToken, Keyword, Token};

use crate::error::ParserError;

use super::super::Parser;

impl<'a> Parser<'a> {
    pub(super) fn parse_if_statement(&mut self) -> Result<IfStatement, ParserError> {
        self.expect_keyword(Keyword::IF)?;
        let predicate = self.parse_boolean_expression()?;
        let then_statement = Box::new(self.parse_statement()?);
        let else_statement = if self.eat_keyword(Keyword::ELSE)? {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(IfStatement { predicate, then_statement, else_statement })
    }

    pub(super) fn parse_while_statement(&mut self) -> Result<WhileStatement, ParserError> {
        self.expect_keyword(Keyword::WHILE)?;
        let predicate = self.parse_boolean_expression()?;
        let statement = Box::new(self.parse_statement()?);
        Ok(WhileStatement { predicate, statement })
    }

    pub(super) fn parse_return_statement(&mut self) -> Result<ReturnStatement, ParserError> {
        self.expect_keyword(Keyword::RETURN)?;
        let expression = if self.is_statement_boundary() { None } else { Some(self.parse_scalar_expression()?) };
        Ok(ReturnStatement { expression })
    }

    fn is_statement_boundary(&self) -> bool {
        matches!(self.current, Token::Semicolon | Token::Eof) || self.current_ident_eq("GO")
    }

    pub(super) fn parse_goto_statement(&mut self) -> Result<GotoStatement, ParserError> {
        self.expect_keyword(Keyword::GOTO)?;
        let label_name = self.parse_identifier()?.value;
        Ok(GotoStatement { label_name })
    }

    /// Dispatches the three `BEGIN`-introduced forms: `BEGIN TRY`, `BEGIN
    /// [DISTRIBUTED] TRAN[SACTION]`, and the plain `BEGIN ... END` block.
    pub(super) fn parse_begin_statement(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::BEGIN)?;

        if self.eat_keyword(Keyword::TRY)? {
            let try_statements = self.parse_statements_until_end()?;
            self.expect_keyword(Keyword::END)?;
            self.eat_keyword(Keyword::TRY)?;
            self.expect_keyword(Keyword::BEGIN)?;
            self.expect_keyword(Keyword::CATCH)?;
            let catch_statements = self.parse_statements_until_end()?;
            self.expect_keyword(Keyword::END)?;
            self.eat_keyword(Keyword::CATCH)?;
            return Ok(Statement::TryCatch(TryCatchStatement { try_statements, catch_statements }));
        }

        let distributed = self.eat_keyword(Keyword::DISTRIBUTED)?;
        if distributed || self.current_is_keyword(Keyword::TRAN) || self.current_is_keyword(Keyword::TRANSACTION) {
            self.eat_keyword(Keyword::TRAN)?;
            self.eat_keyword(Keyword::TRANSACTION)?;
            let transaction_name = self.parse_optional_transaction_name()?;
            let mark_description = if self.eat_keyword(Keyword::WITH)? {
                self.expect_keyword(Keyword::MARK)?;
                Some(self.parse_string_literal()?)
            } else {
                None
            };
            return Ok(Statement::BeginTransaction(BeginTransactionStatement {
                distributed,
                transaction_name,
                mark_description,
            }));
        }

        let statement_list = self.parse_statements_until_end()?;
        self.expect_keyword(Keyword::END)?;
        Ok(Statement::BeginEndBlock(BeginEndBlockStatement { statement_list }))
    }

    fn parse_statements_until_end(&mut self) -> Result<Vec<Statement>, ParserError> {
        let mut statements = Vec::new();
        while !self.current_is_keyword(Keyword::END) && !self.current_is(&Token::Eof) {
            if self.eat_token(&Token::Semicolon)? {
                continue;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    pub(super) fn parse_optional_transaction_name(&mut self) -> Result<TransactionName, ParserError> {
        match self.current.clone() {
            Token::Ident(IdentToken { value, .. }) if value.starts_with('@') => {
                self.advance()?;
                Ok(TransactionName::Variable(value))
            }
            Token::Ident(IdentToken { value, .. }) => {
                self.advance()?;
                Ok(TransactionName::Identifier(value))
            }
            _ => Ok(TransactionName::None),
        }
    }

    pub(super) fn parse_string_literal(&mut self) -> Result<String, ParserError> {
        match self.current.clone() {
            Token::String(s) | Token::NationalString(s) => {
                self.advance()?;
                Ok(s)
            }
            _ => Err(self.unexpected("a string literal")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn if_else() {
        let mut p = Parser::new("IF 1 = 1 PRINT 'a' ELSE PRINT 'b'").unwrap();
        let stmt = p.parse_if_statement().unwrap();
        assert!(stmt.else_statement.is_some());
    }

    #[test]
    fn while_break() {
        let mut p = Parser::new("WHILE 1 = 1 BREAK").unwrap();
        let stmt = p.parse_while_statement().unwrap();
        assert!(matches!(*stmt.statement, Statement::Break(_)));
    }

    #[test]
    fn begin_end_block_with_statements() {
        let mut p = Parser::new("BEGIN PRINT 'a'; PRINT 'b' END").unwrap();
        let stmt = p.parse_begin_statement().unwrap();
        match stmt {
            Statement::BeginEndBlock(block) => assert_eq!(block.statement_list.len(), 2),
            other => panic!("expected BeginEndBlock, got {:?}", other),
        }
    }

    #[test]
    fn begin_try_catch() {
        let mut p = Parser::new("BEGIN TRY PRINT 'a' END TRY BEGIN CATCH PRINT 'b' END CATCH").unwrap();
        let stmt = p.parse_begin_statement().unwrap();
        assert!(matches!(stmt, Statement::TryCatch(_)));
    }

    #[test]
    fn begin_transaction_named() {
        let mut p = Parser::new("BEGIN TRANSACTION t1").unwrap();
        let stmt = p.parse_begin_statement().unwrap();
        match stmt {
            Statement::BeginTransaction(b) => {
                assert_eq!(b.transaction_name, TransactionName::Identifier("t1".into()));
            }
            other => panic!("expected BeginTransaction, got {:?}", other),
        }
    }
}
