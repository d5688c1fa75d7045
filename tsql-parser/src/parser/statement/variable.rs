//! `DECLARE` (variable and cursor forms) and `SET` (variable assignment,
//! session predicate options, `SET STATISTICS`).

use tsql_ast::statement::{
    AssignmentOperator, DeclareVariableElement, DeclareVariableStatement, SetPredicateOptionStatement,
    SetStatisticsStatement, SetVariableStatement, Statement,
};
use tsql_lexer::{IdentToken, Keyword, Token};

use crate::error::ParserError;

use super::super::Parser;

impl<'a> Parser<'a> {
    /// `DECLARE` dispatches on its first name: a `@variable` starts a
    /// variable declaration list, a plain identifier followed by `CURSOR`
    /// declares a cursor.
    pub(super) fn parse_declare_statement(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::DECLARE)?;
        if self.current_is_variable() {
            let declarations = self.parse_comma_separated(Self::parse_declare_variable_element)?;
            Ok(Statement::DeclareVariable(DeclareVariableStatement { declarations }))
        } else {
            Ok(Statement::DeclareCursor(self.parse_declare_cursor_statement()?))
        }
    }

    fn current_is_variable(&self) -> bool {
        matches!(&self.current, Token::Ident(IdentToken { value, .. }) if value.starts_with('@'))
    }

    fn parse_declare_variable_element(&mut self) -> Result<DeclareVariableElement, ParserError> {
        let variable_name = self.parse_variable_name()?;
        self.eat_keyword(Keyword::AS)?;
        let data_type = self.parse_data_type()?;
        let default_value = if self.eat_token(&Token::Equals)? { Some(self.parse_scalar_expression()?) } else { None };
        Ok(DeclareVariableElement { variable_name, data_type, default_value })
    }

    pub(super) fn parse_variable_name(&mut self) -> Result<String, ParserError> {
        match self.current.clone() {
            Token::Ident(IdentToken { value, .. }) if value.starts_with('@') => {
                self.advance()?;
                Ok(value)
            }
            _ => Err(self.unexpected("a @variable name")),
        }
    }

    /// `SET` dispatches between `@variable` assignment, `SET STATISTICS
    /// {IO|TIME|PROFILE|XML} {ON|OFF}`, `SET LINENO n`, and the generic
    /// session predicate option list (`SET ANSI_NULLS, QUOTED_IDENTIFIER
    /// ON`).
    pub(super) fn parse_set_statement(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::SET)?;

        if self.current_is_variable() {
            return Ok(Statement::SetVariable(self.parse_set_variable_tail()?));
        }

        if self.eat_keyword(Keyword::STATISTICS)? {
            let option = self.parse_identifier()?.value;
            let is_on = self.parse_on_off()?;
            return Ok(Statement::SetStatistics(SetStatisticsStatement { option, is_on }));
        }

        if self.eat_keyword(Keyword::LINENO)? {
            let line_number = self.parse_scalar_expression()?;
            return Ok(Statement::SetLineno(tsql_ast::statement::SetLinenoStatement { line_number }));
        }

        let mut options = vec![self.parse_identifier()?.value];
        while self.eat_token(&Token::Comma)? {
            options.push(self.parse_identifier()?.value);
        }
        let is_on = self.parse_on_off()?;
        Ok(Statement::SetPredicateOption(SetPredicateOptionStatement { options, is_on }))
    }

    /// The lexer scans `+`, `-`, `*`, `/`, `=` as single-character tokens,
    /// so a compound assignment (`+=` etc.) is recognized here as two
    /// adjacent tokens rather than as its own token kind.
    fn parse_set_variable_tail(&mut self) -> Result<SetVariableStatement, ParserError> {
        let variable_name = self.parse_variable_name()?;
        let operator = if self.eat_token(&Token::Equals)? {
            AssignmentOperator::Equals
        } else {
            let operator = match &self.current {
                Token::Plus => AssignmentOperator::AddEquals,
                Token::Minus => AssignmentOperator::SubtractEquals,
                Token::Star => AssignmentOperator::MultiplyEquals,
                Token::Slash => AssignmentOperator::DivideEquals,
                Token::Modulo => AssignmentOperator::ModEquals,
                _ => return Err(self.unexpected("an assignment operator")),
            };
            self.advance()?;
            self.expect_token(Token::Equals)?;
            operator
        };
        let expression = self.parse_scalar_expression()?;
        Ok(SetVariableStatement { variable_name, operator, expression })
    }

    fn parse_on_off(&mut self) -> Result<bool, ParserError> {
        if self.eat_keyword(Keyword::ON)? {
            Ok(true)
        } else if self.eat_keyword(Keyword::OFF)? {
            Ok(false)
        } else {
            Err(self.unexpected("ON or OFF"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn declare_multiple_variables() {
        let mut p = Parser::new("DECLARE @a INT = 1, @b VARCHAR(10)").unwrap();
        let stmt = p.parse_declare_statement().unwrap();
        match stmt {
            Statement::DeclareVariable(d) => assert_eq!(d.declarations.len(), 2),
            other => panic!("expected DeclareVariable, got {:?}", other),
        }
    }

    #[test]
    fn set_variable_assignment() {
        let mut p = Parser::new("SET @a = 1").unwrap();
        let stmt = p.parse_set_statement().unwrap();
        assert!(matches!(stmt, Statement::SetVariable(_)));
    }

    #[test]
    fn set_predicate_option_list() {
        let mut p = Parser::new("SET ANSI_NULLS, QUOTED_IDENTIFIER ON").unwrap();
        let stmt = p.parse_set_statement().unwrap();
        match stmt {
            Statement::SetPredicateOption(o) => {
                assert_eq!(o.options.len(), 2);
                assert!(o.is_on);
            }
            other => panic!("expected SetPredicateOption, got {:?}", other),
        }
    }

    #[test]
    fn set_statistics() {
        let mut p = Parser::new("SET STATISTICS IO ON").unwrap();
        let stmt = p.parse_set_statement().unwrap();
        assert!(matches!(stmt, Statement::SetStatistics(_)));
    }
}
