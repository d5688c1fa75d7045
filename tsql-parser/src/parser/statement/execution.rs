//! `EXEC`/`EXECUTE` procedure calls, including the `EXECUTE AS` principal
//! switch.

use tsql_ast::statement::{
    ExecutableEntity, ExecuteAsPrincipal, ExecuteAsStatement, ExecuteParameter, ExecuteStatement, Statement,
};
use tsql_lexer::{Keyword, Token};

use crate::error::ParserError;

use super::super::Parser;

impl<'a> Parser<'a> {
    /// `[EXEC|EXECUTE] AS { CALLER | SELF | OWNER | LOGIN = 'x' | USER = 'x' }`
    /// or `[EXEC|EXECUTE] [@status =] procedure [parameters...]`.
    pub(super) fn parse_exec_statement(&mut self) -> Result<Statement, ParserError> {
        self.advance()?; // EXEC or EXECUTE

        if self.eat_keyword(Keyword::AS)? {
            let principal = self.parse_execute_as_principal()?;
            return Ok(Statement::ExecuteAs(ExecuteAsStatement { principal }));
        }

        let return_status_variable = if self.current_is_variable_followed_by_equals() {
            let name = self.parse_variable_name()?;
            self.expect_token(Token::Equals)?;
            Some(name)
        } else {
            None
        };

        let procedure = self.parse_schema_object_name()?;
        let parameters = self.parse_execute_parameters()?;
        Ok(Statement::Execute(ExecuteStatement {
            return_status_variable,
            entity: ExecutableEntity { procedure, parameters },
        }))
    }

    fn current_is_variable_followed_by_equals(&self) -> bool {
        matches!(&self.current, Token::Ident(ident) if ident.value.starts_with('@')) && self.peek == Token::Equals
    }

    fn parse_execute_as_principal(&mut self) -> Result<ExecuteAsPrincipal, ParserError> {
        if self.eat_ident_eq("CALLER")? {
            return Ok(ExecuteAsPrincipal::Caller);
        }
        if self.eat_ident_eq("SELF")? {
            return Ok(ExecuteAsPrincipal::Self_);
        }
        if self.eat_ident_eq("OWNER")? {
            return Ok(ExecuteAsPrincipal::Owner);
        }
        if self.eat_keyword(Keyword::LOGIN)? {
            self.expect_token(Token::Equals)?;
            return Ok(ExecuteAsPrincipal::Login(self.parse_string_literal()?));
        }
        if self.eat_keyword(Keyword::USER)? {
            self.expect_token(Token::Equals)?;
            return Ok(ExecuteAsPrincipal::User(self.parse_string_literal()?));
        }
        Err(self.unexpected("CALLER, SELF, OWNER, LOGIN or USER"))
    }

    fn parse_execute_parameters(&mut self) -> Result<Vec<ExecuteParameter>, ParserError> {
        if self.is_at_execute_parameter_start() {
            let parenthesized = self.eat_token(&Token::LParen)?;
            let parameters = if self.is_at_execute_parameter_start() {
                self.parse_comma_separated(Self::parse_execute_parameter)?
            } else {
                Vec::new()
            };
            if parenthesized {
                self.expect_token(Token::RParen)?;
            }
            Ok(parameters)
        } else {
            Ok(Vec::new())
        }
    }

    fn is_at_execute_parameter_start(&self) -> bool {
        !matches!(self.current, Token::Semicolon | Token::Eof) && !self.current_ident_eq("GO")
    }

    fn parse_execute_parameter(&mut self) -> Result<ExecuteParameter, ParserError> {
        let variable_name = if self.current_is_variable_followed_by_equals() {
            let name = self.parse_variable_name()?;
            self.expect_token(Token::Equals)?;
            Some(name)
        } else {
            None
        };
        let value = self.parse_scalar_expression()?;
        let is_output = self.eat_keyword(Keyword::OUTPUT)? || self.eat_ident_eq("OUT")?;
        Ok(ExecuteParameter { variable_name, value, is_output })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn exec_bare_procedure() {
        let mut p = Parser::new("EXEC my_proc").unwrap();
        let stmt = p.parse_exec_statement().unwrap();
        match stmt {
            Statement::Execute(e) => assert!(e.entity.parameters.is_empty()),
            other => panic!("expected Execute, got {:?}", other),
        }
    }

    #[test]
    fn exec_with_named_and_output_parameters() {
        let mut p = Parser::new("EXEC @ret = my_proc @p1 = 1, @p2 OUTPUT").unwrap();
        let stmt = p.parse_exec_statement().unwrap();
        match stmt {
            Statement::Execute(e) => {
                assert_eq!(e.return_status_variable.as_deref(), Some("@ret"));
                assert_eq!(e.entity.parameters.len(), 2);
                assert!(e.entity.parameters[1].is_output);
            }
            other => panic!("expected Execute, got {:?}", other),
        }
    }

    #[test]
    fn execute_as_login() {
        let mut p = Parser::new("EXECUTE AS LOGIN = 'bob'").unwrap();
        let stmt = p.parse_exec_statement().unwrap();
        match stmt {
            Statement::ExecuteAs(e) => assert_eq!(e.principal, ExecuteAsPrincipal::Login("bob".into())),
            other => panic!("expected ExecuteAs, got {:?}", other),
        }
    }
}
