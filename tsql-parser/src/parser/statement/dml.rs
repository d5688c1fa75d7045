//! `SELECT`, `INSERT`, `UPDATE`, `DELETE`.

use tsql_ast::query::WhereClause;
use tsql_ast::statement::{DeleteStatement, InsertSource, InsertStatement, SelectStatement, SetClause, UpdateStatement};
use tsql_lexer::{Keyword, Token};

use crate::error::ParserError;

use super::super::Parser;

impl<'a> Parser<'a> {
    pub(super) fn parse_select_statement(&mut self) -> Result<SelectStatement, ParserError> {
        let query_expression = self.parse_query_expression()?;
        let option_clause =
            if self.current_is_keyword(Keyword::OPTION) { Some(self.parse_option_clause()?) } else { None };
        Ok(SelectStatement { query_expression, option_clause })
    }

    pub(super) fn parse_insert_statement(&mut self) -> Result<InsertStatement, ParserError> {
        self.expect_keyword(Keyword::INSERT)?;
        self.eat_keyword(Keyword::INTO)?;
        let target = self.parse_schema_object_name()?;
        let columns = if self.current_is(&Token::LParen) { self.parse_column_name_list()? } else { Vec::new() };
        let source = if self.eat_keyword(Keyword::DEFAULT)? {
            self.expect_keyword(Keyword::VALUES)?;
            InsertSource::DefaultValues
        } else if self.eat_keyword(Keyword::VALUES)? {
            let rows = self.parse_comma_separated(Self::parse_values_row)?;
            InsertSource::Values(rows)
        } else {
            InsertSource::Query(Box::new(self.parse_query_expression()?))
        };
        Ok(InsertStatement { target, columns, source })
    }

    fn parse_values_row(&mut self) -> Result<Vec<tsql_ast::expression::ScalarExpression>, ParserError> {
        self.expect_token(Token::LParen)?;
        let values = self.parse_comma_separated(Self::parse_scalar_expression)?;
        self.expect_token(Token::RParen)?;
        Ok(values)
    }

    pub(super) fn parse_update_statement(&mut self) -> Result<UpdateStatement, ParserError> {
        self.expect_keyword(Keyword::UPDATE)?;
        let target = self.parse_table_reference()?;
        self.expect_keyword(Keyword::SET)?;
        let set_clauses = self.parse_comma_separated(Self::parse_set_clause)?;
        let from_clause =
            if self.current_is_keyword(Keyword::FROM) { Some(self.parse_from_clause()?) } else { None };
        let where_clause = if self.eat_keyword(Keyword::WHERE)? {
            Some(WhereClause { search_condition: self.parse_boolean_expression()? })
        } else {
            None
        };
        Ok(UpdateStatement { target, set_clauses, from_clause, where_clause })
    }

    fn parse_set_clause(&mut self) -> Result<SetClause, ParserError> {
        let column = self.parse_schema_object_name()?;
        self.expect_token(Token::Equals)?;
        let new_value = self.parse_scalar_expression()?;
        Ok(SetClause { column, new_value })
    }

    pub(super) fn parse_delete_statement(&mut self) -> Result<DeleteStatement, ParserError> {
        self.expect_keyword(Keyword::DELETE)?;
        self.eat_keyword(Keyword::FROM)?;
        let target = self.parse_table_reference()?;
        let from_clause =
            if self.current_is_keyword(Keyword::FROM) { Some(self.parse_from_clause()?) } else { None };
        let where_clause = if self.eat_keyword(Keyword::WHERE)? {
            Some(WhereClause { search_condition: self.parse_boolean_expression()? })
        } else {
            None
        };
        Ok(DeleteStatement { target, from_clause, where_clause })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn insert_values() {
        let mut p = Parser::new("INSERT INTO t (a, b) VALUES (1, 2)").unwrap();
        let stmt = p.parse_insert_statement().unwrap();
        assert_eq!(stmt.columns, vec!["a".to_string(), "b".to_string()]);
        match stmt.source {
            InsertSource::Values(rows) => assert_eq!(rows.len(), 1),
            other => panic!("expected Values, got {:?}", other),
        }
    }

    #[test]
    fn insert_default_values() {
        let mut p = Parser::new("INSERT INTO t DEFAULT VALUES").unwrap();
        let stmt = p.parse_insert_statement().unwrap();
        assert!(matches!(stmt.source, InsertSource::DefaultValues));
    }

    #[test]
    fn update_with_from_and_where() {
        let mut p = Parser::new("UPDATE t SET a = 1 FROM t JOIN u ON t.id = u.id WHERE t.a > 0").unwrap();
        let stmt = p.parse_update_statement().unwrap();
        assert_eq!(stmt.set_clauses.len(), 1);
        assert!(stmt.from_clause.is_some());
        assert!(stmt.where_clause.is_some());
    }

    #[test]
    fn delete_without_from_keyword() {
        let mut p = Parser::new("DELETE t WHERE a = 1").unwrap();
        let stmt = p.parse_delete_statement().unwrap();
        assert!(stmt.where_clause.is_some());
    }
}
