//! Query expressions: `SELECT` specifications, the `UNION`/`EXCEPT`/
//! `INTERSECT` set operators that combine them, table references, and
//! joins.

use std::rc::Rc;

use tsql_ast::expression::FunctionCall;
use tsql_ast::query::{
    BinaryQueryExpression, BinaryQueryExpressionType, ExpressionWithSortOrder, FromClause,
    GroupByClause, GroupByOption, HavingClause, IntoClause, OptimizerHint, OptionClause,
    OrderByClause, QualifiedJoinType, QueryExpression, QueryParenthesisExpression,
    QuerySpecification, SelectElement, SortOrder, TableHint, TableReference, TopRowFilter,
    UnqualifiedJoinType, WhereClause,
};
use tsql_ast::types::{MultiPartIdentifier, SchemaObjectName};
use tsql_lexer::{IdentToken, Keyword, Token};

use crate::error::ParserError;

use super::Parser;

impl<'a> Parser<'a> {
    /// Builds a left-associative tree of set operators over query
    /// primaries, then attaches a trailing `ORDER BY` per the binding rule:
    /// to the outermost binary expression if any set operator was seen,
    /// otherwise to the single query specification.
    pub(super) fn parse_query_expression(&mut self) -> Result<QueryExpression, ParserError> {
        let mut expression = self.parse_query_primary()?;
        let mut saw_set_operator = false;

        loop {
            let binary_query_expression_type = if self.eat_keyword(Keyword::UNION)? {
                BinaryQueryExpressionType::Union
            } else if self.eat_keyword(Keyword::EXCEPT)? {
                BinaryQueryExpressionType::Except
            } else if self.eat_keyword(Keyword::INTERSECT)? {
                BinaryQueryExpressionType::Intersect
            } else {
                break;
            };
            saw_set_operator = true;
            let all = self.eat_keyword(Keyword::ALL)?;
            let second_query_expression = Box::new(self.parse_query_primary()?);
            expression = QueryExpression::BinaryQueryExpression(BinaryQueryExpression {
                binary_query_expression_type,
                all,
                first_query_expression: Box::new(expression),
                second_query_expression,
                order_by_clause: None,
            });
        }

        if self.current_is_keyword(Keyword::ORDER) {
            let order_by_clause = self.parse_order_by_clause()?;
            match &mut expression {
                QueryExpression::BinaryQueryExpression(binary) if saw_set_operator => {
                    binary.order_by_clause = Some(order_by_clause);
                }
                QueryExpression::QuerySpecification(spec) if !saw_set_operator => {
                    spec.order_by_clause = Some(order_by_clause);
                }
                _ => unreachable!("order by only binds to the two cases matched above"),
            }
        }

        Ok(expression)
    }

    fn parse_query_primary(&mut self) -> Result<QueryExpression, ParserError> {
        if self.eat_token(&Token::LParen)? {
            let inner = self.parse_query_expression()?;
            self.expect_token(Token::RParen)?;
            Ok(QueryExpression::QueryParenthesisExpression(QueryParenthesisExpression {
                query_expression: Box::new(inner),
            }))
        } else {
            Ok(QueryExpression::QuerySpecification(self.parse_query_specification()?))
        }
    }

    /// A `SELECT` body up through `HAVING`; `ORDER BY` is parsed by
    /// [`Self::parse_query_expression`] since it binds above this level.
    pub(super) fn parse_query_specification(&mut self) -> Result<QuerySpecification, ParserError> {
        self.expect_keyword(Keyword::SELECT)?;
        let all = self.eat_keyword(Keyword::ALL)?;
        let distinct = self.eat_keyword(Keyword::DISTINCT)?;
        let top = if self.eat_keyword(Keyword::TOP)? { Some(self.parse_top_row_filter()?) } else { None };
        let select_elements = self.parse_comma_separated(Self::parse_select_element)?;
        let into_clause = if self.eat_keyword(Keyword::INTO)? {
            Some(IntoClause { table: self.parse_schema_object_name()? })
        } else {
            None
        };
        let from_clause =
            if self.current_is_keyword(Keyword::FROM) { Some(self.parse_from_clause()?) } else { None };
        let where_clause = if self.eat_keyword(Keyword::WHERE)? {
            Some(WhereClause { search_condition: self.parse_boolean_expression()? })
        } else {
            None
        };
        let group_by_clause =
            if self.current_is_keyword(Keyword::GROUP) { Some(self.parse_group_by_clause()?) } else { None };
        let having_clause = if self.eat_keyword(Keyword::HAVING)? {
            Some(HavingClause { search_condition: self.parse_boolean_expression()? })
        } else {
            None
        };
        Ok(QuerySpecification {
            all,
            distinct,
            top,
            select_elements,
            into_clause,
            from_clause,
            where_clause,
            group_by_clause,
            having_clause,
            order_by_clause: None,
        })
    }

    /// `TOP (expr) [PERCENT] [WITH TIES]`. Exposed for `RECEIVE`'s `TOP (n)`
    /// clause, which does not allow `PERCENT`/`WITH TIES` but shares the
    /// parenthesized-expression shape.
    pub(super) fn parse_top_row_filter(&mut self) -> Result<TopRowFilter, ParserError> {
        let expression = if self.eat_token(&Token::LParen)? {
            let expression = self.parse_scalar_expression()?;
            self.expect_token(Token::RParen)?;
            expression
        } else {
            self.parse_primary_expression()?
        };
        let percent = self.eat_keyword(Keyword::PERCENT)?;
        let with_ties = if self.eat_keyword(Keyword::WITH)? {
            self.expect_keyword(Keyword::TIES)?;
            true
        } else {
            false
        };
        Ok(TopRowFilter { expression, percent, with_ties })
    }

    /// One select-list element: `*`, `qualifier.*`, or a scalar expression
    /// with an optional alias. Exposed for `RECEIVE`'s select list.
    pub(super) fn parse_select_element(&mut self) -> Result<SelectElement, ParserError> {
        if self.eat_token(&Token::Star)? {
            return Ok(SelectElement::Star { qualifier: None });
        }
        if matches!(self.current, Token::Ident(_)) {
            let checkpoint = self.checkpoint();
            match self.try_parse_star_qualifier() {
                Ok(qualifier) => return Ok(SelectElement::Star { qualifier: Some(qualifier) }),
                Err(_) => self.restore(checkpoint),
            }
        }
        let expression = self.parse_scalar_expression()?;
        let alias = self.parse_optional_select_alias()?;
        Ok(SelectElement::Scalar { expression, alias })
    }

    fn try_parse_star_qualifier(&mut self) -> Result<SchemaObjectName, ParserError> {
        let name = self.parse_schema_object_name()?;
        self.expect_token(Token::Dot)?;
        self.expect_token(Token::Star)?;
        Ok(name)
    }

    fn parse_optional_select_alias(&mut self) -> Result<Option<String>, ParserError> {
        if self.eat_keyword(Keyword::AS)? {
            return Ok(Some(self.parse_identifier()?.value));
        }
        if self.is_select_clause_boundary() {
            return Ok(None);
        }
        match self.current.clone() {
            Token::Ident(IdentToken { value, .. }) if !value.starts_with('@') => {
                self.advance()?;
                Ok(Some(value))
            }
            _ => Ok(None),
        }
    }

    fn is_select_clause_boundary(&self) -> bool {
        matches!(
            self.current,
            Token::Comma
                | Token::Semicolon
                | Token::Eof
                | Token::RParen
                | Token::Keyword(Keyword::FROM)
                | Token::Keyword(Keyword::WHERE)
                | Token::Keyword(Keyword::GROUP)
                | Token::Keyword(Keyword::ORDER)
                | Token::Keyword(Keyword::HAVING)
                | Token::Keyword(Keyword::INTO)
                | Token::Keyword(Keyword::UNION)
                | Token::Keyword(Keyword::EXCEPT)
                | Token::Keyword(Keyword::INTERSECT)
                | Token::Keyword(Keyword::FOR)
                | Token::Keyword(Keyword::OPTION)
        )
    }

    fn parse_group_by_clause(&mut self) -> Result<GroupByClause, ParserError> {
        self.expect_keyword(Keyword::GROUP)?;
        self.expect_keyword(Keyword::BY)?;
        let all = self.eat_keyword(Keyword::ALL)?;
        let grouping_specifications = self.parse_comma_separated(Self::parse_scalar_expression)?;
        let group_by_option = if self.eat_keyword(Keyword::WITH)? {
            if self.eat_keyword(Keyword::ROLLUP)? {
                GroupByOption::Rollup
            } else if self.eat_keyword(Keyword::CUBE)? {
                GroupByOption::Cube
            } else {
                return Err(self.unexpected("ROLLUP or CUBE"));
            }
        } else {
            GroupByOption::None
        };
        Ok(GroupByClause { all, grouping_specifications, group_by_option })
    }

    fn parse_order_by_clause(&mut self) -> Result<OrderByClause, ParserError> {
        self.expect_keyword(Keyword::ORDER)?;
        self.expect_keyword(Keyword::BY)?;
        let order_by_elements = self.parse_comma_separated(Self::parse_order_by_element)?;
        Ok(OrderByClause { order_by_elements })
    }

    fn parse_order_by_element(&mut self) -> Result<ExpressionWithSortOrder, ParserError> {
        let expression = self.parse_scalar_expression()?;
        let sort_order = if self.eat_keyword(Keyword::ASC)? {
            Some(SortOrder::Ascending)
        } else if self.eat_keyword(Keyword::DESC)? {
            Some(SortOrder::Descending)
        } else {
            None
        };
        Ok(ExpressionWithSortOrder { expression, sort_order })
    }

    /// `OPTION (hint [, hint ...])`, trailing a top-level statement.
    pub(super) fn parse_option_clause(&mut self) -> Result<OptionClause, ParserError> {
        self.expect_keyword(Keyword::OPTION)?;
        self.expect_token(Token::LParen)?;
        let hints = self.parse_comma_separated(Self::parse_optimizer_hint)?;
        self.expect_token(Token::RParen)?;
        Ok(OptionClause { hints })
    }

    fn parse_optimizer_hint(&mut self) -> Result<OptimizerHint, ParserError> {
        let ident = self.parse_identifier()?;
        let name = crate::options::canonicalize_option_name(&ident.value);
        let value = if self.eat_token(&Token::Equals)? { Some(self.parse_scalar_expression()?) } else { None };
        Ok(OptimizerHint { name, value })
    }

    // -- FROM / table references / joins ---------------------------------------

    /// `FROM table_reference [, ...]`. Exposed to the statement parsers for
    /// `UPDATE`/`DELETE`'s secondary `FROM` clause and `RECEIVE`'s queue read.
    pub(super) fn parse_from_clause(&mut self) -> Result<FromClause, ParserError> {
        self.expect_keyword(Keyword::FROM)?;
        let table_references = self.parse_comma_separated(Self::parse_table_reference)?;
        Ok(FromClause { table_references })
    }

    /// A base table source folded left-associatively with any trailing
    /// joins.
    pub(super) fn parse_table_reference(&mut self) -> Result<TableReference, ParserError> {
        let mut left = self.parse_table_source()?;
        loop {
            if self.eat_keyword(Keyword::CROSS)? {
                self.expect_keyword(Keyword::JOIN)?;
                let right = self.parse_table_source()?;
                left = TableReference::UnqualifiedJoin {
                    left: Box::new(left),
                    right: Box::new(right),
                    join_type: UnqualifiedJoinType::CrossJoin,
                };
                continue;
            }

            let join_type = if self.eat_keyword(Keyword::INNER)? {
                self.expect_keyword(Keyword::JOIN)?;
                Some(QualifiedJoinType::Inner)
            } else if self.eat_keyword(Keyword::LEFT)? {
                self.eat_keyword(Keyword::OUTER)?;
                self.expect_keyword(Keyword::JOIN)?;
                Some(QualifiedJoinType::LeftOuter)
            } else if self.eat_keyword(Keyword::RIGHT)? {
                self.eat_keyword(Keyword::OUTER)?;
                self.expect_keyword(Keyword::JOIN)?;
                Some(QualifiedJoinType::RightOuter)
            } else if self.eat_keyword(Keyword::FULL)? {
                self.eat_keyword(Keyword::OUTER)?;
                self.expect_keyword(Keyword::JOIN)?;
                Some(QualifiedJoinType::FullOuter)
            } else if self.eat_keyword(Keyword::JOIN)? {
                Some(QualifiedJoinType::Inner)
            } else {
                None
            };

            match join_type {
                Some(join_type) => {
                    let right = self.parse_table_source()?;
                    self.expect_keyword(Keyword::ON)?;
                    let search_condition = self.parse_boolean_expression()?;
                    left = TableReference::QualifiedJoin {
                        left: Box::new(left),
                        right: Box::new(right),
                        join_type,
                        search_condition,
                    };
                }
                None => break,
            }
        }
        Ok(left)
    }

    fn parse_table_source(&mut self) -> Result<TableReference, ParserError> {
        if self.eat_token(&Token::LParen)? {
            if self.current_is_keyword(Keyword::SELECT) {
                let query = self.parse_query_expression()?;
                self.expect_token(Token::RParen)?;
                let alias = self.parse_optional_table_alias()?;
                return Ok(TableReference::Derived { query: Box::new(query), alias });
            }
            let inner = self.parse_table_reference()?;
            self.expect_token(Token::RParen)?;
            return Ok(TableReference::Parenthesis(Box::new(inner)));
        }

        if self.eat_keyword(Keyword::OPENROWSET)? {
            self.expect_token(Token::LParen)?;
            let provider = self.parse_string_literal_value()?;
            let mut arguments = Vec::new();
            while self.eat_token(&Token::Comma)? {
                arguments.push(self.parse_scalar_expression()?);
            }
            self.expect_token(Token::RParen)?;
            let alias = self.parse_optional_table_alias()?;
            return Ok(TableReference::OpenRowset { provider, arguments, alias });
        }

        if let Token::Ident(IdentToken { value, .. }) = &self.current {
            if value.starts_with('@') {
                let name = value.clone();
                self.advance()?;
                let alias = self.parse_optional_table_alias()?;
                return Ok(TableReference::Variable { name, alias });
            }
        }

        let name = self.parse_schema_object_name()?;
        if self.eat_token(&Token::LParen)? {
            let parameters = if self.current_is(&Token::RParen) {
                Vec::new()
            } else {
                self.parse_comma_separated(Self::parse_scalar_expression)?
            };
            self.expect_token(Token::RParen)?;
            let call = FunctionCall {
                name: MultiPartIdentifier::new(name.identifiers.identifiers.clone()),
                parameters,
                is_star: false,
            };
            let alias = self.parse_optional_table_alias()?;
            Ok(TableReference::FunctionCall { call, alias })
        } else {
            let alias = self.parse_optional_table_alias()?;
            let hints = self.parse_optional_table_hints()?;
            Ok(TableReference::Named { name, alias, hints })
        }
    }

    fn parse_optional_table_alias(&mut self) -> Result<Option<String>, ParserError> {
        if self.eat_keyword(Keyword::AS)? {
            return Ok(Some(self.parse_identifier()?.value));
        }
        if self.is_table_reference_boundary() {
            return Ok(None);
        }
        match self.current.clone() {
            Token::Ident(IdentToken { value, .. }) if !value.starts_with('@') => {
                self.advance()?;
                Ok(Some(value))
            }
            _ => Ok(None),
        }
    }

    fn is_table_reference_boundary(&self) -> bool {
        matches!(
            self.current,
            Token::Comma
                | Token::Semicolon
                | Token::Eof
                | Token::RParen
                | Token::Keyword(Keyword::WITH)
                | Token::Keyword(Keyword::INNER)
                | Token::Keyword(Keyword::LEFT)
                | Token::Keyword(Keyword::RIGHT)
                | Token::Keyword(Keyword::FULL)
                | Token::Keyword(Keyword::JOIN)
                | Token::Keyword(Keyword::CROSS)
                | Token::Keyword(Keyword::ON)
                | Token::Keyword(Keyword::WHERE)
                | Token::Keyword(Keyword::GROUP)
                | Token::Keyword(Keyword::ORDER)
                | Token::Keyword(Keyword::HAVING)
                | Token::Keyword(Keyword::UNION)
                | Token::Keyword(Keyword::EXCEPT)
                | Token::Keyword(Keyword::INTERSECT)
                | Token::Keyword(Keyword::OPTION)
                | Token::Keyword(Keyword::FOR)
                | Token::Keyword(Keyword::SET)
        )
    }

    fn parse_optional_table_hints(&mut self) -> Result<Vec<TableHint>, ParserError> {
        if self.eat_keyword(Keyword::WITH)? {
            self.expect_token(Token::LParen)?;
            let hints = self.parse_comma_separated(Self::parse_table_hint)?;
            self.expect_token(Token::RParen)?;
            Ok(hints)
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_table_hint(&mut self) -> Result<TableHint, ParserError> {
        let name = self.parse_identifier()?.value;
        if self.eat_token(&Token::LParen)? {
            // INDEX(name [, ...]), SPATIAL_WINDOW_MAX_CELLS(n): argument
            // detail isn't modeled, only the hint name is kept.
            while !self.current_is(&Token::RParen) {
                self.advance()?;
            }
            self.expect_token(Token::RParen)?;
        }
        Ok(TableHint { name })
    }

    fn parse_string_literal_value(&mut self) -> Result<String, ParserError> {
        match self.current.clone() {
            Token::String(s) => {
                self.advance()?;
                Ok(s)
            }
            Token::NationalString(s) => {
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
    fn simple_select() {
        let mut p = Parser::new("SELECT a, b FROM t WHERE a = 1").unwrap();
        let spec = p.parse_query_specification().unwrap();
        assert_eq!(spec.select_elements.len(), 2);
        assert!(spec.from_clause.is_some());
        assert!(spec.where_clause.is_some());
    }

    #[test]
    fn star_select() {
        let mut p = Parser::new("SELECT * FROM t").unwrap();
        let spec = p.parse_query_specification().unwrap();
        assert!(matches!(spec.select_elements[0], SelectElement::Star { qualifier: None }));
    }

    #[test]
    fn qualified_star_select() {
        let mut p = Parser::new("SELECT t.* FROM t").unwrap();
        let spec = p.parse_query_specification().unwrap();
        assert!(matches!(spec.select_elements[0], SelectElement::Star { qualifier: Some(_) }));
    }

    #[test]
    fn order_by_binds_to_outer_binary_expression() {
        let mut p =
            Parser::new("SELECT a FROM t1 INNER JOIN t2 ON t1.k = t2.k UNION ALL SELECT a FROM t3 ORDER BY a")
                .unwrap();
        let expr = p.parse_query_expression().unwrap();
        match expr {
            QueryExpression::BinaryQueryExpression(binary) => {
                assert!(binary.all);
                assert!(binary.order_by_clause.is_some());
                match *binary.first_query_expression {
                    QueryExpression::QuerySpecification(spec) => {
                        assert!(spec.order_by_clause.is_none());
                        assert!(matches!(
                            spec.from_clause.unwrap().table_references[0],
                            TableReference::QualifiedJoin { join_type: QualifiedJoinType::Inner, .. }
                        ));
                    }
                    other => panic!("expected QuerySpecification, got {:?}", other),
                }
            }
            other => panic!("expected BinaryQueryExpression, got {:?}", other),
        }
    }

    #[test]
    fn order_by_binds_to_single_specification() {
        let mut p = Parser::new("SELECT a FROM t ORDER BY a DESC").unwrap();
        let expr = p.parse_query_expression().unwrap();
        match expr {
            QueryExpression::QuerySpecification(spec) => {
                let order_by = spec.order_by_clause.unwrap();
                assert_eq!(order_by.order_by_elements[0].sort_order, Some(SortOrder::Descending));
            }
            other => panic!("expected QuerySpecification, got {:?}", other),
        }
    }

    #[test]
    fn cross_join() {
        let mut p = Parser::new("SELECT a FROM t1 CROSS JOIN t2").unwrap();
        let spec = p.parse_query_specification().unwrap();
        assert!(matches!(
            spec.from_clause.unwrap().table_references[0],
            TableReference::UnqualifiedJoin { join_type: UnqualifiedJoinType::CrossJoin, .. }
        ));
    }

    #[test]
    fn top_with_percent_and_ties() {
        let mut p = Parser::new("SELECT TOP (10) PERCENT WITH TIES a FROM t").unwrap();
        let spec = p.parse_query_specification().unwrap();
        let top = spec.top.unwrap();
        assert!(top.percent);
        assert!(top.with_ties);
    }
}
