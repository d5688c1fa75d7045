//! Scalar and boolean expression parsing: the Pratt-style precedence
//! climb described in the crate's grammar notes.
//!
//! Precedence, lowest to highest: boolean `OR`, boolean `AND`, boolean
//! primary (comparisons/`IS NULL`/`IN`/`LIKE`/`BETWEEN`), shift (`<<`
//! `>>`), additive (`+` `-`), multiplicative (`*` `/` `%`), primary.

use std::rc::Rc;

use tsql_ast::expression::{
    BinaryOperator, BooleanBinaryOperator, BooleanExpression, ComparisonOperator, FunctionCall,
    ScalarExpression, SearchedCaseExpression, SearchedWhenClause, SimpleCaseExpression,
    SimpleWhenClause, UnaryOperator,
};
use tsql_ast::types::{Literal, MultiPartIdentifier};
use tsql_lexer::{Keyword, Token};

use crate::error::ParserError;

use super::Parser;

impl<'a> Parser<'a> {
    // -- boolean expressions --------------------------------------------------

    /// Entry point for anything requiring a boolean-valued expression
    /// (`WHERE`, `HAVING`, `ON`, `IF`, `WHILE`).
    pub(super) fn parse_boolean_expression(&mut self) -> Result<BooleanExpression, ParserError> {
        self.parse_boolean_or()
    }

    fn parse_boolean_or(&mut self) -> Result<BooleanExpression, ParserError> {
        let mut left = self.parse_boolean_and()?;
        while self.eat_keyword(Keyword::OR)? {
            let right = self.parse_boolean_and()?;
            left = BooleanExpression::Binary {
                operator: BooleanBinaryOperator::Or,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_boolean_and(&mut self) -> Result<BooleanExpression, ParserError> {
        let mut left = self.parse_boolean_primary()?;
        while self.eat_keyword(Keyword::AND)? {
            let right = self.parse_boolean_primary()?;
            left = BooleanExpression::Binary {
                operator: BooleanBinaryOperator::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_boolean_primary(&mut self) -> Result<BooleanExpression, ParserError> {
        if self.eat_keyword(Keyword::NOT)? {
            let inner = self.parse_boolean_primary()?;
            return Ok(BooleanExpression::Not(Box::new(inner)));
        }
        if self.eat_keyword(Keyword::EXISTS)? {
            self.expect_token(Token::LParen)?;
            let query = self.parse_query_expression()?;
            self.expect_token(Token::RParen)?;
            return Ok(BooleanExpression::Exists(Box::new(query)));
        }
        if self.current_is(&Token::LParen) {
            let checkpoint = self.checkpoint();
            self.advance()?;
            match self.parse_boolean_expression() {
                Ok(inner) if self.current_is(&Token::RParen) => {
                    self.advance()?;
                    return Ok(BooleanExpression::Parenthesis(Box::new(inner)));
                }
                _ => self.restore(checkpoint),
            }
        }
        let left = self.parse_scalar_expression()?;
        self.parse_boolean_tail(left)
    }

    fn parse_boolean_tail(&mut self, left: ScalarExpression) -> Result<BooleanExpression, ParserError> {
        if self.eat_keyword(Keyword::IS)? {
            let is_not = self.eat_keyword(Keyword::NOT)?;
            self.expect_keyword(Keyword::NULL)?;
            return Ok(BooleanExpression::IsNull { expression: left, is_not });
        }

        let is_not = self.eat_keyword(Keyword::NOT)?;

        if self.eat_keyword(Keyword::IN)? {
            self.expect_token(Token::LParen)?;
            if self.current_is_keyword(Keyword::SELECT) {
                let subquery = self.parse_query_expression()?;
                self.expect_token(Token::RParen)?;
                return Ok(BooleanExpression::InSubquery {
                    expression: left,
                    subquery: Box::new(subquery),
                    is_not,
                });
            }
            let values = self.parse_comma_separated(Self::parse_scalar_expression)?;
            self.expect_token(Token::RParen)?;
            return Ok(BooleanExpression::InList { expression: left, values, is_not });
        }

        if self.eat_keyword(Keyword::LIKE)? {
            let pattern = self.parse_scalar_expression()?;
            let escape = if self.eat_keyword(Keyword::ESCAPE)? {
                Some(self.parse_scalar_expression()?)
            } else {
                None
            };
            return Ok(BooleanExpression::Like { expression: left, pattern, escape, is_not });
        }

        if self.eat_keyword(Keyword::BETWEEN)? {
            let low = self.parse_scalar_expression()?;
            self.expect_keyword(Keyword::AND)?;
            let high = self.parse_scalar_expression()?;
            return Ok(BooleanExpression::Between { expression: left, low, high, is_not });
        }

        if is_not {
            return Err(self.unexpected("IN, LIKE, or BETWEEN after NOT"));
        }

        let operator = self.parse_comparison_operator()?;
        let right = self.parse_scalar_expression()?;
        Ok(BooleanExpression::Comparison { operator, left, right })
    }

    fn parse_comparison_operator(&mut self) -> Result<ComparisonOperator, ParserError> {
        let operator = match &self.current {
            Token::Equals => ComparisonOperator::Equals,
            Token::NotEqual => ComparisonOperator::NotEqual,
            Token::LessThan => ComparisonOperator::LessThan,
            Token::GreaterThan => ComparisonOperator::GreaterThan,
            Token::LessOrEqual => ComparisonOperator::LessOrEqual,
            Token::GreaterOrEqual => ComparisonOperator::GreaterOrEqual,
            _ => return Err(self.unexpected("a comparison operator")),
        };
        self.advance()?;
        Ok(operator)
    }

    // -- scalar expressions -----------------------------------------------------

    /// Entry point for a value-producing expression.
    pub(super) fn parse_scalar_expression(&mut self) -> Result<ScalarExpression, ParserError> {
        self.parse_shift()
    }

    fn parse_shift(&mut self) -> Result<ScalarExpression, ParserError> {
        let mut left = self.parse_additive()?;
        loop {
            let operator = match &self.current {
                Token::LeftShift => BinaryOperator::LeftShift,
                Token::RightShift => BinaryOperator::RightShift,
                _ => break,
            };
            self.advance()?;
            let right = self.parse_additive()?;
            left = ScalarExpression::Binary { operator, left: Box::new(left), right: Box::new(right) };
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<ScalarExpression, ParserError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let operator = match &self.current {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };
            self.advance()?;
            let right = self.parse_multiplicative()?;
            left = ScalarExpression::Binary { operator, left: Box::new(left), right: Box::new(right) };
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<ScalarExpression, ParserError> {
        let mut left = self.parse_primary_expression()?;
        loop {
            let operator = match &self.current {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                Token::Modulo => BinaryOperator::Modulo,
                _ => break,
            };
            self.advance()?;
            let right = self.parse_primary_expression()?;
            left = ScalarExpression::Binary { operator, left: Box::new(left), right: Box::new(right) };
        }
        Ok(left)
    }

    /// The `Primary` production. Exposed to `query` for `TOP n` (without
    /// parens) and similar bare-primary positions.
    pub(super) fn parse_primary_expression(&mut self) -> Result<ScalarExpression, ParserError> {
        match self.current.clone() {
            Token::Keyword(Keyword::NULL) => {
                self.advance()?;
                Ok(ScalarExpression::Literal(Literal::Null))
            }
            Token::Keyword(Keyword::DEFAULT) => {
                self.advance()?;
                Ok(ScalarExpression::Literal(Literal::Default))
            }
            Token::Plus => {
                self.advance()?;
                let operand = Box::new(self.parse_primary_expression()?);
                Ok(ScalarExpression::Unary { operator: UnaryOperator::Positive, operand })
            }
            Token::Minus => {
                self.advance()?;
                let operand = Box::new(self.parse_primary_expression()?);
                Ok(ScalarExpression::Unary { operator: UnaryOperator::Negative, operand })
            }
            Token::Number(text) => {
                self.advance()?;
                if text.contains('.') {
                    Ok(ScalarExpression::Literal(Literal::Numeric(text)))
                } else {
                    Ok(ScalarExpression::Literal(Literal::Integer(text)))
                }
            }
            Token::String(value) => {
                self.advance()?;
                Ok(ScalarExpression::Literal(Literal::String { value, is_national: false }))
            }
            Token::NationalString(value) => {
                self.advance()?;
                Ok(ScalarExpression::Literal(Literal::String { value, is_national: true }))
            }
            Token::Binary(value) => {
                self.advance()?;
                Ok(ScalarExpression::Literal(Literal::Binary(value)))
            }
            Token::LBrace => self.parse_odbc_literal(),
            Token::LParen => self.parse_parenthesis_or_subquery(),
            Token::Keyword(Keyword::CASE) => self.parse_case_expression(),
            Token::Keyword(Keyword::CAST) => self.parse_cast_expression(),
            Token::Keyword(Keyword::CONVERT) => self.parse_convert_expression(),
            Token::Ident(ident) if ident.value.starts_with("@@") => {
                self.advance()?;
                Ok(ScalarExpression::GlobalVariable(ident.value))
            }
            Token::Ident(ident) if ident.value.starts_with('@') => {
                self.advance()?;
                Ok(ScalarExpression::Variable(ident.value))
            }
            Token::Ident(_) => self.parse_column_reference_or_function_call(),
            _ => Err(self.unexpected("an expression")),
        }
    }

    fn parse_column_reference_or_function_call(&mut self) -> Result<ScalarExpression, ParserError> {
        let parts = self.parse_dotted_identifier_chain()?;
        let name = MultiPartIdentifier::new(parts.into_iter().map(Rc::new).collect());
        if self.eat_token(&Token::LParen)? {
            let (parameters, is_star) = if self.eat_token(&Token::Star)? {
                (Vec::new(), true)
            } else if self.current_is(&Token::RParen) {
                (Vec::new(), false)
            } else {
                (self.parse_comma_separated(Self::parse_scalar_expression)?, false)
            };
            self.expect_token(Token::RParen)?;
            Ok(ScalarExpression::FunctionCall(FunctionCall { name, parameters, is_star }))
        } else {
            Ok(ScalarExpression::ColumnReference(name))
        }
    }

    fn parse_parenthesis_or_subquery(&mut self) -> Result<ScalarExpression, ParserError> {
        self.expect_token(Token::LParen)?;
        if self.current_is_keyword(Keyword::SELECT) {
            let query = self.parse_query_expression()?;
            self.expect_token(Token::RParen)?;
            Ok(ScalarExpression::ScalarSubquery(Box::new(query)))
        } else {
            let inner = self.parse_scalar_expression()?;
            self.expect_token(Token::RParen)?;
            Ok(ScalarExpression::Parenthesis(Box::new(inner)))
        }
    }

    /// `{ guid ['|N']'...' }`, an ODBC escape-sequence literal. Kept as its
    /// raw inner text (the escape-sequence keyword plus the string).
    fn parse_odbc_literal(&mut self) -> Result<ScalarExpression, ParserError> {
        self.expect_token(Token::LBrace)?;
        let keyword = self.parse_identifier()?;
        let value = match self.current.clone() {
            Token::NationalString(s) => {
                self.advance()?;
                format!("N'{}'", s)
            }
            Token::String(s) => {
                self.advance()?;
                format!("'{}'", s)
            }
            _ => return Err(self.unexpected("a string literal")),
        };
        self.expect_token(Token::RBrace)?;
        Ok(ScalarExpression::Literal(Literal::Odbc(format!("{} {}", keyword.value, value))))
    }

    fn parse_case_expression(&mut self) -> Result<ScalarExpression, ParserError> {
        self.expect_keyword(Keyword::CASE)?;
        if self.current_is_keyword(Keyword::WHEN) {
            let mut when_clauses = Vec::new();
            while self.eat_keyword(Keyword::WHEN)? {
                let when_expression = self.parse_boolean_expression()?;
                self.expect_keyword(Keyword::THEN)?;
                let then_expression = self.parse_scalar_expression()?;
                when_clauses.push(SearchedWhenClause { when_expression, then_expression });
            }
            let else_expression = self.parse_optional_case_else()?;
            self.expect_keyword(Keyword::END)?;
            Ok(ScalarExpression::SearchedCase(SearchedCaseExpression { when_clauses, else_expression }))
        } else {
            let input_expression = Box::new(self.parse_scalar_expression()?);
            let mut when_clauses = Vec::new();
            while self.eat_keyword(Keyword::WHEN)? {
                let when_expression = self.parse_scalar_expression()?;
                self.expect_keyword(Keyword::THEN)?;
                let then_expression = self.parse_scalar_expression()?;
                when_clauses.push(SimpleWhenClause { when_expression, then_expression });
            }
            let else_expression = self.parse_optional_case_else()?;
            self.expect_keyword(Keyword::END)?;
            Ok(ScalarExpression::SimpleCase(SimpleCaseExpression {
                input_expression,
                when_clauses,
                else_expression,
            }))
        }
    }

    fn parse_optional_case_else(&mut self) -> Result<Option<Box<ScalarExpression>>, ParserError> {
        if self.eat_keyword(Keyword::ELSE)? {
            Ok(Some(Box::new(self.parse_scalar_expression()?)))
        } else {
            Ok(None)
        }
    }

    fn parse_cast_expression(&mut self) -> Result<ScalarExpression, ParserError> {
        self.expect_keyword(Keyword::CAST)?;
        self.expect_token(Token::LParen)?;
        let expression = Box::new(self.parse_scalar_expression()?);
        self.expect_keyword(Keyword::AS)?;
        let target_type = self.parse_data_type()?;
        self.expect_token(Token::RParen)?;
        Ok(ScalarExpression::Cast { target_type, expression })
    }

    /// `CONVERT(type, expr [, style])`. The style argument has no AST field
    /// (the node only models the `CAST`-equivalent shape) so it is parsed
    /// and discarded.
    fn parse_convert_expression(&mut self) -> Result<ScalarExpression, ParserError> {
        self.expect_keyword(Keyword::CONVERT)?;
        self.expect_token(Token::LParen)?;
        let target_type = self.parse_data_type()?;
        self.expect_token(Token::Comma)?;
        let expression = Box::new(self.parse_scalar_expression()?);
        if self.eat_token(&Token::Comma)? {
            self.parse_scalar_expression()?;
        }
        self.expect_token(Token::RParen)?;
        Ok(ScalarExpression::Cast { target_type, expression })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn integer_vs_numeric_literal() {
        let mut p = Parser::new("1").unwrap();
        assert_eq!(p.parse_scalar_expression().unwrap(), ScalarExpression::Literal(Literal::Integer("1".into())));
        let mut p = Parser::new("1.5").unwrap();
        assert_eq!(p.parse_scalar_expression().unwrap(), ScalarExpression::Literal(Literal::Numeric("1.5".into())));
    }

    #[test]
    fn arithmetic_precedence() {
        let mut p = Parser::new("1 + 2 * 3").unwrap();
        let expr = p.parse_scalar_expression().unwrap();
        match expr {
            ScalarExpression::Binary { operator: BinaryOperator::Add, right, .. } => {
                assert!(matches!(*right, ScalarExpression::Binary { operator: BinaryOperator::Multiply, .. }));
            }
            other => panic!("expected top-level Add, got {:?}", other),
        }
    }

    #[test]
    fn comparison_builds_boolean_expression() {
        let mut p = Parser::new("a = 1").unwrap();
        let expr = p.parse_boolean_expression().unwrap();
        assert!(matches!(expr, BooleanExpression::Comparison { operator: ComparisonOperator::Equals, .. }));
    }

    #[test]
    fn between_binds_tighter_than_and() {
        let mut p = Parser::new("a BETWEEN 1 AND 2 AND b = 3").unwrap();
        let expr = p.parse_boolean_expression().unwrap();
        match expr {
            BooleanExpression::Binary { operator: BooleanBinaryOperator::And, left, .. } => {
                assert!(matches!(*left, BooleanExpression::Between { is_not: false, .. }));
            }
            other => panic!("expected top-level And, got {:?}", other),
        }
    }

    #[test]
    fn not_in_list() {
        let mut p = Parser::new("a NOT IN (1, 2, 3)").unwrap();
        let expr = p.parse_boolean_expression().unwrap();
        match expr {
            BooleanExpression::InList { is_not, values, .. } => {
                assert!(is_not);
                assert_eq!(values.len(), 3);
            }
            other => panic!("expected InList, got {:?}", other),
        }
    }

    #[test]
    fn national_string_literal() {
        let mut p = Parser::new("N'x'").unwrap();
        let expr = p.parse_scalar_expression().unwrap();
        assert_eq!(
            expr,
            ScalarExpression::Literal(Literal::String { value: "x".into(), is_national: true })
        );
    }

    #[test]
    fn searched_case_expression() {
        let mut p = Parser::new("CASE WHEN a = 1 THEN 'x' ELSE 'y' END").unwrap();
        let expr = p.parse_scalar_expression().unwrap();
        match expr {
            ScalarExpression::SearchedCase(case) => {
                assert_eq!(case.when_clauses.len(), 1);
                assert!(case.else_expression.is_some());
            }
            other => panic!("expected SearchedCase, got {:?}", other),
        }
    }

    #[test]
    fn simple_case_expression() {
        let mut p = Parser::new("CASE a WHEN 1 THEN 'one' END").unwrap();
        let expr = p.parse_scalar_expression().unwrap();
        assert!(matches!(expr, ScalarExpression::SimpleCase(_)));
    }

    #[test]
    fn function_call_with_star() {
        let mut p = Parser::new("COUNT(*)").unwrap();
        let expr = p.parse_scalar_expression().unwrap();
        match expr {
            ScalarExpression::FunctionCall(call) => assert!(call.is_star),
            other => panic!("expected FunctionCall, got {:?}", other),
        }
    }

    #[test]
    fn cast_expression() {
        let mut p = Parser::new("CAST(a AS INT)").unwrap();
        let expr = p.parse_scalar_expression().unwrap();
        match expr {
            ScalarExpression::Cast { target_type, .. } => {
                assert_eq!(target_type.name.base_identifier.value, "Int");
            }
            other => panic!("expected Cast, got {:?}", other),
        }
    }
}
