//! The parser driver: a two-token lookahead buffer over [`Lexer`], plus the
//! top-level `Script`/`Batch`/`Statement` dispatch.
//!
//! Sub-parsers live in sibling modules, each contributing `impl<'a>
//! Parser<'a>` blocks: [`ident`] (identifiers, schema object names, data
//! types), [`expression`] (scalar/boolean Pratt parsing), [`query`] (query
//! specifications, table references, joins, clauses), and `statement::*`
//! (one file per statement family).

mod expression;
mod ident;
mod query;
mod statement;

use tsql_ast::{Batch, Script, Statement};
use tsql_lexer::{Keyword, Lexer, LexerConfig, Location, Token};

use crate::error::ParserError;

/// A saved parser position, used to backtrack past a tentative parse that
/// turned out not to match (see [`Parser::checkpoint`]).
struct Checkpoint<'a> {
    lexer: Lexer<'a>,
    current: Token,
    current_location: Location,
    peek: Token,
    peek_location: Location,
}

/// The T-SQL parser: a lexer plus a `current`/`peek` token buffer.
///
/// `advance` is the only way the buffer moves forward: it shifts `peek`
/// into `current` and pulls a fresh token from the lexer into `peek`. One
/// token of lookahead is all this grammar ever needs, except for two
/// genuinely ambiguous productions (a parenthesized boolean expression vs.
/// a parenthesized scalar operand, and a `qualifier.*` select element) that
/// use [`Parser::checkpoint`]/[`Parser::restore`] to try one parse and fall
/// back to the other.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    current_location: Location,
    peek: Token,
    peek_location: Location,
}

impl<'a> Parser<'a> {
    /// Creates a parser for `input` with the default lexer configuration.
    pub fn new(input: &'a str) -> Result<Self, ParserError> {
        Self::new_with_config(input, LexerConfig::default())
    }

    /// Creates a parser for `input` with an explicit lexer configuration.
    pub fn new_with_config(input: &'a str, config: LexerConfig) -> Result<Self, ParserError> {
        let mut lexer = Lexer::with_config(input, config);
        let current_location = lexer.location();
        let current = lexer.next_token()?;
        let peek_location = lexer.location();
        let peek = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            current_location,
            peek,
            peek_location,
        })
    }

    /// Parses the whole input as a [`Script`]: an ordered sequence of
    /// non-empty batches, `GO`-separated.
    pub fn parse_script(&mut self) -> Result<Script, ParserError> {
        let mut batches = Vec::new();
        while !self.current_is(&Token::Eof) {
            let batch = self.parse_batch()?;
            if !batch.statements.is_empty() {
                batches.push(batch);
            }
        }
        Ok(Script { batches })
    }

    /// Parses statements until `GO` (consumed, not retained) or `EOF`.
    pub fn parse_batch(&mut self) -> Result<Batch, ParserError> {
        let mut statements = Vec::new();
        loop {
            if self.current_is(&Token::Eof) {
                break;
            }
            if self.eat_token(&Token::Semicolon)? {
                continue;
            }
            if self.current_ident_eq("GO") {
                self.advance()?;
                break;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(Batch { statements })
    }

    /// Parses one statement, including its optional trailing semicolon.
    pub fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        let statement = self.parse_statement_body()?;
        self.eat_token(&Token::Semicolon)?;
        Ok(statement)
    }

    // -- token buffer plumbing ------------------------------------------------

    fn advance(&mut self) -> Result<(), ParserError> {
        self.current = std::mem::replace(&mut self.peek, Token::Eof);
        self.current_location = self.peek_location;
        self.peek_location = self.lexer.location();
        self.peek = self.lexer.next_token()?;
        Ok(())
    }

    fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint {
            lexer: self.lexer.clone(),
            current: self.current.clone(),
            current_location: self.current_location,
            peek: self.peek.clone(),
            peek_location: self.peek_location,
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint<'a>) {
        self.lexer = checkpoint.lexer;
        self.current = checkpoint.current;
        self.current_location = checkpoint.current_location;
        self.peek = checkpoint.peek;
        self.peek_location = checkpoint.peek_location;
    }

    fn current_is(&self, token: &Token) -> bool {
        &self.current == token
    }

    fn current_is_keyword(&self, keyword: Keyword) -> bool {
        self.current.is_keyword(keyword)
    }

    fn peek_is_keyword(&self, keyword: Keyword) -> bool {
        self.peek.is_keyword(keyword)
    }

    fn current_ident_value(&self) -> Option<&str> {
        self.current.ident_value()
    }

    fn current_ident_eq(&self, word: &str) -> bool {
        self.current
            .ident_value()
            .is_some_and(|v| v.eq_ignore_ascii_case(word))
    }

    fn eat_token(&mut self, token: &Token) -> Result<bool, ParserError> {
        if self.current_is(token) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn eat_keyword(&mut self, keyword: Keyword) -> Result<bool, ParserError> {
        if self.current_is_keyword(keyword) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn eat_ident_eq(&mut self, word: &str) -> Result<bool, ParserError> {
        if self.current_ident_eq(word) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_token(&mut self, token: Token) -> Result<(), ParserError> {
        if self.eat_token(&token)? {
            Ok(())
        } else {
            Err(self.unexpected(&token.to_string()))
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParserError> {
        if self.eat_keyword(keyword)? {
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    fn error(&self, message: impl Into<String>) -> ParserError {
        ParserError::parse(message, self.current_location)
    }

    fn unexpected(&self, expected: &str) -> ParserError {
        self.error(format!("expected {}, got {}", expected, self.current))
    }

    fn parse_comma_separated<T>(
        &mut self,
        mut one: impl FnMut(&mut Self) -> Result<T, ParserError>,
    ) -> Result<Vec<T>, ParserError> {
        let mut items = vec![one(self)?];
        while self.eat_token(&Token::Comma)? {
            items.push(one(self)?);
        }
        Ok(items)
    }

    /// Parses an integer literal token's text into an `i64`, for data-type
    /// parameters and similar small positional integers.
    fn parse_integer_value(&mut self) -> Result<i64, ParserError> {
        match self.current.clone() {
            Token::Number(text) if !text.contains('.') => {
                let value = text
                    .parse::<i64>()
                    .map_err(|_| self.error(format!("invalid integer literal '{}'", text)))?;
                self.advance()?;
                Ok(value)
            }
            _ => Err(self.unexpected("an integer literal")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_an_empty_script() {
        let mut parser = Parser::new("").unwrap();
        let script = parser.parse_script().unwrap();
        assert!(script.batches.is_empty());
    }

    #[test]
    fn whitespace_and_comments_only_yield_an_empty_script() {
        let mut parser = Parser::new("  -- hi\n/* nothing */  ").unwrap();
        let script = parser.parse_script().unwrap();
        assert!(script.batches.is_empty());
    }

    #[test]
    fn bare_go_yields_zero_batches() {
        let mut parser = Parser::new("GO").unwrap();
        let script = parser.parse_script().unwrap();
        assert!(script.batches.is_empty());
    }

    #[test]
    fn go_separates_two_batches() {
        let mut parser = Parser::new("SELECT 1 GO SELECT 2").unwrap();
        let script = parser.parse_script().unwrap();
        assert_eq!(script.batches.len(), 2);
        assert_eq!(script.batches[0].statements.len(), 1);
        assert_eq!(script.batches[1].statements.len(), 1);
    }

    #[test]
    fn trailing_statement_without_semicolon_parses() {
        let mut parser = Parser::new("SELECT 1").unwrap();
        let script = parser.parse_script().unwrap();
        assert_eq!(script.batches.len(), 1);
        assert_eq!(script.batches[0].statements.len(), 1);
    }

    #[test]
    fn bare_label_is_recognized() {
        let mut parser = Parser::new("start: PRINT 'x'").unwrap();
        let script = parser.parse_script().unwrap();
        assert_eq!(script.batches[0].statements.len(), 2);
        match &script.batches[0].statements[0] {
            Statement::Label(l) => assert_eq!(l.label_name, "start"),
            other => panic!("expected Label, got {:?}", other),
        }
    }
}
