//! `DECLARE ... CURSOR`, `OPEN`/`FETCH`/`CLOSE`/`DEALLOCATE`.

use tsql_ast::statement::{
    CloseCursorStatement, CursorOption, DeallocateCursorStatement, DeclareCursorStatement, FetchCursorStatement,
    FetchTarget, OpenCursorStatement,
};
use tsql_lexer::Keyword;

use crate::error::ParserError;

use super::super::Parser;

const CURSOR_OPTION_KEYWORDS: &[&str] =
    &["LOCAL", "GLOBAL", "FORWARD_ONLY", "SCROLL", "STATIC", "KEYSET", "DYNAMIC", "FAST_FORWARD", "READ_ONLY", "SCROLL_LOCKS", "OPTIMISTIC", "TYPE_WARNING"];

const FETCH_ORIENTATION_KEYWORDS: &[&str] = &["NEXT", "PRIOR", "FIRST", "LAST", "ABSOLUTE", "RELATIVE"];

impl<'a> Parser<'a> {
    /// `name CURSOR [options...] FOR select [FOR UPDATE [OF col, ...]]`, the
    /// `DECLARE` body once the variable-vs-cursor dispatch has ruled out a
    /// `@variable` declaration.
    pub(super) fn parse_declare_cursor_statement(&mut self) -> Result<DeclareCursorStatement, ParserError> {
        let cursor_name = self.parse_identifier()?.value;
        self.expect_keyword(Keyword::CURSOR)?;
        let mut options = Vec::new();
        while let Some(name) = self.try_eat_cursor_option()? {
            options.push(CursorOption { name });
        }
        self.expect_keyword(Keyword::FOR)?;
        let select = Box::new(self.parse_query_expression()?);
        let mut update_columns = Vec::new();
        if self.eat_keyword(Keyword::FOR)? {
            self.expect_keyword(Keyword::UPDATE)?;
            if self.eat_keyword(Keyword::OF)? {
                update_columns = self.parse_comma_separated(|p| Ok(p.parse_identifier()?.value))?;
            }
        }
        Ok(DeclareCursorStatement { cursor_name, options, select, update_columns })
    }

    fn try_eat_cursor_option(&mut self) -> Result<Option<String>, ParserError> {
        match self.current_ident_value() {
            Some(word) if CURSOR_OPTION_KEYWORDS.iter().any(|kw| word.eq_ignore_ascii_case(kw)) => {
                let name = word.to_ascii_uppercase();
                self.advance()?;
                Ok(Some(name))
            }
            _ => Ok(None),
        }
    }

    pub(super) fn parse_open_cursor_statement(&mut self) -> Result<OpenCursorStatement, ParserError> {
        self.expect_keyword(Keyword::OPEN)?;
        let cursor_name = self.parse_identifier()?.value;
        Ok(OpenCursorStatement { cursor_name })
    }

    /// `FETCH [orientation [FROM]] cursor_name [INTO @v1, @v2, ...]`.
    /// `ABSOLUTE`/`RELATIVE` additionally take a row-offset expression.
    pub(super) fn parse_fetch_cursor_statement(&mut self) -> Result<FetchCursorStatement, ParserError> {
        self.expect_keyword(Keyword::FETCH)?;

        let mut orientation = None;
        let mut offset = None;
        if let Some(word) = self.current_ident_value() {
            if FETCH_ORIENTATION_KEYWORDS.iter().any(|kw| word.eq_ignore_ascii_case(kw)) {
                let word = word.to_ascii_uppercase();
                self.advance()?;
                if word == "ABSOLUTE" || word == "RELATIVE" {
                    offset = Some(self.parse_scalar_expression()?);
                }
                orientation = Some(word);
            }
        }
        self.eat_keyword(Keyword::FROM)?;
        let cursor_name = self.parse_identifier()?.value;

        let mut into = Vec::new();
        if self.eat_keyword(Keyword::INTO)? {
            into = self.parse_comma_separated(|p| {
                let variable_name = p.parse_variable_name()?;
                Ok(FetchTarget { variable_name })
            })?;
        }
        Ok(FetchCursorStatement { cursor_name, orientation, offset, into })
    }

    pub(super) fn parse_close_cursor_statement(&mut self) -> Result<CloseCursorStatement, ParserError> {
        self.expect_keyword(Keyword::CLOSE)?;
        let cursor_name = self.parse_identifier()?.value;
        Ok(CloseCursorStatement { cursor_name })
    }

    pub(super) fn parse_deallocate_cursor_statement(&mut self) -> Result<DeallocateCursorStatement, ParserError> {
        self.expect_keyword(Keyword::DEALLOCATE)?;
        let cursor_name = self.parse_identifier()?.value;
        Ok(DeallocateCursorStatement { cursor_name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn declare_cursor_with_options() {
        let mut p = Parser::new("my_cursor CURSOR LOCAL FAST_FORWARD FOR SELECT a FROM t").unwrap();
        let stmt = p.parse_declare_cursor_statement().unwrap();
        assert_eq!(stmt.cursor_name, "my_cursor");
        assert_eq!(stmt.options.len(), 2);
    }

    #[test]
    fn fetch_next_into_variables() {
        let mut p = Parser::new("FETCH NEXT FROM my_cursor INTO @a, @b").unwrap();
        let stmt = p.parse_fetch_cursor_statement().unwrap();
        assert_eq!(stmt.orientation.as_deref(), Some("NEXT"));
        assert_eq!(stmt.into.len(), 2);
    }

    #[test]
    fn fetch_absolute_with_offset() {
        let mut p = Parser::new("FETCH ABSOLUTE 5 FROM my_cursor").unwrap();
        let stmt = p.parse_fetch_cursor_statement().unwrap();
        assert_eq!(stmt.orientation.as_deref(), Some("ABSOLUTE"));
        assert!(stmt.offset.is_some());
    }
}
