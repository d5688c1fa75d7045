//! Identifier, schema object name, and data type parsing.

use tsql_ast::{DataType, DataTypeParameter, Identifier, QuoteType, SchemaObjectName};
use tsql_lexer::{IdentToken, QuoteStyle, Token};

use crate::error::ParserError;

use super::Parser;

fn quote_type(style: QuoteStyle) -> QuoteType {
    match style {
        QuoteStyle::NotQuoted => QuoteType::NotQuoted,
        QuoteStyle::SquareBracket => QuoteType::SquareBracket,
        QuoteStyle::DoubleQuote => QuoteType::DoubleQuote,
    }
}

impl<'a> Parser<'a> {
    /// Parses a single identifier: a plain/bracketed/quoted ident token, or
    /// a keyword used as an identifier (T-SQL lets unreserved and many
    /// reserved words name objects when unambiguous in context).
    pub(super) fn parse_identifier(&mut self) -> Result<Identifier, ParserError> {
        match self.current.clone() {
            Token::Ident(IdentToken { value, quote }) => {
                self.advance()?;
                Ok(Identifier::new(value, quote_type(quote)))
            }
            Token::Keyword(keyword) => {
                self.advance()?;
                Ok(Identifier::new(keyword.as_str(), QuoteType::NotQuoted))
            }
            _ => Err(self.unexpected("an identifier")),
        }
    }

    /// Parses one part of a dotted chain, where an elided part (`a..b`)
    /// becomes an empty identifier.
    fn parse_chain_part(&mut self) -> Result<Identifier, ParserError> {
        if self.current_is(&Token::Dot) {
            Ok(Identifier::empty())
        } else {
            self.parse_identifier()
        }
    }

    /// Parses a `.`-separated chain of identifiers, preserving empty parts
    /// produced by elision (`a..b`).
    pub(super) fn parse_dotted_identifier_chain(&mut self) -> Result<Vec<Identifier>, ParserError> {
        let mut parts = vec![self.parse_chain_part()?];
        while self.eat_token(&Token::Dot)? {
            parts.push(self.parse_chain_part()?);
        }
        Ok(parts)
    }

    /// Parses a 1-to-4-part schema object name.
    pub(super) fn parse_schema_object_name(&mut self) -> Result<SchemaObjectName, ParserError> {
        let parts = self.parse_dotted_identifier_chain()?;
        if parts.is_empty() || parts.len() > 4 {
            return Err(self.error(format!(
                "a schema object name must have between 1 and 4 parts, got {}",
                parts.len()
            )));
        }
        Ok(SchemaObjectName::new(parts))
    }

    /// Parses a data type: a 1-or-2-part name plus an optional
    /// `(length|precision[, scale]|MAX)` parameter list.
    pub(super) fn parse_data_type(&mut self) -> Result<DataType, ParserError> {
        let parts = self.parse_dotted_identifier_chain()?;
        if parts.is_empty() || parts.len() > 4 {
            return Err(self.error(format!(
                "a data type name must have between 1 and 4 parts, got {}",
                parts.len()
            )));
        }

        let parameters = if self.eat_token(&Token::LParen)? {
            let params = self.parse_comma_separated(Self::parse_data_type_parameter)?;
            self.expect_token(Token::RParen)?;
            params
        } else {
            Vec::new()
        };

        if parts.len() == 1 {
            Ok(DataType::built_in(&parts[0].value, parameters))
        } else {
            Ok(DataType::qualified(SchemaObjectName::new(parts), parameters))
        }
    }

    fn parse_data_type_parameter(&mut self) -> Result<DataTypeParameter, ParserError> {
        if self.current_ident_eq("MAX") {
            self.advance()?;
            Ok(DataTypeParameter::Max)
        } else {
            Ok(DataTypeParameter::Literal(self.parse_integer_value()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_identifier() {
        let mut parser = Parser::new("foo").unwrap();
        let ident = parser.parse_identifier().unwrap();
        assert_eq!(ident.value, "foo");
        assert_eq!(ident.quote_type, QuoteType::NotQuoted);
    }

    #[test]
    fn parses_a_bracketed_identifier() {
        let mut parser = Parser::new("[My Table]").unwrap();
        let ident = parser.parse_identifier().unwrap();
        assert_eq!(ident.value, "My Table");
        assert_eq!(ident.quote_type, QuoteType::SquareBracket);
    }

    #[test]
    fn elided_chain_part_is_empty() {
        let mut parser = Parser::new("a..b").unwrap();
        let parts = parser.parse_dotted_identifier_chain().unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1], Identifier::empty());
    }

    #[test]
    fn data_type_with_two_parameters() {
        let mut parser = Parser::new("decimal(18, 2)").unwrap();
        let data_type = parser.parse_data_type().unwrap();
        assert_eq!(data_type.name.base_identifier.value, "Decimal");
        assert_eq!(
            data_type.parameters,
            vec![DataTypeParameter::Literal(18), DataTypeParameter::Literal(2)]
        );
    }

    #[test]
    fn varchar_max() {
        let mut parser = Parser::new("varchar(max)").unwrap();
        let data_type = parser.parse_data_type().unwrap();
        assert_eq!(data_type.parameters, vec![DataTypeParameter::Max]);
    }
}
