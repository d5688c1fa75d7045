use std::fmt;

use crate::keyword::Keyword;

/// The quoting style an identifier lexeme was scanned with.
///
/// Mirrors the `Identifier` quote-style tag in the AST crate;
/// `DoubleQuote` is reserved (T-SQL's default `QUOTED_IDENTIFIER` setting
/// uses square brackets, and this front end never scans a double-quoted
/// delimited identifier as anything but a string literal) but kept as a
/// variant so the AST and the lexer agree on the full set.
#[doc(hidden)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum QuoteStyle {
    NotQuoted,
    SquareBracket,
    DoubleQuote,
}

/// An identifier lexeme, already decoded (sigils/brackets stripped from
/// `value`, but the sigil itself is kept for `@`/`@@` variable references
/// since the parser needs it to distinguish `VariableReference` from
/// `GlobalVariableExpression`).
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct IdentToken {
    /// Decoded value. For `[Foo Bar]` this is `Foo Bar`; for `@x` this is
    /// `@x`; for `@@ROWCOUNT` this is `@@ROWCOUNT`; for a plain identifier
    /// it is the identifier text itself.
    pub value: String,
    pub quote: QuoteStyle,
}

/// A single lexical token, tagged with its kind and carrying the original
/// lexeme where that is semantically relevant.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Token {
    Eof,

    Semicolon,
    Comma,
    Dot,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    ColonColon,
    Colon,
    Star,

    Plus,
    Minus,
    Slash,
    Modulo,
    Equals,
    NotEqual,
    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
    LeftShift,
    RightShift,

    Number(String),
    String(String),
    NationalString(String),
    Binary(String),

    Ident(IdentToken),
    Keyword(Keyword),
}

impl Token {
    /// Builds an `Ident` token.
    pub fn ident(value: impl Into<String>, quote: QuoteStyle) -> Self {
        Token::Ident(IdentToken {
            value: value.into(),
            quote,
        })
    }

    /// Returns the decoded identifier text, if this token is an identifier
    /// or keyword (keywords are always valid unquoted identifiers too).
    pub fn ident_value(&self) -> Option<&str> {
        match self {
            Token::Ident(ident) => Some(&ident.value),
            Token::Keyword(kw) => Some(kw.as_str()),
            _ => None,
        }
    }

    /// Returns whether this token is the given reserved keyword.
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Token::Keyword(k) if *k == keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => f.write_str("<EOF>"),
            Token::Semicolon => f.write_str(";"),
            Token::Comma => f.write_str(","),
            Token::Dot => f.write_str("."),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::LBracket => f.write_str("["),
            Token::RBracket => f.write_str("]"),
            Token::LBrace => f.write_str("{"),
            Token::RBrace => f.write_str("}"),
            Token::ColonColon => f.write_str("::"),
            Token::Colon => f.write_str(":"),
            Token::Star => f.write_str("*"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Slash => f.write_str("/"),
            Token::Modulo => f.write_str("%"),
            Token::Equals => f.write_str("="),
            Token::NotEqual => f.write_str("<>"),
            Token::LessThan => f.write_str("<"),
            Token::GreaterThan => f.write_str(">"),
            Token::LessOrEqual => f.write_str("<="),
            Token::GreaterOrEqual => f.write_str(">="),
            Token::LeftShift => f.write_str("<<"),
            Token::RightShift => f.write_str(">>"),
            Token::Number(s) => write!(f, "{}", s),
            Token::String(s) => write!(f, "'{}'", s),
            Token::NationalString(s) => write!(f, "N'{}'", s),
            Token::Binary(s) => write!(f, "{}", s),
            Token::Ident(ident) => write!(f, "{}", ident.value),
            Token::Keyword(kw) => write!(f, "{}", kw.as_str()),
        }
    }
}
