use std::fmt;

use tsql_lexer::{LexerError, Location};

/// Every way this crate's parsing can fail.
///
/// A `ParserError` always carries a [`Location`] so a caller can point at
/// the offending source position, even though the message alone (`expected
/// X, got Y`) is often enough on its own.
#[derive(Clone, Debug, PartialEq)]
pub enum ParserError {
    /// The lexer failed to tokenize the input.
    Tokenize(LexerError),
    /// A token stream was well-formed lexically but violated the grammar.
    Parse {
        /// Human-readable description, in the `expected X, got Y` or
        /// `unexpected token Z` shape.
        message: String,
        /// Where the offending token started.
        location: Location,
    },
}

impl ParserError {
    /// Builds a structural parse error at `location`.
    pub(crate) fn parse(message: impl Into<String>, location: Location) -> Self {
        ParserError::Parse {
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::Tokenize(e) => write!(f, "{}", e),
            ParserError::Parse { message, location } => write!(f, "{} at {}", message, location),
        }
    }
}

impl std::error::Error for ParserError {}

impl From<LexerError> for ParserError {
    fn from(e: LexerError) -> Self {
        ParserError::Tokenize(e)
    }
}
