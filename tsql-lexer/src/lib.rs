//! # tsql-lexer
//!
//! Hand-written lexer for Transact-SQL. Consumes a source string and emits a
//! stream of [`Token`]s, classifying T-SQL-specific lexical categories
//! (bracketed identifiers, `@`/`@@` variable sigils, `N'...'` national
//! strings, `0x...` binary literals, composite operators).

#![deny(missing_docs)]

mod config;
mod error;
mod keyword;
mod lexer;
mod tokens;

pub use self::{
    config::LexerConfig,
    error::{LexerError, Location},
    keyword::Keyword,
    lexer::Lexer,
    tokens::{IdentToken, QuoteStyle, Token},
};
