//! # tsql-parser
//!
//! A hand-written recursive-descent parser with Pratt-style operator
//! precedence for Transact-SQL. Drives [`tsql_lexer::Lexer`] through a
//! two-token lookahead buffer and builds the closed AST defined by
//! `tsql-ast`.
//!
//! This crate does no logging of its own; observability is the facade
//! crate's job.

#![deny(missing_docs)]

mod error;
mod options;
mod parser;

pub use error::ParserError;
pub use parser::Parser;
pub use tsql_lexer::{Location, LexerConfig};
