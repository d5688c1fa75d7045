#![deny(missing_docs)]

//! The closed AST model for the T-SQL front end: tokens feed a parser that
//! builds these node types; nothing downstream mutates them.

pub mod expression;
pub mod query;
pub mod statement;
pub mod types;

pub use statement::{Batch, Script, Statement};
