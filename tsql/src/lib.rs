#![deny(missing_docs)]

//! The T-SQL facade: parse a script and project it to canonical JSON.
//!
//! This is the only crate in the workspace that logs anything. The lexer,
//! parser, and JSON projector stay silent so that embedding them in another
//! tool never fights that tool's own logging setup; this crate wires up
//! `log` on top of them.

pub use tsql_ast::{Batch, Script, Statement};
pub use tsql_lexer::{LexerConfig, Location};
pub use tsql_parser::{Parser, ParserError};

/// Parses a full T-SQL script (one or more `GO`-separated batches).
pub fn parse(input: &str) -> Result<Script, ParserError> {
    let mut parser = match Parser::new(input) {
        Ok(parser) => parser,
        Err(err) => {
            log::debug!("tsql::parse: failed to tokenize {} bytes of input: {err}", input.len());
            return Err(err);
        }
    };
    parse_with(&mut parser, input)
}

/// Parses a full T-SQL script using a caller-supplied lexer configuration.
pub fn parse_with_config(input: &str, config: LexerConfig) -> Result<Script, ParserError> {
    let mut parser = match Parser::new_with_config(input, config) {
        Ok(parser) => parser,
        Err(err) => {
            log::debug!("tsql::parse_with_config: failed to tokenize {} bytes of input: {err}", input.len());
            return Err(err);
        }
    };
    parse_with(&mut parser, input)
}

fn parse_with(parser: &mut Parser<'_>, input: &str) -> Result<Script, ParserError> {
    match parser.parse_script() {
        Ok(script) => {
            for (index, batch) in script.batches.iter().enumerate() {
                log::trace!("tsql::parse: batch {index} has {} statement(s)", batch.statements.len());
            }
            log::debug!("tsql::parse: parsed {} bytes into {} batch(es)", input.len(), script.batches.len());
            Ok(script)
        }
        Err(err) => {
            log::debug!("tsql::parse: failed to parse {} bytes of input: {err}", input.len());
            Err(err)
        }
    }
}

/// Projects a parsed [`Script`] into its canonical JSON representation.
pub fn to_json(script: &Script) -> serde_json::Value {
    tsql_json::to_value(script)
}

/// Pretty-prints a parsed [`Script`] as canonical JSON.
pub fn to_json_string(script: &Script) -> String {
    tsql_json::to_json_string(script)
}

/// Parses a T-SQL script and pretty-prints it as canonical JSON in one step.
pub fn parse_to_json_string(input: &str) -> Result<String, ParserError> {
    parse(input).map(|script| to_json_string(&script))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_parses_to_an_empty_script() {
        let script = parse("").unwrap();
        assert!(script.batches.is_empty());
    }

    #[test]
    fn go_separates_batches() {
        let script = parse("select 1;\nGO\nselect 2;").unwrap();
        assert_eq!(script.batches.len(), 2);
    }

    #[test]
    fn parse_to_json_string_round_trips_through_the_projector() {
        let text = parse_to_json_string("select 1;").unwrap();
        assert!(text.contains("\"$type\": \"TSqlScript\""));
    }

    #[test]
    fn invalid_input_surfaces_a_parser_error() {
        assert!(parse("select 1 where").is_err());
    }
}
