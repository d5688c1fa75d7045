#![deny(missing_docs)]

//! Canonical JSON projection of a parsed T-SQL [`Script`].
//!
//! The projection follows a few fixed rules applied uniformly by
//! [`builder::ObjectBuilder`]: every object's first member is a `$type`
//! discriminator; absent optional fields and empty collections are omitted;
//! booleans and "not specified"-style enum strings are always present, even
//! when they carry a default value; and a [`tsql_ast::types::SchemaObjectName`]
//! identifier shared between its `Identifiers` array and a role field
//! (`BaseIdentifier`, `SchemaIdentifier`, ...) is projected once in full and
//! referenced elsewhere as `{"$ref": "Identifier"}`.
//!
//! Built-in data-type names and `WITH`-option names are already canonicalized
//! by `tsql-ast`/`tsql-parser` at parse time, so this crate never re-derives
//! them; it only serializes what the AST already holds.

mod builder;
mod expression;
mod ident;
mod query;
mod statement;
mod types;

use serde_json::Value;
use tsql_ast::{Batch, Script};

use crate::builder::ObjectBuilder;
use crate::statement::statement;

fn batch(b: &Batch) -> Value {
    ObjectBuilder::new("TSqlBatch").arr("Statements", b.statements.iter().map(statement).collect()).build()
}

/// Projects a parsed [`Script`] into its canonical JSON representation.
pub fn to_value(script: &Script) -> Value {
    ObjectBuilder::new("TSqlScript").arr("Batches", script.batches.iter().map(batch).collect()).build()
}

/// Pretty-prints a parsed [`Script`] as canonical JSON.
///
/// Serialization of the projected [`Value`] tree cannot fail for the string
/// data an AST can hold, so this never panics: an unexpected failure yields
/// an empty string rather than an `unwrap`.
pub fn to_json_string(script: &Script) -> String {
    serde_json::to_string_pretty(&to_value(script)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsql_ast::statement::{BreakStatement, Statement};

    #[test]
    fn empty_script_has_no_batches() {
        let script = Script { batches: vec![] };
        let value = to_value(&script);
        assert_eq!(value["$type"], "TSqlScript");
        assert!(value.get("Batches").is_none());
    }

    #[test]
    fn batch_wraps_its_statements() {
        let script = Script { batches: vec![Batch { statements: vec![Statement::Break(BreakStatement)] }] };
        let value = to_value(&script);
        let batches = value["Batches"].as_array().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0]["Statements"][0]["$type"], "BreakStatement");
    }

    #[test]
    fn to_json_string_is_pretty_printed() {
        let script = Script { batches: vec![Batch { statements: vec![Statement::Break(BreakStatement)] }] };
        let text = to_json_string(&script);
        assert!(text.contains("\n"));
        assert!(text.contains("\"$type\": \"TSqlScript\""));
    }
}
