//! `Identifier` / `MultiPartIdentifier` / `SchemaObjectName` projection,
//! including the `$ref` back-reference rule: a [`SchemaObjectName`]'s role
//! fields (`ServerIdentifier`, `DatabaseIdentifier`, ...) and its
//! `Identifiers` array share the same `Rc` allocations, and an array entry
//! reachable through a role field is projected as `{"$ref": "Identifier"}`
//! rather than duplicated in full.

use std::rc::Rc;

use serde_json::Value;
use tsql_ast::types::{Identifier, MultiPartIdentifier, QuoteType, SchemaObjectName};

use crate::builder::ObjectBuilder;

pub(crate) fn identifier(id: &Identifier) -> Value {
    ObjectBuilder::new("Identifier")
        .field("Value", Value::String(id.value.clone()))
        .field("QuoteType", Value::String(quote_type_str(id.quote_type).to_string()))
        .build()
}

fn quote_type_str(quote_type: QuoteType) -> &'static str {
    match quote_type {
        QuoteType::NotQuoted => "NotQuoted",
        QuoteType::SquareBracket => "SquareBracket",
        QuoteType::DoubleQuote => "DoubleQuote",
    }
}

pub(crate) fn multi_part_identifier(name: &MultiPartIdentifier) -> Value {
    let identifiers = name.identifiers.iter().map(|id| identifier(id)).collect();
    ObjectBuilder::new("MultiPartIdentifier").arr("Identifiers", identifiers).build()
}

pub(crate) fn schema_object_name(name: &SchemaObjectName) -> Value {
    let role_ids: Vec<&Rc<Identifier>> = std::iter::once(&name.base_identifier)
        .chain(name.server_identifier.iter())
        .chain(name.database_identifier.iter())
        .chain(name.schema_identifier.iter())
        .collect();

    let identifiers = name
        .identifiers
        .identifiers
        .iter()
        .map(|id| {
            if role_ids.iter().any(|role| Rc::ptr_eq(role, id)) {
                serde_json::json!({ "$ref": "Identifier" })
            } else {
                identifier(id)
            }
        })
        .collect();

    ObjectBuilder::new("SchemaObjectName")
        .field("BaseIdentifier", identifier(&name.base_identifier))
        .opt("ServerIdentifier", name.server_identifier.as_deref().map(identifier))
        .opt("DatabaseIdentifier", name.database_identifier.as_deref().map(identifier))
        .opt("SchemaIdentifier", name.schema_identifier.as_deref().map(identifier))
        .arr("Identifiers", identifiers)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsql_ast::types::Identifier as Ident;

    #[test]
    fn unqualified_name_has_no_role_fields() {
        let name = SchemaObjectName::unqualified(Ident::new("t", QuoteType::NotQuoted));
        let value = schema_object_name(&name);
        assert!(value.get("SchemaIdentifier").is_none());
        assert!(value.get("DatabaseIdentifier").is_none());
        assert_eq!(value["Identifiers"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn shared_role_identifier_becomes_a_ref_in_the_array() {
        let name = SchemaObjectName::new(vec![Ident::new("dbo", QuoteType::NotQuoted), Ident::new("t", QuoteType::NotQuoted)]);
        let value = schema_object_name(&name);
        assert_eq!(value["SchemaIdentifier"]["Value"], "dbo");
        assert_eq!(value["Identifiers"][0], serde_json::json!({ "$ref": "Identifier" }));
        assert_eq!(value["Identifiers"][1], serde_json::json!({ "$ref": "Identifier" }));
    }
}
