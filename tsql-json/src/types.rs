//! `DataType` / `Literal` projection. Built-in type names are already
//! canonicalized to their ScriptDom-style spelling by
//! `tsql_ast::types::DataType::built_in` at parse time, so this module only
//! has to project the value, not re-derive it.

use serde_json::Value;
use tsql_ast::types::{DataType, DataTypeParameter, Literal};

use crate::builder::ObjectBuilder;
use crate::ident::schema_object_name;

pub(crate) fn data_type(data_type: &DataType) -> Value {
    let parameters = data_type.parameters.iter().map(data_type_parameter).collect();
    ObjectBuilder::new("DataType")
        .field("Name", schema_object_name(&data_type.name))
        .arr("Parameters", parameters)
        .build()
}

fn data_type_parameter(parameter: &DataTypeParameter) -> Value {
    match parameter {
        DataTypeParameter::Literal(n) => ObjectBuilder::new("DataTypeParameter")
            .field("Value", Value::String(n.to_string()))
            .field("IsMax", Value::Bool(false))
            .build(),
        DataTypeParameter::Max => ObjectBuilder::new("DataTypeParameter")
            .field("Value", Value::String("MAX".to_string()))
            .field("IsMax", Value::Bool(true))
            .build(),
    }
}

pub(crate) fn literal(literal: &Literal) -> Value {
    match literal {
        Literal::Integer(text) => ObjectBuilder::new("IntegerLiteral")
            .field("LiteralType", Value::String("Integer".to_string()))
            .field("Value", Value::String(text.clone()))
            .build(),
        Literal::Numeric(text) => ObjectBuilder::new("NumericLiteral")
            .field("LiteralType", Value::String("Numeric".to_string()))
            .field("Value", Value::String(text.clone()))
            .build(),
        Literal::String { value, is_national } => ObjectBuilder::new("StringLiteral")
            .field("LiteralType", Value::String("String".to_string()))
            .field("Value", Value::String(value.clone()))
            .field("IsNational", Value::Bool(*is_national))
            .build(),
        Literal::Binary(text) => ObjectBuilder::new("BinaryLiteral")
            .field("LiteralType", Value::String("Binary".to_string()))
            .field("Value", Value::String(text.clone()))
            .build(),
        Literal::Null => ObjectBuilder::new("NullLiteral").field("LiteralType", Value::String("Null".to_string())).build(),
        Literal::Default => {
            ObjectBuilder::new("DefaultLiteral").field("LiteralType", Value::String("Default".to_string())).build()
        }
        Literal::Odbc(text) => ObjectBuilder::new("OdbcLiteral")
            .field("LiteralType", Value::String("Odbc".to_string()))
            .field("Value", Value::String(text.clone()))
            .build(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsql_ast::types::{Identifier, QuoteType, SchemaObjectName};

    #[test]
    fn max_parameter_sets_is_max() {
        let dt = DataType::qualified(
            SchemaObjectName::unqualified(Identifier::new("VarChar", QuoteType::NotQuoted)),
            vec![DataTypeParameter::Max],
        );
        let value = data_type(&dt);
        assert_eq!(value["Parameters"][0]["IsMax"], true);
    }

    #[test]
    fn national_string_literal_keeps_the_flag_even_when_false() {
        let value = literal(&Literal::String { value: "x".into(), is_national: false });
        assert_eq!(value["IsNational"], false);
    }

    #[test]
    fn every_literal_carries_its_literal_type() {
        assert_eq!(literal(&Literal::Integer("1".into()))["LiteralType"], "Integer");
        assert_eq!(literal(&Literal::Numeric("1.5".into()))["LiteralType"], "Numeric");
        assert_eq!(literal(&Literal::String { value: "x".into(), is_national: true })["LiteralType"], "String");
        assert_eq!(literal(&Literal::Binary("0x1".into()))["LiteralType"], "Binary");
        assert_eq!(literal(&Literal::Null)["LiteralType"], "Null");
        assert_eq!(literal(&Literal::Default)["LiteralType"], "Default");
        assert_eq!(literal(&Literal::Odbc("{d '2020-01-01'}".into()))["LiteralType"], "Odbc");
    }
}
