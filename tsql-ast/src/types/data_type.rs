use super::ident::{Identifier, QuoteType};
use super::object::SchemaObjectName;

/// A column/variable/parameter data type: either one of the built-in names
/// ScriptDom recognizes natively, or a schema-qualified name referring to a
/// user-defined type or CLR type.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DataType {
    pub name: SchemaObjectName,
    /// Precision/scale/length parameters, e.g. `(10, 2)` or `(MAX)`.
    pub parameters: Vec<DataTypeParameter>,
}

/// One parenthesized parameter of a data type, e.g. the `10` and `2` in
/// `DECIMAL(10, 2)`, or the literal `MAX` in `VARCHAR(MAX)`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum DataTypeParameter {
    Literal(i64),
    Max,
}

impl DataType {
    /// Builds a data type from an unqualified built-in name, canonicalizing
    /// its spelling (e.g. `INT` -> `Int`,
    /// `NVARCHAR` -> `NVarChar`, `DATETIME2` -> `DateTime2`).
    pub fn built_in(raw_name: &str, parameters: Vec<DataTypeParameter>) -> Self {
        let canonical = canonicalize_built_in_name(raw_name);
        let identifier = Identifier::new(canonical, QuoteType::NotQuoted);
        Self {
            name: SchemaObjectName::unqualified(identifier),
            parameters,
        }
    }

    /// Builds a data type from a possibly schema-qualified name (a
    /// user-defined or CLR type). The name is left exactly as written: only
    /// the built-in spellings get canonicalized.
    pub fn qualified(name: SchemaObjectName, parameters: Vec<DataTypeParameter>) -> Self {
        Self { name, parameters }
    }
}

/// Maps a built-in type keyword's raw spelling (case-insensitive) to its
/// canonical ScriptDom-style name. Falls back to returning `raw` unchanged
/// (title-cased per its first letter) for anything not in the table, so an
/// unrecognized-but-syntactically-valid type name still round-trips.
fn canonicalize_built_in_name(raw: &str) -> String {
    let upper = raw.to_ascii_uppercase();
    let canonical = match upper.as_str() {
        "BIGINT" => "BigInt",
        "BINARY" => "Binary",
        "BIT" => "Bit",
        "CHAR" => "Char",
        "CHARACTER" => "Char",
        "CURSOR" => "Cursor",
        "DATE" => "Date",
        "DATETIME" => "DateTime",
        "DATETIME2" => "DateTime2",
        "DATETIMEOFFSET" => "DateTimeOffset",
        "DECIMAL" => "Decimal",
        "DEC" => "Decimal",
        "FLOAT" => "Float",
        "GEOGRAPHY" => "Geography",
        "GEOMETRY" => "Geometry",
        "HIERARCHYID" => "HierarchyId",
        "IMAGE" => "Image",
        "INT" => "Int",
        "INTEGER" => "Int",
        "MONEY" => "Money",
        "NCHAR" => "NChar",
        "NTEXT" => "NText",
        "NUMERIC" => "Numeric",
        "NVARCHAR" => "NVarChar",
        "REAL" => "Real",
        "ROWVERSION" => "RowVersion",
        "SMALLDATETIME" => "SmallDateTime",
        "SMALLINT" => "SmallInt",
        "SMALLMONEY" => "SmallMoney",
        "SQL_VARIANT" => "Sql_Variant",
        "SYSNAME" => "Sysname",
        "TABLE" => "Table",
        "TEXT" => "Text",
        "TIME" => "Time",
        "TIMESTAMP" => "Timestamp",
        "TINYINT" => "TinyInt",
        "UNIQUEIDENTIFIER" => "UniqueIdentifier",
        "VARBINARY" => "VarBinary",
        "VARCHAR" => "VarChar",
        "XML" => "Xml",
        _ => return raw.to_string(),
    };
    canonical.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_regardless_of_source_casing() {
        let dt = DataType::built_in("nvarchar", vec![DataTypeParameter::Max]);
        assert_eq!(dt.name.base_identifier.value, "NVarChar");
        assert_eq!(dt.parameters, vec![DataTypeParameter::Max]);
    }

    #[test]
    fn decimal_keeps_precision_and_scale() {
        let dt = DataType::built_in(
            "DECIMAL",
            vec![DataTypeParameter::Literal(10), DataTypeParameter::Literal(2)],
        );
        assert_eq!(dt.name.base_identifier.value, "Decimal");
        assert_eq!(
            dt.parameters,
            vec![DataTypeParameter::Literal(10), DataTypeParameter::Literal(2)]
        );
    }

    #[test]
    fn sql_variant_has_an_underscore_in_its_canonical_name() {
        assert_eq!(DataType::built_in("sql_variant", vec![]).name.base_identifier.value, "Sql_Variant");
    }
}
