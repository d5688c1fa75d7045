/// A literal scalar value: `IntegerLiteral` / `NumericLiteral` /
/// `StringLiteral` / `BinaryLiteral` / `NullLiteral` / `DefaultLiteral` /
/// `OdbcLiteral`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum Literal {
    /// A plain integer, e.g. `42`. Kept as the original digit text since
    /// magnitude isn't this parser's concern.
    Integer(String),
    /// A decimal or floating-point number, e.g. `3.14`, `1e10`, `.5`.
    Numeric(String),
    /// A quoted string, `'it''s'` already unescaped to `it's`. `is_national`
    /// distinguishes `N'...'` (`StringLiteral.IsNational = true`) from a
    /// plain `'...'`.
    String { value: String, is_national: bool },
    /// A `0x...`/`0X...` binary literal, hex digits only, no prefix.
    Binary(String),
    /// The bare `NULL` keyword used as a value.
    Null,
    /// The bare `DEFAULT` keyword used as a value, e.g. in an `INSERT ...
    /// VALUES (DEFAULT)` row.
    Default,
    /// An ODBC escape-sequence literal, e.g. `{d '2024-01-01'}`, kept as the
    /// raw text between the braces.
    Odbc(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literal_tracks_national_flag() {
        let s = Literal::String { value: "hello".into(), is_national: true };
        match s {
            Literal::String { is_national, .. } => assert!(is_national),
            _ => panic!("expected a string literal"),
        }
    }
}
