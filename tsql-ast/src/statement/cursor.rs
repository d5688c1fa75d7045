use crate::expression::ScalarExpression;
use crate::query::QueryExpression;

/// Scroll/concurrency options that can precede `CURSOR FOR` in a
/// `DECLARE CURSOR` statement, e.g. `LOCAL`, `FORWARD_ONLY`, `STATIC`,
/// `READ_ONLY`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CursorOption {
    pub name: String,
}

/// `DECLARE name CURSOR [options...] FOR select_statement [FOR UPDATE [OF col, ...]]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DeclareCursorStatement {
    pub cursor_name: String,
    pub options: Vec<CursorOption>,
    pub select: Box<QueryExpression>,
    pub update_columns: Vec<String>,
}

/// `OPEN cursor_name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct OpenCursorStatement {
    pub cursor_name: String,
}

/// One `INTO @variable` target of a `FETCH`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct FetchTarget {
    pub variable_name: String,
}

/// `FETCH [orientation] FROM cursor_name [INTO @v1, @v2, ...]`.
///
/// `orientation` holds the raw keyword (`"NEXT"`, `"PRIOR"`, `"FIRST"`,
/// `"LAST"`, `"ABSOLUTE"`, `"RELATIVE"`) when present; `offset` carries the
/// row count expression that follows `ABSOLUTE`/`RELATIVE`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct FetchCursorStatement {
    pub cursor_name: String,
    pub orientation: Option<String>,
    pub offset: Option<ScalarExpression>,
    pub into: Vec<FetchTarget>,
}

/// `CLOSE cursor_name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CloseCursorStatement {
    pub cursor_name: String,
}

/// `DEALLOCATE cursor_name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct DeallocateCursorStatement {
    pub cursor_name: String,
}
