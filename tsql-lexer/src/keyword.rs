//! The fixed, process-wide T-SQL keyword table: a single case-insensitive
//! mapping from uppercase lexeme to token kind, built once and consulted on
//! every identifier scan. This is the only process-wide state.
//!
//! Unlike the ancestor `usql` project, which parameterized the keyword set
//! over a `Dialect` type to support ANSI/MySQL/PostgreSQL/SQLite side by
//! side, this project targets exactly one grammar, so the keyword table is
//! a flat, non-generic array.

/// Defines the `Keyword` enum together with a `KEYWORDS` array of
/// `(uppercase spelling, Keyword)` pairs, sorted so that [`lookup`] can
/// binary-search it.
///
/// **NOTE**: entries must stay sorted alphabetically.
macro_rules! define_keywords {
    ($($variant:ident),* $(,)?) => {
        /// A recognized T-SQL reserved word.
        #[doc(hidden)]
        #[allow(non_camel_case_types)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub enum Keyword {
            $($variant),*
        }

        impl Keyword {
            /// The canonical uppercase spelling of this keyword.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => stringify!($variant)),*
                }
            }
        }

        const KEYWORDS: &[(&str, Keyword)] = &[
            $((stringify!($variant), Keyword::$variant)),*
        ];
    };
}

define_keywords! {
    ADD,
    AGGREGATE,
    ALGORITHM,
    ALL,
    ALTER,
    AND,
    APPLY,
    AS,
    ASC,
    ASYMMETRIC,
    AUTHORIZATION,
    AVAILABILITY,
    BEGIN,
    BETWEEN,
    BINDING,
    BREAK,
    BROKER,
    BY,
    CASCADE,
    CASE,
    CAST,
    CATCH,
    CERTIFICATE,
    CHECK,
    CHECKPOINT,
    CLOSE,
    CLUSTERED,
    COLLATE,
    COLLECTION,
    COLUMN,
    COLUMNSTORE,
    COMMIT,
    CONFIGURATION,
    CONSTRAINT,
    CONTINUE,
    CONTRACT,
    CONVERSATION,
    CONVERT,
    CREATE,
    CREDENTIAL,
    CROSS,
    CUBE,
    CURSOR,
    DATABASE,
    DEALLOCATE,
    DECLARE,
    DEFAULT,
    DELAY,
    DELETE,
    DESC,
    DISTINCT,
    DISTRIBUTED,
    DROP,
    ELSE,
    ENCRYPTION,
    END,
    ESCAPE,
    EXCEPT,
    EXEC,
    EXECUTE,
    EXISTS,
    EXTERNAL,
    FEDERATION,
    FETCH,
    FILLFACTOR,
    FOR,
    FOREIGN,
    FROM,
    FULL,
    FUNCTION,
    GET,
    GOTO,
    GRANT,
    GROUP,
    HAVING,
    HOLDLOCK,
    IDENTITY,
    IF,
    IN,
    INCREMENT,
    INDEX,
    INNER,
    INSERT,
    INSTEAD,
    INTERSECT,
    INTO,
    IS,
    JOIN,
    KEY,
    KILL,
    LABEL,
    LANGUAGE,
    LEFT,
    LIBRARY,
    LIKE,
    LINENO,
    LIST,
    LOG,
    LOGIN,
    MARK,
    MASTER,
    MAX_GRANT_PERCENT,
    MESSAGE,
    MOVE,
    NATIONAL,
    NOLOCK,
    NONCLUSTERED,
    NOT,
    NOWAIT,
    NULL,
    OF,
    OFF,
    ON,
    OPEN,
    OPENQUERY,
    OPENROWSET,
    OPTION,
    OR,
    ORDER,
    OUTER,
    OUTPUT,
    OVER,
    OVERRIDE,
    PAD_INDEX,
    PARTITION,
    PASSWORD,
    PERCENT,
    PIVOT,
    PRECISION,
    PRIMARY,
    PRINT,
    PROC,
    PROCEDURE,
    PROPERTY,
    QUEUE,
    RAISERROR,
    READONLY,
    READTEXT,
    RECEIVE,
    RECONFIGURE,
    REFERENCES,
    REMOTE,
    RESTORE,
    RETURN,
    RETURNS,
    REVERT,
    RIGHT,
    ROLE,
    ROLLBACK,
    ROLLUP,
    RULE,
    SAVE,
    SCHEMA,
    SCHEMABINDING,
    SCHEME,
    SCOPED,
    SEARCH,
    SELECT,
    SEND,
    SEQUENCE,
    SERVER,
    SERVICE,
    SET,
    SETUSER,
    SHUTDOWN,
    SID,
    START,
    STATISTICS,
    STATISTICS_NORECOMPUTE,
    SYMMETRIC,
    SYNONYM,
    TABLE,
    THEN,
    THROW,
    TIES,
    TIME,
    TIMEOUT,
    TO,
    TOP,
    TRAN,
    TRANSACTION,
    TRIGGER,
    TRUNCATE,
    TRY,
    TYPE,
    UNION,
    UNIQUE,
    UPDATE,
    UPDATETEXT,
    USE,
    USER,
    VALUES,
    VARYING,
    VIEW,
    WAITFOR,
    WHEN,
    WHERE,
    WHILE,
    WITH,
    WORK,
    WRITETEXT,
    XML,
}

/// Looks up `word` (case-insensitively) in the keyword table.
///
/// `word` must already be uppercased by the caller; this lexer's scanner
/// uppercases every scanned identifier once before calling this function,
/// matching the case-insensitive keyword mapping rule.
pub fn lookup(word_uppercase: &str) -> Option<Keyword> {
    KEYWORDS
        .binary_search_by(|(s, _)| (*s).cmp(word_uppercase))
        .ok()
        .map(|i| KEYWORDS[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        let mut sorted = KEYWORDS.to_vec();
        sorted.sort_by_key(|(s, _)| *s);
        assert_eq!(KEYWORDS.to_vec(), sorted, "KEYWORDS must stay sorted");
    }

    #[test]
    fn lookup_is_case_insensitive_at_call_site() {
        assert_eq!(lookup("SELECT"), Some(Keyword::SELECT));
        assert_eq!(lookup("select"), None); // caller is responsible for uppercasing
        assert_eq!(lookup("NOT_A_KEYWORD"), None);
    }
}
