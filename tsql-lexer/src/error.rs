use std::fmt;

/// A position in the original source text.
///
/// Carries enough information to build a useful error message: a full
/// line/column/offset triple.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Location {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
    /// 0-based byte offset into the source.
    pub offset: u32,
}

impl Location {
    pub(crate) fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += ch.len_utf8() as u32;
    }

    /// Wraps a message with this location into a [`LexerError`].
    pub fn into_error(self, message: impl Into<String>) -> LexerError {
        LexerError {
            message: message.into(),
            location: self,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A lexical error: an unterminated string/bracket, or an unknown character.
///
/// One of the three failure kinds the front end can produce; it always
/// short-circuits the scan (no recovery).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexerError {
    /// Human-readable description of the failure.
    pub message: String,
    /// Where in the source the failure was detected.
    pub location: Location,
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.location)
    }
}

impl std::error::Error for LexerError {}
