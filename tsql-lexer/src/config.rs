/// Lexer configuration.
///
/// There is exactly one knob in scope: how deeply `/* ... */` comments are
/// allowed to nest before the lexer gives up and reports an error. T-SQL's
/// own `sqlcmd`/SSMS editors treat `/* ... */` as non-nesting, but
/// downstream tooling sometimes feeds this lexer
/// T-SQL embedded in other dialects that do nest comments, so nesting is
/// supported up to a configurable depth rather than hard-coded off.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LexerConfig {
    /// Maximum nesting depth for `/* ... */` comments.
    pub max_nested_comment_depth: u32,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_nested_comment_depth: 128,
        }
    }
}
