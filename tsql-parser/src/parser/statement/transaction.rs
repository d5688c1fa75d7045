//! `COMMIT`, `ROLLBACK`, `SAVE` transaction statements.

use tsql_ast::statement::{CommitTransactionStatement, RollbackTransactionStatement, SaveTransactionStatement};
use tsql_lexer::Keyword;

use crate::error::ParserError;

use super::super::Parser;

impl<'a> Parser<'a> {
    pub(super) fn parse_commit_statement(&mut self) -> Result<CommitTransactionStatement, ParserError> {
        self.expect_keyword(Keyword::COMMIT)?;
        self.eat_keyword(Keyword::TRAN)?;
        self.eat_keyword(Keyword::TRANSACTION)?;
        let transaction_name = self.parse_optional_transaction_name()?;
        self.eat_keyword(Keyword::WORK)?;
        Ok(CommitTransactionStatement { transaction_name })
    }

    pub(super) fn parse_rollback_statement(&mut self) -> Result<RollbackTransactionStatement, ParserError> {
        self.expect_keyword(Keyword::ROLLBACK)?;
        self.eat_keyword(Keyword::TRAN)?;
        self.eat_keyword(Keyword::TRANSACTION)?;
        let transaction_name = self.parse_optional_transaction_name()?;
        self.eat_keyword(Keyword::WORK)?;
        Ok(RollbackTransactionStatement { transaction_name })
    }

    pub(super) fn parse_save_statement(&mut self) -> Result<SaveTransactionStatement, ParserError> {
        self.expect_keyword(Keyword::SAVE)?;
        self.eat_keyword(Keyword::TRAN)?;
        self.eat_keyword(Keyword::TRANSACTION)?;
        let transaction_name = self.parse_optional_transaction_name()?;
        Ok(SaveTransactionStatement { transaction_name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn commit_with_name() {
        let mut p = Parser::new("COMMIT TRANSACTION t1").unwrap();
        let stmt = p.parse_commit_statement().unwrap();
        assert_eq!(stmt.transaction_name, tsql_ast::statement::TransactionName::Identifier("t1".into()));
    }

    #[test]
    fn bare_rollback() {
        let mut p = Parser::new("ROLLBACK").unwrap();
        let stmt = p.parse_rollback_statement().unwrap();
        assert_eq!(stmt.transaction_name, tsql_ast::statement::TransactionName::None);
    }
}
