use super::control_flow::TransactionName;

/// `COMMIT [TRAN[SACTION] [name]] [WORK]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CommitTransactionStatement {
    pub transaction_name: TransactionName,
}

/// `ROLLBACK [TRAN[SACTION] [name]] [WORK]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct RollbackTransactionStatement {
    pub transaction_name: TransactionName,
}

/// `SAVE TRAN[SACTION] [name]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct SaveTransactionStatement {
    pub transaction_name: TransactionName,
}
