//! Statements: the roster dispatched by `parse_statement()`.

pub mod control_flow;
pub mod cursor;
pub mod ddl;
pub mod dml;
pub mod execution;
pub mod misc;
pub mod transaction;
pub mod variable;

pub use control_flow::{
    BeginEndBlockStatement, BeginTransactionStatement, BreakStatement, ContinueStatement,
    GotoStatement, IfStatement, LabelStatement, ReturnStatement, TransactionName,
    TryCatchStatement, WhileStatement,
};
pub use cursor::{
    CloseCursorStatement, CursorOption, DeallocateCursorStatement, DeclareCursorStatement,
    FetchCursorStatement, FetchTarget, OpenCursorStatement,
};
pub use ddl::{
    AlterIndexAction, AlterIndexStatement, AlterObjectStatement, AlterRoleAction,
    AlterRoleStatement, AlterSchemaStatement, AlterSequenceStatement, AlterSynonymStatement,
    AlterTableAction, AlterTableStatement, AlterUserStatement, AlterViewStatement,
    ColumnDefinition, ConstraintDefinition, CreateDefaultStatement, CreateFunctionStatement,
    CreateIndexStatement, CreateObjectStatement, CreateProcedureStatement, CreateRoleStatement,
    CreateRuleStatement, CreateSchemaStatement, CreateSequenceStatement,
    CreateSynonymStatement, CreateTableStatement, CreateTriggerStatement, CreateUserStatement,
    CreateViewStatement, AlterDefaultStatement, AlterRuleStatement, DropBoundObjectStatement,
    DropFunctionStatement, DropIndexStatement, DropObjectStatement, DropProcedureStatement,
    DropRoleStatement, DropSchemaStatement, DropSequenceStatement, DropSynonymStatement,
    DropTableStatement, DropTriggerStatement, DropUserStatement, DropViewStatement,
    FunctionReturnType, IdentityOptions, NullableConstraintDefinition, ProcedureParameter,
    ProcedureStatementBody, TriggerAction, WithOption,
};
pub use dml::{DeleteStatement, InsertSource, InsertStatement, SelectStatement, SetClause, UpdateStatement};
pub use execution::{
    ExecutableEntity, ExecuteAsPrincipal, ExecuteAsStatement, ExecuteParameter, ExecuteStatement,
    RevertStatement,
};
pub use misc::{
    CheckpointStatement, GetConversationGroupStatement, GrantStatement, KillStatement,
    MoveConversationStatement, Permission, PrintStatement, RaiseErrorStatement,
    ReadTextStatement, ReceiveStatement, ReconfigureStatement, RestoreOption, RestoreStatement,
    SendStatement, SetLinenoStatement, SetUserStatement, ShutdownStatement, ThrowStatement,
    TruncateTableStatement, UpdateTextSource, UpdateTextStatement, UseStatement, WaitForKind,
    WaitForStatement, WriteTextStatement,
};
pub use transaction::{CommitTransactionStatement, RollbackTransactionStatement, SaveTransactionStatement};
pub use variable::{
    AssignmentOperator, DeclareVariableElement, DeclareVariableStatement,
    SetPredicateOptionStatement, SetStatisticsStatement, SetVariableStatement,
};

/// The sum of every statement form this parser produces.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),

    DeclareVariable(DeclareVariableStatement),
    SetVariable(SetVariableStatement),
    SetPredicateOption(SetPredicateOptionStatement),
    SetStatistics(SetStatisticsStatement),

    If(IfStatement),
    While(WhileStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Return(ReturnStatement),
    Goto(GotoStatement),
    Label(LabelStatement),
    BeginEndBlock(BeginEndBlockStatement),
    TryCatch(TryCatchStatement),
    BeginTransaction(BeginTransactionStatement),

    CommitTransaction(CommitTransactionStatement),
    RollbackTransaction(RollbackTransactionStatement),
    SaveTransaction(SaveTransactionStatement),

    CreateTable(CreateTableStatement),
    AlterTable(AlterTableStatement),
    DropTable(DropTableStatement),
    CreateView(CreateViewStatement),
    AlterView(AlterViewStatement),
    DropView(DropViewStatement),
    CreateSchema(CreateSchemaStatement),
    AlterSchema(AlterSchemaStatement),
    DropSchema(DropSchemaStatement),
    CreateProcedure(CreateProcedureStatement),
    DropProcedure(DropProcedureStatement),
    CreateFunction(CreateFunctionStatement),
    DropFunction(DropFunctionStatement),
    CreateTrigger(CreateTriggerStatement),
    DropTrigger(DropTriggerStatement),
    CreateIndex(CreateIndexStatement),
    AlterIndex(AlterIndexStatement),
    DropIndex(DropIndexStatement),
    CreateRole(CreateRoleStatement),
    AlterRole(AlterRoleStatement),
    DropRole(DropRoleStatement),
    CreateSequence(CreateSequenceStatement),
    AlterSequence(AlterSequenceStatement),
    DropSequence(DropSequenceStatement),
    CreateSynonym(CreateSynonymStatement),
    AlterSynonym(AlterSynonymStatement),
    DropSynonym(DropSynonymStatement),
    CreateUser(CreateUserStatement),
    AlterUser(AlterUserStatement),
    DropUser(DropUserStatement),
    CreateDefault(CreateDefaultStatement),
    AlterDefault(AlterDefaultStatement),
    CreateRule(CreateRuleStatement),
    AlterRule(AlterRuleStatement),
    DropBoundObject(DropBoundObjectStatement),
    CreateObject(CreateObjectStatement),
    AlterObject(AlterObjectStatement),
    DropObject(DropObjectStatement),

    DeclareCursor(DeclareCursorStatement),
    OpenCursor(OpenCursorStatement),
    FetchCursor(FetchCursorStatement),
    CloseCursor(CloseCursorStatement),
    DeallocateCursor(DeallocateCursorStatement),

    Execute(ExecuteStatement),
    ExecuteAs(ExecuteAsStatement),
    Revert(RevertStatement),

    Print(PrintStatement),
    Throw(ThrowStatement),
    RaiseError(RaiseErrorStatement),

    WaitFor(WaitForStatement),
    MoveConversation(MoveConversationStatement),
    GetConversationGroup(GetConversationGroupStatement),
    Send(SendStatement),
    Receive(ReceiveStatement),

    TruncateTable(TruncateTableStatement),
    Use(UseStatement),
    Kill(KillStatement),
    Checkpoint(CheckpointStatement),
    Reconfigure(ReconfigureStatement),
    Shutdown(ShutdownStatement),
    SetUser(SetUserStatement),
    SetLineno(SetLinenoStatement),

    ReadText(ReadTextStatement),
    WriteText(WriteTextStatement),
    UpdateText(UpdateTextStatement),

    Grant(GrantStatement),
    Restore(RestoreStatement),
}

/// An ordered sequence of statements between `GO` separators.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct Batch {
    pub statements: Vec<Statement>,
}

/// The top-level parse result: an ordered sequence of batches.
#[derive(Clone, Debug, PartialEq, Default)]
#[doc(hidden)]
pub struct Script {
    pub batches: Vec<Batch>,
}
