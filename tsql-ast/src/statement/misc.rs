use crate::expression::{BooleanExpression, ScalarExpression};
use crate::types::SchemaObjectName;

/// `PRINT expression`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct PrintStatement {
    pub expression: ScalarExpression,
}

/// `THROW [error_number, message, state]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct ThrowStatement {
    pub error_number: Option<ScalarExpression>,
    pub message: Option<ScalarExpression>,
    pub state: Option<ScalarExpression>,
}

/// `RAISERROR (message, severity, state [, argument ...]) [WITH option]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct RaiseErrorStatement {
    pub message: ScalarExpression,
    pub severity: ScalarExpression,
    pub state: ScalarExpression,
    pub arguments: Vec<ScalarExpression>,
    pub options: Vec<String>,
}

/// The thing a `WAITFOR` waits on.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum WaitForKind {
    Delay(ScalarExpression),
    Time(ScalarExpression),
    Receive { statement: Box<crate::statement::Statement>, timeout: Option<ScalarExpression> },
}

/// `WAITFOR { DELAY time | TIME time | (RECEIVE ...) [, TIMEOUT n] }`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct WaitForStatement {
    pub kind: WaitForKind,
}

/// `MOVE CONVERSATION conversation_handle TO conversation_group_id`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct MoveConversationStatement {
    pub conversation_handle: ScalarExpression,
    pub to_conversation_group: ScalarExpression,
}

/// `GET CONVERSATION GROUP @group_id FROM queue`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct GetConversationGroupStatement {
    pub group_id_variable: String,
    pub queue: SchemaObjectName,
}

/// `SEND ON CONVERSATION handle MESSAGE TYPE name [(body)]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct SendStatement {
    pub conversation_handles: Vec<ScalarExpression>,
    pub message_type_name: Option<String>,
    pub message_body: Option<ScalarExpression>,
}

/// `RECEIVE [TOP (n)] select_list FROM queue [INTO table] [WHERE ...]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct ReceiveStatement {
    pub top: Option<ScalarExpression>,
    pub select_elements: Vec<crate::query::SelectElement>,
    pub queue: SchemaObjectName,
    pub into_table: Option<SchemaObjectName>,
    pub where_clause: Option<BooleanExpression>,
}

/// `TRUNCATE TABLE name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct TruncateTableStatement {
    pub schema_object_name: SchemaObjectName,
}

/// `USE database_name`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct UseStatement {
    pub database_name: String,
}

/// `KILL { session_id | 'uow_string' }`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct KillStatement {
    pub target: ScalarExpression,
}

/// `CHECKPOINT [duration]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct CheckpointStatement {
    pub duration: Option<ScalarExpression>,
}

/// `RECONFIGURE [WITH OVERRIDE]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct ReconfigureStatement {
    pub with_override: bool,
}

/// `SHUTDOWN [WITH NOWAIT]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct ShutdownStatement {
    pub with_nowait: bool,
}

/// `SETUSER ['login']`, a deprecated principal-impersonation statement.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct SetUserStatement {
    pub login: Option<String>,
}

/// `SET LINENO n` (legacy Sybase-compatibility statement).
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct SetLinenoStatement {
    pub line_number: ScalarExpression,
}

/// `READTEXT table.column text_pointer offset size [HOLDLOCK]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct ReadTextStatement {
    pub column: crate::types::MultiPartIdentifier,
    pub text_pointer: ScalarExpression,
    pub offset: ScalarExpression,
    pub size: ScalarExpression,
    pub holdlock: bool,
}

/// `WRITETEXT table.column text_pointer [WITH LOG] data`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct WriteTextStatement {
    pub column: crate::types::MultiPartIdentifier,
    pub text_pointer: ScalarExpression,
    pub with_log: bool,
    pub data: ScalarExpression,
}

/// The thing following the text pointer in an `UPDATETEXT` call: either a
/// literal insertion offset/length pair from a source column, or a bound
/// parameter. Disambiguated by the lookahead heuristic documented on
/// `statement parsing for UPDATETEXT` in the parser crate (an open question
/// left to implementer judgment by the reference notes).
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub enum UpdateTextSource {
    Column(crate::types::MultiPartIdentifier),
    Variable(String),
}

/// `UPDATETEXT table.column text_pointer insert_offset delete_length
/// [WITH LOG] [inserted_data | source.column text_pointer]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct UpdateTextStatement {
    pub column: crate::types::MultiPartIdentifier,
    pub text_pointer: ScalarExpression,
    pub insert_offset: Option<ScalarExpression>,
    pub delete_length: Option<ScalarExpression>,
    pub with_log: bool,
    pub inserted_data: Option<ScalarExpression>,
    pub source: Option<UpdateTextSource>,
}

/// One `GRANT` permission, e.g. `SELECT`, `EXECUTE`, `ALL`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct Permission {
    pub name: String,
    pub columns: Vec<String>,
}

/// `GRANT perm [, perm ...] [ON securable] TO principal [, ...] [WITH GRANT OPTION]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct GrantStatement {
    pub permissions: Vec<Permission>,
    pub securable: Option<SchemaObjectName>,
    pub principals: Vec<String>,
    pub with_grant_option: bool,
}

/// One `option = value` entry inside a `RESTORE ... WITH (...)` clause.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct RestoreOption {
    pub name: String,
    pub value: Option<ScalarExpression>,
}

/// `RESTORE {DATABASE|LOG} name FROM source [, ...] [WITH option [, ...]]`.
#[derive(Clone, Debug, PartialEq)]
#[doc(hidden)]
pub struct RestoreStatement {
    pub is_log: bool,
    pub database_name: String,
    pub from: Vec<ScalarExpression>,
    pub options: Vec<RestoreOption>,
}
