//! `Statement` projection: one arm per variant, delegating to per-family
//! helpers grouped the way `tsql_ast::statement`'s submodules are grouped.

use serde_json::Value;
use tsql_ast::statement::*;
use tsql_ast::types::SchemaObjectName;

use crate::builder::ObjectBuilder;
use crate::expression::{boolean_expression, scalar_expression};
use crate::ident::{multi_part_identifier, schema_object_name};
use crate::query::{from_clause, query_expression, select_element, select_statement, table_reference};
use crate::types::data_type;

pub(crate) fn statement(stmt: &Statement) -> Value {
    match stmt {
        Statement::Select(s) => select_statement(s),
        Statement::Insert(s) => insert_statement(s),
        Statement::Update(s) => update_statement(s),
        Statement::Delete(s) => delete_statement(s),

        Statement::DeclareVariable(s) => declare_variable_statement(s),
        Statement::SetVariable(s) => set_variable_statement(s),
        Statement::SetPredicateOption(s) => set_predicate_option_statement(s),
        Statement::SetStatistics(s) => set_statistics_statement(s),

        Statement::If(s) => if_statement(s),
        Statement::While(s) => while_statement(s),
        Statement::Break(_) => ObjectBuilder::new("BreakStatement").build(),
        Statement::Continue(_) => ObjectBuilder::new("ContinueStatement").build(),
        Statement::Return(s) => ObjectBuilder::new("ReturnStatement")
            .opt("Expression", s.expression.as_ref().map(scalar_expression))
            .build(),
        Statement::Goto(s) => ObjectBuilder::new("GoToStatement").field("LabelName", Value::String(s.label_name.clone())).build(),
        Statement::Label(s) => {
            ObjectBuilder::new("LabelStatement").field("LabelName", Value::String(s.label_name.clone())).build()
        }
        Statement::BeginEndBlock(s) => ObjectBuilder::new("BeginEndBlockStatement")
            .arr("StatementList", s.statement_list.iter().map(statement).collect())
            .build(),
        Statement::TryCatch(s) => ObjectBuilder::new("TryCatchStatement")
            .arr("TryStatements", s.try_statements.iter().map(statement).collect())
            .arr("CatchStatements", s.catch_statements.iter().map(statement).collect())
            .build(),
        Statement::BeginTransaction(s) => ObjectBuilder::new("BeginTransactionStatement")
            .field("Distributed", Value::Bool(s.distributed))
            .field("TransactionName", transaction_name(&s.transaction_name))
            .opt("MarkDescription", s.mark_description.clone().map(Value::String))
            .build(),

        Statement::CommitTransaction(s) => ObjectBuilder::new("CommitTransactionStatement")
            .field("TransactionName", transaction_name(&s.transaction_name))
            .build(),
        Statement::RollbackTransaction(s) => ObjectBuilder::new("RollbackTransactionStatement")
            .field("TransactionName", transaction_name(&s.transaction_name))
            .build(),
        Statement::SaveTransaction(s) => ObjectBuilder::new("SaveTransactionStatement")
            .field("TransactionName", transaction_name(&s.transaction_name))
            .build(),

        Statement::CreateTable(s) => create_table_statement(s),
        Statement::AlterTable(s) => alter_table_statement(s),
        Statement::DropTable(s) => drop_objects("DropTableStatement", &s.objects, s.is_if_exists),
        Statement::CreateView(s) => create_view_statement("CreateViewStatement", s.schema_object_name.clone(), s.columns.clone(), &s.select_statement, s.with_check_option),
        Statement::AlterView(s) => create_view_statement("AlterViewStatement", s.schema_object_name.clone(), s.columns.clone(), &s.select_statement, s.with_check_option),
        Statement::DropView(s) => drop_objects("DropViewStatement", &s.objects, s.is_if_exists),
        Statement::CreateSchema(s) => ObjectBuilder::new("CreateSchemaStatement")
            .field("Name", Value::String(s.name.clone()))
            .opt("Authorization", s.authorization.clone().map(Value::String))
            .build(),
        Statement::AlterSchema(s) => ObjectBuilder::new("AlterSchemaStatement")
            .field("Name", Value::String(s.name.clone()))
            .field("Transfer", schema_object_name(&s.transfer))
            .build(),
        Statement::DropSchema(s) => ObjectBuilder::new("DropSchemaStatement")
            .field("Name", Value::String(s.name.clone()))
            .field("IsIfExists", Value::Bool(s.is_if_exists))
            .build(),
        Statement::CreateProcedure(s) => create_procedure_statement(s),
        Statement::DropProcedure(s) => drop_objects("DropProcedureStatement", &s.objects, s.is_if_exists),
        Statement::CreateFunction(s) => create_function_statement(s),
        Statement::DropFunction(s) => drop_objects("DropFunctionStatement", &s.objects, s.is_if_exists),
        Statement::CreateTrigger(s) => create_trigger_statement(s),
        Statement::DropTrigger(s) => drop_objects("DropTriggerStatement", &s.objects, s.is_if_exists),
        Statement::CreateIndex(s) => ObjectBuilder::new("CreateIndexStatement")
            .field("Name", Value::String(s.name.clone()))
            .field("OnName", schema_object_name(&s.table))
            .arr("Columns", s.columns.iter().cloned().map(Value::String).collect())
            .field("Unique", Value::Bool(s.unique))
            .opt("Clustered", s.clustered.map(Value::Bool))
            .arr("Options", s.options.iter().map(with_option).collect())
            .build(),
        Statement::AlterIndex(s) => ObjectBuilder::new("AlterIndexStatement")
            .field("Name", Value::String(s.name.clone()))
            .field("OnName", schema_object_name(&s.table))
            .field("Action", Value::String(alter_index_action_str(s.action).to_string()))
            .build(),
        Statement::DropIndex(s) => ObjectBuilder::new("DropIndexStatement")
            .field("Name", Value::String(s.name.clone()))
            .field("OnName", schema_object_name(&s.table))
            .field("IsIfExists", Value::Bool(s.is_if_exists))
            .build(),
        Statement::CreateRole(s) => ObjectBuilder::new("CreateRoleStatement")
            .field("Name", Value::String(s.name.clone()))
            .opt("Authorization", s.authorization.clone().map(Value::String))
            .build(),
        Statement::AlterRole(s) => ObjectBuilder::new("AlterRoleStatement")
            .field("Name", Value::String(s.name.clone()))
            .field("Action", alter_role_action(&s.action))
            .build(),
        Statement::DropRole(s) => ObjectBuilder::new("DropRoleStatement")
            .field("Name", Value::String(s.name.clone()))
            .field("IsIfExists", Value::Bool(s.is_if_exists))
            .build(),
        Statement::CreateSequence(s) => ObjectBuilder::new("CreateSequenceStatement")
            .field("SchemaObjectName", schema_object_name(&s.schema_object_name))
            .opt("DataType", s.data_type.as_ref().map(data_type))
            .opt("StartWith", s.start_with.as_ref().map(scalar_expression))
            .opt("IncrementBy", s.increment_by.as_ref().map(scalar_expression))
            .build(),
        Statement::AlterSequence(s) => ObjectBuilder::new("AlterSequenceStatement")
            .field("SchemaObjectName", schema_object_name(&s.schema_object_name))
            .opt("RestartWith", s.restart_with.as_ref().map(scalar_expression))
            .opt("IncrementBy", s.increment_by.as_ref().map(scalar_expression))
            .build(),
        Statement::DropSequence(s) => ObjectBuilder::new("DropSequenceStatement")
            .field("SchemaObjectName", schema_object_name(&s.schema_object_name))
            .field("IsIfExists", Value::Bool(s.is_if_exists))
            .build(),
        Statement::CreateSynonym(s) => ObjectBuilder::new("CreateSynonymStatement")
            .field("SchemaObjectName", schema_object_name(&s.schema_object_name))
            .field("ForName", schema_object_name(&s.for_name))
            .build(),
        Statement::AlterSynonym(s) => ObjectBuilder::new("AlterSynonymStatement")
            .field("SchemaObjectName", schema_object_name(&s.schema_object_name))
            .field("ForName", schema_object_name(&s.for_name))
            .build(),
        Statement::DropSynonym(s) => ObjectBuilder::new("DropSynonymStatement")
            .field("SchemaObjectName", schema_object_name(&s.schema_object_name))
            .field("IsIfExists", Value::Bool(s.is_if_exists))
            .build(),
        Statement::CreateUser(s) => ObjectBuilder::new("CreateUserStatement")
            .field("Name", Value::String(s.name.clone()))
            .opt("Login", s.login.clone().map(Value::String))
            .opt("DefaultSchema", s.default_schema.clone().map(Value::String))
            .build(),
        Statement::AlterUser(s) => ObjectBuilder::new("AlterUserStatement")
            .field("Name", Value::String(s.name.clone()))
            .arr("Options", s.options.iter().map(with_option).collect())
            .build(),
        Statement::DropUser(s) => ObjectBuilder::new("DropUserStatement")
            .field("Name", Value::String(s.name.clone()))
            .field("IsIfExists", Value::Bool(s.is_if_exists))
            .build(),
        Statement::CreateDefault(s) => ObjectBuilder::new("CreateDefaultStatement")
            .field("SchemaObjectName", schema_object_name(&s.schema_object_name))
            .field("Expression", scalar_expression(&s.expression))
            .build(),
        Statement::AlterDefault(s) => ObjectBuilder::new("AlterDefaultStatement")
            .field("SchemaObjectName", schema_object_name(&s.schema_object_name))
            .field("Expression", scalar_expression(&s.expression))
            .build(),
        Statement::CreateRule(s) => ObjectBuilder::new("CreateRuleStatement")
            .field("SchemaObjectName", schema_object_name(&s.schema_object_name))
            .field("Expression", boolean_expression(&s.expression))
            .build(),
        Statement::AlterRule(s) => ObjectBuilder::new("AlterRuleStatement")
            .field("SchemaObjectName", schema_object_name(&s.schema_object_name))
            .field("Expression", boolean_expression(&s.expression))
            .build(),
        Statement::DropBoundObject(s) => ObjectBuilder::new("DropBoundObjectStatement")
            .field("ObjectKind", Value::String(s.object_kind.clone()))
            .field("SchemaObjectName", schema_object_name(&s.schema_object_name))
            .field("IsIfExists", Value::Bool(s.is_if_exists))
            .build(),
        Statement::CreateObject(s) => ObjectBuilder::new("CreateObjectStatement")
            .field("ObjectKind", Value::String(s.object_kind.clone()))
            .opt("SchemaObjectName", s.schema_object_name.as_ref().map(schema_object_name))
            .arr("Options", s.options.iter().map(with_option).collect())
            .build(),
        Statement::AlterObject(s) => ObjectBuilder::new("AlterObjectStatement")
            .field("ObjectKind", Value::String(s.object_kind.clone()))
            .opt("SchemaObjectName", s.schema_object_name.as_ref().map(schema_object_name))
            .arr("Options", s.options.iter().map(with_option).collect())
            .build(),
        Statement::DropObject(s) => ObjectBuilder::new("DropObjectStatement")
            .field("ObjectKind", Value::String(s.object_kind.clone()))
            .opt("SchemaObjectName", s.schema_object_name.as_ref().map(schema_object_name))
            .field("IsIfExists", Value::Bool(s.is_if_exists))
            .build(),

        Statement::DeclareCursor(s) => ObjectBuilder::new("DeclareCursorStatement")
            .field("CursorName", Value::String(s.cursor_name.clone()))
            .arr("Options", s.options.iter().map(|o| ObjectBuilder::new("CursorOption").field("Name", Value::String(o.name.clone())).build()).collect())
            .field("Select", query_expression(&s.select))
            .arr("UpdateColumns", s.update_columns.iter().cloned().map(Value::String).collect())
            .build(),
        Statement::OpenCursor(s) => {
            ObjectBuilder::new("OpenCursorStatement").field("CursorName", Value::String(s.cursor_name.clone())).build()
        }
        Statement::FetchCursor(s) => ObjectBuilder::new("FetchCursorStatement")
            .field("CursorName", Value::String(s.cursor_name.clone()))
            .opt("Orientation", s.orientation.clone().map(Value::String))
            .opt("Offset", s.offset.as_ref().map(scalar_expression))
            .arr(
                "Into",
                s.into.iter().map(|t| ObjectBuilder::new("FetchTarget").field("VariableName", Value::String(t.variable_name.clone())).build()).collect(),
            )
            .build(),
        Statement::CloseCursor(s) => {
            ObjectBuilder::new("CloseCursorStatement").field("CursorName", Value::String(s.cursor_name.clone())).build()
        }
        Statement::DeallocateCursor(s) => ObjectBuilder::new("DeallocateCursorStatement")
            .field("CursorName", Value::String(s.cursor_name.clone()))
            .build(),

        Statement::Execute(s) => ObjectBuilder::new("ExecuteStatement")
            .opt("ReturnStatusVariable", s.return_status_variable.clone().map(Value::String))
            .field(
                "Entity",
                ObjectBuilder::new("ExecutableEntity")
                    .field("Procedure", schema_object_name(&s.entity.procedure))
                    .arr("Parameters", s.entity.parameters.iter().map(execute_parameter).collect())
                    .build(),
            )
            .build(),
        Statement::ExecuteAs(s) => {
            ObjectBuilder::new("ExecuteAsStatement").field("Principal", execute_as_principal(&s.principal)).build()
        }
        Statement::Revert(_) => ObjectBuilder::new("RevertStatement").build(),

        Statement::Print(s) => ObjectBuilder::new("PrintStatement").field("Expression", scalar_expression(&s.expression)).build(),
        Statement::Throw(s) => ObjectBuilder::new("ThrowStatement")
            .opt("ErrorNumber", s.error_number.as_ref().map(scalar_expression))
            .opt("Message", s.message.as_ref().map(scalar_expression))
            .opt("State", s.state.as_ref().map(scalar_expression))
            .build(),
        Statement::RaiseError(s) => ObjectBuilder::new("RaiseErrorStatement")
            .field("Message", scalar_expression(&s.message))
            .field("Severity", scalar_expression(&s.severity))
            .field("State", scalar_expression(&s.state))
            .arr("Arguments", s.arguments.iter().map(scalar_expression).collect())
            .arr("Options", s.options.iter().cloned().map(Value::String).collect())
            .build(),

        Statement::WaitFor(s) => ObjectBuilder::new("WaitForStatement").field("Kind", wait_for_kind(&s.kind)).build(),
        Statement::MoveConversation(s) => ObjectBuilder::new("MoveConversationStatement")
            .field("ConversationHandle", scalar_expression(&s.conversation_handle))
            .field("ToConversationGroup", scalar_expression(&s.to_conversation_group))
            .build(),
        Statement::GetConversationGroup(s) => ObjectBuilder::new("GetConversationGroupStatement")
            .field("GroupIdVariable", Value::String(s.group_id_variable.clone()))
            .field("Queue", schema_object_name(&s.queue))
            .build(),
        Statement::Send(s) => ObjectBuilder::new("SendStatement")
            .arr("ConversationHandles", s.conversation_handles.iter().map(scalar_expression).collect())
            .opt("MessageTypeName", s.message_type_name.clone().map(Value::String))
            .opt("MessageBody", s.message_body.as_ref().map(scalar_expression))
            .build(),
        Statement::Receive(s) => ObjectBuilder::new("ReceiveStatement")
            .opt("Top", s.top.as_ref().map(scalar_expression))
            .arr("SelectElements", s.select_elements.iter().map(select_element).collect())
            .field("Queue", schema_object_name(&s.queue))
            .opt("IntoTable", s.into_table.as_ref().map(schema_object_name))
            .opt("WhereClause", s.where_clause.as_ref().map(boolean_expression))
            .build(),

        Statement::TruncateTable(s) => ObjectBuilder::new("TruncateTableStatement")
            .field("SchemaObjectName", schema_object_name(&s.schema_object_name))
            .build(),
        Statement::Use(s) => {
            ObjectBuilder::new("UseStatement").field("DatabaseName", Value::String(s.database_name.clone())).build()
        }
        Statement::Kill(s) => ObjectBuilder::new("KillStatement").field("Target", scalar_expression(&s.target)).build(),
        Statement::Checkpoint(s) => {
            ObjectBuilder::new("CheckpointStatement").opt("Duration", s.duration.as_ref().map(scalar_expression)).build()
        }
        Statement::Reconfigure(s) => {
            ObjectBuilder::new("ReconfigureStatement").field("WithOverride", Value::Bool(s.with_override)).build()
        }
        Statement::Shutdown(s) => {
            ObjectBuilder::new("ShutdownStatement").field("WithNoWait", Value::Bool(s.with_nowait)).build()
        }
        Statement::SetUser(s) => {
            ObjectBuilder::new("SetUserStatement").opt("Login", s.login.clone().map(Value::String)).build()
        }
        Statement::SetLineno(s) => {
            ObjectBuilder::new("SetLinenoStatement").field("LineNumber", scalar_expression(&s.line_number)).build()
        }

        Statement::ReadText(s) => ObjectBuilder::new("ReadTextStatement")
            .field("Column", multi_part_identifier(&s.column))
            .field("TextPointer", scalar_expression(&s.text_pointer))
            .field("Offset", scalar_expression(&s.offset))
            .field("Size", scalar_expression(&s.size))
            .field("HoldLock", Value::Bool(s.holdlock))
            .build(),
        Statement::WriteText(s) => ObjectBuilder::new("WriteTextStatement")
            .field("Column", multi_part_identifier(&s.column))
            .field("TextPointer", scalar_expression(&s.text_pointer))
            .field("WithLog", Value::Bool(s.with_log))
            .field("Data", scalar_expression(&s.data))
            .build(),
        Statement::UpdateText(s) => ObjectBuilder::new("UpdateTextStatement")
            .field("Column", multi_part_identifier(&s.column))
            .field("TextPointer", scalar_expression(&s.text_pointer))
            .opt("InsertOffset", s.insert_offset.as_ref().map(scalar_expression))
            .opt("DeleteLength", s.delete_length.as_ref().map(scalar_expression))
            .field("WithLog", Value::Bool(s.with_log))
            .opt("InsertedData", s.inserted_data.as_ref().map(scalar_expression))
            .opt("Source", s.source.as_ref().map(update_text_source))
            .build(),

        Statement::Grant(s) => ObjectBuilder::new("GrantStatement")
            .arr("Permissions", s.permissions.iter().map(permission).collect())
            .opt("Securable", s.securable.as_ref().map(schema_object_name))
            .arr("Principals", s.principals.iter().cloned().map(Value::String).collect())
            .field("WithGrantOption", Value::Bool(s.with_grant_option))
            .build(),
        Statement::Restore(s) => ObjectBuilder::new("RestoreStatement")
            .field("IsLog", Value::Bool(s.is_log))
            .field("DatabaseName", Value::String(s.database_name.clone()))
            .arr("From", s.from.iter().map(scalar_expression).collect())
            .arr("Options", s.options.iter().map(restore_option).collect())
            .build(),
    }
}

fn transaction_name(name: &TransactionName) -> Value {
    match name {
        TransactionName::None => Value::String("NotSpecified".to_string()),
        TransactionName::Identifier(name) => Value::String(name.clone()),
        TransactionName::Variable(name) => Value::String(name.clone()),
    }
}

fn insert_statement(statement: &InsertStatement) -> Value {
    ObjectBuilder::new("InsertStatement")
        .field("Target", schema_object_name(&statement.target))
        .arr("Columns", statement.columns.iter().cloned().map(Value::String).collect())
        .field("Source", insert_source(&statement.source))
        .build()
}

fn insert_source(source: &InsertSource) -> Value {
    match source {
        InsertSource::Values(rows) => ObjectBuilder::new("ValuesInsertSource")
            .arr(
                "RowValues",
                rows.iter().map(|row| Value::Array(row.iter().map(scalar_expression).collect())).collect(),
            )
            .build(),
        InsertSource::Query(query) => {
            ObjectBuilder::new("SelectInsertSource").field("QueryExpression", query_expression(query)).build()
        }
        InsertSource::DefaultValues => ObjectBuilder::new("DefaultValuesInsertSource").build(),
    }
}

fn update_statement(statement: &UpdateStatement) -> Value {
    ObjectBuilder::new("UpdateStatement")
        .field("Target", table_reference(&statement.target))
        .arr("SetClauses", statement.set_clauses.iter().map(set_clause).collect())
        .opt("FromClause", statement.from_clause.as_ref().map(from_clause))
        .opt("WhereClause", statement.where_clause.as_ref().map(|w| ObjectBuilder::new("WhereClause").field("SearchCondition", boolean_expression(&w.search_condition)).build()))
        .build()
}

fn set_clause(clause: &SetClause) -> Value {
    ObjectBuilder::new("SetClause")
        .field("Column", schema_object_name(&clause.column))
        .field("NewValue", scalar_expression(&clause.new_value))
        .build()
}

fn delete_statement(statement: &DeleteStatement) -> Value {
    ObjectBuilder::new("DeleteStatement")
        .field("Target", table_reference(&statement.target))
        .opt("FromClause", statement.from_clause.as_ref().map(from_clause))
        .opt("WhereClause", statement.where_clause.as_ref().map(|w| ObjectBuilder::new("WhereClause").field("SearchCondition", boolean_expression(&w.search_condition)).build()))
        .build()
}

fn declare_variable_statement(statement: &DeclareVariableStatement) -> Value {
    ObjectBuilder::new("DeclareVariableStatement")
        .arr("Declarations", statement.declarations.iter().map(declare_variable_element).collect())
        .build()
}

fn declare_variable_element(element: &DeclareVariableElement) -> Value {
    ObjectBuilder::new("DeclareVariableElement")
        .field("VariableName", Value::String(element.variable_name.clone()))
        .field("DataType", data_type(&element.data_type))
        .opt("DefaultValue", element.default_value.as_ref().map(scalar_expression))
        .build()
}

fn set_variable_statement(statement: &SetVariableStatement) -> Value {
    ObjectBuilder::new("SetVariableStatement")
        .field("VariableName", Value::String(statement.variable_name.clone()))
        .field("Operator", Value::String(assignment_operator_str(statement.operator).to_string()))
        .field("Expression", scalar_expression(&statement.expression))
        .build()
}

fn assignment_operator_str(operator: AssignmentOperator) -> &'static str {
    match operator {
        AssignmentOperator::Equals => "Equals",
        AssignmentOperator::AddEquals => "AddEquals",
        AssignmentOperator::SubtractEquals => "SubtractEquals",
        AssignmentOperator::MultiplyEquals => "MultiplyEquals",
        AssignmentOperator::DivideEquals => "DivideEquals",
        AssignmentOperator::ModEquals => "ModEquals",
    }
}

fn set_predicate_option_statement(statement: &SetPredicateOptionStatement) -> Value {
    ObjectBuilder::new("PredicateSetStatement")
        .arr("Options", statement.options.iter().cloned().map(Value::String).collect())
        .field("IsOn", Value::Bool(statement.is_on))
        .build()
}

fn set_statistics_statement(statement: &SetStatisticsStatement) -> Value {
    ObjectBuilder::new("SetStatisticsStatement")
        .field("Option", Value::String(statement.option.clone()))
        .field("IsOn", Value::Bool(statement.is_on))
        .build()
}

fn if_statement(node: &IfStatement) -> Value {
    ObjectBuilder::new("IfStatement")
        .field("Predicate", boolean_expression(&node.predicate))
        .field("ThenStatement", statement(&node.then_statement))
        .opt("ElseStatement", node.else_statement.as_deref().map(statement))
        .build()
}

fn while_statement(node: &WhileStatement) -> Value {
    ObjectBuilder::new("WhileStatement")
        .field("Predicate", boolean_expression(&node.predicate))
        .field("Statement", statement(&node.statement))
        .build()
}

fn create_table_statement(statement: &CreateTableStatement) -> Value {
    ObjectBuilder::new("CreateTableStatement")
        .field("SchemaObjectName", schema_object_name(&statement.schema_object_name))
        .arr("Columns", statement.columns.iter().map(column_definition).collect())
        .arr("Constraints", statement.constraints.iter().map(constraint_definition).collect())
        .arr("Options", statement.options.iter().map(with_option).collect())
        .build()
}

fn alter_table_statement(statement: &AlterTableStatement) -> Value {
    ObjectBuilder::new("AlterTableStatement")
        .field("SchemaObjectName", schema_object_name(&statement.schema_object_name))
        .field("Action", alter_table_action(&statement.action))
        .build()
}

fn alter_table_action(action: &AlterTableAction) -> Value {
    match action {
        AlterTableAction::AddColumns(columns) => ObjectBuilder::new("AlterTableAddTableElement")
            .arr("Columns", columns.iter().map(column_definition).collect())
            .build(),
        AlterTableAction::AddConstraint(constraint) => {
            ObjectBuilder::new("AlterTableAddTableElement").field("Constraint", constraint_definition(constraint)).build()
        }
        AlterTableAction::DropColumn(name) => {
            ObjectBuilder::new("AlterTableDropTableElement").field("ColumnName", Value::String(name.clone())).build()
        }
        AlterTableAction::DropConstraint(name) => ObjectBuilder::new("AlterTableDropTableElement")
            .field("ConstraintName", Value::String(name.clone()))
            .build(),
        AlterTableAction::AlterColumn(column) => {
            ObjectBuilder::new("AlterTableAlterColumnStatement").field("Column", column_definition(column)).build()
        }
    }
}

fn alter_index_action_str(action: AlterIndexAction) -> &'static str {
    match action {
        AlterIndexAction::Rebuild => "Rebuild",
        AlterIndexAction::Disable => "Disable",
        AlterIndexAction::Reorganize => "Reorganize",
    }
}

fn alter_role_action(action: &AlterRoleAction) -> Value {
    match action {
        AlterRoleAction::AddMember(name) => {
            ObjectBuilder::new("AlterRoleAddMemberStatement").field("MemberName", Value::String(name.clone())).build()
        }
        AlterRoleAction::DropMember(name) => {
            ObjectBuilder::new("AlterRoleDropMemberStatement").field("MemberName", Value::String(name.clone())).build()
        }
        AlterRoleAction::Rename(name) => {
            ObjectBuilder::new("AlterRoleRenameStatement").field("NewName", Value::String(name.clone())).build()
        }
    }
}

fn drop_objects(type_name: &str, objects: &[SchemaObjectName], is_if_exists: bool) -> Value {
    ObjectBuilder::new(type_name)
        .arr("Objects", objects.iter().map(schema_object_name).collect())
        .field("IsIfExists", Value::Bool(is_if_exists))
        .build()
}

fn create_view_statement(
    type_name: &str,
    schema_object_name_value: SchemaObjectName,
    columns: Vec<String>,
    select: &SelectStatement,
    with_check_option: bool,
) -> Value {
    ObjectBuilder::new(type_name)
        .field("SchemaObjectName", schema_object_name(&schema_object_name_value))
        .arr("Columns", columns.into_iter().map(Value::String).collect())
        .field("SelectStatement", select_statement(select))
        .field("WithCheckOption", Value::Bool(with_check_option))
        .build()
}

fn create_procedure_statement(node: &CreateProcedureStatement) -> Value {
    let (type_name, body) = match node {
        CreateProcedureStatement::Create(body) => ("CreateProcedureStatement", body),
        CreateProcedureStatement::Alter(body) => ("AlterProcedureStatement", body),
    };
    ObjectBuilder::new(type_name)
        .field("SchemaObjectName", schema_object_name(&body.schema_object_name))
        .arr("Parameters", body.parameters.iter().map(procedure_parameter).collect())
        .arr("Options", body.options.iter().map(with_option).collect())
        .arr("Statements", body.statements.iter().map(statement).collect())
        .build()
}

fn create_function_statement(node: &CreateFunctionStatement) -> Value {
    let type_name = if node.is_alter { "AlterFunctionStatement" } else { "CreateFunctionStatement" };
    ObjectBuilder::new(type_name)
        .field("SchemaObjectName", schema_object_name(&node.schema_object_name))
        .arr("Parameters", node.parameters.iter().map(procedure_parameter).collect())
        .field("ReturnType", function_return_type(&node.returns))
        .arr("Statements", node.statements.iter().map(statement).collect())
        .build()
}

fn function_return_type(return_type: &FunctionReturnType) -> Value {
    match return_type {
        FunctionReturnType::Scalar(data_type_value) => {
            ObjectBuilder::new("ScalarFunctionReturnType").field("DataType", data_type(data_type_value)).build()
        }
        FunctionReturnType::Table => ObjectBuilder::new("TableValuedFunctionReturnType").build(),
        FunctionReturnType::InlineTable => ObjectBuilder::new("SelectFunctionReturnType").build(),
    }
}

fn create_trigger_statement(node: &CreateTriggerStatement) -> Value {
    let type_name = if node.is_alter { "AlterTriggerStatement" } else { "CreateTriggerStatement" };
    ObjectBuilder::new(type_name)
        .field("SchemaObjectName", schema_object_name(&node.schema_object_name))
        .field("TableName", schema_object_name(&node.table_name))
        .arr("Actions", node.actions.iter().map(|a| Value::String(trigger_action_str(*a).to_string())).collect())
        .field("IsInsteadOf", Value::Bool(node.is_instead_of))
        .arr("Statements", node.statements.iter().map(statement).collect())
        .build()
}

fn trigger_action_str(action: TriggerAction) -> &'static str {
    match action {
        TriggerAction::Insert => "Insert",
        TriggerAction::Update => "Update",
        TriggerAction::Delete => "Delete",
    }
}

fn with_option(option: &WithOption) -> Value {
    ObjectBuilder::new("WithOption")
        .field("OptionKind", Value::String(option.name.clone()))
        .opt("Value", option.value.as_ref().map(scalar_expression))
        .build()
}

fn identity_options(options: &IdentityOptions) -> Value {
    ObjectBuilder::new("IdentityOptions")
        .opt("Seed", options.seed.as_ref().map(scalar_expression))
        .opt("Increment", options.increment.as_ref().map(scalar_expression))
        .build()
}

fn column_definition(column: &ColumnDefinition) -> Value {
    ObjectBuilder::new("ColumnDefinition")
        .field("ColumnName", Value::String(column.column_name.clone()))
        .field("DataType", data_type(&column.data_type))
        .opt("IsNullable", column.nullable.as_ref().map(|n| Value::Bool(n.nullable)))
        .opt("IdentityOptions", column.identity.as_ref().map(identity_options))
        .arr("Constraints", column.constraints.iter().map(constraint_definition).collect())
        .build()
}

fn constraint_definition(constraint: &ConstraintDefinition) -> Value {
    match constraint {
        ConstraintDefinition::PrimaryKey { name, columns, clustered } => ObjectBuilder::new("UniqueConstraintDefinition")
            .field("IsPrimaryKey", Value::Bool(true))
            .opt("ConstraintIdentifier", name.clone().map(Value::String))
            .arr("Columns", columns.iter().cloned().map(Value::String).collect())
            .opt("Clustered", clustered.map(Value::Bool))
            .build(),
        ConstraintDefinition::Unique { name, columns, clustered } => ObjectBuilder::new("UniqueConstraintDefinition")
            .field("IsPrimaryKey", Value::Bool(false))
            .opt("ConstraintIdentifier", name.clone().map(Value::String))
            .arr("Columns", columns.iter().cloned().map(Value::String).collect())
            .opt("Clustered", clustered.map(Value::Bool))
            .build(),
        ConstraintDefinition::ForeignKey { name, columns, referenced_table, referenced_columns } => {
            ObjectBuilder::new("ForeignKeyConstraintDefinition")
                .opt("ConstraintIdentifier", name.clone().map(Value::String))
                .arr("Columns", columns.iter().cloned().map(Value::String).collect())
                .field("ReferenceTableName", schema_object_name(referenced_table))
                .arr("ReferencedColumns", referenced_columns.iter().cloned().map(Value::String).collect())
                .build()
        }
        ConstraintDefinition::Check { name, expression } => ObjectBuilder::new("CheckConstraintDefinition")
            .opt("ConstraintIdentifier", name.clone().map(Value::String))
            .field("CheckCondition", boolean_expression(expression))
            .build(),
        ConstraintDefinition::Default { name, expression, column } => ObjectBuilder::new("DefaultConstraintDefinition")
            .opt("ConstraintIdentifier", name.clone().map(Value::String))
            .field("Expression", scalar_expression(expression))
            .opt("Column", column.clone().map(Value::String))
            .build(),
    }
}

fn procedure_parameter(parameter: &ProcedureParameter) -> Value {
    ObjectBuilder::new("ProcedureParameter")
        .field("VariableName", Value::String(parameter.variable_name.clone()))
        .field("DataType", data_type(&parameter.data_type))
        .opt("DefaultValue", parameter.default_value.as_ref().map(scalar_expression))
        .field("IsOutput", Value::Bool(parameter.is_output))
        .field("IsReadOnly", Value::Bool(parameter.is_readonly))
        .build()
}

fn execute_parameter(parameter: &ExecuteParameter) -> Value {
    ObjectBuilder::new("ExecuteParameter")
        .opt("VariableName", parameter.variable_name.clone().map(Value::String))
        .field("Value", scalar_expression(&parameter.value))
        .field("IsOutput", Value::Bool(parameter.is_output))
        .build()
}

fn execute_as_principal(principal: &ExecuteAsPrincipal) -> Value {
    match principal {
        ExecuteAsPrincipal::Caller => ObjectBuilder::new("ExecuteAsPrincipal").field("Kind", Value::String("Caller".to_string())).build(),
        ExecuteAsPrincipal::Self_ => ObjectBuilder::new("ExecuteAsPrincipal").field("Kind", Value::String("Self".to_string())).build(),
        ExecuteAsPrincipal::Owner => ObjectBuilder::new("ExecuteAsPrincipal").field("Kind", Value::String("Owner".to_string())).build(),
        ExecuteAsPrincipal::Login(name) => ObjectBuilder::new("ExecuteAsPrincipal")
            .field("Kind", Value::String("Login".to_string()))
            .field("Name", Value::String(name.clone()))
            .build(),
        ExecuteAsPrincipal::User(name) => ObjectBuilder::new("ExecuteAsPrincipal")
            .field("Kind", Value::String("User".to_string()))
            .field("Name", Value::String(name.clone()))
            .build(),
    }
}

fn wait_for_kind(kind: &WaitForKind) -> Value {
    match kind {
        WaitForKind::Delay(expr) => ObjectBuilder::new("WaitForSupportedStatement")
            .field("Kind", Value::String("Delay".to_string()))
            .field("Parameter", scalar_expression(expr))
            .build(),
        WaitForKind::Time(expr) => ObjectBuilder::new("WaitForSupportedStatement")
            .field("Kind", Value::String("Time".to_string()))
            .field("Parameter", scalar_expression(expr))
            .build(),
        WaitForKind::Receive { statement: inner, timeout } => ObjectBuilder::new("WaitForSupportedStatement")
            .field("Kind", Value::String("Receive".to_string()))
            .field("Statement", statement(inner))
            .opt("Timeout", timeout.as_ref().map(scalar_expression))
            .build(),
    }
}

fn update_text_source(source: &UpdateTextSource) -> Value {
    match source {
        UpdateTextSource::Column(column) => {
            ObjectBuilder::new("UpdateTextColumnSource").field("Column", multi_part_identifier(column)).build()
        }
        UpdateTextSource::Variable(name) => {
            ObjectBuilder::new("UpdateTextVariableSource").field("VariableName", Value::String(name.clone())).build()
        }
    }
}

fn permission(permission: &Permission) -> Value {
    ObjectBuilder::new("Permission")
        .field("Name", Value::String(permission.name.clone()))
        .arr("Columns", permission.columns.iter().cloned().map(Value::String).collect())
        .build()
}

fn restore_option(option: &RestoreOption) -> Value {
    ObjectBuilder::new("RestoreOption")
        .field("OptionKind", Value::String(option.name.clone()))
        .opt("Value", option.value.as_ref().map(scalar_expression))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsql_ast::types::{Identifier, QuoteType};

    #[test]
    fn break_and_continue_have_no_extra_fields() {
        let value = statement(&Statement::Break(BreakStatement));
        assert_eq!(value, serde_json::json!({ "$type": "BreakStatement" }));
    }

    #[test]
    fn truncate_table_projects_schema_object_name() {
        let name = SchemaObjectName::unqualified(Identifier::new("t", QuoteType::NotQuoted));
        let value = statement(&Statement::TruncateTable(TruncateTableStatement { schema_object_name: name }));
        assert_eq!(value["$type"], "TruncateTableStatement");
        assert_eq!(value["SchemaObjectName"]["BaseIdentifier"]["Value"], "t");
    }

    #[test]
    fn drop_table_keeps_is_if_exists_even_when_false() {
        let name = SchemaObjectName::unqualified(Identifier::new("t", QuoteType::NotQuoted));
        let value = statement(&Statement::DropTable(DropTableStatement { objects: vec![name], is_if_exists: false }));
        assert_eq!(value["IsIfExists"], false);
    }
}
