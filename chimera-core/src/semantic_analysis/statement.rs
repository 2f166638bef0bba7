use super::{
    error,
    expression::{self, type_check_expr},
    CheckResult, TypeCheckContext,
};
use crate::symbol_table::{Register, SymbolKind};
use chimera_ast::{
    AssignTarget, Assignment, Expr, ForStatement, IfStatement, ReturnStatement, Statement,
    StatementList, Token,
};
use chimera_error::SemanticErrorKind;
use chimera_types::Type;

pub(crate) fn type_check_statement_list(
    mut ctx: TypeCheckContext,
    list: &mut StatementList,
) -> CheckResult<()> {
    for statement in &mut list.statements {
        type_check_statement(ctx.by_ref(), statement)?;
    }
    list.ty.set(Type::Void);
    Ok(())
}

fn type_check_statement(ctx: TypeCheckContext, statement: &mut Statement) -> CheckResult<()> {
    match statement {
        Statement::Assignment(assignment) => type_check_assignment(ctx, assignment),
        Statement::Call(call) => {
            expression::type_check_call(ctx, call)?;
            call.ty.set(Type::Void);
            Ok(())
        }
        Statement::If(if_statement) => type_check_if(ctx, if_statement),
        Statement::Loop(loop_statement) => {
            type_check_statement_list(ctx.with_inside_loop(), &mut loop_statement.body)?;
            loop_statement.ty.set(Type::Void);
            Ok(())
        }
        Statement::For(for_statement) => type_check_for(ctx, for_statement),
        Statement::Return(return_statement) => type_check_return(ctx, return_statement),
        Statement::Exit(exit_statement) => {
            if !ctx.inside_loop() {
                return error(SemanticErrorKind::UnexpectedExit, &exit_statement.exit_token);
            }
            exit_statement.ty.set(Type::Void);
            Ok(())
        }
    }
}

fn type_check_assignment(
    mut ctx: TypeCheckContext,
    assignment: &mut Assignment,
) -> CheckResult<()> {
    let target = match &mut assignment.target {
        AssignTarget::Identifier(identifier) => {
            expression::type_check_identifier(ctx.by_ref(), identifier)?
        }
        AssignTarget::Index(index) => expression::type_check_list_index(ctx.by_ref(), index)?,
    };
    // Writing one element of a constant list is still a write to the constant.
    if let Some(base) = assignment.target.base_identifier() {
        let is_constant = ctx
            .lookup(base.as_str())
            .is_some_and(|register| register.kind == SymbolKind::Const);
        if is_constant {
            return error(
                SemanticErrorKind::AssignmentToConstant {
                    name: base.as_str().to_owned(),
                },
                &base.token,
            );
        }
    }
    let value = type_check_expr(ctx, &mut assignment.value)?;
    if !target.accepts(value) {
        return error(
            SemanticErrorKind::IncompatibleAssignment { target, value },
            &assignment.assign_token,
        );
    }
    assignment.ty.set(Type::Void);
    Ok(())
}

fn type_check_condition(
    ctx: TypeCheckContext,
    condition: &mut Expr,
    anchor: &Token,
) -> CheckResult<()> {
    let found = type_check_expr(ctx, condition)?;
    if found != Type::Bool {
        return error(SemanticErrorKind::NonBooleanCondition { found }, anchor);
    }
    Ok(())
}

fn type_check_if(mut ctx: TypeCheckContext, if_statement: &mut IfStatement) -> CheckResult<()> {
    type_check_condition(
        ctx.by_ref(),
        &mut if_statement.condition,
        &if_statement.if_token,
    )?;
    type_check_statement_list(ctx.by_ref(), &mut if_statement.then_body)?;
    for branch in &mut if_statement.else_ifs.branches {
        type_check_condition(ctx.by_ref(), &mut branch.condition, &branch.elseif_token)?;
        type_check_statement_list(ctx.by_ref(), &mut branch.body)?;
        branch.ty.set(Type::Void);
    }
    if_statement.else_ifs.ty.set(Type::Void);
    if let Some(else_branch) = &mut if_statement.else_body {
        type_check_statement_list(ctx.by_ref(), &mut else_branch.body)?;
        else_branch.ty.set(Type::Void);
    }
    if_statement.ty.set(Type::Void);
    Ok(())
}

/// The loop variable must hold exactly the element type of the iterated list.
///
/// Also declares the hidden `__<variable>_index` counter in the current scope.
fn type_check_for(mut ctx: TypeCheckContext, for_statement: &mut ForStatement) -> CheckResult<()> {
    let variable = expression::type_check_identifier(ctx.by_ref(), &mut for_statement.variable)?;
    let list = type_check_expr(ctx.by_ref(), &mut for_statement.iterable)?;
    if variable.to_list_type() != Some(list) {
        return error(
            SemanticErrorKind::IncompatibleForTypes { variable, list },
            &for_statement.variable.token,
        );
    }
    let index = format!("__{}_index", for_statement.variable.as_str());
    ctx.scope_mut().insert(index, Register::variable(Type::Int));
    type_check_statement_list(ctx.with_inside_loop(), &mut for_statement.body)?;
    for_statement.ty.set(Type::Void);
    Ok(())
}

fn type_check_return(
    ctx: TypeCheckContext,
    return_statement: &mut ReturnStatement,
) -> CheckResult<()> {
    let Some(expected) = ctx.current_procedure().map(|procedure| procedure.return_type) else {
        return error(
            SemanticErrorKind::UnexpectedReturn,
            &return_statement.return_token,
        );
    };
    let found = match &mut return_statement.value {
        Some(value) => type_check_expr(ctx, value)?,
        None => Type::Void,
    };
    if !expected.accepts(found) {
        return error(
            SemanticErrorKind::InvalidReturnType { expected, found },
            &return_statement.return_token,
        );
    }
    return_statement.ty.set(found);
    Ok(())
}
