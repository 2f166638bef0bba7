use super::{error, expression, statement, CheckResult, TypeCheckContext};
use crate::{
    procedure_table::Procedure,
    symbol_table::{Register, SymbolKind, Value},
};
use chimera_ast::{
    BindingDecl, ConstantDecl, ConstantList, ConstantValue, ListLiteral, Literal, LiteralValue,
    ProcedureDecl, ProcedureList, TypeAnnotation, VariableList,
};
use chimera_error::SemanticErrorKind;
use chimera_types::Type;
use num_traits::ToPrimitive;
use tracing::trace;

pub(crate) fn type_check_constant_list(
    mut ctx: TypeCheckContext,
    list: &mut ConstantList,
) -> CheckResult<()> {
    for decl in &mut list.declarations {
        type_check_constant_decl(ctx.by_ref(), decl)?;
    }
    list.ty.set(Type::Void);
    Ok(())
}

fn type_check_constant_decl(mut ctx: TypeCheckContext, decl: &mut ConstantDecl) -> CheckResult<()> {
    let name = decl.name.as_str();
    if ctx.scope().contains(name) {
        return error(
            SemanticErrorKind::DuplicatedConstant {
                name: name.to_owned(),
            },
            &decl.name,
        );
    }
    let (ty, value) = match &mut decl.value {
        ConstantValue::Simple(literal) => {
            let ty = expression::type_check_literal(literal)?;
            (ty, literal_value(&literal.value))
        }
        ConstantValue::List(list) => {
            let ty = expression::type_check_list_literal(list)?;
            (ty, list_value(list))
        }
    };
    if ty == Type::List {
        return error(SemanticErrorKind::EmptyListConstant, &decl.name);
    }
    ctx.scope_mut().insert(name, Register::constant(ty, value));
    decl.ty.set(ty);
    trace!(constant = name, %ty, "declared constant");
    Ok(())
}

fn literal_value(value: &LiteralValue) -> Option<Value> {
    match value {
        LiteralValue::Int(value) => value.to_i32().map(Value::Int),
        LiteralValue::String(value) => Some(Value::String(value.clone())),
        LiteralValue::Bool(value) => Some(Value::Bool(*value)),
    }
}

/// The value of an already checked, and therefore homogeneous, list literal.
fn list_value(list: &ListLiteral) -> Option<Value> {
    let elements = list.elements.iter().map(|literal: &Literal| literal_value(&literal.value));
    let value = match list.ty.get()? {
        Type::IntList => Value::IntList(
            elements
                .map(|value| match value? {
                    Value::Int(value) => Some(value),
                    _ => None,
                })
                .collect::<Option<_>>()?,
        ),
        Type::StringList => Value::StringList(
            elements
                .map(|value| match value? {
                    Value::String(value) => Some(value),
                    _ => None,
                })
                .collect::<Option<_>>()?,
        ),
        Type::BoolList => Value::BoolList(
            elements
                .map(|value| match value? {
                    Value::Bool(value) => Some(value),
                    _ => None,
                })
                .collect::<Option<_>>()?,
        ),
        _ => return None,
    };
    Some(value)
}

pub(crate) fn type_check_variable_list(
    mut ctx: TypeCheckContext,
    list: &mut VariableList,
) -> CheckResult<()> {
    for decl in &mut list.declarations {
        type_check_binding_decl(ctx.by_ref(), decl, SymbolKind::Var)?;
    }
    list.ty.set(Type::Void);
    Ok(())
}

/// Declares every name of `decl` in the current scope as a `kind` register.
///
/// Parameters are numbered in declaration order across the whole parameter list.
fn type_check_binding_decl(
    mut ctx: TypeCheckContext,
    decl: &mut BindingDecl,
    kind: SymbolKind,
) -> CheckResult<()> {
    let ty = type_check_type_annotation(&mut decl.type_annotation);
    for name in &mut decl.names {
        if ctx.scope().contains(name.as_str()) {
            let name_str = name.as_str().to_owned();
            let err = match kind {
                SymbolKind::Param => SemanticErrorKind::DuplicatedParameter { name: name_str },
                _ => SemanticErrorKind::DuplicatedVariable { name: name_str },
            };
            return error(err, &name.token);
        }
        let register = match kind {
            SymbolKind::Param => {
                let position = ctx.current_procedure().map_or(0, Procedure::arity);
                Register::parameter(ty, position)
            }
            _ => Register::variable(ty),
        };
        ctx.scope_mut().insert(name.as_str(), register);
        name.ty.set(ty);
    }
    decl.ty.set(ty);
    Ok(())
}

pub(crate) fn type_check_type_annotation(annotation: &mut TypeAnnotation) -> Type {
    let ty = annotation.denoted();
    annotation.ty_slot_mut().set(ty);
    ty
}

pub(crate) fn type_check_procedure_list(
    mut ctx: TypeCheckContext,
    list: &mut ProcedureList,
) -> CheckResult<()> {
    for decl in &mut list.procedures {
        type_check_procedure_decl(ctx.by_ref(), decl)?;
    }
    list.ty.set(Type::Void);
    Ok(())
}

/// The procedure is registered before its parameters and body are checked, so it may call
/// itself.
fn type_check_procedure_decl(
    mut ctx: TypeCheckContext,
    decl: &mut ProcedureDecl,
) -> CheckResult<()> {
    let name = decl.name().to_owned();
    if let Some(existing) = ctx.procedures.get(&name) {
        let err = if existing.is_builtin {
            SemanticErrorKind::BuiltinRedefinition { name }
        } else {
            SemanticErrorKind::DuplicateProcedure { name }
        };
        return error(err, &decl.name);
    }
    let return_type = type_check_type_annotation(&mut decl.return_type);
    ctx.procedures
        .insert(name.clone(), Procedure::user(return_type));

    let mut ctx = ctx.with_procedure(name.clone());
    for parameter in &mut decl.parameters.declarations {
        type_check_binding_decl(ctx.by_ref(), parameter, SymbolKind::Param)?;
    }
    decl.parameters.ty.set(Type::Void);
    if let Some(constants) = &mut decl.constants {
        type_check_constant_list(ctx.by_ref(), constants)?;
    }
    if let Some(variables) = &mut decl.variables {
        type_check_variable_list(ctx.by_ref(), variables)?;
    }
    statement::type_check_statement_list(ctx.by_ref(), &mut decl.body)?;
    decl.ty.set(return_type);
    trace!(procedure = %name, %return_type, "checked procedure");
    Ok(())
}
