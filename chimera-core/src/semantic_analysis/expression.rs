use super::{error, CheckResult, TypeCheckContext};
use chimera_ast::{
    BinaryExpr, BinaryOp, Call, Expr, Identifier, ListIndex, ListLiteral, Literal, LiteralValue,
    UnaryExpr, UnaryOp,
};
use chimera_error::SemanticErrorKind;
use chimera_types::Type;
use num_traits::ToPrimitive;

pub(crate) fn type_check_expr(ctx: TypeCheckContext, expr: &mut Expr) -> CheckResult<Type> {
    match expr {
        Expr::Identifier(identifier) => type_check_identifier(ctx, identifier),
        Expr::Call(call) => {
            let ty = type_check_call(ctx, call)?;
            call.ty.set(ty);
            Ok(ty)
        }
        Expr::Index(index) => type_check_list_index(ctx, index),
        Expr::Literal(literal) => type_check_literal(literal),
        Expr::List(list) => type_check_list_literal(list),
        Expr::Binary(binary) => type_check_binary(ctx, binary),
        Expr::Unary(unary) => type_check_unary(ctx, unary),
    }
}

pub(crate) fn type_check_identifier(
    ctx: TypeCheckContext,
    identifier: &mut Identifier,
) -> CheckResult<Type> {
    let Some(register) = ctx.lookup(identifier.as_str()) else {
        return error(
            SemanticErrorKind::UndeclaredVariable {
                name: identifier.as_str().to_owned(),
            },
            &identifier.token,
        );
    };
    let ty = register.ty;
    identifier.ty.set(ty);
    Ok(ty)
}

/// Checks the callee and arguments, returning the callee's return type.
///
/// Leaves `call.ty` alone: a call statement is `VOID` whatever it returns.
pub(crate) fn type_check_call(mut ctx: TypeCheckContext, call: &mut Call) -> CheckResult<Type> {
    let Some(procedure) = ctx.procedures.get(call.name.as_str()) else {
        return error(
            SemanticErrorKind::UndeclaredProcedure {
                name: call.name.as_str().to_owned(),
            },
            &call.name,
        );
    };
    let return_type = procedure.return_type;
    let parameters = procedure.parameters();
    if call.args.len() != parameters.len() {
        return error(
            SemanticErrorKind::WrongArgumentCount {
                expected: parameters.len(),
                found: call.args.len(),
            },
            &call.name,
        );
    }
    for (arg, (parameter, expected)) in call.args.iter_mut().zip(parameters) {
        let found = type_check_expr(ctx.by_ref(), arg)?;
        if !expected.accepts(found) {
            return error(
                SemanticErrorKind::IncompatibleArgument {
                    parameter,
                    expected,
                    found,
                },
                arg.anchor(),
            );
        }
    }
    Ok(return_type)
}

pub(crate) fn type_check_list_index(
    mut ctx: TypeCheckContext,
    index: &mut ListIndex,
) -> CheckResult<Type> {
    let target = type_check_expr(ctx.by_ref(), &mut index.target)?;
    let found = type_check_expr(ctx, &mut index.index)?;
    if found != Type::Int {
        return error(
            SemanticErrorKind::NonIntegerIndex { found },
            index.index.anchor(),
        );
    }
    let Some(ty) = target.element_type() else {
        return error(
            SemanticErrorKind::IndexNonList { found: target },
            &index.open_bracket,
        );
    };
    index.ty.set(ty);
    Ok(ty)
}

pub(crate) fn type_check_literal(literal: &mut Literal) -> CheckResult<Type> {
    let ty = match &literal.value {
        LiteralValue::Int(value) => {
            if value.to_i32().is_none() {
                return error(
                    SemanticErrorKind::IntegerLiteralTooLarge {
                        literal: literal.token.as_str().to_owned(),
                    },
                    &literal.token,
                );
            }
            Type::Int
        }
        LiteralValue::String(_) => Type::String,
        LiteralValue::Bool(_) => Type::Bool,
    };
    literal.ty.set(ty);
    Ok(ty)
}

/// `{}` is the generic `LIST`; otherwise every element must share the first one's type.
pub(crate) fn type_check_list_literal(list: &mut ListLiteral) -> CheckResult<Type> {
    let mut elements = list.elements.iter_mut();
    let ty = match elements.next() {
        None => Type::List,
        Some(first) => {
            let expected = type_check_literal(first)?;
            for element in elements {
                let found = type_check_literal(element)?;
                if found != expected {
                    return error(
                        SemanticErrorKind::HeterogeneousList { expected, found },
                        &element.token,
                    );
                }
            }
            expected.to_list_type().unwrap_or(Type::List)
        }
    };
    list.ty.set(ty);
    Ok(ty)
}

fn type_check_binary(mut ctx: TypeCheckContext, binary: &mut BinaryExpr) -> CheckResult<Type> {
    let lhs = type_check_expr(ctx.by_ref(), &mut binary.lhs)?;
    let rhs = type_check_expr(ctx, &mut binary.rhs)?;
    let ty = match binary.op {
        BinaryOp::And | BinaryOp::Or | BinaryOp::Xor => {
            require_operands(binary, lhs, rhs, Type::Bool)?;
            Type::Bool
        }
        BinaryOp::LessThan
        | BinaryOp::MoreThan
        | BinaryOp::LessThanEqual
        | BinaryOp::MoreThanEqual => {
            require_operands(binary, lhs, rhs, Type::Int)?;
            Type::Bool
        }
        BinaryOp::Plus | BinaryOp::Minus | BinaryOp::Times | BinaryOp::Div | BinaryOp::Rem => {
            require_operands(binary, lhs, rhs, Type::Int)?;
            Type::Int
        }
        BinaryOp::Equal | BinaryOp::Unequal => {
            if !matches!(lhs, Type::Int | Type::Bool) {
                return error(
                    SemanticErrorKind::EqualityOperandMismatch {
                        operator: binary.op_token.as_str().to_owned(),
                    },
                    &binary.op_token,
                );
            }
            require_operands(binary, lhs, rhs, lhs)?;
            Type::Bool
        }
    };
    binary.ty.set(ty);
    Ok(ty)
}

fn require_operands(binary: &BinaryExpr, lhs: Type, rhs: Type, expected: Type) -> CheckResult<()> {
    if lhs == expected && rhs == expected {
        return Ok(());
    }
    error(
        SemanticErrorKind::BinaryOperandMismatch {
            operator: binary.op_token.as_str().to_owned(),
            expected,
        },
        &binary.op_token,
    )
}

fn type_check_unary(ctx: TypeCheckContext, unary: &mut UnaryExpr) -> CheckResult<Type> {
    let operand = type_check_expr(ctx, &mut unary.operand)?;
    let expected = match unary.op {
        UnaryOp::Not => Type::Bool,
        UnaryOp::Negation => Type::Int,
    };
    if operand != expected {
        return error(
            SemanticErrorKind::UnaryOperandMismatch {
                operator: unary.op_token.as_str().to_owned(),
                expected,
            },
            &unary.op_token,
        );
    }
    unary.ty.set(expected);
    Ok(expected)
}
