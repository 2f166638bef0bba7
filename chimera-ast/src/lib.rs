pub mod expr;
pub mod item;
pub mod node;
pub mod program;
pub mod statement;
pub mod token;

mod priv_prelude;

pub use crate::{
    expr::{
        BinaryExpr, BinaryOp, Call, Expr, Identifier, ListIndex, ListLiteral, Literal,
        LiteralValue, UnaryExpr, UnaryOp,
    },
    item::{
        BindingDecl, ConstantDecl, ConstantList, ConstantValue, ParameterList, ProcedureDecl,
        ProcedureList, SimpleType, TypeAnnotation, VariableList,
    },
    node::{NodeKind, NodeRef},
    program::Program,
    statement::{
        AssignTarget, Assignment, ElseBranch, ElseIf, ElseIfList, ExitStatement, ForStatement,
        IfStatement, LoopStatement, ReturnStatement, Statement, StatementList,
    },
    token::{Token, TokenKind},
};

use chimera_types::Type;

/// The resolved-type slot every node carries.
///
/// The parser leaves it empty; semantic analysis writes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypeSlot(Option<Type>);

impl TypeSlot {
    pub fn get(&self) -> Option<Type> {
        self.0
    }

    pub fn set(&mut self, ty: Type) {
        self.0 = Some(ty);
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}
