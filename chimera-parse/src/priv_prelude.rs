pub use {
    crate::{
        first::*,
        parse::Parse,
        parser::{ParseResult, Parser},
    },
    chimera_ast::{
        AssignTarget, Assignment, BinaryExpr, BinaryOp, BindingDecl, Call, ConstantDecl,
        ConstantList, ConstantValue, ElseBranch, ElseIf, ElseIfList, ExitStatement, Expr,
        ForStatement, Identifier, IfStatement, ListIndex, ListLiteral, Literal, LiteralValue,
        LoopStatement, ParameterList, ProcedureDecl, ProcedureList, Program, ReturnStatement,
        SimpleType, Statement, StatementList, Token, TokenKind, TypeAnnotation, TypeSlot,
        UnaryExpr, UnaryOp, VariableList,
    },
    chimera_error::{Expected, SyntaxError},
    chimera_types::{Span, Spanned},
    extension_trait::extension_trait,
    num_bigint::BigUint,
    std::{mem, sync::Arc},
    unicode_xid::UnicodeXID,
};
