pub use {
    crate::{
        expr::{Call, Expr, Identifier, ListLiteral, Literal},
        item::{ConstantList, ProcedureList, TypeAnnotation, VariableList},
        statement::StatementList,
        token::{Token, TokenKind},
        TypeSlot,
    },
    chimera_types::{LineCol, Span, Spanned, Type},
    num_bigint::BigUint,
    std::fmt,
    strum::Display,
};
