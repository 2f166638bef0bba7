use chimera_ast::Token;
use chimera_types::{LineCol, Span, Spanned, Type};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum SemanticErrorKind {
    #[error("Duplicated constant: {name}")]
    DuplicatedConstant { name: String },
    #[error("Duplicated variable: {name}")]
    DuplicatedVariable { name: String },
    #[error("Duplicated parameter: {name}")]
    DuplicatedParameter { name: String },
    #[error("Duplicate procedure {name}")]
    DuplicateProcedure { name: String },
    #[error("Cannot redefine builtin procedure {name}")]
    BuiltinRedefinition { name: String },
    #[error("List constants should have at least one element")]
    EmptyListConstant,
    #[error("Undeclared variable or constant: {name}")]
    UndeclaredVariable { name: String },
    #[error("Undeclared procedure: {name}")]
    UndeclaredProcedure { name: String },
    #[error("Wrong number of params to procedure call: expected {expected} but got {found}")]
    WrongArgumentCount { expected: usize, found: usize },
    #[error("Incompatible types {found} and {expected} for parameter {parameter}")]
    IncompatibleArgument {
        parameter: String,
        expected: Type,
        found: Type,
    },
    #[error("Cannot assign a value of type {value} to a variable of type {target}")]
    IncompatibleAssignment { target: Type, value: Type },
    #[error("Cannot assign to constant '{name}'")]
    AssignmentToConstant { name: String },
    #[error("Condition has to be of type {} but got {found}", Type::Bool)]
    NonBooleanCondition { found: Type },
    #[error("Incompatible types {variable} and {list}")]
    IncompatibleForTypes { variable: Type, list: Type },
    #[error("Unexpected exit statement")]
    UnexpectedExit,
    #[error("Unexpected return statement")]
    UnexpectedReturn,
    #[error("Invalid return type {found} for procedure of type {expected}")]
    InvalidReturnType { expected: Type, found: Type },
    #[error("Operator {operator} requires two operands of type {expected}")]
    BinaryOperandMismatch { operator: String, expected: Type },
    #[error("Operator {operator} requires one of {} or {}", Type::Bool, Type::Int)]
    EqualityOperandMismatch { operator: String },
    #[error("Operator {operator} requires an operand of type {expected}")]
    UnaryOperandMismatch { operator: String, expected: Type },
    #[error("List indexes should be {}, got {found}", Type::Int)]
    NonIntegerIndex { found: Type },
    #[error("Cannot index a value of type {found}")]
    IndexNonList { found: Type },
    #[error("All elements of a list should be the same type, expected {expected} but got {found}")]
    HeterogeneousList { expected: Type, found: Type },
    #[error("Integer literal too large: {literal}")]
    IntegerLiteralTooLarge { literal: String },
}

/// A type, scope or context violation, anchored on the offending token.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error("{}", kind)]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub token: Token,
}

impl SemanticError {
    pub fn new(kind: SemanticErrorKind, token: Token) -> SemanticError {
        SemanticError { kind, token }
    }

    pub fn line_col(&self) -> LineCol {
        self.token.line_col()
    }
}

impl Spanned for SemanticError {
    fn span(&self) -> Span {
        self.token.span()
    }
}
