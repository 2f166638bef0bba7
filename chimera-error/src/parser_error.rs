use chimera_ast::{Token, TokenKind};
use chimera_types::{LineCol, Span, Spanned};
use std::fmt;
use thiserror::Error;

/// What the parser was prepared to accept at the point of failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expected {
    One(TokenKind),
    /// The first set of a production with several alternatives.
    AnyOf(Vec<TokenKind>),
}

impl Expected {
    pub fn contains(&self, kind: TokenKind) -> bool {
        match self {
            Expected::One(expected) => *expected == kind,
            Expected::AnyOf(kinds) => kinds.contains(&kind),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::One(kind) => write!(f, "{kind}"),
            Expected::AnyOf(kinds) => {
                let kinds = kinds
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "one of {kinds}")
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error("expected {expected}, found {found}")]
pub struct SyntaxError {
    pub expected: Expected,
    pub found: Token,
}

impl SyntaxError {
    pub fn new(expected: Expected, found: Token) -> SyntaxError {
        SyntaxError { expected, found }
    }

    pub fn line_col(&self) -> LineCol {
        self.found.line_col()
    }
}

impl Spanned for SyntaxError {
    fn span(&self) -> Span {
        self.found.span()
    }
}
