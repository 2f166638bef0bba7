use crate::{parser_error::SyntaxError, semantic_error::SemanticError};
use chimera_ast::Token;
use chimera_types::{LineCol, Span, Spanned};
use thiserror::Error;

/// The single diagnostic a failed compilation unit produces.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum CompileError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("Semantic error: {0}")]
    Semantic(#[from] SemanticError),
}

impl CompileError {
    /// The token the diagnostic points at.
    pub fn token(&self) -> &Token {
        match self {
            CompileError::Syntax(err) => &err.found,
            CompileError::Semantic(err) => &err.token,
        }
    }

    pub fn line_col(&self) -> LineCol {
        self.token().line_col()
    }

    /// The bare message, without the error class prefix.
    pub fn message(&self) -> String {
        match self {
            CompileError::Syntax(err) => err.to_string(),
            CompileError::Semantic(err) => err.to_string(),
        }
    }
}

impl Spanned for CompileError {
    fn span(&self) -> Span {
        self.token().span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Expected, SemanticErrorKind};
    use chimera_ast::TokenKind;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn both_classes_expose_their_token() {
        let src: Arc<str> = Arc::from("exit ;");
        let exit = Token::new(
            TokenKind::Exit,
            Span::new(src.clone(), 0, 4).unwrap(),
            2,
            5,
        );
        let semi = Token::new(TokenKind::Semicolon, Span::new(src, 5, 6).unwrap(), 2, 10);

        let semantic: CompileError =
            SemanticError::new(SemanticErrorKind::UnexpectedExit, exit).into();
        assert_eq!(semantic.line_col(), LineCol { line: 2, col: 5 });
        assert_eq!(semantic.span().as_str(), "exit");
        insta::assert_snapshot!(semantic, @"Semantic error: Unexpected exit statement");

        let syntax: CompileError =
            SyntaxError::new(Expected::One(TokenKind::Identifier), semi).into();
        assert_eq!(syntax.token().kind, TokenKind::Semicolon);
        assert_eq!(syntax.message(), "expected IDENTIFIER, found SEMICOLON \";\"");
    }
}
