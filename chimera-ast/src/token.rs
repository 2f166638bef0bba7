use crate::priv_prelude::*;

/// Every category a scanned token can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Identifier,
    IllegalChar,
    Eof,
    // Keywords.
    Program,
    Const,
    Var,
    End,
    Integer,
    Boolean,
    String,
    List,
    Of,
    Procedure,
    Begin,
    If,
    Then,
    Elseif,
    Else,
    Loop,
    For,
    In,
    Do,
    Return,
    Exit,
    And,
    Or,
    Xor,
    Div,
    Rem,
    Not,
    True,
    False,
    // Literals.
    IntLiteral,
    StringLiteral,
    // Punctuation.
    Colon,
    Comma,
    Semicolon,
    ColonEqual,
    CurlyOpen,
    CurlyClose,
    ParenthesisOpen,
    ParenthesisClose,
    BracketOpen,
    BracketClose,
    // Symbolic operators.
    Equal,
    Unequal,
    LessThan,
    MoreThan,
    LessThanEqual,
    MoreThanEqual,
    Plus,
    Minus,
    Times,
}

/// A classified, positioned piece of source text.
///
/// `line` and `column` are 1-based and count characters, not bytes. The end-of-input token
/// has an empty span and no lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, line: usize, column: usize) -> Token {
        Token {
            kind,
            span,
            line,
            column,
        }
    }

    pub fn lexeme(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Eof => None,
            _ => Some(self.span.as_str()),
        }
    }

    /// The lexeme, or an empty string for the end marker.
    pub fn as_str(&self) -> &str {
        self.lexeme().unwrap_or_default()
    }

    pub fn line_col(&self) -> LineCol {
        LineCol {
            line: self.line,
            col: self.column,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(lexeme) => write!(f, "{} \"{}\"", self.kind, lexeme),
            None => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn kinds_display_in_screaming_case() {
        assert_eq!(TokenKind::IllegalChar.to_string(), "ILLEGAL_CHAR");
        assert_eq!(TokenKind::ColonEqual.to_string(), "COLON_EQUAL");
        assert_eq!(TokenKind::Elseif.to_string(), "ELSEIF");
    }

    #[test]
    fn end_marker_has_no_lexeme() {
        let src: Arc<str> = Arc::from("end ;");
        let eof = Token::new(TokenKind::Eof, Span::end_of(src.clone()), 1, 6);
        assert_eq!(eof.lexeme(), None);
        assert_eq!(eof.to_string(), "end of input");

        let end = Token::new(TokenKind::End, Span::new(src, 0, 3).unwrap(), 1, 1);
        assert_eq!(end.to_string(), "END \"end\"");
        assert_eq!(end.line_col().to_string(), "1:1");
    }
}
