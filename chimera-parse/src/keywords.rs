use chimera_ast::TokenKind;

/// Reserved words. Matching is case-sensitive: `Program` is an identifier.
pub const KEYWORDS: phf::Map<&'static str, TokenKind> = phf::phf_map! {
    "and" => TokenKind::And,
    "begin" => TokenKind::Begin,
    "boolean" => TokenKind::Boolean,
    "const" => TokenKind::Const,
    "div" => TokenKind::Div,
    "do" => TokenKind::Do,
    "else" => TokenKind::Else,
    "elseif" => TokenKind::Elseif,
    "end" => TokenKind::End,
    "exit" => TokenKind::Exit,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "if" => TokenKind::If,
    "in" => TokenKind::In,
    "integer" => TokenKind::Integer,
    "list" => TokenKind::List,
    "loop" => TokenKind::Loop,
    "not" => TokenKind::Not,
    "of" => TokenKind::Of,
    "or" => TokenKind::Or,
    "procedure" => TokenKind::Procedure,
    "program" => TokenKind::Program,
    "rem" => TokenKind::Rem,
    "return" => TokenKind::Return,
    "string" => TokenKind::String,
    "then" => TokenKind::Then,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "xor" => TokenKind::Xor,
};

pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    KEYWORDS.get(word).copied()
}
