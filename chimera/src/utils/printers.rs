use chimera_ast::{NodeRef, Program};
use std::{fmt::Write, sync::Arc};

/// One `[line, column] KIND "lexeme"` row per token, the end marker included.
pub fn token_listing(src: &Arc<str>) -> String {
    let mut out = String::new();
    for token in chimera_parse::lex(src) {
        let _ = match token.lexeme() {
            Some(lexeme) => writeln!(
                out,
                "[{}, {}] {} {lexeme:?}",
                token.line, token.column, token.kind
            ),
            None => writeln!(out, "[{}, {}] {}", token.line, token.column, token.kind),
        };
    }
    out
}

/// The typed tree as an indented outline, two spaces per level.
pub fn ast_outline(program: &Program) -> String {
    let mut out = String::new();
    NodeRef::from(program).walk(&mut |node, depth| {
        let _ = writeln!(out, "{:indent$}{node}", "", indent = depth * 2);
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_listed_with_positions() {
        let src: Arc<str> = Arc::from("program\n  WrLn();");
        insta::assert_snapshot!(token_listing(&src), @r###"
        [1, 1] PROGRAM "program"
        [2, 3] IDENTIFIER "WrLn"
        [2, 7] PARENTHESIS_OPEN "("
        [2, 8] PARENTHESIS_CLOSE ")"
        [2, 9] SEMICOLON ";"
        [2, 10] EOF
        "###);
    }

    #[test]
    fn outline_shows_types() {
        let typed = chimera_core::compile_to_ast(Arc::from("program WrInt(1 + 2); end;")).unwrap();
        insta::assert_snapshot!(ast_outline(&typed.program), @r###"
        Program "program" : VOID
          ProcedureList : VOID
          StatementList : VOID
            CallStatement "WrInt" : VOID
              Plus "+" : INT
                IntLiteral "1" : INT
                IntLiteral "2" : INT
        "###);
    }
}
