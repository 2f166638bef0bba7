use crate::priv_prelude::*;

impl Parse for ProcedureList {
    const FIRST: &'static [TokenKind] = &[TokenKind::Procedure];

    fn parse(parser: &mut Parser) -> ParseResult<ProcedureList> {
        Ok(ProcedureList::new(parser.parse_while::<ProcedureDecl>()?))
    }
}

impl Parse for Program {
    const FIRST: &'static [TokenKind] = &[
        TokenKind::Const,
        TokenKind::Var,
        TokenKind::Procedure,
        TokenKind::Program,
    ];

    /// `[const ...] [var ...] {procedure} program {statement} end ;` and then end of input.
    fn parse(parser: &mut Parser) -> ParseResult<Program> {
        let constants = parser.parse_opt::<ConstantList>()?;
        let variables = parser.parse_opt::<VariableList>()?;
        let procedures = parser.parse::<ProcedureList>()?;
        let program_token = match parser.take(TokenKind::Program) {
            Some(token) => token,
            None => {
                let mut expected = FIRST_DECLARATION.to_vec();
                expected.push(TokenKind::Program);
                return Err(parser.error(Expected::AnyOf(expected)));
            }
        };
        let statements = parser.parse()?;
        parser.expect(TokenKind::End)?;
        parser.expect(TokenKind::Semicolon)?;
        parser.expect(TokenKind::Eof)?;
        Ok(Program::new(
            program_token,
            constants,
            variables,
            procedures,
            statements,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_program, test_utils::parse_err};
    use assert_matches::*;

    fn program(input: &str) -> Program {
        let src: Arc<str> = Arc::from(input);
        parse_program(&src).unwrap_or_else(|err| panic!("{err}"))
    }

    #[test]
    fn parse_minimal_program() {
        let program = program("program WrInt(1); end;");
        assert!(program.constants.is_none());
        assert!(program.variables.is_none());
        assert!(program.procedures.procedures.is_empty());
        assert_eq!(program.statements.len(), 1);
        assert_matches!(&program.statements.statements[0], Statement::Call(call) if call.name.as_str() == "WrInt");
    }

    #[test]
    fn parse_program_with_declarations() {
        let program = program(
            r#"
            const n := 3;
            var xs: list of integer;
            procedure sum(xs: list of integer;): integer;
                var total, x: integer;
            begin
                for x in xs do
                    total := total + x;
                end;
                return total;
            end;
            procedure show(); begin WrLn(); end;
            program
                xs := NewLstInt(n);
                WrInt(sum(xs));
            end;
            "#,
        );
        assert!(program.constants.is_some());
        assert!(program.variables.is_some());
        assert_eq!(program.procedures.procedures.len(), 2);
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn declarations_keep_their_order() {
        let err = parse_err::<Program>("var x: integer; const y := 1; program end;");
        let mut expected = FIRST_DECLARATION.to_vec();
        expected.push(TokenKind::Program);
        assert_eq!(err.expected, Expected::AnyOf(expected));
        assert!(err.found.is(TokenKind::Const));
    }

    #[test]
    fn trailing_input_is_rejected() {
        let err = parse_err::<Program>("program end; x");
        assert_eq!(err.expected, Expected::One(TokenKind::Eof));
        assert_eq!(err.found.as_str(), "x");
    }

    #[test]
    fn illegal_characters_surface_as_syntax_errors() {
        let err = parse_err::<Program>("program x := 1 $ 2; end;");
        assert_eq!(err.expected, Expected::One(TokenKind::Semicolon));
        assert!(err.found.is(TokenKind::IllegalChar));
        assert_eq!((err.found.line, err.found.column), (1, 16));
    }

    #[test]
    fn truncated_program_reports_end_of_input() {
        let err = parse_err::<Program>("program loop exit;");
        assert_eq!(err.expected, Expected::One(TokenKind::End));
        assert!(err.found.is(TokenKind::Eof));
    }

    #[test]
    fn syntax_error_messages() {
        insta::assert_snapshot!(
            parse_err::<Program>("program x := 1 $ 2; end;"),
            @r###"expected SEMICOLON, found ILLEGAL_CHAR "$""###
        );
        insta::assert_snapshot!(
            parse_err::<Program>("program loop exit;"),
            @"expected END, found end of input"
        );
    }
}
