use crate::{expr::parse_call_args, priv_prelude::*};

impl Parse for StatementList {
    const FIRST: &'static [TokenKind] = FIRST_STATEMENT;

    /// Zero or more statements; stops at the first token that cannot begin one.
    fn parse(parser: &mut Parser) -> ParseResult<StatementList> {
        Ok(StatementList::new(parser.parse_while::<Statement>()?))
    }
}

impl Parse for Statement {
    const FIRST: &'static [TokenKind] = FIRST_STATEMENT;

    fn parse(parser: &mut Parser) -> ParseResult<Statement> {
        let statement = match parser.current().kind {
            TokenKind::Identifier => parse_identifier_statement(parser)?,
            TokenKind::If => Statement::If(parse_if(parser)?),
            TokenKind::Loop => {
                let loop_token = parser.advance();
                let body = parser.parse()?;
                parser.expect(TokenKind::End)?;
                Statement::Loop(LoopStatement::new(loop_token, body))
            }
            TokenKind::For => {
                let for_token = parser.advance();
                let variable = Identifier::new(parser.expect(TokenKind::Identifier)?);
                parser.expect(TokenKind::In)?;
                let iterable = parser.parse()?;
                parser.expect(TokenKind::Do)?;
                let body = parser.parse()?;
                parser.expect(TokenKind::End)?;
                Statement::For(ForStatement::new(for_token, variable, iterable, body))
            }
            TokenKind::Return => {
                let return_token = parser.advance();
                let value = parser.parse_opt::<Expr>()?;
                Statement::Return(ReturnStatement::new(return_token, value))
            }
            TokenKind::Exit => Statement::Exit(ExitStatement::new(parser.advance())),
            _ => return Err(parser.error(Expected::AnyOf(FIRST_STATEMENT.to_vec()))),
        };
        parser.expect(TokenKind::Semicolon)?;
        Ok(statement)
    }
}

/// Assignment, indexed assignment or procedure call, all led by a name.
fn parse_identifier_statement(parser: &mut Parser) -> ParseResult<Statement> {
    let name = parser.expect(TokenKind::Identifier)?;
    match parser.current().kind {
        TokenKind::ColonEqual => {
            let assign_token = parser.advance();
            let value = parser.parse()?;
            let target = AssignTarget::Identifier(Identifier::new(name));
            Ok(Statement::Assignment(Assignment::new(target, assign_token, value)))
        }
        TokenKind::BracketOpen => {
            let open_bracket = parser.advance();
            let index = parser.parse::<Expr>()?;
            parser.expect(TokenKind::BracketClose)?;
            let assign_token = parser.expect(TokenKind::ColonEqual)?;
            let value = parser.parse()?;
            let target = AssignTarget::Index(ListIndex::new(
                Expr::Identifier(Identifier::new(name)),
                open_bracket,
                index,
            ));
            Ok(Statement::Assignment(Assignment::new(target, assign_token, value)))
        }
        TokenKind::ParenthesisOpen => {
            let args = parse_call_args(parser)?;
            Ok(Statement::Call(Call::new(name, args)))
        }
        _ => Err(parser.error(Expected::AnyOf(vec![
            TokenKind::ColonEqual,
            TokenKind::BracketOpen,
            TokenKind::ParenthesisOpen,
        ]))),
    }
}

/// `if e then ... {elseif e then ...} [else ...] end`
fn parse_if(parser: &mut Parser) -> ParseResult<IfStatement> {
    let if_token = parser.expect(TokenKind::If)?;
    let condition = parser.parse()?;
    parser.expect(TokenKind::Then)?;
    let then_body = parser.parse()?;
    let mut branches = Vec::new();
    while let Some(elseif_token) = parser.take(TokenKind::Elseif) {
        let condition = parser.parse()?;
        parser.expect(TokenKind::Then)?;
        let body = parser.parse()?;
        branches.push(ElseIf::new(elseif_token, condition, body));
    }
    let else_body = match parser.take(TokenKind::Else) {
        Some(else_token) => Some(ElseBranch::new(else_token, parser.parse()?)),
        None => None,
    };
    parser.expect(TokenKind::End)?;
    Ok(IfStatement::new(
        if_token,
        condition,
        then_body,
        ElseIfList::new(branches),
        else_body,
    ))
}
