use crate::priv_prelude::*;

impl Parse for Expr {
    const FIRST: &'static [TokenKind] = FIRST_EXPR;

    fn parse(parser: &mut Parser) -> ParseResult<Expr> {
        parse_logic(parser)
    }
}

fn parse_logic(parser: &mut Parser) -> ParseResult<Expr> {
    fold_left(parser, FIRST_LOGIC_OPERATOR, parse_relational)
}

fn parse_relational(parser: &mut Parser) -> ParseResult<Expr> {
    fold_left(parser, FIRST_RELATIONAL_OPERATOR, parse_sum)
}

fn parse_sum(parser: &mut Parser) -> ParseResult<Expr> {
    fold_left(parser, FIRST_SUM_OPERATOR, parse_mul)
}

fn parse_mul(parser: &mut Parser) -> ParseResult<Expr> {
    fold_left(parser, FIRST_MUL_OPERATOR, parse_unary)
}

/// `operand {op operand}`, folded so that `a - b - c` is `(a - b) - c`.
fn fold_left(
    parser: &mut Parser,
    operators: &'static [TokenKind],
    parse_operand: fn(&mut Parser) -> ParseResult<Expr>,
) -> ParseResult<Expr> {
    let mut expr = parse_operand(parser)?;
    loop {
        if let Some(op_token) = parser.take_any(operators) {
            let Some(op) = BinaryOp::from_token_kind(op_token.kind) else {
                return Err(SyntaxError::new(Expected::AnyOf(operators.to_vec()), op_token));
            };
            let rhs = parse_operand(parser)?;
            expr = Expr::Binary(BinaryExpr::new(op, op_token, expr, rhs));
            continue;
        }
        return Ok(expr);
    }
}

fn parse_unary(parser: &mut Parser) -> ParseResult<Expr> {
    if let Some(op_token) = parser.take_any(FIRST_UNARY_OPERATOR) {
        let Some(op) = UnaryOp::from_token_kind(op_token.kind) else {
            return Err(SyntaxError::new(
                Expected::AnyOf(FIRST_UNARY_OPERATOR.to_vec()),
                op_token,
            ));
        };
        let operand = parse_unary(parser)?;
        return Ok(Expr::Unary(UnaryExpr::new(op, op_token, operand)));
    }
    parse_primary(parser)
}

/// A primary expression with at most one `[index]` suffix.
fn parse_primary(parser: &mut Parser) -> ParseResult<Expr> {
    let expr = match parser.current().kind {
        TokenKind::ParenthesisOpen => {
            let _ = parser.advance();
            let inner = parser.parse::<Expr>()?;
            parser.expect(TokenKind::ParenthesisClose)?;
            inner
        }
        TokenKind::Identifier => {
            let name = parser.advance();
            if parser.has(TokenKind::ParenthesisOpen) {
                let args = parse_call_args(parser)?;
                Expr::Call(Call::new(name, args))
            } else {
                Expr::Identifier(Identifier::new(name))
            }
        }
        TokenKind::CurlyOpen | TokenKind::BracketOpen => Expr::List(parser.parse()?),
        _ if parser.has_any(FIRST_SIMPLE_LITERAL) => Expr::Literal(parser.parse()?),
        _ => return Err(parser.error(Expected::AnyOf(FIRST_PRIMARY.to_vec()))),
    };
    if let Some(open_bracket) = parser.take(TokenKind::BracketOpen) {
        let index = parser.parse::<Expr>()?;
        parser.expect(TokenKind::BracketClose)?;
        return Ok(Expr::Index(ListIndex::new(expr, open_bracket, index)));
    }
    Ok(expr)
}

/// `( [expr {, expr}] )`
pub(crate) fn parse_call_args(parser: &mut Parser) -> ParseResult<Vec<Expr>> {
    parser.expect(TokenKind::ParenthesisOpen)?;
    let mut args = Vec::new();
    if let Some(first) = parser.parse_opt::<Expr>()? {
        args.push(first);
        while parser.take(TokenKind::Comma).is_some() {
            args.push(parser.parse()?);
        }
    }
    parser.expect(TokenKind::ParenthesisClose)?;
    Ok(args)
}

impl Parse for Literal {
    const FIRST: &'static [TokenKind] = FIRST_SIMPLE_LITERAL;

    fn parse(parser: &mut Parser) -> ParseResult<Literal> {
        let token = parser.expect_any(FIRST_SIMPLE_LITERAL)?;
        let value = match token.kind {
            TokenKind::IntLiteral => match token.as_str().parse::<BigUint>() {
                Ok(value) => LiteralValue::Int(value),
                Err(_) => {
                    return Err(SyntaxError::new(
                        Expected::One(TokenKind::IntLiteral),
                        token,
                    ))
                }
            },
            TokenKind::StringLiteral => LiteralValue::String(unquote(token.as_str())),
            kind => LiteralValue::Bool(kind == TokenKind::True),
        };
        Ok(Literal::new(token, value))
    }
}

/// Strips the surrounding quotes and collapses `""` into `"`.
fn unquote(lexeme: &str) -> String {
    let inner = lexeme
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(lexeme);
    inner.replace("\"\"", "\"")
}

impl Parse for ListLiteral {
    const FIRST: &'static [TokenKind] = &[TokenKind::CurlyOpen, TokenKind::BracketOpen];

    /// `{ [lit {, lit}] }`, or the same between square brackets.
    fn parse(parser: &mut Parser) -> ParseResult<ListLiteral> {
        let open_token = parser.expect_any(Self::FIRST)?;
        let close = match open_token.kind {
            TokenKind::BracketOpen => TokenKind::BracketClose,
            _ => TokenKind::CurlyClose,
        };
        let mut elements = Vec::new();
        if let Some(first) = parser.parse_opt::<Literal>()? {
            elements.push(first);
            while parser.take(TokenKind::Comma).is_some() {
                elements.push(parser.parse()?);
            }
        }
        parser.expect(close)?;
        Ok(ListLiteral::new(open_token, elements))
    }
}
