use crate::priv_prelude::*;

impl Parse for ConstantList {
    const FIRST: &'static [TokenKind] = &[TokenKind::Const];

    /// `const (name := literal ;)+`
    fn parse(parser: &mut Parser) -> ParseResult<ConstantList> {
        let const_token = parser.expect(TokenKind::Const)?;
        let mut declarations = vec![parser.parse::<ConstantDecl>()?];
        declarations.extend(parser.parse_while::<ConstantDecl>()?);
        Ok(ConstantList::new(const_token, declarations))
    }
}

impl Parse for ConstantDecl {
    const FIRST: &'static [TokenKind] = &[TokenKind::Identifier];

    fn parse(parser: &mut Parser) -> ParseResult<ConstantDecl> {
        let name = parser.expect(TokenKind::Identifier)?;
        parser.expect(TokenKind::ColonEqual)?;
        let value = if parser.has(TokenKind::CurlyOpen) {
            ConstantValue::List(parser.parse()?)
        } else if parser.has_any(FIRST_SIMPLE_LITERAL) {
            ConstantValue::Simple(parser.parse()?)
        } else {
            let mut expected = FIRST_SIMPLE_LITERAL.to_vec();
            expected.push(TokenKind::CurlyOpen);
            return Err(parser.error(Expected::AnyOf(expected)));
        };
        parser.expect(TokenKind::Semicolon)?;
        Ok(ConstantDecl::new(name, value))
    }
}

impl Parse for VariableList {
    const FIRST: &'static [TokenKind] = &[TokenKind::Var];

    /// `var (a {, b} : type ;)+`
    fn parse(parser: &mut Parser) -> ParseResult<VariableList> {
        let var_token = parser.expect(TokenKind::Var)?;
        let mut declarations = Vec::new();
        loop {
            declarations.push(parser.parse::<BindingDecl>()?);
            parser.expect(TokenKind::Semicolon)?;
            if !parser.has(TokenKind::Identifier) {
                break;
            }
        }
        Ok(VariableList::new(var_token, declarations))
    }
}

impl Parse for BindingDecl {
    const FIRST: &'static [TokenKind] = &[TokenKind::Identifier];

    /// `a {, b} : type`, without the trailing semicolon.
    fn parse(parser: &mut Parser) -> ParseResult<BindingDecl> {
        let mut names = vec![Identifier::new(parser.expect(TokenKind::Identifier)?)];
        while parser.take(TokenKind::Comma).is_some() {
            names.push(Identifier::new(parser.expect(TokenKind::Identifier)?));
        }
        parser.expect(TokenKind::Colon)?;
        let type_annotation = parser.parse()?;
        Ok(BindingDecl::new(names, type_annotation))
    }
}

impl Parse for TypeAnnotation {
    const FIRST: &'static [TokenKind] = FIRST_TYPE;

    fn parse(parser: &mut Parser) -> ParseResult<TypeAnnotation> {
        if let Some(list_token) = parser.take(TokenKind::List) {
            parser.expect(TokenKind::Of)?;
            let element_token = parser.expect_any(FIRST_SIMPLE_TYPE)?;
            let element = simple_type(&element_token)?;
            return Ok(TypeAnnotation::List {
                list_token,
                element_token,
                element,
                ty: TypeSlot::default(),
            });
        }
        let token = parser.expect_any(FIRST_TYPE)?;
        let simple = simple_type(&token)?;
        Ok(TypeAnnotation::Simple {
            token,
            simple,
            ty: TypeSlot::default(),
        })
    }
}

fn simple_type(token: &Token) -> ParseResult<SimpleType> {
    SimpleType::from_token_kind(token.kind).ok_or_else(|| {
        SyntaxError::new(Expected::AnyOf(FIRST_SIMPLE_TYPE.to_vec()), token.clone())
    })
}

impl Parse for ProcedureDecl {
    const FIRST: &'static [TokenKind] = &[TokenKind::Procedure];

    /// ```text
    /// procedure name ( {a {, b} : type ;} ) [: type] ;
    ///     [const ...] [var ...]
    /// begin {statement} end ;
    /// ```
    fn parse(parser: &mut Parser) -> ParseResult<ProcedureDecl> {
        let procedure_token = parser.expect(TokenKind::Procedure)?;
        let name = parser.expect(TokenKind::Identifier)?;
        parser.expect(TokenKind::ParenthesisOpen)?;
        let mut parameters = Vec::new();
        while let Some(declaration) = parser.parse_opt::<BindingDecl>()? {
            parser.expect(TokenKind::Semicolon)?;
            parameters.push(declaration);
        }
        parser.expect(TokenKind::ParenthesisClose)?;
        let return_type = match parser.take(TokenKind::Colon) {
            Some(_) => parser.parse()?,
            None => TypeAnnotation::Void {
                ty: TypeSlot::default(),
            },
        };
        parser.expect(TokenKind::Semicolon)?;
        let constants = parser.parse_opt::<ConstantList>()?;
        let variables = parser.parse_opt::<VariableList>()?;
        parser.expect(TokenKind::Begin)?;
        let body = parser.parse::<StatementList>()?;
        parser.expect(TokenKind::End)?;
        parser.expect(TokenKind::Semicolon)?;
        Ok(ProcedureDecl::new(
            procedure_token,
            name,
            ParameterList::new(parameters),
            return_type,
            constants,
            variables,
            body,
        ))
    }
}
