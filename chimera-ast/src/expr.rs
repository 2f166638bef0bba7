use crate::priv_prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Call(Call),
    Index(ListIndex),
    Literal(Literal),
    List(ListLiteral),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
}

impl Expr {
    /// The token that produced this expression; operators anchor on the operator symbol.
    pub fn anchor(&self) -> &Token {
        match self {
            Expr::Identifier(identifier) => &identifier.token,
            Expr::Call(call) => &call.name,
            Expr::Index(index) => &index.open_bracket,
            Expr::Literal(literal) => &literal.token,
            Expr::List(list) => &list.open_token,
            Expr::Binary(binary) => &binary.op_token,
            Expr::Unary(unary) => &unary.op_token,
        }
    }

    pub fn ty(&self) -> Option<Type> {
        match self {
            Expr::Identifier(identifier) => identifier.ty.get(),
            Expr::Call(call) => call.ty.get(),
            Expr::Index(index) => index.ty.get(),
            Expr::Literal(literal) => literal.ty.get(),
            Expr::List(list) => list.ty.get(),
            Expr::Binary(binary) => binary.ty.get(),
            Expr::Unary(unary) => unary.ty.get(),
        }
    }

    pub fn ty_slot_mut(&mut self) -> &mut TypeSlot {
        match self {
            Expr::Identifier(identifier) => &mut identifier.ty,
            Expr::Call(call) => &mut call.ty,
            Expr::Index(index) => &mut index.ty,
            Expr::Literal(literal) => &mut literal.ty,
            Expr::List(list) => &mut list.ty,
            Expr::Binary(binary) => &mut binary.ty,
            Expr::Unary(unary) => &mut unary.ty,
        }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Binary(binary) => Span::join(binary.lhs.span(), binary.rhs.span()),
            Expr::Unary(unary) => Span::join(unary.op_token.span(), unary.operand.span()),
            Expr::Index(index) => Span::join(index.target.span(), index.index.span()),
            _ => self.anchor().span(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub ty: TypeSlot,
}

impl Identifier {
    pub fn new(token: Token) -> Identifier {
        Identifier {
            token,
            ty: TypeSlot::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.token.as_str()
    }
}

/// A procedure call, used both as an expression and as a statement.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub name: Token,
    pub args: Vec<Expr>,
    pub ty: TypeSlot,
}

impl Call {
    pub fn new(name: Token, args: Vec<Expr>) -> Call {
        Call {
            name,
            args,
            ty: TypeSlot::default(),
        }
    }
}

/// `target[index]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListIndex {
    pub target: Box<Expr>,
    pub open_bracket: Token,
    pub index: Box<Expr>,
    pub ty: TypeSlot,
}

impl ListIndex {
    pub fn new(target: Expr, open_bracket: Token, index: Expr) -> ListIndex {
        ListIndex {
            target: Box::new(target),
            open_bracket,
            index: Box::new(index),
            ty: TypeSlot::default(),
        }
    }

    /// The identifier being indexed, when the target is a plain name.
    pub fn base_identifier(&self) -> Option<&Identifier> {
        match &*self.target {
            Expr::Identifier(identifier) => Some(identifier),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiteralValue {
    /// Kept at full precision; range checking happens during analysis.
    Int(BigUint),
    String(String),
    Bool(bool),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    pub token: Token,
    pub value: LiteralValue,
    pub ty: TypeSlot,
}

impl Literal {
    pub fn new(token: Token, value: LiteralValue) -> Literal {
        Literal {
            token,
            value,
            ty: TypeSlot::default(),
        }
    }
}

/// `{a, b, c}` or `[a, b, c]`. Elements are always simple literals.
#[derive(Clone, Debug, PartialEq)]
pub struct ListLiteral {
    pub open_token: Token,
    pub elements: Vec<Literal>,
    pub ty: TypeSlot,
}

impl ListLiteral {
    pub fn new(open_token: Token, elements: Vec<Literal>) -> ListLiteral {
        ListLiteral {
            open_token,
            elements,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    Equal,
    Unequal,
    LessThan,
    MoreThan,
    LessThanEqual,
    MoreThanEqual,
    Plus,
    Minus,
    Times,
    Div,
    Rem,
}

impl BinaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<BinaryOp> {
        let op = match kind {
            TokenKind::And => BinaryOp::And,
            TokenKind::Or => BinaryOp::Or,
            TokenKind::Xor => BinaryOp::Xor,
            TokenKind::Equal => BinaryOp::Equal,
            TokenKind::Unequal => BinaryOp::Unequal,
            TokenKind::LessThan => BinaryOp::LessThan,
            TokenKind::MoreThan => BinaryOp::MoreThan,
            TokenKind::LessThanEqual => BinaryOp::LessThanEqual,
            TokenKind::MoreThanEqual => BinaryOp::MoreThanEqual,
            TokenKind::Plus => BinaryOp::Plus,
            TokenKind::Minus => BinaryOp::Minus,
            TokenKind::Times => BinaryOp::Times,
            TokenKind::Div => BinaryOp::Div,
            TokenKind::Rem => BinaryOp::Rem,
            _ => return None,
        };
        Some(op)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub op_token: Token,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub ty: TypeSlot,
}

impl BinaryExpr {
    pub fn new(op: BinaryOp, op_token: Token, lhs: Expr, rhs: Expr) -> BinaryExpr {
        BinaryExpr {
            op,
            op_token,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum UnaryOp {
    Not,
    Negation,
}

impl UnaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<UnaryOp> {
        match kind {
            TokenKind::Not => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Negation),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub op_token: Token,
    pub operand: Box<Expr>,
    pub ty: TypeSlot,
}

impl UnaryExpr {
    pub fn new(op: UnaryOp, op_token: Token, operand: Expr) -> UnaryExpr {
        UnaryExpr {
            op,
            op_token,
            operand: Box::new(operand),
            ty: TypeSlot::default(),
        }
    }
}
