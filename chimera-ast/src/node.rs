//! A uniform, read-only view over the typed tree.
//!
//! The typed structs are what the parser builds and the analyzer mutates. `NodeRef` lets
//! printers and checks treat every node the same way: a kind tag, an optional anchor token,
//! ordered children and the resolved type.

use crate::{
    expr::{BinaryExpr, BinaryOp, ListIndex, LiteralValue, UnaryExpr, UnaryOp},
    item::{BindingDecl, ConstantDecl, ConstantValue, ParameterList, ProcedureDecl, SimpleType},
    priv_prelude::*,
    program::Program,
    statement::{
        AssignTarget, Assignment, ElseBranch, ElseIf, ElseIfList, ExitStatement, ForStatement,
        IfStatement, LoopStatement, ReturnStatement, Statement,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    Program,
    ConstantList,
    ConstantDecl,
    VariableList,
    VariableDecl,
    ParameterList,
    ParameterDecl,
    ProcedureList,
    ProcedureDecl,
    IntegerType,
    StringType,
    BooleanType,
    ListType,
    VoidType,
    StatementList,
    Assignment,
    CallStatement,
    If,
    ElseIfList,
    ElseIf,
    Else,
    Loop,
    For,
    Return,
    Exit,
    Identifier,
    Call,
    ListIndex,
    IntLiteral,
    StringLiteral,
    True,
    False,
    ListLiteral,
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
    Not,
    Negation,
}

impl From<BinaryOp> for NodeKind {
    fn from(op: BinaryOp) -> NodeKind {
        match op {
            BinaryOp::And => NodeKind::And,
            BinaryOp::Or => NodeKind::Or,
            BinaryOp::Xor => NodeKind::Xor,
            BinaryOp::Equal => NodeKind::Equal,
            BinaryOp::Unequal => NodeKind::Unequal,
            BinaryOp::LessThan => NodeKind::LessThan,
            BinaryOp::MoreThan => NodeKind::MoreThan,
            BinaryOp::LessThanEqual => NodeKind::LessThanEqual,
            BinaryOp::MoreThanEqual => NodeKind::MoreThanEqual,
            BinaryOp::Plus => NodeKind::Plus,
            BinaryOp::Minus => NodeKind::Minus,
            BinaryOp::Times => NodeKind::Times,
            BinaryOp::Div => NodeKind::Div,
            BinaryOp::Rem => NodeKind::Rem,
        }
    }
}

impl From<UnaryOp> for NodeKind {
    fn from(op: UnaryOp) -> NodeKind {
        match op {
            UnaryOp::Not => NodeKind::Not,
            UnaryOp::Negation => NodeKind::Negation,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    ConstantList(&'a ConstantList),
    ConstantDecl(&'a ConstantDecl),
    VariableList(&'a VariableList),
    VariableDecl(&'a BindingDecl),
    ParameterList(&'a ParameterList),
    ParameterDecl(&'a BindingDecl),
    ProcedureList(&'a ProcedureList),
    ProcedureDecl(&'a ProcedureDecl),
    TypeAnnotation(&'a TypeAnnotation),
    StatementList(&'a StatementList),
    Assignment(&'a Assignment),
    CallStatement(&'a Call),
    If(&'a IfStatement),
    ElseIfList(&'a ElseIfList),
    ElseIf(&'a ElseIf),
    Else(&'a ElseBranch),
    Loop(&'a LoopStatement),
    For(&'a ForStatement),
    Return(&'a ReturnStatement),
    Exit(&'a ExitStatement),
    Identifier(&'a Identifier),
    Call(&'a Call),
    ListIndex(&'a ListIndex),
    Literal(&'a Literal),
    ListLiteral(&'a ListLiteral),
    Binary(&'a BinaryExpr),
    Unary(&'a UnaryExpr),
}

impl<'a> NodeRef<'a> {
    pub fn from_expr(expr: &'a Expr) -> NodeRef<'a> {
        match expr {
            Expr::Identifier(identifier) => NodeRef::Identifier(identifier),
            Expr::Call(call) => NodeRef::Call(call),
            Expr::Index(index) => NodeRef::ListIndex(index),
            Expr::Literal(literal) => NodeRef::Literal(literal),
            Expr::List(list) => NodeRef::ListLiteral(list),
            Expr::Binary(binary) => NodeRef::Binary(binary),
            Expr::Unary(unary) => NodeRef::Unary(unary),
        }
    }

    pub fn from_statement(statement: &'a Statement) -> NodeRef<'a> {
        match statement {
            Statement::Assignment(assignment) => NodeRef::Assignment(assignment),
            Statement::Call(call) => NodeRef::CallStatement(call),
            Statement::If(if_statement) => NodeRef::If(if_statement),
            Statement::Loop(loop_statement) => NodeRef::Loop(loop_statement),
            Statement::For(for_statement) => NodeRef::For(for_statement),
            Statement::Return(return_statement) => NodeRef::Return(return_statement),
            Statement::Exit(exit_statement) => NodeRef::Exit(exit_statement),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Program(_) => NodeKind::Program,
            NodeRef::ConstantList(_) => NodeKind::ConstantList,
            NodeRef::ConstantDecl(_) => NodeKind::ConstantDecl,
            NodeRef::VariableList(_) => NodeKind::VariableList,
            NodeRef::VariableDecl(_) => NodeKind::VariableDecl,
            NodeRef::ParameterList(_) => NodeKind::ParameterList,
            NodeRef::ParameterDecl(_) => NodeKind::ParameterDecl,
            NodeRef::ProcedureList(_) => NodeKind::ProcedureList,
            NodeRef::ProcedureDecl(_) => NodeKind::ProcedureDecl,
            NodeRef::TypeAnnotation(annotation) => match annotation {
                TypeAnnotation::Simple { simple, .. } => match simple {
                    SimpleType::Integer => NodeKind::IntegerType,
                    SimpleType::String => NodeKind::StringType,
                    SimpleType::Boolean => NodeKind::BooleanType,
                },
                TypeAnnotation::List { .. } => NodeKind::ListType,
                TypeAnnotation::Void { .. } => NodeKind::VoidType,
            },
            NodeRef::StatementList(_) => NodeKind::StatementList,
            NodeRef::Assignment(_) => NodeKind::Assignment,
            NodeRef::CallStatement(_) => NodeKind::CallStatement,
            NodeRef::If(_) => NodeKind::If,
            NodeRef::ElseIfList(_) => NodeKind::ElseIfList,
            NodeRef::ElseIf(_) => NodeKind::ElseIf,
            NodeRef::Else(_) => NodeKind::Else,
            NodeRef::Loop(_) => NodeKind::Loop,
            NodeRef::For(_) => NodeKind::For,
            NodeRef::Return(_) => NodeKind::Return,
            NodeRef::Exit(_) => NodeKind::Exit,
            NodeRef::Identifier(_) => NodeKind::Identifier,
            NodeRef::Call(_) => NodeKind::Call,
            NodeRef::ListIndex(_) => NodeKind::ListIndex,
            NodeRef::Literal(literal) => match literal.value {
                LiteralValue::Int(_) => NodeKind::IntLiteral,
                LiteralValue::String(_) => NodeKind::StringLiteral,
                LiteralValue::Bool(true) => NodeKind::True,
                LiteralValue::Bool(false) => NodeKind::False,
            },
            NodeRef::ListLiteral(_) => NodeKind::ListLiteral,
            NodeRef::Binary(binary) => binary.op.into(),
            NodeRef::Unary(unary) => unary.op.into(),
        }
    }

    /// The token that triggered creation of this node, if there was one.
    pub fn anchor(&self) -> Option<&'a Token> {
        match *self {
            NodeRef::Program(program) => Some(&program.program_token),
            NodeRef::ConstantList(list) => Some(&list.const_token),
            NodeRef::ConstantDecl(decl) => Some(&decl.name),
            NodeRef::VariableList(list) => Some(&list.var_token),
            NodeRef::VariableDecl(decl) | NodeRef::ParameterDecl(decl) => {
                decl.type_annotation.anchor()
            }
            NodeRef::ParameterList(_) | NodeRef::ProcedureList(_) => None,
            NodeRef::ProcedureDecl(decl) => Some(&decl.name),
            NodeRef::TypeAnnotation(annotation) => annotation.anchor(),
            NodeRef::StatementList(_) | NodeRef::ElseIfList(_) => None,
            NodeRef::Assignment(assignment) => Some(&assignment.assign_token),
            NodeRef::CallStatement(call) | NodeRef::Call(call) => Some(&call.name),
            NodeRef::If(if_statement) => Some(&if_statement.if_token),
            NodeRef::ElseIf(else_if) => Some(&else_if.elseif_token),
            NodeRef::Else(else_branch) => Some(&else_branch.else_token),
            NodeRef::Loop(loop_statement) => Some(&loop_statement.loop_token),
            NodeRef::For(for_statement) => Some(&for_statement.for_token),
            NodeRef::Return(return_statement) => Some(&return_statement.return_token),
            NodeRef::Exit(exit_statement) => Some(&exit_statement.exit_token),
            NodeRef::Identifier(identifier) => Some(&identifier.token),
            NodeRef::ListIndex(index) => Some(&index.open_bracket),
            NodeRef::Literal(literal) => Some(&literal.token),
            NodeRef::ListLiteral(list) => Some(&list.open_token),
            NodeRef::Binary(binary) => Some(&binary.op_token),
            NodeRef::Unary(unary) => Some(&unary.op_token),
        }
    }

    /// The resolved type, once analysis has visited this node.
    pub fn ty(&self) -> Option<Type> {
        match *self {
            NodeRef::Program(program) => program.ty.get(),
            NodeRef::ConstantList(list) => list.ty.get(),
            NodeRef::ConstantDecl(decl) => decl.ty.get(),
            NodeRef::VariableList(list) => list.ty.get(),
            NodeRef::VariableDecl(decl) | NodeRef::ParameterDecl(decl) => decl.ty.get(),
            NodeRef::ParameterList(list) => list.ty.get(),
            NodeRef::ProcedureList(list) => list.ty.get(),
            NodeRef::ProcedureDecl(decl) => decl.ty.get(),
            NodeRef::TypeAnnotation(annotation) => annotation.ty(),
            NodeRef::StatementList(list) => list.ty.get(),
            NodeRef::Assignment(assignment) => assignment.ty.get(),
            NodeRef::CallStatement(call) | NodeRef::Call(call) => call.ty.get(),
            NodeRef::If(if_statement) => if_statement.ty.get(),
            NodeRef::ElseIfList(list) => list.ty.get(),
            NodeRef::ElseIf(else_if) => else_if.ty.get(),
            NodeRef::Else(else_branch) => else_branch.ty.get(),
            NodeRef::Loop(loop_statement) => loop_statement.ty.get(),
            NodeRef::For(for_statement) => for_statement.ty.get(),
            NodeRef::Return(return_statement) => return_statement.ty.get(),
            NodeRef::Exit(exit_statement) => exit_statement.ty.get(),
            NodeRef::Identifier(identifier) => identifier.ty.get(),
            NodeRef::ListIndex(index) => index.ty.get(),
            NodeRef::Literal(literal) => literal.ty.get(),
            NodeRef::ListLiteral(list) => list.ty.get(),
            NodeRef::Binary(binary) => binary.ty.get(),
            NodeRef::Unary(unary) => unary.ty.get(),
        }
    }

    /// The owned children, in source order.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        let mut children = Vec::new();
        match *self {
            NodeRef::Program(program) => {
                children.extend(program.constants.as_ref().map(NodeRef::ConstantList));
                children.extend(program.variables.as_ref().map(NodeRef::VariableList));
                children.push(NodeRef::ProcedureList(&program.procedures));
                children.push(NodeRef::StatementList(&program.statements));
            }
            NodeRef::ConstantList(list) => {
                children.extend(list.declarations.iter().map(NodeRef::ConstantDecl));
            }
            NodeRef::ConstantDecl(decl) => children.push(match &decl.value {
                ConstantValue::Simple(literal) => NodeRef::Literal(literal),
                ConstantValue::List(list) => NodeRef::ListLiteral(list),
            }),
            NodeRef::VariableList(list) => {
                children.extend(list.declarations.iter().map(NodeRef::VariableDecl));
            }
            NodeRef::ParameterList(list) => {
                children.extend(list.declarations.iter().map(NodeRef::ParameterDecl));
            }
            NodeRef::VariableDecl(decl) | NodeRef::ParameterDecl(decl) => {
                children.extend(decl.names.iter().map(NodeRef::Identifier));
                children.push(NodeRef::TypeAnnotation(&decl.type_annotation));
            }
            NodeRef::ProcedureList(list) => {
                children.extend(list.procedures.iter().map(NodeRef::ProcedureDecl));
            }
            NodeRef::ProcedureDecl(decl) => {
                children.push(NodeRef::ParameterList(&decl.parameters));
                children.push(NodeRef::TypeAnnotation(&decl.return_type));
                children.extend(decl.constants.as_ref().map(NodeRef::ConstantList));
                children.extend(decl.variables.as_ref().map(NodeRef::VariableList));
                children.push(NodeRef::StatementList(&decl.body));
            }
            NodeRef::TypeAnnotation(_) => {}
            NodeRef::StatementList(list) => {
                children.extend(list.statements.iter().map(NodeRef::from_statement));
            }
            NodeRef::Assignment(assignment) => {
                children.push(match &assignment.target {
                    AssignTarget::Identifier(identifier) => NodeRef::Identifier(identifier),
                    AssignTarget::Index(index) => NodeRef::ListIndex(index),
                });
                children.push(NodeRef::from_expr(&assignment.value));
            }
            NodeRef::CallStatement(call) | NodeRef::Call(call) => {
                children.extend(call.args.iter().map(NodeRef::from_expr));
            }
            NodeRef::If(if_statement) => {
                children.push(NodeRef::from_expr(&if_statement.condition));
                children.push(NodeRef::StatementList(&if_statement.then_body));
                children.push(NodeRef::ElseIfList(&if_statement.else_ifs));
                children.extend(if_statement.else_body.as_ref().map(NodeRef::Else));
            }
            NodeRef::ElseIfList(list) => {
                children.extend(list.branches.iter().map(NodeRef::ElseIf));
            }
            NodeRef::ElseIf(else_if) => {
                children.push(NodeRef::from_expr(&else_if.condition));
                children.push(NodeRef::StatementList(&else_if.body));
            }
            NodeRef::Else(else_branch) => children.push(NodeRef::StatementList(&else_branch.body)),
            NodeRef::Loop(loop_statement) => {
                children.push(NodeRef::StatementList(&loop_statement.body));
            }
            NodeRef::For(for_statement) => {
                children.push(NodeRef::Identifier(&for_statement.variable));
                children.push(NodeRef::from_expr(&for_statement.iterable));
                children.push(NodeRef::StatementList(&for_statement.body));
            }
            NodeRef::Return(return_statement) => {
                children.extend(return_statement.value.as_ref().map(NodeRef::from_expr));
            }
            NodeRef::Exit(_) | NodeRef::Identifier(_) | NodeRef::Literal(_) => {}
            NodeRef::ListIndex(index) => {
                children.push(NodeRef::from_expr(&index.target));
                children.push(NodeRef::from_expr(&index.index));
            }
            NodeRef::ListLiteral(list) => {
                children.extend(list.elements.iter().map(NodeRef::Literal));
            }
            NodeRef::Binary(binary) => {
                children.push(NodeRef::from_expr(&binary.lhs));
                children.push(NodeRef::from_expr(&binary.rhs));
            }
            NodeRef::Unary(unary) => children.push(NodeRef::from_expr(&unary.operand)),
        }
        children
    }

    /// Pre-order traversal; `f` receives each node with its depth below `self`.
    pub fn walk<F>(self, f: &mut F)
    where
        F: FnMut(NodeRef<'a>, usize),
    {
        self.walk_at(0, f)
    }

    fn walk_at<F>(self, depth: usize, f: &mut F)
    where
        F: FnMut(NodeRef<'a>, usize),
    {
        f(self, depth);
        for child in self.children() {
            child.walk_at(depth + 1, f);
        }
    }
}

impl<'a> From<&'a Program> for NodeRef<'a> {
    fn from(program: &'a Program) -> NodeRef<'a> {
        NodeRef::Program(program)
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        if let Some(lexeme) = self.anchor().and_then(Token::lexeme) {
            write!(f, " {lexeme:?}")?;
        }
        if let Some(ty) = self.ty() {
            write!(f, " : {ty}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn token(src: &Arc<str>, kind: TokenKind, start: usize, end: usize) -> Token {
        let span = Span::new(src.clone(), start, end).unwrap();
        Token::new(kind, span, 1, start + 1)
    }

    // program x := 1 + 2; end;
    fn sample() -> Program {
        let src: Arc<str> = Arc::from("program x := 1 + 2; end;");
        let one = Literal::new(
            token(&src, TokenKind::IntLiteral, 13, 14),
            LiteralValue::Int(BigUint::from(1u32)),
        );
        let two = Literal::new(
            token(&src, TokenKind::IntLiteral, 17, 18),
            LiteralValue::Int(BigUint::from(2u32)),
        );
        let sum = BinaryExpr::new(
            BinaryOp::Plus,
            token(&src, TokenKind::Plus, 15, 16),
            Expr::Literal(one),
            Expr::Literal(two),
        );
        let assignment = Assignment::new(
            AssignTarget::Identifier(Identifier::new(token(&src, TokenKind::Identifier, 8, 9))),
            token(&src, TokenKind::ColonEqual, 10, 12),
            Expr::Binary(sum),
        );
        Program::new(
            token(&src, TokenKind::Program, 0, 7),
            None,
            None,
            ProcedureList::new(Vec::new()),
            StatementList::new(vec![Statement::Assignment(assignment)]),
        )
    }

    #[test]
    fn walk_is_pre_order() {
        let program = sample();
        let mut seen = Vec::new();
        NodeRef::from(&program).walk(&mut |node, depth| seen.push((node.kind(), depth)));
        assert_eq!(
            seen,
            vec![
                (NodeKind::Program, 0),
                (NodeKind::ProcedureList, 1),
                (NodeKind::StatementList, 1),
                (NodeKind::Assignment, 2),
                (NodeKind::Identifier, 3),
                (NodeKind::Plus, 3),
                (NodeKind::IntLiteral, 4),
                (NodeKind::IntLiteral, 4),
            ]
        );
    }

    #[test]
    fn binary_anchor_is_the_operator() {
        let program = sample();
        let statements = NodeRef::StatementList(&program.statements);
        let assignment = statements.children()[0];
        let sum = assignment.children()[1];
        assert_eq!(sum.kind(), NodeKind::Plus);
        assert_eq!(sum.anchor().map(Token::as_str), Some("+"));
        assert_eq!(sum.to_string(), "Plus \"+\"");
    }

    #[test]
    fn display_includes_resolved_type() {
        let mut program = sample();
        program.statements.ty.set(Type::Void);
        let node = NodeRef::StatementList(&program.statements);
        assert_eq!(node.to_string(), "StatementList : VOID");
        assert_eq!(node.ty(), Some(Type::Void));
    }
}
