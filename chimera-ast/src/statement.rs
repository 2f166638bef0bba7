use crate::priv_prelude::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct StatementList {
    pub statements: Vec<Statement>,
    pub ty: TypeSlot,
}

impl StatementList {
    pub fn new(statements: Vec<Statement>) -> StatementList {
        StatementList {
            statements,
            ty: TypeSlot::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Assignment(Assignment),
    Call(Call),
    If(IfStatement),
    Loop(LoopStatement),
    For(ForStatement),
    Return(ReturnStatement),
    Exit(ExitStatement),
}

impl Statement {
    pub fn anchor(&self) -> &Token {
        match self {
            Statement::Assignment(assignment) => &assignment.assign_token,
            Statement::Call(call) => &call.name,
            Statement::If(if_statement) => &if_statement.if_token,
            Statement::Loop(loop_statement) => &loop_statement.loop_token,
            Statement::For(for_statement) => &for_statement.for_token,
            Statement::Return(return_statement) => &return_statement.return_token,
            Statement::Exit(exit_statement) => &exit_statement.exit_token,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssignTarget {
    Identifier(Identifier),
    Index(crate::expr::ListIndex),
}

impl AssignTarget {
    /// The name ultimately being written to.
    pub fn base_identifier(&self) -> Option<&Identifier> {
        match self {
            AssignTarget::Identifier(identifier) => Some(identifier),
            AssignTarget::Index(index) => index.base_identifier(),
        }
    }
}

/// `target := value;`, anchored on `:=`.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub target: AssignTarget,
    pub assign_token: Token,
    pub value: Expr,
    pub ty: TypeSlot,
}

impl Assignment {
    pub fn new(target: AssignTarget, assign_token: Token, value: Expr) -> Assignment {
        Assignment {
            target,
            assign_token,
            value,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfStatement {
    pub if_token: Token,
    pub condition: Expr,
    pub then_body: StatementList,
    pub else_ifs: ElseIfList,
    pub else_body: Option<ElseBranch>,
    pub ty: TypeSlot,
}

impl IfStatement {
    pub fn new(
        if_token: Token,
        condition: Expr,
        then_body: StatementList,
        else_ifs: ElseIfList,
        else_body: Option<ElseBranch>,
    ) -> IfStatement {
        IfStatement {
            if_token,
            condition,
            then_body,
            else_ifs,
            else_body,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ElseIfList {
    pub branches: Vec<ElseIf>,
    pub ty: TypeSlot,
}

impl ElseIfList {
    pub fn new(branches: Vec<ElseIf>) -> ElseIfList {
        ElseIfList {
            branches,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElseIf {
    pub elseif_token: Token,
    pub condition: Expr,
    pub body: StatementList,
    pub ty: TypeSlot,
}

impl ElseIf {
    pub fn new(elseif_token: Token, condition: Expr, body: StatementList) -> ElseIf {
        ElseIf {
            elseif_token,
            condition,
            body,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElseBranch {
    pub else_token: Token,
    pub body: StatementList,
    pub ty: TypeSlot,
}

impl ElseBranch {
    pub fn new(else_token: Token, body: StatementList) -> ElseBranch {
        ElseBranch {
            else_token,
            body,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoopStatement {
    pub loop_token: Token,
    pub body: StatementList,
    pub ty: TypeSlot,
}

impl LoopStatement {
    pub fn new(loop_token: Token, body: StatementList) -> LoopStatement {
        LoopStatement {
            loop_token,
            body,
            ty: TypeSlot::default(),
        }
    }
}

/// `for variable in iterable do body end;`
#[derive(Clone, Debug, PartialEq)]
pub struct ForStatement {
    pub for_token: Token,
    pub variable: Identifier,
    pub iterable: Expr,
    pub body: StatementList,
    pub ty: TypeSlot,
}

impl ForStatement {
    pub fn new(
        for_token: Token,
        variable: Identifier,
        iterable: Expr,
        body: StatementList,
    ) -> ForStatement {
        ForStatement {
            for_token,
            variable,
            iterable,
            body,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStatement {
    pub return_token: Token,
    pub value: Option<Expr>,
    pub ty: TypeSlot,
}

impl ReturnStatement {
    pub fn new(return_token: Token, value: Option<Expr>) -> ReturnStatement {
        ReturnStatement {
            return_token,
            value,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExitStatement {
    pub exit_token: Token,
    pub ty: TypeSlot,
}

impl ExitStatement {
    pub fn new(exit_token: Token) -> ExitStatement {
        ExitStatement {
            exit_token,
            ty: TypeSlot::default(),
        }
    }
}
