use crate::priv_prelude::*;

/// `const name := literal; ...`
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantList {
    pub const_token: Token,
    pub declarations: Vec<ConstantDecl>,
    pub ty: TypeSlot,
}

impl ConstantList {
    pub fn new(const_token: Token, declarations: Vec<ConstantDecl>) -> ConstantList {
        ConstantList {
            const_token,
            declarations,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConstantDecl {
    pub name: Token,
    pub value: ConstantValue,
    pub ty: TypeSlot,
}

impl ConstantDecl {
    pub fn new(name: Token, value: ConstantValue) -> ConstantDecl {
        ConstantDecl {
            name,
            value,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
    Simple(Literal),
    List(ListLiteral),
}

/// `var a, b : type; ...`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableList {
    pub var_token: Token,
    pub declarations: Vec<BindingDecl>,
    pub ty: TypeSlot,
}

impl VariableList {
    pub fn new(var_token: Token, declarations: Vec<BindingDecl>) -> VariableList {
        VariableList {
            var_token,
            declarations,
            ty: TypeSlot::default(),
        }
    }
}

/// One or more names bound to one type. Shared by variable and parameter declarations.
#[derive(Clone, Debug, PartialEq)]
pub struct BindingDecl {
    pub names: Vec<Identifier>,
    pub type_annotation: TypeAnnotation,
    pub ty: TypeSlot,
}

impl BindingDecl {
    pub fn new(names: Vec<Identifier>, type_annotation: TypeAnnotation) -> BindingDecl {
        BindingDecl {
            names,
            type_annotation,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterList {
    pub declarations: Vec<BindingDecl>,
    pub ty: TypeSlot,
}

impl ParameterList {
    pub fn new(declarations: Vec<BindingDecl>) -> ParameterList {
        ParameterList {
            declarations,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimpleType {
    Integer,
    String,
    Boolean,
}

impl SimpleType {
    pub fn from_token_kind(kind: TokenKind) -> Option<SimpleType> {
        match kind {
            TokenKind::Integer => Some(SimpleType::Integer),
            TokenKind::String => Some(SimpleType::String),
            TokenKind::Boolean => Some(SimpleType::Boolean),
            _ => None,
        }
    }

    pub fn to_type(self) -> Type {
        match self {
            SimpleType::Integer => Type::Int,
            SimpleType::String => Type::String,
            SimpleType::Boolean => Type::Bool,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    Simple {
        token: Token,
        simple: SimpleType,
        ty: TypeSlot,
    },
    /// `list of <simple>`; anchored on the element type token.
    List {
        list_token: Token,
        element_token: Token,
        element: SimpleType,
        ty: TypeSlot,
    },
    /// The implicit return type of a procedure declared without one.
    Void { ty: TypeSlot },
}

impl TypeAnnotation {
    /// The type this annotation denotes.
    pub fn denoted(&self) -> Type {
        match self {
            TypeAnnotation::Simple { simple, .. } => simple.to_type(),
            TypeAnnotation::List { element, .. } => match element {
                SimpleType::Integer => Type::IntList,
                SimpleType::String => Type::StringList,
                SimpleType::Boolean => Type::BoolList,
            },
            TypeAnnotation::Void { .. } => Type::Void,
        }
    }

    pub fn anchor(&self) -> Option<&Token> {
        match self {
            TypeAnnotation::Simple { token, .. } => Some(token),
            TypeAnnotation::List { element_token, .. } => Some(element_token),
            TypeAnnotation::Void { .. } => None,
        }
    }

    pub fn ty(&self) -> Option<Type> {
        match self {
            TypeAnnotation::Simple { ty, .. }
            | TypeAnnotation::List { ty, .. }
            | TypeAnnotation::Void { ty } => ty.get(),
        }
    }

    pub fn ty_slot_mut(&mut self) -> &mut TypeSlot {
        match self {
            TypeAnnotation::Simple { ty, .. }
            | TypeAnnotation::List { ty, .. }
            | TypeAnnotation::Void { ty } => ty,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcedureList {
    pub procedures: Vec<ProcedureDecl>,
    pub ty: TypeSlot,
}

impl ProcedureList {
    pub fn new(procedures: Vec<ProcedureDecl>) -> ProcedureList {
        ProcedureList {
            procedures,
            ty: TypeSlot::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcedureDecl {
    pub procedure_token: Token,
    pub name: Token,
    pub parameters: ParameterList,
    pub return_type: TypeAnnotation,
    pub constants: Option<ConstantList>,
    pub variables: Option<VariableList>,
    pub body: StatementList,
    pub ty: TypeSlot,
}

impl ProcedureDecl {
    pub fn new(
        procedure_token: Token,
        name: Token,
        parameters: ParameterList,
        return_type: TypeAnnotation,
        constants: Option<ConstantList>,
        variables: Option<VariableList>,
        body: StatementList,
    ) -> ProcedureDecl {
        ProcedureDecl {
            procedure_token,
            name,
            parameters,
            return_type,
            constants,
            variables,
            body,
            ty: TypeSlot::default(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
