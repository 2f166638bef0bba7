use chimera_types::Type;
use std::{collections::BTreeMap, fmt};
use strum::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolKind {
    Const,
    Var,
    Param,
}

/// The compile-time value carried by a register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Int(i32),
    String(String),
    Bool(bool),
    IntList(Vec<i32>),
    StringList(Vec<String>),
    BoolList(Vec<bool>),
}

impl Value {
    /// The value a fresh variable or parameter of type `ty` starts with.
    ///
    /// Lists start out with a single default element.
    pub fn default_for(ty: Type) -> Option<Value> {
        let value = match ty {
            Type::Int => Value::Int(0),
            Type::String => Value::String(String::new()),
            Type::Bool => Value::Bool(false),
            Type::IntList => Value::IntList(vec![0]),
            Type::StringList => Value::StringList(vec![String::new()]),
            Type::BoolList => Value::BoolList(vec![false]),
            Type::Void | Type::List => return None,
        };
        Some(value)
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "{{")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "}}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::String(value) => write!(f, "{value:?}"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::IntList(values) => write_list(f, values),
            Value::StringList(values) => {
                let quoted = values.iter().map(|v| format!("{v:?}")).collect::<Vec<_>>();
                write_list(f, &quoted)
            }
            Value::BoolList(values) => write_list(f, values),
        }
    }
}

/// One row of a symbol table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Register {
    pub ty: Type,
    pub kind: SymbolKind,
    /// Zero-based ordinal; only parameters have one.
    pub position: Option<usize>,
    pub value: Option<Value>,
}

impl Register {
    pub fn constant(ty: Type, value: Option<Value>) -> Register {
        Register {
            ty,
            kind: SymbolKind::Const,
            position: None,
            value,
        }
    }

    pub fn variable(ty: Type) -> Register {
        Register {
            ty,
            kind: SymbolKind::Var,
            position: None,
            value: Value::default_for(ty),
        }
    }

    pub fn parameter(ty: Type, position: usize) -> Register {
        Register {
            ty,
            kind: SymbolKind::Param,
            position: Some(position),
            value: Value::default_for(ty),
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, ", self.ty, self.kind)?;
        match self.position {
            Some(position) => write!(f, "{position}")?,
            None => write!(f, "-")?,
        }
        match (&self.kind, &self.value) {
            (SymbolKind::Const, Some(value)) => write!(f, ", {value}"),
            _ => Ok(()),
        }
    }
}

/// Name to register map for one scope, kept sorted by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    rows: BTreeMap<String, Register>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rows.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Register> {
        self.rows.get(name)
    }

    /// Inserts `register` under `name`, replacing any previous row.
    pub fn insert(&mut self, name: impl Into<String>, register: Register) {
        self.rows.insert(name.into(), register);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Register)> {
        self.rows.iter().map(|(name, register)| (name.as_str(), register))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The parameter rows, in declaration order.
    pub fn parameters(&self) -> Vec<(&str, &Register)> {
        let mut parameters = self
            .iter()
            .filter(|(_, register)| register.kind == SymbolKind::Param)
            .collect::<Vec<_>>();
        parameters.sort_by_key(|(_, register)| register.position);
        parameters
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol Table")?;
        writeln!(f, "====================")?;
        for (name, register) in self.iter() {
            writeln!(f, "{name}: {register}")?;
        }
        writeln!(f, "====================")
    }
}
