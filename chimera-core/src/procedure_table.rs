use crate::symbol_table::SymbolTable;
use chimera_types::Type;
use std::{collections::BTreeMap, fmt};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Procedure {
    pub return_type: Type,
    pub is_builtin: bool,
    /// Parameters and locals.
    pub symbols: SymbolTable,
}

impl Procedure {
    /// A user procedure with no parameters or locals yet.
    pub fn user(return_type: Type) -> Procedure {
        Procedure {
            return_type,
            is_builtin: false,
            symbols: SymbolTable::new(),
        }
    }

    pub fn arity(&self) -> usize {
        self.symbols.parameters().len()
    }

    /// `(name, type)` of each parameter in declaration order.
    pub fn parameters(&self) -> Vec<(String, Type)> {
        self.symbols
            .parameters()
            .into_iter()
            .map(|(name, register)| (name.to_owned(), register.ty))
            .collect()
    }

    pub fn parameter_types(&self) -> Vec<Type> {
        self.parameters().into_iter().map(|(_, ty)| ty).collect()
    }
}

/// Every procedure visible in a compilation unit, builtins included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcedureTable {
    rows: BTreeMap<String, Procedure>,
}

impl ProcedureTable {
    pub fn new() -> ProcedureTable {
        ProcedureTable::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rows.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Procedure> {
        self.rows.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Procedure> {
        self.rows.get_mut(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, procedure: Procedure) {
        self.rows.insert(name.into(), procedure);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Procedure)> {
        self.rows.iter().map(|(name, procedure)| (name.as_str(), procedure))
    }

    pub fn user_procedures(&self) -> impl Iterator<Item = (&str, &Procedure)> {
        self.iter().filter(|(_, procedure)| !procedure.is_builtin)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Lists user procedures only; the builtin catalogue is the same for every unit.
impl fmt::Display for ProcedureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Procedure Table")?;
        writeln!(f, "====================")?;
        for (name, procedure) in self.user_procedures() {
            writeln!(f, "{name}: {}", procedure.return_type)?;
            for line in procedure.symbols.to_string().lines() {
                writeln!(f, "    {line}")?;
            }
        }
        writeln!(f, "====================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builtins::load_builtins, symbol_table::Register};

    #[test]
    fn display_hides_builtins() {
        let mut procedures = ProcedureTable::new();
        load_builtins(&mut procedures);
        let mut square = Procedure::user(Type::Int);
        square.symbols.insert("n", Register::parameter(Type::Int, 0));
        procedures.insert("Square", square);
        insta::assert_snapshot!(procedures, @r###"
        Procedure Table
        ====================
        Square: INT
            Symbol Table
            ====================
            n: INT, PARAM, 0
            ====================
        ====================
        "###);
    }

    #[test]
    fn user_procedures_skip_catalogue() {
        let mut procedures = ProcedureTable::new();
        load_builtins(&mut procedures);
        assert_eq!(procedures.user_procedures().count(), 0);
        procedures.insert("Main", Procedure::user(Type::Void));
        let names = procedures.user_procedures().map(|(n, _)| n).collect::<Vec<_>>();
        assert_eq!(names, vec!["Main"]);
        assert!(procedures.contains("WrInt"));
    }
}
