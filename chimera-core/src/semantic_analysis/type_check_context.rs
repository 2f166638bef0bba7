use crate::{
    procedure_table::{Procedure, ProcedureTable},
    symbol_table::{Register, SymbolTable},
};

/// Contextual state tracked throughout type-checking.
pub struct TypeCheckContext<'a> {
    /// The global scope.
    pub(crate) symbols: &'a mut SymbolTable,
    pub(crate) procedures: &'a mut ProcedureTable,

    // Updated through the `with_*` methods only, so that changes made for a nested body never
    // leak back into the parent.
    /// The procedure whose body is being checked, `None` at global scope.
    procedure: Option<String>,
    /// Whether we are somewhere inside a `loop` or `for` body.
    inside_loop: bool,
}

impl<'a> TypeCheckContext<'a> {
    pub fn from_root(
        symbols: &'a mut SymbolTable,
        procedures: &'a mut ProcedureTable,
    ) -> TypeCheckContext<'a> {
        TypeCheckContext {
            symbols,
            procedures,
            procedure: None,
            inside_loop: false,
        }
    }

    /// Create a new context that mutably borrows the inner tables with a lifetime bound by
    /// `self`.
    pub fn by_ref(&mut self) -> TypeCheckContext<'_> {
        TypeCheckContext {
            symbols: self.symbols,
            procedures: self.procedures,
            procedure: self.procedure.clone(),
            inside_loop: self.inside_loop,
        }
    }

    /// Map this `TypeCheckContext` instance to a new one for the body of `procedure`.
    pub fn with_procedure(self, procedure: impl Into<String>) -> Self {
        Self {
            procedure: Some(procedure.into()),
            ..self
        }
    }

    /// Map this `TypeCheckContext` instance to a new one for a loop body.
    pub fn with_inside_loop(self) -> Self {
        Self {
            inside_loop: true,
            ..self
        }
    }

    pub fn procedure_name(&self) -> Option<&str> {
        self.procedure.as_deref()
    }

    pub fn current_procedure(&self) -> Option<&Procedure> {
        self.procedure_name()
            .and_then(|name| self.procedures.get(name))
    }

    pub fn inside_loop(&self) -> bool {
        self.inside_loop
    }

    /// The table declarations are currently added to.
    pub fn scope(&self) -> &SymbolTable {
        match self.current_procedure() {
            Some(procedure) => &procedure.symbols,
            None => &*self.symbols,
        }
    }

    pub fn scope_mut(&mut self) -> &mut SymbolTable {
        match self
            .procedure
            .as_deref()
            .and_then(|name| self.procedures.get_mut(name))
        {
            Some(procedure) => &mut procedure.symbols,
            None => &mut *self.symbols,
        }
    }

    /// Resolves `name` in the current procedure first, then globally.
    pub fn lookup(&self, name: &str) -> Option<&Register> {
        self.current_procedure()
            .and_then(|procedure| procedure.symbols.get(name))
            .or_else(|| self.symbols.get(name))
    }
}
