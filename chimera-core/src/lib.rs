pub mod builtins;
pub mod procedure_table;
pub mod semantic_analysis;
pub mod symbol_table;

pub use crate::{
    procedure_table::{Procedure, ProcedureTable},
    semantic_analysis::{SemanticAnalyzer, TypeCheckContext},
    symbol_table::{Register, SymbolKind, SymbolTable, Value},
};

use chimera_ast::Program;
use chimera_error::CompileError;
use std::sync::Arc;
use tracing::debug;

/// A fully typed program together with the tables it was checked against.
#[derive(Clone, Debug)]
pub struct TypedProgram {
    pub program: Program,
    pub symbols: SymbolTable,
    pub procedures: ProcedureTable,
}

/// Parses `input` without analyzing it.
pub fn parse(input: &Arc<str>) -> Result<Program, CompileError> {
    Ok(chimera_parse::parse_program(input)?)
}

/// Runs the whole front end over one compilation unit.
///
/// Stops at the first syntax or semantic error.
pub fn compile_to_ast(input: Arc<str>) -> Result<TypedProgram, CompileError> {
    // Parse the source into an untyped tree.
    let mut program = parse(&input)?;

    // Type check the tree in place.
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(&mut program)?;
    let (symbols, procedures) = analyzer.into_tables();
    debug!(bytes = input.len(), "compiled to typed ast");

    Ok(TypedProgram {
        program,
        symbols,
        procedures,
    })
}
