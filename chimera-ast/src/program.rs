use crate::priv_prelude::*;

/// The root of one compilation unit.
///
/// Declarations come before the `program` keyword, the main statement list after it.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub program_token: Token,
    pub constants: Option<ConstantList>,
    pub variables: Option<VariableList>,
    pub procedures: ProcedureList,
    pub statements: StatementList,
    pub ty: TypeSlot,
}

impl Program {
    pub fn new(
        program_token: Token,
        constants: Option<ConstantList>,
        variables: Option<VariableList>,
        procedures: ProcedureList,
        statements: StatementList,
    ) -> Program {
        Program {
            program_token,
            constants,
            variables,
            procedures,
            statements,
            ty: TypeSlot::default(),
        }
    }
}
